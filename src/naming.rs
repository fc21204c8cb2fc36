//! Action-name formatting.
//!
//! The dispatcher turns method-style names (`login`, `logIn`) into the
//! action types used in transition tables (`LOGIN`, `LOG_IN`). Any pure
//! function `&str -> String` can stand in for [`constant_case`] as long as
//! the tables are written in the same convention.

/// Names the dispatcher keeps for itself. They never become actions.
pub const RESERVED_NAMES: &[&str] = &["extract"];

/// Check whether `name` collides with a reserved dispatcher name.
///
/// The comparison ignores ASCII case so a formatted action type
/// (`EXTRACT`) collides as well as the raw name.
pub fn is_reserved(name: &str) -> bool {
    RESERVED_NAMES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(name))
}

/// Format a name as `CONSTANT_CASE`.
///
/// Words split on separators (anything not alphanumeric), on a lowercase
/// letter or digit followed by an uppercase letter, and before the last
/// capital of an acronym (`XMLHttp` → `XML_HTTP`).
///
/// ```rust
/// use handoff::naming::constant_case;
///
/// assert_eq!(constant_case("login"), "LOGIN");
/// assert_eq!(constant_case("logIn"), "LOG_IN");
/// assert_eq!(constant_case("reset-password"), "RESET_PASSWORD");
/// ```
pub fn constant_case(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let mut words: Vec<String> = Vec::new();
    let mut word = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        if !ch.is_alphanumeric() {
            if !word.is_empty() {
                words.push(std::mem::take(&mut word));
            }
            continue;
        }

        if let Some(&prev) = i.checked_sub(1).and_then(|j| chars.get(j)) {
            let after_lower = (prev.is_lowercase() || prev.is_numeric()) && ch.is_uppercase();
            let acronym_end = prev.is_uppercase()
                && ch.is_uppercase()
                && chars.get(i + 1).is_some_and(|next| next.is_lowercase());

            if (after_lower || acronym_end) && !word.is_empty() {
                words.push(std::mem::take(&mut word));
            }
        }

        word.extend(ch.to_uppercase());
    }

    if !word.is_empty() {
        words.push(word);
    }

    words.join("_")
}

/// Use the name as-is.
pub fn verbatim(raw: &str) -> String {
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_word_is_uppercased() {
        assert_eq!(constant_case("login"), "LOGIN");
        assert_eq!(constant_case("logout"), "LOGOUT");
    }

    #[test]
    fn camel_case_splits_words() {
        assert_eq!(constant_case("logIn"), "LOG_IN");
        assert_eq!(constant_case("resetPasswordNow"), "RESET_PASSWORD_NOW");
        assert_eq!(constant_case("PascalCase"), "PASCAL_CASE");
    }

    #[test]
    fn acronyms_stay_together() {
        assert_eq!(constant_case("XMLHttpRequest"), "XML_HTTP_REQUEST");
        assert_eq!(constant_case("loadURL"), "LOAD_URL");
    }

    #[test]
    fn separators_become_underscores() {
        assert_eq!(constant_case("reset-password"), "RESET_PASSWORD");
        assert_eq!(constant_case("reset password"), "RESET_PASSWORD");
        assert_eq!(constant_case("user.login"), "USER_LOGIN");
        assert_eq!(constant_case("__private__"), "PRIVATE");
    }

    #[test]
    fn constant_case_is_stable() {
        assert_eq!(constant_case("ALREADY_CONSTANT"), "ALREADY_CONSTANT");
        assert_eq!(constant_case(&constant_case("logIn")), "LOG_IN");
    }

    #[test]
    fn formatters_fit_the_dispatcher_slot() {
        let formatters: [fn(&str) -> String; 2] = [constant_case, verbatim];
        for format in formatters {
            assert_eq!(format("logIn"), format("logIn"));
        }
    }

    #[test]
    fn digits_stick_to_preceding_word() {
        assert_eq!(constant_case("step2"), "STEP2");
        assert_eq!(constant_case("step2Done"), "STEP2_DONE");
    }

    #[test]
    fn empty_name_stays_empty() {
        assert_eq!(constant_case(""), "");
        assert_eq!(constant_case("--"), "");
    }

    #[test]
    fn verbatim_keeps_name() {
        assert_eq!(verbatim("logIn"), "logIn");
    }

    #[test]
    fn reserved_names_ignore_case() {
        assert!(is_reserved("extract"));
        assert!(is_reserved("EXTRACT"));
        assert!(!is_reserved("extractor"));
        assert!(!is_reserved("login"));
    }
}
