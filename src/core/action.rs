//! Actions: named events applied to advance a machine.

use serde::{Deserialize, Serialize};

/// An immutable value pairing an action type with an arbitrary payload.
///
/// Actions are created fresh for every dispatch and consumed by exactly one
/// [`Machine::step`](crate::core::Machine::step). They carry no identity
/// beyond structural equality.
///
/// # Example
///
/// ```rust
/// use handoff::core::Action;
///
/// let login = Action::new("LOGIN", "seb");
/// assert_eq!(login.action_type(), "LOGIN");
/// assert_eq!(*login.payload(), "seb");
///
/// let logout: Action<()> = Action::bare("LOGOUT");
/// assert_eq!(logout.action_type(), "LOGOUT");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action<P> {
    #[serde(rename = "type")]
    action_type: String,
    payload: P,
}

impl<P> Action<P> {
    /// Create an action from its type and payload.
    pub fn new(action_type: impl Into<String>, payload: P) -> Self {
        Self {
            action_type: action_type.into(),
            payload,
        }
    }

    /// Create an action carrying the default payload.
    pub fn bare(action_type: impl Into<String>) -> Self
    where
        P: Default,
    {
        Self::new(action_type, P::default())
    }

    /// The action type, looked up in the active reducer's table.
    pub fn action_type(&self) -> &str {
        &self.action_type
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    pub fn into_payload(self) -> P {
        self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn actions_compare_structurally() {
        let a = Action::new("LOGIN", json!({ "user": "seb" }));
        let b = Action::new("LOGIN", json!({ "user": "seb" }));
        let c = Action::new("LOGIN", json!({ "user": "billy" }));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn bare_action_uses_default_payload() {
        let action: Action<Option<u32>> = Action::bare("RESET");
        assert_eq!(action.payload(), &None);
    }

    #[test]
    fn action_serializes_with_type_field() {
        let action = Action::new("LOGIN", json!({ "user": "seb" }));
        let value = serde_json::to_value(&action).unwrap();

        assert_eq!(value, json!({ "type": "LOGIN", "payload": { "user": "seb" } }));

        let back: Action<serde_json::Value> = serde_json::from_value(value).unwrap();
        assert_eq!(back, action);
    }

    #[test]
    fn into_payload_releases_payload() {
        let action = Action::new("ADD", 5u32);
        assert_eq!(action.into_payload(), 5);
    }
}
