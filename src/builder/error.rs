//! Build errors for transition tables and machines.

use std::fmt;
use thiserror::Error;

/// A single problem found while validating a table or machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("Reducer '{reducer}' has an entry with an empty action type")]
    EmptyActionType { reducer: String },

    #[error("Reducer '{reducer}' defines action '{action_type}' more than once")]
    DuplicateAction {
        reducer: String,
        action_type: String,
    },

    #[error("Reducer '{reducer}' defines action '{action_type}', which is reserved by the dispatcher")]
    ReservedAction {
        reducer: String,
        action_type: String,
    },

    #[error("Mode '{mode}' has more than one reducer")]
    DuplicateReducer { mode: String },

    #[error("Initial mode '{mode}' has no reducer")]
    MissingReducer { mode: String },

    #[error("Action '{action_type}' in reducer '{from}' hands off to '{to}', which has no reducer")]
    DanglingTarget {
        from: String,
        action_type: String,
        to: String,
    },
}

/// Errors that can occur when building tables and machines.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial_state(state) before .build()")]
    MissingInitialState,

    #[error("Initial mode not specified. Call .initial(mode) before .build()")]
    MissingInitialMode,

    #[error("No reducers defined. Add at least one table")]
    NoReducers,

    #[error("Invalid configuration: {}", Violations(.violations))]
    InvalidConfiguration { violations: Vec<ConfigViolation> },
}

impl BuildError {
    /// Violations carried by an `InvalidConfiguration` error.
    pub fn violations(&self) -> &[ConfigViolation] {
        match self {
            Self::InvalidConfiguration { violations } => violations,
            _ => &[],
        }
    }
}

struct Violations<'a>(&'a [ConfigViolation]);

impl fmt::Display for Violations<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}
