//! Errors raised while stepping a machine.

use thiserror::Error;

/// Errors that can occur when an action is applied.
///
/// All variants are local to a single step or dispatch call. The machine
/// (or the dispatcher's current machine) is left exactly as it was.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("Reducer '{reducer}' has no transition for action '{action_type}'")]
    UnhandledAction {
        action_type: String,
        reducer: String,
    },

    #[error("No reducer registered for mode '{mode}'")]
    UnregisteredMode { mode: String },

    #[error("'{name}' is reserved by the dispatcher and cannot be dispatched")]
    ReservedName { name: String },
}
