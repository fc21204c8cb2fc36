//! Core state machine types and logic.
//!
//! This module contains the pure functional core of the machine:
//! - Actions and the `Mode` trait identifying reducers
//! - Transition rules and the reducers built from them
//! - Immutable machine snapshots and the stepping algorithm
//!
//! Nothing in this module mutates a value it was handed; every step
//! produces a fresh machine.

mod action;
mod error;
mod machine;
mod mode;
mod reducer;
mod rule;

pub use action::Action;
pub use error::MachineError;
pub use machine::{Machine, ReducerSet};
pub use mode::Mode;
pub use reducer::Reducer;
pub use rule::{NextFn, TransitionRule, UpdateFn};
