//! Builder API for ergonomic machine construction.
//!
//! This module provides fluent builders and macros for declaring reducers
//! and machines. Configuration problems are collected with Stillwater's
//! `Validation` so a single `build()` reports all of them, not just the first.

pub mod error;
pub mod machine;
pub mod macros;
pub mod table;

pub use error::{BuildError, ConfigViolation};
pub use machine::MachineBuilder;
pub use table::TableBuilder;

use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of one configuration check.
pub(crate) type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

/// Pass when `ok` holds, otherwise fail with the violation from `violation`.
pub(crate) fn check<F>(ok: bool, violation: F) -> Check
where
    F: FnOnce() -> ConfigViolation,
{
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

/// Accumulate ALL failed checks into one `InvalidConfiguration` error.
pub(crate) fn collect_violations(checks: Vec<Check>) -> Result<(), BuildError> {
    if checks.is_empty() {
        return Ok(());
    }

    match Validation::all_vec(checks) {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => Err(BuildError::InvalidConfiguration {
            violations: errors.iter().cloned().collect(),
        }),
    }
}
