//! Builder for transition tables.

use crate::builder::error::{BuildError, ConfigViolation};
use crate::builder::{check, collect_violations, Check};
use crate::core::{Mode, Reducer, TransitionRule};
use crate::naming;
use std::collections::{HashMap, HashSet};

/// Builder that turns an action-type → rule mapping into a [`Reducer`].
///
/// Every table problem is reported at once by [`build`](Self::build).
///
/// # Example
///
/// ```rust
/// use handoff::builder::TableBuilder;
/// use handoff::core::{Action, TransitionRule};
/// use handoff::mode_enum;
///
/// mode_enum! {
///     enum Player {
///         Stopped,
///         Playing,
///     }
/// }
///
/// let stopped = TableBuilder::new(Player::Stopped)
///     .default_state(0u32)
///     .on(
///         "PLAY",
///         TransitionRule::new()
///             .update(|plays: &u32, _: &Action<()>| plays + 1)
///             .goto(Player::Playing),
///     )
///     .build()
///     .unwrap();
///
/// assert!(stopped.handles("PLAY"));
/// ```
pub struct TableBuilder<M, S, P> {
    mode: M,
    entries: Vec<(String, TransitionRule<M, S, P>)>,
    default_state: Option<S>,
}

impl<M: Mode, S, P> TableBuilder<M, S, P> {
    /// Start a table for the reducer identified by `mode`.
    pub fn new(mode: M) -> Self {
        Self {
            mode,
            entries: Vec::new(),
            default_state: None,
        }
    }

    /// Add a rule for `action_type`.
    pub fn on(mut self, action_type: impl Into<String>, rule: TransitionRule<M, S, P>) -> Self {
        self.entries.push((action_type.into(), rule));
        self
    }

    /// Record a default state for this table (optional, reserved).
    pub fn default_state(mut self, state: S) -> Self {
        self.default_state = Some(state);
        self
    }

    /// Build the reducer, validating the table.
    pub fn build(self) -> Result<Reducer<M, S, P>, BuildError> {
        collect_violations(self.validate())?;

        let rules: HashMap<String, TransitionRule<M, S, P>> = self.entries.into_iter().collect();
        Ok(Reducer::from_parts(self.mode, rules, self.default_state))
    }

    fn validate(&self) -> Vec<Check> {
        let reducer = self.mode.name();
        let mut checks = Vec::new();

        let mut seen = HashSet::new();
        for (action_type, _) in &self.entries {
            checks.push(check(!action_type.is_empty(), || {
                ConfigViolation::EmptyActionType {
                    reducer: reducer.to_string(),
                }
            }));
            checks.push(check(!naming::is_reserved(action_type), || {
                ConfigViolation::ReservedAction {
                    reducer: reducer.to_string(),
                    action_type: action_type.clone(),
                }
            }));
            checks.push(check(seen.insert(action_type.as_str()), || {
                ConfigViolation::DuplicateAction {
                    reducer: reducer.to_string(),
                    action_type: action_type.clone(),
                }
            }));
        }

        checks
    }
}
