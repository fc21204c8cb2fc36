//! Reducers: one FSM mode and the transition table it answers with.

use crate::core::action::Action;
use crate::core::error::MachineError;
use crate::core::mode::Mode;
use crate::core::rule::TransitionRule;
use std::collections::HashMap;
use std::fmt;

/// A pure function of `(state, action)` to `(new state, next mode)`,
/// backed by a transition table keyed by action type.
///
/// Reducers are immutable once built. Build them with
/// [`TableBuilder`](crate::builder::TableBuilder), which validates the table.
pub struct Reducer<M, S, P> {
    mode: M,
    rules: HashMap<String, TransitionRule<M, S, P>>,
    default_state: Option<S>,
}

impl<M: Mode, S, P> Reducer<M, S, P> {
    pub(crate) fn from_parts(
        mode: M,
        rules: HashMap<String, TransitionRule<M, S, P>>,
        default_state: Option<S>,
    ) -> Self {
        Self {
            mode,
            rules,
            default_state,
        }
    }

    /// Apply this reducer to `state` and `action`.
    ///
    /// Returns the new state and the mode that should handle the next action,
    /// or `None` to stay in this reducer. An action type missing from the
    /// table is an [`MachineError::UnhandledAction`].
    pub fn reduce(&self, state: &S, action: &Action<P>) -> Result<(S, Option<M>), MachineError>
    where
        S: Clone,
    {
        let rule = self
            .rules
            .get(action.action_type())
            .ok_or_else(|| MachineError::UnhandledAction {
                action_type: action.action_type().to_string(),
                reducer: self.mode.name().to_string(),
            })?;

        Ok(rule.apply(state, action))
    }

    pub fn mode(&self) -> &M {
        &self.mode
    }

    /// Check if the table has an entry for `action_type` (pure).
    pub fn handles(&self, action_type: &str) -> bool {
        self.rules.contains_key(action_type)
    }

    /// Action types in the table, sorted.
    pub fn action_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }

    /// Default state the table was declared with. Reserved; stepping never
    /// reads it.
    pub fn default_state(&self) -> Option<&S> {
        self.default_state.as_ref()
    }

    pub(crate) fn rules(&self) -> impl Iterator<Item = (&str, &TransitionRule<M, S, P>)> {
        self.rules.iter().map(|(name, rule)| (name.as_str(), rule))
    }
}

impl<M: fmt::Debug, S, P> fmt::Debug for Reducer<M, S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut actions: Vec<&String> = self.rules.keys().collect();
        actions.sort_unstable();
        f.debug_struct("Reducer")
            .field("mode", &self.mode)
            .field("actions", &actions)
            .finish_non_exhaustive()
    }
}
