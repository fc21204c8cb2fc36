//! Transition rules: what a reducer does for one action type.

use crate::core::action::Action;
use crate::core::mode::Mode;
use std::fmt;
use std::sync::Arc;

/// Pure state update for a matched action.
pub type UpdateFn<S, P> = Arc<dyn Fn(&S, &Action<P>) -> S + Send + Sync>;

/// Selector for the reducer that handles the next action.
/// `None` keeps the current reducer.
pub type NextFn<M, S, P> = Arc<dyn Fn(&S, &Action<P>) -> Option<M> + Send + Sync>;

/// A single entry of a transition table.
///
/// Both halves are optional. A rule without `update` leaves the state
/// unchanged, a rule without `next` keeps the current reducer.
///
/// # Example
///
/// ```rust
/// use handoff::core::{Action, TransitionRule};
/// use handoff::mode_enum;
///
/// mode_enum! {
///     enum Light {
///         Off,
///         On,
///     }
/// }
///
/// let toggle: TransitionRule<Light, u32, ()> = TransitionRule::new()
///     .update(|presses: &u32, _action: &Action<()>| presses + 1)
///     .goto(Light::On);
///
/// let (presses, next) = toggle.apply(&0, &Action::bare("TOGGLE"));
/// assert_eq!(presses, 1);
/// assert_eq!(next, Some(Light::On));
/// ```
pub struct TransitionRule<M, S, P> {
    update: Option<UpdateFn<S, P>>,
    next: Option<NextFn<M, S, P>>,
    target: Option<M>,
}

impl<M: Mode, S: 'static, P: 'static> TransitionRule<M, S, P> {
    /// Create a rule that neither changes state nor reducer.
    pub fn new() -> Self {
        Self {
            update: None,
            next: None,
            target: None,
        }
    }

    /// Set the state update. Must be pure.
    pub fn update<F>(mut self, update: F) -> Self
    where
        F: Fn(&S, &Action<P>) -> S + Send + Sync + 'static,
    {
        self.update = Some(Arc::new(update));
        self
    }

    /// Select the next reducer dynamically.
    pub fn next<F>(mut self, next: F) -> Self
    where
        F: Fn(&S, &Action<P>) -> Option<M> + Send + Sync + 'static,
    {
        self.next = Some(Arc::new(next));
        self.target = None;
        self
    }

    /// Always hand off to `mode` after this rule.
    ///
    /// Unlike [`next`](Self::next), the target is known up front and is
    /// checked against the registered reducers when the machine is built.
    pub fn goto(mut self, mode: M) -> Self {
        let target = mode.clone();
        self.next = Some(Arc::new(move |_: &S, _: &Action<P>| Some(target.clone())));
        self.target = Some(mode);
        self
    }
}

impl<M, S, P> TransitionRule<M, S, P> {
    /// Apply the rule, returning the new state and the requested reducer.
    ///
    /// Both closures see the state as it was before the update.
    pub fn apply(&self, state: &S, action: &Action<P>) -> (S, Option<M>)
    where
        S: Clone,
    {
        let new_state = match &self.update {
            Some(update) => update(state, action),
            None => state.clone(),
        };
        let next = self.next.as_ref().and_then(|next| next(state, action));
        (new_state, next)
    }

    /// The constant target set with [`goto`](Self::goto), if any.
    pub fn target(&self) -> Option<&M> {
        self.target.as_ref()
    }

    pub fn has_update(&self) -> bool {
        self.update.is_some()
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

impl<M: Mode, S: 'static, P: 'static> Default for TransitionRule<M, S, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Clone, S, P> Clone for TransitionRule<M, S, P> {
    fn clone(&self) -> Self {
        Self {
            update: self.update.clone(),
            next: self.next.clone(),
            target: self.target.clone(),
        }
    }
}

impl<M: fmt::Debug, S, P> fmt::Debug for TransitionRule<M, S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionRule")
            .field("update", &self.update.is_some())
            .field("next", &self.next.is_some())
            .field("target", &self.target)
            .finish()
    }
}
