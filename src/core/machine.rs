//! Immutable machine snapshots and the stepping algorithm.

use crate::core::action::Action;
use crate::core::error::MachineError;
use crate::core::mode::Mode;
use crate::core::reducer::Reducer;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// The closed set of reducers a machine can hand off between, keyed by mode.
pub struct ReducerSet<M, S, P> {
    reducers: HashMap<M, Arc<Reducer<M, S, P>>>,
}

impl<M: Mode, S, P> ReducerSet<M, S, P> {
    pub(crate) fn from_reducers(reducers: impl IntoIterator<Item = Reducer<M, S, P>>) -> Self {
        Self {
            reducers: reducers
                .into_iter()
                .map(|reducer| (reducer.mode().clone(), Arc::new(reducer)))
                .collect(),
        }
    }

    /// Look up the reducer registered for `mode`.
    pub fn get(&self, mode: &M) -> Option<&Arc<Reducer<M, S, P>>> {
        self.reducers.get(mode)
    }

    /// Look up a reducer, failing with [`MachineError::UnregisteredMode`].
    pub fn resolve(&self, mode: &M) -> Result<&Arc<Reducer<M, S, P>>, MachineError> {
        self.get(mode).ok_or_else(|| MachineError::UnregisteredMode {
            mode: mode.name().to_string(),
        })
    }

    pub fn modes(&self) -> impl Iterator<Item = &M> {
        self.reducers.keys()
    }

    pub fn len(&self) -> usize {
        self.reducers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reducers.is_empty()
    }
}

impl<M: fmt::Debug, S, P> fmt::Debug for ReducerSet<M, S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.reducers.values()).finish()
    }
}

/// Immutable snapshot of a state value and the active reducer.
///
/// [`step`](Machine::step) never mutates the receiver; it returns a new
/// machine. The state and the active reducer together determine all future
/// behaviour, so callers may keep old snapshots around freely.
///
/// # Example
///
/// ```rust
/// use handoff::builder::{MachineBuilder, TableBuilder};
/// use handoff::core::{Action, TransitionRule};
/// use handoff::mode_enum;
///
/// mode_enum! {
///     enum Door {
///         Closed,
///         Open,
///     }
/// }
///
/// let machine = MachineBuilder::new()
///     .initial_state(0u32)
///     .initial(Door::Closed)
///     .table(
///         TableBuilder::new(Door::Closed).on(
///             "OPEN",
///             TransitionRule::new()
///                 .update(|opened: &u32, _: &Action<()>| opened + 1)
///                 .goto(Door::Open),
///         ),
///     )
///     .unwrap()
///     .table(TableBuilder::new(Door::Open).on("CLOSE", TransitionRule::new().goto(Door::Closed)))
///     .unwrap()
///     .build()
///     .unwrap();
///
/// let opened = machine.step(Action::bare("OPEN")).unwrap();
/// assert_eq!(opened.state(), &1);
/// assert_eq!(opened.mode(), &Door::Open);
///
/// // The original snapshot is untouched.
/// assert_eq!(machine.state(), &0);
/// assert_eq!(machine.mode(), &Door::Closed);
/// ```
pub struct Machine<M, S, P> {
    state: S,
    reducer: Arc<Reducer<M, S, P>>,
    reducers: Arc<ReducerSet<M, S, P>>,
}

impl<M: Mode, S: Clone, P> Machine<M, S, P> {
    /// Create a machine in `mode` with the given state.
    pub fn new(
        state: S,
        reducers: Arc<ReducerSet<M, S, P>>,
        mode: &M,
    ) -> Result<Self, MachineError> {
        let reducer = Arc::clone(reducers.resolve(mode)?);
        Ok(Self {
            state,
            reducer,
            reducers,
        })
    }

    /// Apply one action, producing the next machine.
    ///
    /// When the matched rule names no next mode the new machine keeps the
    /// very same reducer (`Arc` identity is preserved).
    pub fn step(&self, action: Action<P>) -> Result<Self, MachineError> {
        let (state, next) = self.reducer.reduce(&self.state, &action)?;

        let reducer = match next {
            Some(mode) => Arc::clone(self.reducers.resolve(&mode)?),
            None => Arc::clone(&self.reducer),
        };

        tracing::debug!(
            handoff.action = action.action_type(),
            handoff.from = self.reducer.mode().name(),
            handoff.to = reducer.mode().name(),
            "Applied action"
        );

        Ok(Self {
            state,
            reducer,
            reducers: Arc::clone(&self.reducers),
        })
    }

    /// Step through `actions` in order, stopping at the first failure.
    pub fn replay<I>(&self, actions: I) -> Result<Self, MachineError>
    where
        I: IntoIterator<Item = Action<P>>,
    {
        actions
            .into_iter()
            .try_fold(self.clone(), |machine, action| machine.step(action))
    }

    /// Current state (pure).
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Copy of the current state.
    pub fn extract(&self) -> S {
        self.state.clone()
    }

    /// Mode of the active reducer (pure).
    pub fn mode(&self) -> &M {
        self.reducer.mode()
    }

    pub fn reducer(&self) -> &Arc<Reducer<M, S, P>> {
        &self.reducer
    }

    pub fn reducers(&self) -> &Arc<ReducerSet<M, S, P>> {
        &self.reducers
    }

    /// Check whether both machines run the identical reducer instance.
    pub fn same_reducer(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.reducer, &other.reducer)
    }

    /// Check if the active reducer can handle `action_type` (pure).
    pub fn can_handle(&self, action_type: &str) -> bool {
        self.reducer.handles(action_type)
    }
}

impl<M, S: Clone, P> Clone for Machine<M, S, P> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            reducer: Arc::clone(&self.reducer),
            reducers: Arc::clone(&self.reducers),
        }
    }
}

impl<M: fmt::Debug, S: fmt::Debug, P> fmt::Debug for Machine<M, S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("state", &self.state)
            .field("reducer", &self.reducer)
            .finish_non_exhaustive()
    }
}
