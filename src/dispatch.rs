//! Chainable dispatcher over an immutable machine.
//!
//! The dispatcher owns the only mutable cell in the crate: the current
//! [`Machine`]. Each dispatch formats a name into an action type, steps the
//! current machine and, only if the step succeeds, swaps the new machine in.
//! A failed dispatch leaves the cell exactly as it was.

use crate::builder::BuildError;
use crate::core::{Action, Machine, MachineError, Mode, ReducerSet};
use crate::naming;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Function turning a method-style name into an action type.
pub type NameFormatter = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Stateful, chainable handle over a machine.
///
/// Every call returns the same dispatcher, so calls chain with `?`:
///
/// ```rust
/// use handoff::auth::{self, AuthActions};
/// use serde_json::json;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let machine = auth::dispatcher()?;
///
/// machine
///     .login(json!({ "user": "seb" }))?
///     .logout()?
///     .login(json!({ "user": "billy" }))?;
///
/// assert_eq!(machine.extract(), json!({ "user": "billy", "loggedIn": true }));
/// # Ok(())
/// # }
/// ```
pub struct Dispatcher<M, S, P> {
    current: Mutex<Machine<M, S, P>>,
    initial: Machine<M, S, P>,
    formatter: NameFormatter,
}

impl<M: Mode, S: Clone, P> Dispatcher<M, S, P> {
    /// Wrap `machine`, formatting names with [`naming::constant_case`].
    pub fn new(machine: Machine<M, S, P>) -> Self {
        Self {
            current: Mutex::new(machine.clone()),
            initial: machine,
            formatter: Box::new(naming::constant_case),
        }
    }

    /// Replace the name formatter.
    pub fn with_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.formatter = Box::new(formatter);
        self
    }

    /// Dispatch `name` with `payload` and return this dispatcher.
    ///
    /// Reserved names (see [`naming::RESERVED_NAMES`]) are refused. On any
    /// error the current machine is left untouched.
    pub fn dispatch(&self, name: &str, payload: P) -> Result<&Self, MachineError> {
        if naming::is_reserved(name) {
            return Err(MachineError::ReservedName {
                name: name.to_string(),
            });
        }

        let action = Action::new((self.formatter)(name), payload);
        tracing::trace!(
            handoff.name = name,
            handoff.action = action.action_type(),
            "Formatted action name"
        );
        let mut current = self.lock();

        match current.step(action) {
            Ok(next) => {
                *current = next;
                Ok(self)
            }
            Err(error) => {
                tracing::warn!(
                    handoff.name = name,
                    handoff.mode = current.mode().name(),
                    %error,
                    "Dispatch rejected"
                );
                Err(error)
            }
        }
    }

    /// Dispatch `name` with the default payload.
    pub fn trigger(&self, name: &str) -> Result<&Self, MachineError>
    where
        P: Default,
    {
        self.dispatch(name, P::default())
    }

    /// Copy of the current state.
    pub fn extract(&self) -> S {
        self.lock().extract()
    }

    /// Mode of the current reducer.
    pub fn mode(&self) -> M {
        self.lock().mode().clone()
    }

    /// Snapshot of the current machine. Snapshots are immutable and stay
    /// valid after further dispatches.
    pub fn snapshot(&self) -> Machine<M, S, P> {
        self.lock().clone()
    }

    /// Return to the machine this dispatcher was created with.
    pub fn reset(&self) -> &Self {
        *self.lock() = self.initial.clone();
        self
    }

    fn lock(&self) -> MutexGuard<'_, Machine<M, S, P>> {
        // The cell is only written with complete machines, so a poisoned
        // lock still holds a consistent value.
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<M: fmt::Debug, S: fmt::Debug, P> fmt::Debug for Dispatcher<M, S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

/// Build a dispatcher over a new machine in `mode`.
pub fn create_machine<M: Mode, S: Clone, P>(
    initial_state: S,
    reducers: Arc<ReducerSet<M, S, P>>,
    mode: &M,
) -> Result<Dispatcher<M, S, P>, MachineError> {
    Machine::new(initial_state, reducers, mode).map(Dispatcher::new)
}

impl<M: Mode, S: Clone, P> TryFrom<crate::builder::MachineBuilder<M, S, P>>
    for Dispatcher<M, S, P>
{
    type Error = BuildError;

    fn try_from(builder: crate::builder::MachineBuilder<M, S, P>) -> Result<Self, Self::Error> {
        builder.build().map(Dispatcher::new)
    }
}
