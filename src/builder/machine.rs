//! Builder for constructing machines.

use crate::builder::error::{BuildError, ConfigViolation};
use crate::builder::table::TableBuilder;
use crate::builder::{check, collect_violations, Check};
use crate::core::{Machine, Mode, Reducer, ReducerSet};
use std::collections::HashSet;
use std::sync::Arc;

/// Builder for constructing machines with a fluent API.
pub struct MachineBuilder<M, S, P> {
    initial_state: Option<S>,
    initial: Option<M>,
    reducers: Vec<Reducer<M, S, P>>,
}

impl<M: Mode, S: Clone, P> MachineBuilder<M, S, P> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial_state: None,
            initial: None,
            reducers: Vec::new(),
        }
    }

    /// Set the initial state value (required).
    pub fn initial_state(mut self, state: S) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Set the initial mode (required).
    pub fn initial(mut self, mode: M) -> Self {
        self.initial = Some(mode);
        self
    }

    /// Add a reducer from a table builder.
    /// Returns an error if the table fails validation.
    pub fn table(mut self, builder: TableBuilder<M, S, P>) -> Result<Self, BuildError> {
        let reducer = builder.build()?;
        self.reducers.push(reducer);
        Ok(self)
    }

    /// Add a pre-built reducer.
    pub fn reducer(mut self, reducer: Reducer<M, S, P>) -> Self {
        self.reducers.push(reducer);
        self
    }

    /// Add multiple reducers at once.
    pub fn reducers(mut self, reducers: Vec<Reducer<M, S, P>>) -> Self {
        self.reducers.extend(reducers);
        self
    }

    /// Build the machine.
    /// Returns an error if required fields are missing or the reducers
    /// do not form a closed set.
    pub fn build(self) -> Result<Machine<M, S, P>, BuildError> {
        let state = self.initial_state.ok_or(BuildError::MissingInitialState)?;
        let initial = self.initial.ok_or(BuildError::MissingInitialMode)?;

        if self.reducers.is_empty() {
            return Err(BuildError::NoReducers);
        }

        collect_violations(validate(&initial, &self.reducers))?;

        let reducers = Arc::new(ReducerSet::from_reducers(self.reducers));
        Machine::new(state, reducers, &initial).map_err(|_| BuildError::InvalidConfiguration {
            violations: vec![ConfigViolation::MissingReducer {
                mode: initial.name().to_string(),
            }],
        })
    }
}

impl<M: Mode, S: Clone, P> Default for MachineBuilder<M, S, P> {
    fn default() -> Self {
        Self::new()
    }
}

fn validate<M: Mode, S, P>(initial: &M, reducers: &[Reducer<M, S, P>]) -> Vec<Check> {
    let mut checks = Vec::new();
    let mut registered = HashSet::new();

    for reducer in reducers {
        let mode = reducer.mode();
        checks.push(check(registered.insert(mode), || {
            ConfigViolation::DuplicateReducer {
                mode: mode.name().to_string(),
            }
        }));
    }

    checks.push(check(registered.contains(initial), || {
        ConfigViolation::MissingReducer {
            mode: initial.name().to_string(),
        }
    }));

    for reducer in reducers {
        for (action_type, rule) in reducer.rules() {
            if let Some(target) = rule.target() {
                checks.push(check(registered.contains(target), || {
                    ConfigViolation::DanglingTarget {
                        from: reducer.mode().name().to_string(),
                        action_type: action_type.to_string(),
                        to: target.name().to_string(),
                    }
                }));
            }
        }
    }

    checks
}
