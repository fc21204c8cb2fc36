//! Handoff: a pure functional reducer-driven state machine
//!
//! A machine is a state value plus an active reducer. Applying an action
//! runs the active reducer, which returns the new state and may name the
//! reducer that handles the *next* action. Machines are immutable
//! snapshots; the [`Dispatcher`](dispatch::Dispatcher) is the one mutable,
//! chainable handle on top.
//!
//! # Core Concepts
//!
//! - **Action**: a named event with a payload
//! - **Mode**: the identity of a reducer, usually a variant of a closed enum
//! - **Reducer**: a transition table answering actions for one mode
//! - **Machine**: an immutable `(state, reducer)` snapshot
//! - **Dispatcher**: turns `dispatch("login", payload)` into steps
//!
//! # Example
//!
//! ```rust
//! use handoff::builder::{MachineBuilder, TableBuilder};
//! use handoff::core::{Action, TransitionRule};
//! use handoff::dispatch::Dispatcher;
//! use handoff::mode_enum;
//!
//! mode_enum! {
//!     enum Turnstile {
//!         Locked,
//!         Unlocked,
//!     }
//! }
//!
//! let machine = MachineBuilder::new()
//!     .initial_state(0u32)
//!     .initial(Turnstile::Locked)
//!     .table(TableBuilder::new(Turnstile::Locked).on(
//!         "COIN",
//!         TransitionRule::new()
//!             .update(|coins: &u32, _: &Action<()>| coins + 1)
//!             .goto(Turnstile::Unlocked),
//!     ))
//!     .unwrap()
//!     .table(TableBuilder::new(Turnstile::Unlocked).on("PUSH", TransitionRule::new().goto(Turnstile::Locked)))
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! let turnstile = Dispatcher::new(machine);
//! turnstile.trigger("coin").unwrap().trigger("push").unwrap().trigger("coin").unwrap();
//!
//! assert_eq!(turnstile.extract(), 2);
//! assert_eq!(turnstile.mode(), Turnstile::Unlocked);
//! assert!(turnstile.trigger("coin").is_err());
//! ```

pub mod auth;
pub mod builder;
pub mod core;
pub mod dispatch;
pub mod naming;

// Re-export commonly used types
pub use crate::builder::{BuildError, ConfigViolation, MachineBuilder, TableBuilder};
pub use crate::core::{Action, Machine, MachineError, Mode, Reducer, ReducerSet, TransitionRule};
pub use crate::dispatch::{create_machine, Dispatcher};
