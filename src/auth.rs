//! Login/logout session machine.
//!
//! Two reducers hand off to each other: `LoggedOut` only understands
//! `LOGIN`, `LoggedIn` only understands `LOGOUT`. State and payloads are
//! JSON objects; updates merge into the existing object.

use crate::builder::{BuildError, MachineBuilder, TableBuilder};
use crate::core::{Action, Machine, Reducer, TransitionRule};
use crate::dispatch::Dispatcher;
use crate::{dispatch_methods, mode_enum};
use serde_json::{json, Map, Value};

mode_enum! {
    /// Modes of the session machine.
    pub enum AuthMode {
        LoggedOut,
        LoggedIn,
    }
}

dispatch_methods! {
    /// Named session actions.
    pub trait AuthActions for Dispatcher<AuthMode, Value, Value> {
        /// Log in with a `{ "user": ... }` payload.
        login(payload),
        /// Log out.
        logout,
    }
}

pub type AuthMachine = Machine<AuthMode, Value, Value>;
pub type AuthDispatcher = Dispatcher<AuthMode, Value, Value>;

/// Reducer for the logged-out mode.
pub fn logged_out() -> Result<Reducer<AuthMode, Value, Value>, BuildError> {
    TableBuilder::new(AuthMode::LoggedOut)
        .default_state(json!({}))
        .on(
            "LOGIN",
            TransitionRule::new()
                .update(|state: &Value, action: &Action<Value>| {
                    let user = action.payload().get("user").cloned().unwrap_or(Value::Null);
                    merge(state, json!({ "user": user, "loggedIn": true }))
                })
                .goto(AuthMode::LoggedIn),
        )
        .build()
}

/// Reducer for the logged-in mode.
pub fn logged_in() -> Result<Reducer<AuthMode, Value, Value>, BuildError> {
    TableBuilder::new(AuthMode::LoggedIn)
        .on(
            "LOGOUT",
            TransitionRule::new()
                .update(|state: &Value, _: &Action<Value>| {
                    merge(state, json!({ "user": null, "loggedIn": false }))
                })
                .goto(AuthMode::LoggedOut),
        )
        .build()
}

/// Session machine starting logged out with an empty state object.
pub fn machine() -> Result<AuthMachine, BuildError> {
    MachineBuilder::new()
        .initial_state(json!({}))
        .initial(AuthMode::LoggedOut)
        .reducer(logged_out()?)
        .reducer(logged_in()?)
        .build()
}

/// Dispatcher over a fresh session machine.
pub fn dispatcher() -> Result<AuthDispatcher, BuildError> {
    machine().map(Dispatcher::new)
}

/// Shallow-merge `patch` into a copy of `state`. Non-object states are
/// treated as empty.
fn merge(state: &Value, patch: Value) -> Value {
    let mut merged = match state {
        Value::Object(fields) => fields.clone(),
        _ => Map::new(),
    };
    if let Value::Object(fields) = patch {
        merged.extend(fields);
    }
    Value::Object(merged)
}
