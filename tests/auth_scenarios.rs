//! End-to-end login/logout scenarios through the dispatcher.

use handoff::auth::{self, AuthActions, AuthMode};
use handoff::MachineError;
use serde_json::json;

#[test]
fn login_moves_to_logged_in() {
    let machine = auth::dispatcher().unwrap();

    machine.login(json!({ "user": "seb" })).unwrap();

    assert_eq!(machine.extract(), json!({ "user": "seb", "loggedIn": true }));
    assert_eq!(machine.mode(), AuthMode::LoggedIn);
}

#[test]
fn logout_after_login_moves_to_logged_out() {
    let machine = auth::dispatcher().unwrap();

    machine.login(json!({ "user": "seb" })).unwrap().logout().unwrap();

    assert_eq!(machine.extract(), json!({ "user": null, "loggedIn": false }));
    assert_eq!(machine.mode(), AuthMode::LoggedOut);
}

#[test]
fn second_login_replaces_user() {
    let machine = auth::dispatcher().unwrap();

    machine
        .login(json!({ "user": "seb" }))
        .unwrap()
        .logout()
        .unwrap()
        .login(json!({ "user": "billy" }))
        .unwrap();

    assert_eq!(machine.extract(), json!({ "user": "billy", "loggedIn": true }));
    assert_eq!(machine.mode(), AuthMode::LoggedIn);
}

#[test]
fn logout_while_logged_out_is_unhandled() {
    let machine = auth::dispatcher().unwrap();

    let error = machine.logout().unwrap_err();

    assert_eq!(
        error,
        MachineError::UnhandledAction {
            action_type: "LOGOUT".to_string(),
            reducer: "LoggedOut".to_string(),
        }
    );
    assert_eq!(machine.extract(), json!({}));
    assert_eq!(machine.mode(), AuthMode::LoggedOut);
}

#[test]
fn generic_dispatch_matches_named_methods() {
    let named = auth::dispatcher().unwrap();
    let generic = auth::dispatcher().unwrap();

    named.login(json!({ "user": "seb" })).unwrap().logout().unwrap();
    generic
        .dispatch("login", json!({ "user": "seb" }))
        .unwrap()
        .trigger("logout")
        .unwrap();

    assert_eq!(named.extract(), generic.extract());
    assert_eq!(named.mode(), generic.mode());
}

#[test]
fn extract_is_reserved() {
    let machine = auth::dispatcher().unwrap();

    assert!(matches!(
        machine.trigger("extract"),
        Err(MachineError::ReservedName { .. })
    ));
    assert_eq!(machine.extract(), json!({}));
}

#[test]
fn reset_returns_to_logged_out() {
    let machine = auth::dispatcher().unwrap();
    machine.login(json!({ "user": "seb" })).unwrap();

    machine.reset().login(json!({ "user": "billy" })).unwrap();

    assert_eq!(machine.extract(), json!({ "user": "billy", "loggedIn": true }));
}
