//! Login / Logout
//!
//! This example drives the session machine through a fixed sequence of
//! actions and prints the resulting state.
//!
//! Key concepts:
//! - Each reducer decides which reducer handles the next action
//! - The dispatcher chains calls and swaps in each new machine
//! - Unhandled actions are reported, not ignored
//!
//! Run with: RUST_LOG=debug cargo run --example login_logout

use handoff::auth::{self, AuthActions};
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Login / Logout Example ===\n");

    let machine = auth::dispatcher()?;

    machine
        .login(json!({ "user": "seb" }))?
        .logout()?
        .login(json!({ "user": "billy" }))?;

    println!("Mode: {:?}", machine.mode());
    println!("State: {}", machine.extract());

    match machine.login(json!({ "user": "eve" })) {
        Ok(_) => println!("Unexpected second login"),
        Err(error) => println!("Rejected: {error}"),
    }
    println!("State after rejection: {}", machine.extract());

    println!("\n=== Example Complete ===");
    Ok(())
}
