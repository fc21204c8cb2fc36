//! Mode trait identifying which reducer is active.
//!
//! A mode is the FSM's state tag: every reducer is registered under exactly
//! one mode, and swapping the active reducer means moving to another mode.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for reducer identities.
///
/// Modes are usually unit variants of a closed enum, one per reducer. All
/// methods are pure.
///
/// # Required Traits
///
/// - `Clone` + `Eq` + `Hash`: modes key the reducer registry
/// - `Debug`: modes appear in diagnostics
/// - `Serialize` + `Deserialize`: modes can be stored alongside state
///
/// # Example
///
/// ```rust
/// use handoff::core::Mode;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum DoorMode {
///     Open,
///     Closed,
/// }
///
/// impl Mode for DoorMode {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(DoorMode::Closed.name(), "Closed");
/// ```
pub trait Mode:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Get the mode's name for display/logging.
    fn name(&self) -> &str;
}
