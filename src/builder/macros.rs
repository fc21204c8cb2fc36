//! Macros for ergonomic machine construction.

/// Generate a mode enum and its `Mode` trait implementation.
///
/// # Example
///
/// ```
/// use handoff::core::Mode;
/// use handoff::mode_enum;
///
/// mode_enum! {
///     pub enum Session {
///         LoggedOut,
///         LoggedIn,
///     }
/// }
///
/// assert_eq!(Session::LoggedIn.name(), "LoggedIn");
/// ```
#[macro_export]
macro_rules! mode_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Mode for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Generate named dispatch methods for a [`Dispatcher`](crate::dispatch::Dispatcher).
///
/// Each entry becomes a trait method that dispatches the method's own name.
/// `name(arg)` takes a payload; a bare `name` sends the default payload.
///
/// # Example
///
/// ```
/// use handoff::builder::{MachineBuilder, TableBuilder};
/// use handoff::core::{Action, TransitionRule};
/// use handoff::dispatch::Dispatcher;
/// use handoff::{dispatch_methods, mode_enum};
///
/// mode_enum! {
///     enum Counter {
///         Running,
///     }
/// }
///
/// dispatch_methods! {
///     trait CounterActions for Dispatcher<Counter, i64, i64> {
///         add(amount),
///         clear,
///     }
/// }
///
/// let counter = Dispatcher::new(
///     MachineBuilder::new()
///         .initial_state(0)
///         .initial(Counter::Running)
///         .table(
///             TableBuilder::new(Counter::Running)
///                 .on("ADD", TransitionRule::new().update(|n: &i64, a: &Action<i64>| n + a.payload()))
///                 .on("CLEAR", TransitionRule::new().update(|_: &i64, _: &Action<i64>| 0)),
///         )
///         .unwrap()
///         .build()
///         .unwrap(),
/// );
///
/// counter.add(2).unwrap().add(3).unwrap();
/// assert_eq!(counter.extract(), 5);
///
/// counter.clear().unwrap();
/// assert_eq!(counter.extract(), 0);
/// ```
#[macro_export]
macro_rules! dispatch_methods {
    (@call $target:expr, $method:ident, $arg:ident) => {
        $target.dispatch(stringify!($method), $arg)
    };
    (@call $target:expr, $method:ident) => {
        $target.trigger(stringify!($method))
    };
    (
        $(#[$meta:meta])*
        $vis:vis trait $trait_name:ident for Dispatcher<$mode:ty, $state:ty, $payload:ty> {
            $(
                $(#[$method_meta:meta])*
                $method:ident $(($arg:ident))?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis trait $trait_name {
            $(
                $(#[$method_meta])*
                fn $method(&self $(, $arg: $payload)?) -> Result<&Self, $crate::core::MachineError>;
            )*
        }

        impl $trait_name for $crate::dispatch::Dispatcher<$mode, $state, $payload> {
            $(
                fn $method(&self $(, $arg: $payload)?) -> Result<&Self, $crate::core::MachineError> {
                    $crate::dispatch_methods!(@call self, $method $(, $arg)?)
                }
            )*
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::Mode;

    mode_enum! {
        enum TestMode {
            Initial,
            Processing,
            Complete,
        }
    }

    #[test]
    fn mode_enum_macro_generates_trait() {
        assert_eq!(TestMode::Initial.name(), "Initial");
        assert_eq!(TestMode::Processing.name(), "Processing");
        assert_eq!(TestMode::Complete.name(), "Complete");
    }

    #[test]
    fn mode_enum_supports_visibility() {
        mode_enum! {
            /// Documented mode.
            pub enum PublicMode {
                A,
                B,
            }
        }

        assert_ne!(PublicMode::A, PublicMode::B);
    }

    #[test]
    fn mode_enum_values_are_copy() {
        let mode = TestMode::Processing;
        let copied = mode;
        assert_eq!(mode, copied);
    }
}
