//! Macros for declaring machine states and events.

/// Declare a state enum and its `State` implementation.
///
/// Each variant is paired with its display name.
///
/// # Example
///
/// ```
/// use statesim::state_enum;
/// use statesim::core::State;
///
/// state_enum! {
///     pub enum Lamp {
///         Off => "Off",
///         WarmingUp => "Warming up",
///         On => "On",
///     }
/// }
///
/// assert_eq!(Lamp::WarmingUp.name(), "Warming up");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $display:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $display),*
                }
            }
        }
    };
}

/// Declare an event enum and its `Event` implementation.
///
/// Each variant is paired with its operation name and menu label. Menu
/// order follows declaration order.
///
/// # Example
///
/// ```
/// use statesim::event_enum;
/// use statesim::core::Event;
///
/// event_enum! {
///     pub enum LampEvent {
///         Switch => ("switch", "Flip the switch"),
///     }
/// }
///
/// assert_eq!(LampEvent::all(), &[LampEvent::Switch]);
/// assert_eq!(LampEvent::Switch.label(), "Flip the switch");
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => ($op:literal, $label:literal)
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Event for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $op),*
                }
            }

            fn label(&self) -> &str {
                match self {
                    $(Self::$variant => $label),*
                }
            }

            fn all() -> &'static [Self] {
                &[$(Self::$variant),*]
            }
        }
    };
}
