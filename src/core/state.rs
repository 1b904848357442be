//! State and event traits shared by every simulated machine.
//!
//! States and events are plain values from closed enums. They carry no
//! reference back to the simulator that owns them; moving between states is
//! the job of the machine's transition function.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for machine states.
///
/// All methods are pure. A state is an immutable value describing the
/// current position of a simulator; the previous value is discarded on
/// every transition.
///
/// # Example
///
/// ```rust
/// use statesim::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Lamp {
///     Off,
///     On,
/// }
///
/// impl State for Lamp {
///     fn name(&self) -> &str {
///         match self {
///             Self::Off => "Off",
///             Self::On => "On",
///         }
///     }
/// }
///
/// assert_eq!(Lamp::On.name(), "On");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Human readable name shown in menus and status lines.
    fn name(&self) -> &str;
}

/// Trait for user-triggered events.
///
/// Every machine exposes one event per external operation. The set is
/// closed and enumerable so that drivers can build menus from it.
pub trait Event: Copy + PartialEq + Debug + Send + Sync + 'static {
    /// Operation name, e.g. `open` or `insert_money`.
    fn name(&self) -> &str;

    /// Label used in interactive menus.
    fn label(&self) -> &str;

    /// All events of this machine, in menu order.
    fn all() -> &'static [Self];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Idle,
        Busy,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Busy => "Busy",
            }
        }
    }

    #[derive(Clone, Copy, PartialEq, Debug)]
    enum TestEvent {
        Start,
        Stop,
    }

    impl Event for TestEvent {
        fn name(&self) -> &str {
            match self {
                Self::Start => "start",
                Self::Stop => "stop",
            }
        }

        fn label(&self) -> &str {
            match self {
                Self::Start => "Start work",
                Self::Stop => "Stop work",
            }
        }

        fn all() -> &'static [Self] {
            &[Self::Start, Self::Stop]
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert_eq!(TestState::Busy.name(), "Busy");
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Busy;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn events_enumerate_in_menu_order() {
        let names: Vec<&str> = TestEvent::all().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["start", "stop"]);
        assert_eq!(TestEvent::Stop.label(), "Stop work");
    }
}
