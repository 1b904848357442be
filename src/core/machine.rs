//! Pure transition logic for simulated machines.
//!
//! A machine is described by a closed state enum, a closed event enum and
//! two pure functions: the transition function `(state, event) -> step`
//! and the on-enter rule that tells the simulator which delayed transition,
//! if any, a freshly entered state schedules.

use super::state::{Event, State};

/// Result of feeding one event to the transition function.
#[derive(Clone, Debug, PartialEq)]
pub enum Step<S: State> {
    /// Move to a new state, announcing `message`.
    Transition { to: S, message: &'static str },

    /// Keep the current state. The event is absorbed with `message`.
    Stay { message: &'static str },
}

impl<S: State> Step<S> {
    /// Shorthand for [`Step::Transition`].
    pub fn to(to: S, message: &'static str) -> Self {
        Step::Transition { to, message }
    }

    /// Shorthand for [`Step::Stay`].
    pub fn stay(message: &'static str) -> Self {
        Step::Stay { message }
    }

    pub fn is_transition(&self) -> bool {
        matches!(self, Step::Transition { .. })
    }

    pub fn message(&self) -> &'static str {
        match self {
            Step::Transition { message, .. } | Step::Stay { message } => message,
        }
    }
}

/// Delayed transition scheduled when a state is entered.
#[derive(Clone, Debug, PartialEq)]
pub struct AutoTransition<S: State> {
    pub to: S,
    pub message: &'static str,
}

/// A finite state machine definition.
///
/// Implementors are zero-sized markers; all behavior lives in associated
/// functions so the simulator can own nothing but the current state.
///
/// # Example
///
/// ```rust
/// use statesim::core::{Machine, State, Step};
/// use statesim::machines::{AutomaticDoor, DoorEvent, DoorState};
///
/// let step = AutomaticDoor::on_event(&DoorState::Closed, DoorEvent::Open);
/// assert_eq!(step, Step::to(DoorState::Opening, "Opening the door..."));
///
/// let auto = AutomaticDoor::on_enter(&DoorState::Opening).unwrap();
/// assert_eq!(auto.to.name(), "Open");
/// ```
pub trait Machine: Send + Sync + 'static {
    type State: State + 'static;
    type Event: Event;

    /// Short machine name used in logs.
    const NAME: &'static str;

    /// Pause the interactive driver takes after each action, in milliseconds.
    const MENU_PAUSE_MS: u64;

    /// State every simulator of this machine starts in.
    fn initial() -> Self::State;

    /// Total transition function over (state, event).
    fn on_event(state: &Self::State, event: Self::Event) -> Step<Self::State>;

    /// Delayed transition scheduled on entering `state`.
    fn on_enter(_state: &Self::State) -> Option<AutoTransition<Self::State>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Start,
        End,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::End => "End",
            }
        }
    }

    #[test]
    fn step_constructors_and_accessors() {
        let moved = Step::to(TestState::End, "moved");
        assert!(moved.is_transition());
        assert_eq!(moved.message(), "moved");

        let stayed: Step<TestState> = Step::stay("nothing to do");
        assert!(!stayed.is_transition());
        assert_eq!(stayed.message(), "nothing to do");
    }

    #[test]
    fn step_compares_target_state() {
        assert_ne!(Step::to(TestState::End, "x"), Step::to(TestState::Start, "x"));
    }
}
