//! Automatic door.
//!
//! Opening and Closing are transient: entering either schedules a delayed
//! transition to Open or Closed respectively. Motion detected while closing
//! reopens the door; an explicit close while closing completes at once.

use crate::core::{AutoTransition, Machine, Step};
use crate::runtime::{Outcome, Simulator};
use crate::{event_enum, state_enum};

state_enum! {
    /// Position of the door.
    pub enum DoorState {
        Closed => "Closed",
        Opening => "Opening",
        Open => "Open",
        Closing => "Closing",
    }
}

event_enum! {
    pub enum DoorEvent {
        Open => ("open", "Open the door"),
        Close => ("close", "Close the door"),
    }
}

/// Marker type for the automatic door machine.
#[derive(Clone, Copy, Debug, Default)]
pub struct AutomaticDoor;

impl Machine for AutomaticDoor {
    type State = DoorState;
    type Event = DoorEvent;

    const NAME: &'static str = "door";
    const MENU_PAUSE_MS: u64 = 2_000;

    fn initial() -> DoorState {
        DoorState::Closed
    }

    fn on_event(state: &DoorState, event: DoorEvent) -> Step<DoorState> {
        use DoorEvent as E;
        use DoorState as S;

        match (state, event) {
            (S::Closed, E::Open) => Step::to(S::Opening, "Opening the door..."),
            (S::Closed, E::Close) => Step::stay("The door is already closed."),

            (S::Opening, E::Open) => Step::stay("The door is already opening."),
            (S::Opening, E::Close) => Step::stay("The door cannot close while it is opening."),

            (S::Open, E::Open) => Step::stay("The door is already open."),
            (S::Open, E::Close) => Step::to(S::Closing, "Closing the door..."),

            (S::Closing, E::Open) => {
                Step::to(S::Opening, "Motion detected. Opening the door again...")
            }
            (S::Closing, E::Close) => Step::to(S::Closed, "The door has closed."),
        }
    }

    /// Opening settles into Open and Closing into Closed.
    ///
    /// Closing never falls back to Open on its own: a door left alone
    /// while closing ends up shut. Only motion (`open`) reopens it.
    fn on_enter(state: &DoorState) -> Option<AutoTransition<DoorState>> {
        match state {
            DoorState::Opening => Some(AutoTransition {
                to: DoorState::Open,
                message: "The door is now open.",
            }),
            DoorState::Closing => Some(AutoTransition {
                to: DoorState::Closed,
                message: "The door is now closed.",
            }),
            DoorState::Closed | DoorState::Open => None,
        }
    }
}

/// Door operations on a simulator.
pub trait DoorControls {
    fn open(&mut self) -> Outcome<DoorState>;
    fn close(&mut self) -> Outcome<DoorState>;
}

impl DoorControls for Simulator<AutomaticDoor> {
    fn open(&mut self) -> Outcome<DoorState> {
        self.dispatch(DoorEvent::Open)
    }

    fn close(&mut self) -> Outcome<DoorState> {
        self.dispatch(DoorEvent::Close)
    }
}
