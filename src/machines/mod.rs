//! Concrete machines: the automatic door and the vending machine.

mod door;
mod vending;

pub use door::{AutomaticDoor, DoorControls, DoorEvent, DoorState};
pub use vending::{VendingControls, VendingEvent, VendingMachine, VendingState};
