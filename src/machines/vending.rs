//! Vending machine.
//!
//! Purely event driven: money, then a selection, then the product comes
//! out and the machine waits for money again.

use crate::core::{Machine, Step};
use crate::runtime::{Outcome, Simulator};
use crate::{event_enum, state_enum};

state_enum! {
    pub enum VendingState {
        WaitingForMoney => "Waiting for money",
        SelectingProduct => "Selecting product",
        DispensingProduct => "Dispensing product",
    }
}

event_enum! {
    pub enum VendingEvent {
        InsertMoney => ("insert_money", "Insert money"),
        SelectProduct => ("select_product", "Select product"),
        DispenseProduct => ("dispense_product", "Dispense product"),
    }
}

/// Marker type for the vending machine.
#[derive(Clone, Copy, Debug, Default)]
pub struct VendingMachine;

impl Machine for VendingMachine {
    type State = VendingState;
    type Event = VendingEvent;

    const NAME: &'static str = "vending";
    const MENU_PAUSE_MS: u64 = 3_000;

    fn initial() -> VendingState {
        VendingState::WaitingForMoney
    }

    fn on_event(state: &VendingState, event: VendingEvent) -> Step<VendingState> {
        use VendingEvent as E;
        use VendingState as S;

        match (state, event) {
            (S::WaitingForMoney, E::InsertMoney) => Step::to(
                S::SelectingProduct,
                "Money inserted. You can now select a product.",
            ),
            (S::WaitingForMoney, E::SelectProduct | E::DispenseProduct) => {
                Step::stay("Please insert money first.")
            }

            (S::SelectingProduct, E::InsertMoney) => {
                Step::stay("Please select a product - money already inserted.")
            }
            (S::SelectingProduct, E::SelectProduct) => Step::to(
                S::DispensingProduct,
                "Product selected. You can now collect your product.",
            ),
            (S::SelectingProduct, E::DispenseProduct) => {
                Step::stay("Please select a product first.")
            }

            (S::DispensingProduct, E::InsertMoney) => {
                Step::stay("Please wait for the product to be dispensed.")
            }
            (S::DispensingProduct, E::SelectProduct) => {
                Step::stay("Product already dispensed. Please collect it.")
            }
            (S::DispensingProduct, E::DispenseProduct) => Step::to(
                S::WaitingForMoney,
                "Product delivered. Thank you for using the vending machine.",
            ),
        }
    }
}

/// Vending machine operations on a simulator.
pub trait VendingControls {
    fn insert_money(&mut self) -> Outcome<VendingState>;
    fn select_product(&mut self) -> Outcome<VendingState>;
    fn dispense_product(&mut self) -> Outcome<VendingState>;
}

impl VendingControls for Simulator<VendingMachine> {
    fn insert_money(&mut self) -> Outcome<VendingState> {
        self.dispatch(VendingEvent::InsertMoney)
    }

    fn select_product(&mut self) -> Outcome<VendingState> {
        self.dispatch(VendingEvent::SelectProduct)
    }

    fn dispense_product(&mut self) -> Outcome<VendingState> {
        self.dispatch(VendingEvent::DispenseProduct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Event, State};

    #[test]
    fn initial_state_waits_for_money() {
        assert_eq!(VendingMachine::initial(), VendingState::WaitingForMoney);
        assert_eq!(VendingMachine::initial().name(), "Waiting for money");
    }

    #[test]
    fn nothing_happens_before_money() {
        for event in [VendingEvent::SelectProduct, VendingEvent::DispenseProduct] {
            let step = VendingMachine::on_event(&VendingState::WaitingForMoney, event);
            assert_eq!(step, Step::stay("Please insert money first."));
        }
    }

    #[test]
    fn full_cycle_returns_to_waiting() {
        let mut state = VendingMachine::initial();
        for event in VendingEvent::all() {
            match VendingMachine::on_event(&state, *event) {
                Step::Transition { to, .. } => state = to,
                Step::Stay { message } => panic!("{event:?} rejected: {message}"),
            }
        }
        assert_eq!(state, VendingState::WaitingForMoney);
    }

    #[test]
    fn rejections_while_selecting() {
        let state = VendingState::SelectingProduct;
        assert!(!VendingMachine::on_event(&state, VendingEvent::InsertMoney).is_transition());
        assert_eq!(
            VendingMachine::on_event(&state, VendingEvent::DispenseProduct).message(),
            "Please select a product first."
        );
    }

    #[test]
    fn rejections_while_dispensing() {
        let state = VendingState::DispensingProduct;
        assert!(!VendingMachine::on_event(&state, VendingEvent::InsertMoney).is_transition());
        assert_eq!(
            VendingMachine::on_event(&state, VendingEvent::SelectProduct).message(),
            "Product already dispensed. Please collect it."
        );
    }

    #[test]
    fn no_vending_state_schedules_a_timer() {
        for state in [
            VendingState::WaitingForMoney,
            VendingState::SelectingProduct,
            VendingState::DispensingProduct,
        ] {
            assert!(VendingMachine::on_enter(&state).is_none());
        }
    }
}
