//! Automatic Door Walkthrough
//!
//! Drives the door simulator through a full open/close cycle on a paused
//! tokio clock, so the timed Opening -> Open and Closing -> Closed steps
//! complete instantly.
//!
//! Key concepts:
//! - Events rejected without changing state
//! - Auto-transitions scheduled on entering a moving state
//! - Motion while closing superseding the pending close timer
//!
//! Run with: cargo run --example door

use statesim::core::State;
use statesim::machines::{AutomaticDoor, DoorControls, DoorState};
use statesim::runtime::{Outcome, Simulator};
use std::time::Duration;

fn show(outcome: &Outcome<DoorState>) {
    let kind = if outcome.is_timer() {
        "timer"
    } else if outcome.is_transition() {
        "event"
    } else {
        "rejected"
    };
    println!("  [{kind:>8}] {:<8} {}", outcome.state().name(), outcome.message());
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tokio::time::pause();

    println!("=== Automatic Door ===\n");

    let mut door: Simulator<AutomaticDoor> = Simulator::new(Duration::from_secs(3));
    println!("Initial state: {}\n", door.state_name());

    println!("Open, then try to close while opening:");
    show(&door.open());
    show(&door.close());
    show(&door.auto_transition().await);

    println!("\nClose, then motion is detected:");
    show(&door.close());
    show(&door.open());
    show(&door.auto_transition().await);

    println!("\nClose and leave it alone:");
    show(&door.close());
    show(&door.auto_transition().await);

    println!("\nFinal state: {} after {} transitions", door.state_name(), door.generation());
    println!("\n=== Example Complete ===");
}
