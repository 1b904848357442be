//! Statesim: timed finite-state simulators
//!
//! Statesim models the classic State pattern with a "pure core, imperative
//! shell" split. Each machine is a closed state enum plus a pure transition
//! function; the simulator is the shell that owns the current state and the
//! single delayed auto-transition a state may schedule when entered.
//!
//! # Core Concepts
//!
//! - **State / Event**: closed enums implementing the `State` and `Event` traits
//! - **Machine**: pure `(state, event) -> Step` plus an on-enter timer rule
//! - **Simulator**: applies steps, owns a cancelable timer keyed by generation
//! - **Driver**: numbered console menu that reports every outcome
//!
//! # Example
//!
//! ```rust
//! use statesim::machines::{VendingControls, VendingMachine, VendingState};
//! use statesim::runtime::Simulator;
//! use std::time::Duration;
//!
//! let mut machine: Simulator<VendingMachine> = Simulator::new(Duration::from_secs(3));
//!
//! // Rejected: no money yet
//! let outcome = machine.select_product();
//! assert!(!outcome.is_transition());
//!
//! machine.insert_money();
//! machine.select_product();
//! machine.dispense_product();
//! assert_eq!(machine.current_state(), &VendingState::WaitingForMoney);
//! ```

pub mod config;
pub mod core;
pub mod driver;
pub mod machines;
mod macros;
pub mod runtime;

// Re-export commonly used types
pub use crate::config::{OutputFormat, SimConfig};
pub use crate::core::{AutoTransition, Event, Machine, State, Step};
pub use crate::runtime::{Outcome, Simulator, Trigger};
