//! Core state machine types and logic.
//!
//! This module contains the pure functional core of the simulators:
//! - State and event definitions via the `State` and `Event` traits
//! - Machine definitions via the `Machine` trait
//! - Transition results (`Step`) and delayed transitions (`AutoTransition`)
//!
//! Nothing here performs I/O or touches a clock. Timing and reporting live
//! in `runtime` and `driver`.

mod machine;
mod state;

pub use machine::{AutoTransition, Machine, Step};
pub use state::{Event, State};
