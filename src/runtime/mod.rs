//! Runtime shell around the pure machine definitions.
//!
//! The simulator owns the current state, applies the steps returned by the
//! transition function and keeps at most one delayed auto-transition. Timers
//! are plain data (deadline plus generation) awaited on the tokio clock, so
//! a transition cancels them simply by replacing them.

mod outcome;
mod simulator;

pub use outcome::{Outcome, Trigger};
pub use simulator::Simulator;
