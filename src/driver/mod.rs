//! Console driver for the simulators.
//!
//! Presents a numbered menu, reads a selection per line, dispatches it and
//! pauses before showing the menu again. Auto-transitions are reported
//! whenever they fire, including while the driver waits for input.

pub mod error;
pub mod menu;
pub mod render;
pub mod session;

pub use error::SessionError;
pub use session::{run, SessionOptions, SessionSummary};
