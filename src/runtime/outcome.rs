//! Observable results of dispatching events and firing timers.

use crate::core::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What caused a transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "name", rename_all = "snake_case")]
pub enum Trigger {
    /// A user event, by operation name.
    Event(String),
    /// A delayed auto-transition.
    Timer,
}

/// Result of a single dispatch or timer firing.
///
/// Rejections are ordinary outcomes, not errors: the event is absorbed and
/// the state is left untouched.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", bound = "")]
pub enum Outcome<S: State> {
    Transitioned {
        from: S,
        to: S,
        trigger: Trigger,
        message: String,
        at: DateTime<Utc>,
    },
    Rejected {
        state: S,
        event: String,
        message: String,
        at: DateTime<Utc>,
    },
}

impl<S: State> Outcome<S> {
    /// State the simulator is in after this outcome.
    pub fn state(&self) -> &S {
        match self {
            Outcome::Transitioned { to, .. } => to,
            Outcome::Rejected { state, .. } => state,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Outcome::Transitioned { message, .. } | Outcome::Rejected { message, .. } => message,
        }
    }

    pub fn is_transition(&self) -> bool {
        matches!(self, Outcome::Transitioned { .. })
    }

    pub fn is_timer(&self) -> bool {
        matches!(
            self,
            Outcome::Transitioned {
                trigger: Trigger::Timer,
                ..
            }
        )
    }
}
