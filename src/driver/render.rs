//! Formatting outcomes as status lines.

use crate::config::OutputFormat;
use crate::core::State;
use crate::runtime::Outcome;

/// Render one outcome, newline terminated.
pub fn outcome<S: State>(outcome: &Outcome<S>, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string(outcome)?)),
        OutputFormat::Text => Ok(match outcome {
            Outcome::Transitioned { to, message, .. } => {
                format!("{message}\nState changed to: {}\n", to.name())
            }
            Outcome::Rejected { message, .. } => format!("{message}\n"),
        }),
    }
}

/// Informational line such as "Invalid option." Suppressed in JSON mode.
pub fn notice(text: &str, format: OutputFormat) -> Option<String> {
    match format {
        OutputFormat::Text => Some(format!("{text}\n")),
        OutputFormat::Json => None,
    }
}
