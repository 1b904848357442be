//! Interactive menu loop.

use crate::config::{OutputFormat, SimConfig};
use crate::core::{Machine, State};
use crate::driver::error::SessionError;
use crate::driver::menu::{self, Choice};
use crate::driver::render;
use crate::runtime::{Outcome, Simulator};
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::sleep;
use tracing::debug;

/// How a session talks to the user.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionOptions {
    pub format: OutputFormat,
    /// Pause after every selection; timers keep firing during it
    pub menu_pause: Duration,
}

impl SessionOptions {
    pub fn for_machine<M: Machine>(config: &SimConfig) -> Self {
        Self {
            format: config.format,
            menu_pause: config.menu_pause(M::MENU_PAUSE_MS),
        }
    }
}

/// Counters collected over a session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionSummary {
    /// User events dispatched, accepted or not
    pub events: usize,
    pub transitions: usize,
    pub rejections: usize,
    pub auto_transitions: usize,
    pub invalid_inputs: usize,
    pub final_state: String,
}

impl SessionSummary {
    fn record<S: State>(&mut self, outcome: &Outcome<S>) {
        if outcome.is_timer() {
            self.auto_transitions += 1;
        } else {
            self.events += 1;
        }
        if outcome.is_transition() {
            self.transitions += 1;
        } else {
            self.rejections += 1;
        }
    }
}

struct Console<'a, W> {
    output: &'a mut W,
    format: OutputFormat,
}

impl<W: AsyncWrite + Unpin> Console<'_, W> {
    async fn write(&mut self, text: &str) -> Result<(), SessionError> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }

    async fn outcome<S: State>(&mut self, outcome: &Outcome<S>) -> Result<(), SessionError> {
        let line = render::outcome(outcome, self.format)?;
        self.write(&line).await
    }

    async fn notice(&mut self, text: &str) -> Result<(), SessionError> {
        match render::notice(text, self.format) {
            Some(line) => self.write(&line).await,
            None => Ok(()),
        }
    }
}

/// Run the menu loop until the user exits or input ends.
///
/// Auto-transitions that fall due while waiting for input or during the
/// post-action pause are applied and reported as they happen.
pub async fn run<M, R, W>(
    sim: &mut Simulator<M>,
    input: R,
    output: &mut W,
    options: &SessionOptions,
) -> Result<SessionSummary, SessionError>
where
    M: Machine,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut console = Console {
        output,
        format: options.format,
    };
    let mut lines = input.lines();
    let mut summary = SessionSummary::default();

    loop {
        if options.format == OutputFormat::Text {
            let prompt = menu::render::<_, M::Event>(sim.current_state());
            console.write(&prompt).await?;
        }

        let line = tokio::select! {
            biased;
            outcome = sim.auto_transition() => {
                summary.record(&outcome);
                console.outcome(&outcome).await?;
                continue;
            }
            line = lines.next_line() => line?,
        };

        let Some(line) = line else {
            debug!(machine = M::NAME, "input closed");
            break;
        };

        match menu::parse::<M::Event>(&line) {
            Choice::Event(event) => {
                let outcome = sim.dispatch(event);
                summary.record(&outcome);
                console.outcome(&outcome).await?;
            }
            Choice::Exit => {
                console.notice("Exiting...").await?;
                break;
            }
            Choice::Invalid => {
                summary.invalid_inputs += 1;
                console.notice("Invalid option.").await?;
            }
        }

        pause(sim, &mut console, &mut summary, options.menu_pause).await?;
    }

    summary.final_state = sim.state_name().to_string();
    Ok(summary)
}

async fn pause<M, W>(
    sim: &mut Simulator<M>,
    console: &mut Console<'_, W>,
    summary: &mut SessionSummary,
    duration: Duration,
) -> Result<(), SessionError>
where
    M: Machine,
    W: AsyncWrite + Unpin,
{
    let done = sleep(duration);
    tokio::pin!(done);

    loop {
        tokio::select! {
            biased;
            outcome = sim.auto_transition() => {
                summary.record(&outcome);
                console.outcome(&outcome).await?;
            }
            _ = &mut done => return Ok(()),
        }
    }
}
