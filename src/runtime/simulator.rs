//! Simulator that owns the current state and its pending auto-transition.

use crate::config::SimConfig;
use crate::core::{Event, Machine, State, Step};
use crate::runtime::outcome::{Outcome, Trigger};
use chrono::Utc;
use std::time::Duration;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info, trace};

/// Deadline offset used when `now + auto_delay` does not fit in an `Instant`.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// Delayed transition owned by the simulator.
///
/// Tagged with the generation that scheduled it. It applies only while that
/// generation is still current.
#[derive(Clone, Debug)]
struct Pending<S> {
    generation: u64,
    due: Instant,
    to: S,
    message: &'static str,
}

/// Finite state simulator for a machine `M`.
///
/// Holds exactly one state at a time. User events go through
/// [`dispatch`](Self::dispatch); delayed transitions are applied by
/// [`fire_due`](Self::fire_due) or awaited with
/// [`auto_transition`](Self::auto_transition).
///
/// # Example
///
/// ```rust
/// use statesim::machines::{AutomaticDoor, DoorControls, DoorState};
/// use statesim::runtime::Simulator;
/// use std::time::Duration;
///
/// let mut door: Simulator<AutomaticDoor> = Simulator::new(Duration::from_secs(3));
/// door.open();
/// assert_eq!(door.current_state(), &DoorState::Opening);
///
/// // close() while opening is absorbed
/// let outcome = door.close();
/// assert!(!outcome.is_transition());
/// assert_eq!(door.state_name(), "Opening");
/// ```
pub struct Simulator<M: Machine> {
    current: M::State,
    generation: u64,
    pending: Option<Pending<M::State>>,
    auto_delay: Duration,
}

impl<M: Machine> Simulator<M> {
    /// Create a simulator in the machine's initial state.
    pub fn new(auto_delay: Duration) -> Self {
        Self {
            current: M::initial(),
            generation: 0,
            pending: None,
            auto_delay,
        }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.auto_delay())
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &M::State {
        &self.current
    }

    /// Display name of the current state (pure)
    pub fn state_name(&self) -> &str {
        self.current.name()
    }

    /// Number of transitions applied since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn auto_delay(&self) -> Duration {
        self.auto_delay
    }

    /// When the pending auto-transition falls due, if one is scheduled.
    pub fn pending_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due)
    }

    /// Feed a user event to the current state.
    pub fn dispatch(&mut self, event: M::Event) -> Outcome<M::State> {
        match M::on_event(&self.current, event) {
            Step::Transition { to, message } => {
                self.apply(to, Trigger::Event(event.name().to_string()), message)
            }
            Step::Stay { message } => {
                debug!(
                    machine = M::NAME,
                    state = self.current.name(),
                    event = event.name(),
                    "event absorbed"
                );
                Outcome::Rejected {
                    state: self.current.clone(),
                    event: event.name().to_string(),
                    message: message.to_string(),
                    at: Utc::now(),
                }
            }
        }
    }

    /// Apply the pending auto-transition if it is due at `now`.
    ///
    /// Returns `None` when nothing is pending, when the deadline has not
    /// been reached, or when the timer belongs to an earlier generation.
    pub fn fire_due(&mut self, now: Instant) -> Option<Outcome<M::State>> {
        match &self.pending {
            Some(pending) if pending.due <= now => {}
            _ => return None,
        }
        let pending = self.pending.take()?;

        if pending.generation != self.generation {
            trace!(
                machine = M::NAME,
                scheduled_at = pending.generation,
                current = self.generation,
                "superseded auto-transition discarded"
            );
            return None;
        }

        Some(self.apply(pending.to, Trigger::Timer, pending.message))
    }

    /// Wait for the pending auto-transition and apply it.
    ///
    /// Never resolves while nothing is pending, so it can be raced against
    /// user input in `tokio::select!`. Cancel-safe: state only changes after
    /// the deadline has passed.
    pub async fn auto_transition(&mut self) -> Outcome<M::State> {
        loop {
            let Some(due) = self.pending_deadline() else {
                return std::future::pending().await;
            };
            sleep_until(due).await;
            if let Some(outcome) = self.fire_due(Instant::now()) {
                return outcome;
            }
        }
    }

    fn apply(
        &mut self,
        to: M::State,
        trigger: Trigger,
        message: &'static str,
    ) -> Outcome<M::State> {
        let from = std::mem::replace(&mut self.current, to);
        self.generation += 1;

        if let Some(cancelled) = self.pending.take() {
            debug!(
                machine = M::NAME,
                cancelled_target = cancelled.to.name(),
                "pending auto-transition cancelled"
            );
        }

        let due = self.deadline();
        self.pending = M::on_enter(&self.current).map(|auto| Pending {
            generation: self.generation,
            due,
            to: auto.to,
            message: auto.message,
        });

        info!(
            machine = M::NAME,
            from = from.name(),
            to = self.current.name(),
            trigger = ?trigger,
            "state changed"
        );

        Outcome::Transitioned {
            from,
            to: self.current.clone(),
            trigger,
            message: message.to_string(),
            at: Utc::now(),
        }
    }

    fn deadline(&self) -> Instant {
        let now = Instant::now();
        now.checked_add(self.auto_delay).unwrap_or_else(|| now + FAR_FUTURE)
    }
}

impl<M: Machine> std::fmt::Debug for Simulator<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulator")
            .field("machine", &M::NAME)
            .field("current", &self.current)
            .field("generation", &self.generation)
            .field("pending", &self.pending)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machines::{
        AutomaticDoor, DoorControls, DoorState, VendingControls, VendingMachine, VendingState,
    };

    const DELAY: Duration = Duration::from_millis(3_000);

    fn door() -> Simulator<AutomaticDoor> {
        Simulator::new(DELAY)
    }

    #[test]
    fn starts_in_initial_state() {
        let sim = door();
        assert_eq!(sim.current_state(), &DoorState::Closed);
        assert_eq!(sim.generation(), 0);
        assert!(sim.pending_deadline().is_none());
    }

    #[test]
    fn open_schedules_auto_transition() {
        let mut sim = door();
        let before = Instant::now();
        let outcome = sim.open();

        assert!(outcome.is_transition());
        assert_eq!(sim.current_state(), &DoorState::Opening);
        assert_eq!(sim.generation(), 1);
        let due = sim.pending_deadline().unwrap();
        assert!(due >= before + DELAY);
    }

    #[test]
    fn rejection_leaves_state_and_timer_alone() {
        let mut sim = door();
        sim.open();
        let due = sim.pending_deadline();

        let outcome = sim.close();
        assert!(matches!(outcome, Outcome::Rejected { ref event, .. } if event == "close"));
        assert_eq!(sim.state_name(), "Opening");
        assert_eq!(sim.generation(), 1);
        assert_eq!(sim.pending_deadline(), due);
    }

    #[test]
    fn fire_due_waits_for_deadline() {
        let mut sim = door();
        sim.open();
        let due = sim.pending_deadline().unwrap();

        assert!(sim.fire_due(due - Duration::from_millis(1)).is_none());
        assert_eq!(sim.current_state(), &DoorState::Opening);

        let outcome = sim.fire_due(due).unwrap();
        assert!(outcome.is_timer());
        assert_eq!(sim.current_state(), &DoorState::Open);

        // exactly once
        assert!(sim.fire_due(due + DELAY).is_none());
        assert_eq!(sim.generation(), 2);
    }

    #[test]
    fn transition_cancels_pending_timer() {
        let mut sim = door();
        sim.open();
        sim.fire_due(Instant::now() + DELAY);
        sim.close();
        assert_eq!(sim.current_state(), &DoorState::Closing);

        sim.close();
        assert_eq!(sim.current_state(), &DoorState::Closed);
        assert!(sim.pending_deadline().is_none());
        assert!(sim.fire_due(Instant::now() + DELAY * 10).is_none());
        assert_eq!(sim.current_state(), &DoorState::Closed);
    }

    #[test]
    fn stale_generation_is_discarded() {
        let mut sim = door();
        sim.open();
        if let Some(pending) = sim.pending.as_mut() {
            pending.generation = 0;
        }

        assert!(sim.fire_due(Instant::now() + DELAY).is_none());
        assert_eq!(sim.current_state(), &DoorState::Opening);
        assert!(sim.pending_deadline().is_none());
    }

    #[test]
    fn huge_delay_schedules_far_future_timer() {
        let mut sim: Simulator<AutomaticDoor> = Simulator::new(Duration::MAX);
        let outcome = sim.open();

        assert!(outcome.is_transition());
        assert_eq!(sim.current_state(), &DoorState::Opening);
        assert!(sim.pending_deadline().is_some());
        assert!(sim.fire_due(Instant::now() + DELAY).is_none());
        assert_eq!(sim.current_state(), &DoorState::Opening);
    }

    #[test]
    fn vending_cycle_returns_to_start() {
        let mut sim: Simulator<VendingMachine> = Simulator::new(DELAY);
        sim.insert_money();
        sim.select_product();
        sim.dispense_product();

        assert_eq!(sim.current_state(), &VendingState::WaitingForMoney);
        assert_eq!(sim.generation(), 3);
        assert!(sim.pending_deadline().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn auto_transition_fires_after_delay() {
        let mut sim = door();
        let start = Instant::now();
        sim.open();

        let outcome = sim.auto_transition().await;
        assert!(outcome.is_timer());
        assert_eq!(outcome.state(), &DoorState::Open);
        assert!(Instant::now() - start >= DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn auto_transition_never_resolves_when_idle() {
        let mut sim = door();
        let waited = tokio::time::timeout(DELAY * 10, sim.auto_transition()).await;
        assert!(waited.is_err());
        assert_eq!(sim.current_state(), &DoorState::Closed);
    }

    #[tokio::test(start_paused = true)]
    async fn reopening_restarts_the_timer() {
        let mut sim = door();
        sim.open();
        sim.auto_transition().await;
        sim.close();

        tokio::time::advance(DELAY / 2).await;
        sim.open();
        assert_eq!(sim.current_state(), &DoorState::Opening);

        let reopened_at = Instant::now();
        let outcome = sim.auto_transition().await;
        assert_eq!(outcome.state(), &DoorState::Open);
        assert!(Instant::now() - reopened_at >= DELAY);
    }
}
