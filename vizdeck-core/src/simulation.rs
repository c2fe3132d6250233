//! Simulated telemetry.
//!
//! The event loop owns a `SimClock` and polls it every iteration. While live
//! mode is on the clock stays armed and each due poll applies one tick; when
//! live mode goes off the clock is disarmed and nothing changes until it is
//! re-armed.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::state::AppState;

#[derive(Debug, Clone)]
pub struct SimClock {
    interval: Duration,
    next_due: Option<Instant>,
}

impl SimClock {
    pub fn new(interval: Duration) -> Self {
        Self { interval, next_due: None }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Schedule the next tick one interval from `now`. Already armed clocks keep their deadline.
    pub fn arm(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(now + self.interval);
        }
    }

    pub fn disarm(&mut self) {
        self.next_due = None;
    }

    /// Arm or disarm to follow the live flag
    pub fn sync(&mut self, live: bool, now: Instant) {
        if live {
            self.arm(now);
        } else {
            self.disarm();
        }
    }

    pub fn due(&self, now: Instant) -> bool {
        self.next_due.is_some_and(|due| now >= due)
    }

    /// Run one tick if the deadline has passed. Returns true if state changed.
    pub fn poll<R: Rng + ?Sized>(
        &mut self,
        now: Instant,
        state: &mut AppState,
        rng: &mut R,
    ) -> bool {
        if !state.live {
            self.disarm();
            return false;
        }
        if !self.due(now) {
            return false;
        }
        tick(state, rng);
        // Re-armed from `now`: a late poll fires exactly one tick
        self.next_due = Some(now + self.interval);
        true
    }
}

/// Perturb every metric and regenerate the audio bars.
pub fn tick<R: Rng + ?Sized>(state: &mut AppState, rng: &mut R) {
    state.metrics.perturb_all(rng);
    state.audio.regenerate(rng);
    state.ticks = state.ticks.wrapping_add(1);
}
