//! Multi-athlete race stopwatch.
//!
//! All athletes leave on the same start; each press of the action button
//! records the finish time for the next athlete across the line. The clock
//! keeps running between finishes and stops itself once the roster is full.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Up to five athletes per race.
pub const MAX_ATHLETES: usize = 5;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum RaceStatus {
    Idle,
    Running,
    Finished,
}

#[derive(Debug, Clone)]
pub struct RaceTimer {
    status: RaceStatus,
    started: Option<Instant>,
    /// Elapsed millis per finisher, in finishing order. Monotonically
    /// non-decreasing by construction.
    finishes: Vec<u64>,
    /// Elapsed frozen at the moment the race finished.
    final_elapsed_ms: u64,
}

impl Default for RaceTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl RaceTimer {
    pub fn new() -> Self {
        Self {
            status: RaceStatus::Idle,
            started: None,
            finishes: Vec::new(),
            final_elapsed_ms: 0,
        }
    }

    pub fn status(&self) -> RaceStatus {
        self.status
    }

    pub fn finishes(&self) -> &[u64] {
        &self.finishes
    }

    /// Milliseconds since the start; frozen once the race is finished, 0
    /// while idle.
    pub fn elapsed_ms(&self) -> u64 {
        match self.status {
            RaceStatus::Idle => 0,
            RaceStatus::Running => self
                .started
                .map(|s| s.elapsed().as_millis() as u64)
                .unwrap_or(0),
            RaceStatus::Finished => self.final_elapsed_ms,
        }
    }

    /// Start the race. No-op if already running or finished (reset first).
    pub fn start(&mut self) {
        if self.status != RaceStatus::Idle {
            return;
        }
        self.status = RaceStatus::Running;
        self.started = Some(Instant::now());
        self.finishes.clear();
    }

    /// Record the next athlete crossing the line. Returns their elapsed
    /// millis, or None when the clock isn't running. The fifth finish stops
    /// the race.
    pub fn record_finish(&mut self) -> Option<u64> {
        if self.status != RaceStatus::Running {
            return None;
        }

        let elapsed = self.elapsed_ms();
        self.finishes.push(elapsed);

        if self.finishes.len() >= MAX_ATHLETES {
            self.status = RaceStatus::Finished;
            self.final_elapsed_ms = elapsed;
            self.started = None;
        }

        Some(elapsed)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Display formatting: seconds with millisecond precision ("12.345").
pub fn format_elapsed(ms: u64) -> String {
    format!("{:.3}", ms as f64 / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_timer_records_nothing() {
        let mut timer = RaceTimer::new();
        assert_eq!(timer.elapsed_ms(), 0);
        assert_eq!(timer.record_finish(), None);
        assert!(timer.finishes().is_empty());
    }

    #[test]
    fn finishes_are_monotonic_and_fifth_stops_the_race() {
        let mut timer = RaceTimer::new();
        timer.start();
        assert_eq!(timer.status(), RaceStatus::Running);

        let mut recorded = Vec::new();
        for _ in 0..MAX_ATHLETES {
            recorded.push(timer.record_finish().unwrap());
        }

        assert_eq!(timer.status(), RaceStatus::Finished);
        assert_eq!(timer.finishes().len(), MAX_ATHLETES);
        assert!(recorded.windows(2).all(|w| w[0] <= w[1]));

        // Race over: further presses are no-ops.
        assert_eq!(timer.record_finish(), None);
        assert_eq!(timer.finishes().len(), MAX_ATHLETES);

        // Elapsed is frozen at the final finish.
        assert_eq!(timer.elapsed_ms(), *timer.finishes().last().unwrap());
    }

    #[test]
    fn start_is_idempotent_while_running() {
        let mut timer = RaceTimer::new();
        timer.start();
        timer.record_finish().unwrap();
        timer.start(); // must not wipe the recorded finish
        assert_eq!(timer.finishes().len(), 1);
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut timer = RaceTimer::new();
        timer.start();
        timer.record_finish();
        timer.reset();
        assert_eq!(timer.status(), RaceStatus::Idle);
        assert!(timer.finishes().is_empty());
        assert_eq!(timer.elapsed_ms(), 0);
    }

    #[test]
    fn formats_as_seconds_with_millis() {
        assert_eq!(format_elapsed(0), "0.000");
        assert_eq!(format_elapsed(12345), "12.345");
    }
}
