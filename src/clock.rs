use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Stopwatch {
    snapshot: Duration,
    start_instant: Option<Instant>,
}

impl Stopwatch {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            snapshot: Duration::ZERO,
            start_instant: None,
        }
    }

    pub fn start(&mut self) {
        assert!(self.start_instant.is_none(), "Stopwatch already running");
        self.start_instant = Some(Instant::now());
    }

    pub fn stop(&mut self) {
        self.snapshot += self.start_instant.expect("Stopwatch not running").elapsed();
        self.start_instant = None;
    }

    pub fn is_running(&self) -> bool {
        self.start_instant.is_some()
    }

    pub fn get(&self) -> Duration {
        match self.start_instant {
            Some(start_instant) => self.snapshot + start_instant.elapsed(),
            None => self.snapshot,
        }
    }
}

/// Per-side game clock: a fixed budget that turns are charged against.
#[derive(Debug)]
pub struct Timer {
    stopwatch: Stopwatch,
    turn_start: Option<Instant>,
    budget: Duration,
}

impl Timer {
    pub fn new(budget: Duration) -> Self {
        Self {
            stopwatch: Stopwatch::new(),
            turn_start: None,
            budget,
        }
    }

    pub fn start_turn(&mut self) {
        self.stopwatch.start();
        self.turn_start = Some(Instant::now());
    }

    pub fn end_turn(&mut self) {
        self.stopwatch.stop();
        self.turn_start = None;
    }

    pub fn is_running(&self) -> bool {
        self.stopwatch.is_running()
    }

    /// Zero when no turn is in progress.
    pub fn elapsed_this_turn(&self) -> Duration {
        self.turn_start
            .map_or(Duration::ZERO, |turn_start| turn_start.elapsed())
    }

    /// Remaining budget, never below zero.
    pub fn remaining(&self) -> Duration {
        self.budget.saturating_sub(self.stopwatch.get())
    }
}
