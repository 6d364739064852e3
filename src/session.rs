use std::time::Duration;

use crate::metrics::{self, CharState, Metrics};
use crate::timer::Timer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Quote loaded, nothing typed yet
    Idle,
    Active,
    /// Typed text matched the quote exactly
    Complete,
}

/// Final numbers handed out when a session completes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub metrics: Metrics,
    pub elapsed_secs: u64,
}

/// One attempt at typing one quote.
#[derive(Debug, Clone)]
pub struct Session {
    target: String,
    typed: String,
    timer: Timer,
    metrics: Metrics,
    phase: Phase,
}

impl Session {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            typed: String::new(),
            timer: Timer::new(),
            metrics: Metrics::default(),
            phase: Phase::Idle,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn typed(&self) -> &str {
        &self.typed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.timer.elapsed_secs()
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    pub fn char_states(&self) -> Vec<CharState> {
        metrics::classify(&self.typed, &self.target)
    }

    pub fn overflow(&self) -> usize {
        metrics::overflow(&self.typed, &self.target)
    }

    /// Replace the whole typed text, as a text field would report it.
    pub fn set_input(&mut self, typed: &str) -> Option<Completion> {
        if self.is_complete() {
            return None;
        }
        typed.clone_into(&mut self.typed);
        self.input_changed()
    }

    pub fn write(&mut self, c: char) -> Option<Completion> {
        if self.is_complete() {
            return None;
        }
        self.typed.push(c);
        self.input_changed()
    }

    pub fn backspace(&mut self) -> Option<Completion> {
        if self.is_complete() || self.typed.pop().is_none() {
            return None;
        }
        self.input_changed()
    }

    /// One whole-second tick.
    pub fn tick(&mut self) {
        self.timer.tick();
    }

    /// Wall-clock time from the runtime; returns whole seconds that elapsed.
    pub fn on_tick(&mut self, dt: Duration) -> u64 {
        self.timer.advance(dt)
    }

    /// Back to Idle on the same quote.
    pub fn reset(&mut self) {
        self.timer.reset();
        self.typed.clear();
        self.metrics = Metrics::default();
        self.phase = Phase::Idle;
    }

    fn input_changed(&mut self) -> Option<Completion> {
        if self.phase == Phase::Idle {
            self.phase = Phase::Active;
            self.timer.start();
        }

        self.metrics = Metrics::compute(&self.typed, &self.target, self.timer.elapsed_secs());

        if self.typed != self.target {
            return None;
        }

        self.timer.stop();
        self.phase = Phase::Complete;
        Some(Completion {
            metrics: self.metrics,
            elapsed_secs: self.timer.elapsed_secs(),
        })
    }
}
