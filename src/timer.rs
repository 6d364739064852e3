use std::time::Duration;

const ONE_SECOND: Duration = Duration::from_secs(1);

/// One-second-granularity session clock.
///
/// The runtime ticks faster than once a second to keep the screen responsive;
/// [`Timer::advance`] banks those sub-second steps and turns every whole second
/// into a [`Timer::tick`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timer {
    elapsed_secs: u64,
    running: bool,
    carry: Duration,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns false when the timer was already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.carry = Duration::ZERO;
        true
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.carry = Duration::ZERO;
    }

    pub fn reset(&mut self) {
        self.stop();
        self.elapsed_secs = 0;
    }

    /// A single one-second tick.
    pub fn tick(&mut self) {
        if self.running {
            self.elapsed_secs += 1;
        }
    }

    /// Feed wall-clock time; returns how many whole-second ticks fired.
    pub fn advance(&mut self, dt: Duration) -> u64 {
        if !self.running {
            return 0;
        }

        self.carry += dt;
        let mut fired = 0;
        while self.carry >= ONE_SECOND {
            self.carry -= ONE_SECOND;
            self.tick();
            fired += 1;
        }
        fired
    }
}
