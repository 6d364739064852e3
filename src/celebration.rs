use rand::seq::SliceRandom;
use std::f64::consts::PI;
use std::time::Duration;

const BOUNCE_DURATION: Duration = Duration::from_millis(450);
const LIFT_ROWS: f64 = 1.0;

const BANNERS: [&str; 4] = ["NEW BEST!", "PERSONAL BEST!", "RECORD!", "FASTEST YET!"];

/// Short hop of the results card played when a best score is beaten
#[derive(Debug, Clone)]
pub struct Bounce {
    pub is_active: bool,
    pub banner: &'static str,
    elapsed: Duration,
}

impl Default for Bounce {
    fn default() -> Self {
        Self::new()
    }
}

impl Bounce {
    pub fn new() -> Self {
        Self {
            is_active: false,
            banner: BANNERS[0],
            elapsed: Duration::ZERO,
        }
    }

    pub fn start(&mut self) {
        let mut rng = rand::thread_rng();
        self.banner = BANNERS.choose(&mut rng).copied().unwrap_or(BANNERS[0]);
        self.elapsed = Duration::ZERO;
        self.is_active = true;
    }

    pub fn stop(&mut self) {
        self.is_active = false;
        self.elapsed = Duration::ZERO;
    }

    pub fn update(&mut self, dt: Duration) {
        if !self.is_active {
            return;
        }
        self.elapsed += dt;
        if self.elapsed >= BOUNCE_DURATION {
            self.stop();
        }
    }

    /// Rows the card is lifted by right now.
    pub fn lift(&self) -> u16 {
        if !self.is_active {
            return 0;
        }
        let p = self.elapsed.as_secs_f64() / BOUNCE_DURATION.as_secs_f64();
        ((PI * p).sin() * LIFT_ROWS).round().max(0.0) as u16
    }
}
