// Library surface for the binary, headless integration tests and reuse.
pub mod app;
pub mod app_dirs;
pub mod celebration;
pub mod config;
pub mod difficulty;
pub mod error;
pub mod metrics;
pub mod quotes;
pub mod runtime;
pub mod scores;
pub mod session;
pub mod storage;
pub mod timer;
pub mod ui;

/// Redraw cadence; the session clock still counts whole seconds.
pub const TICK_RATE_MS: u64 = 100;
