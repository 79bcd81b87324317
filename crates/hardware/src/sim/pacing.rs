//! Cycle pacing.
//!
//! Optional wall-clock throttling between cycles so a run can be followed by
//! eye. Pacing never changes execution order or results. It is injected into
//! the `Simulator`, and tests run with `Unpaced`.

use std::fmt;
use std::thread;
use std::time::{Duration, Instant};

use crate::config::Config;

/// Called once after every executed cycle.
pub trait Pacer: fmt::Debug {
    /// Blocks as long as needed to respect the pacing policy.
    fn pace(&mut self);
}

/// Full speed, no delay.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unpaced;

impl Pacer for Unpaced {
    #[inline]
    fn pace(&mut self) {}
}

/// Sleeps so that cycles are at least `1 / hz` seconds apart.
#[derive(Clone, Debug)]
pub struct FixedRate {
    period: Duration,
    last: Option<Instant>,
}

impl FixedRate {
    /// Creates a pacer for `hz` cycles per second; zero is treated as one.
    pub fn new(hz: u32) -> Self {
        Self {
            period: Duration::from_secs(1) / hz.max(1),
            last: None,
        }
    }

    /// Minimum time between two cycles.
    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Pacer for FixedRate {
    fn pace(&mut self) {
        if let Some(last) = self.last {
            let elapsed = last.elapsed();
            if elapsed < self.period {
                thread::sleep(self.period - elapsed);
            }
        }
        self.last = Some(Instant::now());
    }
}

/// Builds the pacer selected by `general.clock_hz`.
pub fn from_config(config: &Config) -> Box<dyn Pacer> {
    match config.general.clock_hz {
        Some(hz) if hz > 0 => Box::new(FixedRate::new(hz)),
        _ => Box::new(Unpaced),
    }
}
