//! # Simulated Latency
//!
//! The services behind the stockroom dashboard are in-memory, but the UI was built
//! against an asynchronous API that answers after a short delay. [`LatencyBand`] keeps that
//! behavior available without making it part of correctness: every actor waits for a
//! duration drawn from its band before handling a message, and the default band is zero.

use rand::Rng;
use std::time::Duration;

/// Inclusive range of simulated latency applied to each request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyBand {
    min: Duration,
    max: Duration,
}

impl LatencyBand {
    /// No delay at all.
    pub const fn none() -> Self {
        Self {
            min: Duration::ZERO,
            max: Duration::ZERO,
        }
    }

    /// A band between `min` and `max`. The bounds are swapped if given in reverse.
    pub fn new(min: Duration, max: Duration) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// A band expressed in milliseconds.
    pub fn from_millis(min: u64, max: u64) -> Self {
        Self::new(Duration::from_millis(min), Duration::from_millis(max))
    }

    pub fn min(&self) -> Duration {
        self.min
    }

    pub fn max(&self) -> Duration {
        self.max
    }

    pub fn is_zero(&self) -> bool {
        self.max.is_zero()
    }

    /// Draw one delay from the band.
    pub fn sample(&self) -> Duration {
        if self.min == self.max {
            return self.min;
        }
        let min = self.min.as_micros() as u64;
        let max = self.max.as_micros() as u64;
        Duration::from_micros(rand::rng().random_range(min..=max))
    }

    /// Sleep for one sampled delay. Returns immediately for a zero band.
    pub async fn wait(&self) {
        if self.is_zero() {
            return;
        }
        let delay = self.sample();
        tokio::time::sleep(delay).await;
    }
}

impl Default for LatencyBand {
    fn default() -> Self {
        Self::none()
    }
}
