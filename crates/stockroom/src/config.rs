//! Runtime settings for a [`StockroomSystem`](crate::lifecycle::StockroomSystem).
//!
//! There are no config files. `Default` is what tests use (no latency), [`StockroomConfig::demo`]
//! is what the binary uses.

use crate::views::ReportConfig;
use crate::workflow::FulfillmentPolicy;
use stockroom_framework::LatencyBand;

#[derive(Debug, Clone, PartialEq)]
pub struct StockroomConfig {
    /// Channel capacity of each actor.
    pub buffer_size: usize,
    /// Delay applied to every request inside each actor.
    pub latency: LatencyBand,
    pub policy: FulfillmentPolicy,
    pub report: ReportConfig,
}

impl Default for StockroomConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            latency: LatencyBand::none(),
            policy: FulfillmentPolicy::default(),
            report: ReportConfig::default(),
        }
    }
}

impl StockroomConfig {
    /// 200 to 400 ms per request, like a slow backend.
    pub fn demo() -> Self {
        Self {
            latency: LatencyBand::from_millis(200, 400),
            ..Self::default()
        }
    }

    pub fn with_policy(mut self, policy: FulfillmentPolicy) -> Self {
        self.policy = policy;
        self
    }
}
