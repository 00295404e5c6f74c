//! Dashboard configuration.

use serde::{Deserialize, Serialize};

/// Dashboard view configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Number of most recent trades kept in the feed.
    #[serde(default = "default_trade_limit")]
    pub trade_limit: usize,
    /// Maximum leaderboard rows (0 = all).
    #[serde(default)]
    pub leaderboard_limit: usize,
}

fn default_trade_limit() -> usize {
    100
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            trade_limit: default_trade_limit(),
            leaderboard_limit: 0,
        }
    }
}

impl DashboardConfig {
    /// Leaderboard row cap, if any.
    pub fn leaderboard_cap(&self) -> Option<usize> {
        (self.leaderboard_limit > 0).then_some(self.leaderboard_limit)
    }
}
