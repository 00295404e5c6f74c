//! Trade and position records.
//!
//! Fields are optional because upstream exchanges (crypto, CTP futures,
//! generic) fill different subsets. A record with missing fields must still
//! deserialize so the dashboard can render what it has.

use crate::time::EpochTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a trade or position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Long,
    Short,
    /// Anything the upstream sends that is not long/short.
    #[default]
    #[serde(other)]
    Unknown,
}

impl TradeSide {
    pub fn is_long(&self) -> bool {
        matches!(self, Self::Long)
    }

    pub fn is_short(&self) -> bool {
        matches!(self, Self::Short)
    }
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Long => write!(f, "long"),
            Self::Short => write!(f, "short"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// A completed (or still open) trade attributed to a model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TradeRecord {
    /// Empty when the upstream omits it.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub model_id: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub side: TradeSide,
    /// Signed quantity (negative for shorts on some exchanges).
    #[serde(default)]
    pub quantity: Option<Decimal>,
    #[serde(default)]
    pub entry_price: Option<Decimal>,
    #[serde(default)]
    pub exit_price: Option<Decimal>,
    #[serde(default)]
    pub entry_time: Option<EpochTime>,
    #[serde(default)]
    pub exit_time: Option<EpochTime>,
    #[serde(default)]
    pub realized_net_pnl: Option<Decimal>,
}

impl TradeRecord {
    /// Time used for ordering the feed: exit time, else entry time.
    ///
    /// Returns milliseconds; 0 when neither is set.
    pub fn sort_time_ms(&self) -> i64 {
        self.exit_time
            .filter(EpochTime::is_set)
            .or(self.entry_time.filter(EpochTime::is_set))
            .map(|t| t.as_millis())
            .unwrap_or(0)
    }

    /// Model id, or empty string when absent.
    pub fn model_id_or_empty(&self) -> &str {
        self.model_id.as_deref().unwrap_or("")
    }
}

/// An open position held by a model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PositionRecord {
    #[serde(default)]
    pub model_id: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub side: TradeSide,
    #[serde(default)]
    pub quantity: Option<Decimal>,
    #[serde(default)]
    pub entry_price: Option<Decimal>,
    #[serde(default)]
    pub current_price: Option<Decimal>,
    #[serde(default)]
    pub unrealized_pnl: Option<Decimal>,
    #[serde(default)]
    pub leverage: Option<Decimal>,
    #[serde(default)]
    pub entry_time: Option<EpochTime>,
}
