//! Account records: account-total series and per-model account cards.

use crate::time::EpochTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk level a model runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
    #[default]
    #[serde(other)]
    Unknown,
}

impl RiskLevel {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryLow => "Very low risk",
            Self::Low => "Low risk",
            Self::Medium => "Medium risk",
            Self::High => "High risk",
            Self::VeryHigh => "Very high risk",
            Self::Unknown => "Unknown risk",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VeryLow => write!(f, "VERY_LOW"),
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
            Self::VeryHigh => write!(f, "VERY_HIGH"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// One point of a model's account-value series.
///
/// `return_pct` is a fraction (0.12 = +12%).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountTotal {
    #[serde(default)]
    pub model_id: String,
    #[serde(default)]
    pub account_value: Option<Decimal>,
    #[serde(default)]
    pub return_pct: Option<Decimal>,
    #[serde(default)]
    pub timestamp: Option<EpochTime>,
}

impl AccountTotal {
    /// Account value with missing treated as zero.
    pub fn value_or_zero(&self) -> Decimal {
        self.account_value.unwrap_or(Decimal::ZERO)
    }
}

/// Per-model account summary.
///
/// `return_pct` here is already in percent (12.5 = +12.5%), `win_rate` is a
/// fraction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelAccount {
    pub model_id: String,
    pub model_name: String,
    pub strategy: String,
    pub risk_level: RiskLevel,
    pub exchange_id: String,
    pub timestamp: Option<EpochTime>,
    pub account_value: Decimal,
    pub dollar_equity: Decimal,
    pub equity: Decimal,
    pub realized_pnl: Decimal,
    pub unrealized_pnl: Decimal,
    pub total_unrealized_pnl: Decimal,
    pub return_pct: Decimal,
    pub cum_pnl_pct: Decimal,
    pub sharpe_ratio: f64,
    pub win_rate: f64,
    pub total_trades: u64,
    pub winning_trades: u64,
    pub losing_trades: u64,
}
