//! Dashboard view types.
//!
//! These types are serialized to JSON for whatever renders the dashboard.
//! Every row carries a `ResolvedIdentity` so label and color are the same
//! in every view.

use arena_core::{RiskLevel, TradeSide};
use arena_registry::ResolvedIdentity;
use rust_decimal::Decimal;
use serde::Serialize;

/// Sign of a PnL or return figure, used to pick a display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PnlTone {
    Positive,
    Negative,
    Flat,
    /// Value missing upstream.
    Unknown,
}

impl PnlTone {
    pub fn of(value: Option<Decimal>) -> Self {
        match value {
            None => Self::Unknown,
            Some(v) if v.is_zero() => Self::Flat,
            Some(v) if v.is_sign_positive() => Self::Positive,
            Some(_) => Self::Negative,
        }
    }

    /// Zero counts as positive (used for returns, where 0% renders green).
    pub fn of_return(value: Decimal) -> Self {
        if value.is_sign_negative() && !value.is_zero() {
            Self::Negative
        } else {
            Self::Positive
        }
    }
}

/// One row of the trade feed.
#[derive(Debug, Clone, Serialize)]
pub struct TradeView {
    pub trade_id: String,
    pub model: ResolvedIdentity,
    /// Upper-cased symbol.
    pub symbol: String,
    pub side: TradeSide,
    pub quantity: Option<Decimal>,
    pub entry_price: Option<Decimal>,
    pub exit_price: Option<Decimal>,
    pub entry_price_display: String,
    pub exit_price_display: String,
    /// |quantity| * entry price, `None` if it does not fit a `Decimal`.
    pub entry_notional: Option<Decimal>,
    /// |quantity| * exit price, `None` if it does not fit a `Decimal`.
    pub exit_notional: Option<Decimal>,
    pub hold_display: String,
    /// Exit time, or entry time for open trades (Unix milliseconds, 0 if unknown).
    pub time_ms: i64,
    /// `MM/DD HH:MM` (UTC) of `time_ms`.
    pub time_display: String,
    pub realized_net_pnl: Option<Decimal>,
    pub realized_net_pnl_display: String,
    pub pnl_tone: PnlTone,
}

/// One entry of the model filter dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelOption {
    /// Raw model id (the filter value).
    pub value: String,
    /// Resolved display name.
    pub label: String,
    pub color: String,
}

/// One side of the ticker's highest/lowest display.
#[derive(Debug, Clone, Serialize)]
pub struct TickerEntry {
    pub model: ResolvedIdentity,
    pub account_value: Decimal,
    pub account_value_display: String,
    /// Return as a fraction (0.12 = +12%).
    pub return_pct: Decimal,
    pub return_display: String,
    pub tone: PnlTone,
}

/// Best and worst account in the ticker.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TickerExtremes {
    pub highest: Option<TickerEntry>,
    pub lowest: Option<TickerEntry>,
}

/// Leaderboard row.
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardRow {
    /// 1-based rank.
    pub rank: usize,
    pub model: ResolvedIdentity,
    pub account_value: Decimal,
    pub account_value_display: String,
    pub return_pct: Option<Decimal>,
    pub return_display: String,
    pub tone: PnlTone,
}

/// Per-model account card.
#[derive(Debug, Clone, Serialize)]
pub struct AccountCard {
    pub model: ResolvedIdentity,
    pub exchange_id: String,
    pub strategy: String,
    pub risk_level: RiskLevel,
    pub risk_label: String,
    pub equity: Decimal,
    pub equity_display: String,
    pub realized_pnl: Decimal,
    pub realized_pnl_display: String,
    pub realized_tone: PnlTone,
    pub unrealized_pnl: Decimal,
    pub unrealized_pnl_display: String,
    pub unrealized_tone: PnlTone,
    /// Already in percent.
    pub return_pct: Decimal,
    pub return_display: String,
    pub return_tone: PnlTone,
    pub sharpe_ratio: f64,
    /// Win rate in percent, one decimal.
    pub win_rate_pct: f64,
    pub total_trades: u64,
    pub winning_trades: u64,
    pub losing_trades: u64,
}

/// Open position row.
#[derive(Debug, Clone, Serialize)]
pub struct PositionView {
    pub model: ResolvedIdentity,
    pub symbol: String,
    pub side: TradeSide,
    pub quantity: Option<Decimal>,
    pub entry_price_display: String,
    pub current_price_display: String,
    pub unrealized_pnl: Option<Decimal>,
    pub unrealized_pnl_display: String,
    pub tone: PnlTone,
}

/// Full dashboard snapshot for one exchange.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    /// Timestamp when snapshot was taken (Unix milliseconds).
    pub timestamp_ms: i64,
    pub exchange_id: Option<String>,
    /// Active model filter (lower-cased id), `None` = all models.
    pub model_filter: Option<String>,
    pub ticker: TickerExtremes,
    pub model_options: Vec<ModelOption>,
    /// Most recent trades, newest first.
    pub trades: Vec<TradeView>,
    pub positions: Vec<PositionView>,
    pub leaderboard: Vec<LeaderboardRow>,
    pub accounts: Vec<AccountCard>,
}
