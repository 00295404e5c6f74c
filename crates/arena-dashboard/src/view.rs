//! Dashboard view assembly.
//!
//! `DashboardView` borrows the model registry and turns upstream records into
//! display rows. It holds no state of its own; the same view can serve any
//! number of exchanges.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::debug;

use arena_core::{
    AccountTotal, EpochTime, ModelAccount, MonitorFeed, PositionRecord, TradeRecord,
};
use arena_registry::ModelRegistry;

use crate::config::DashboardConfig;
use crate::filter::{ModelFilter, PositionFilter};
use crate::format::{
    fmt_fraction_pct, fmt_hold, fmt_price, fmt_signed_pct, fmt_time, fmt_usd, MISSING,
};
use crate::types::{
    AccountCard, DashboardSnapshot, LeaderboardRow, ModelOption, PnlTone, PositionView,
    TickerEntry, TickerExtremes, TradeView,
};

/// Builds dashboard rows from upstream records.
#[derive(Debug, Clone)]
pub struct DashboardView<'r> {
    registry: &'r ModelRegistry,
    config: DashboardConfig,
}

impl<'r> DashboardView<'r> {
    pub fn new(registry: &'r ModelRegistry, config: DashboardConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Collect a full snapshot at the current time.
    pub fn collect_snapshot(&self, feed: &MonitorFeed, filter: &ModelFilter) -> DashboardSnapshot {
        self.collect_snapshot_at(feed, filter, &PositionFilter::default(), Utc::now())
    }

    /// Collect a full snapshot as of `now`.
    ///
    /// The model filter applies to the trade feed; positions use their own
    /// filter.
    pub fn collect_snapshot_at(
        &self,
        feed: &MonitorFeed,
        filter: &ModelFilter,
        position_filter: &PositionFilter,
        now: DateTime<Utc>,
    ) -> DashboardSnapshot {
        let snapshot = DashboardSnapshot {
            timestamp_ms: now.timestamp_millis(),
            exchange_id: feed.exchange_id.clone(),
            model_filter: filter.selected().map(str::to_string),
            ticker: self.ticker_extremes(&feed.account_totals),
            model_options: self.model_options(&feed.trades),
            trades: self.recent_trades(&feed.trades, filter, now),
            positions: self.positions(&feed.positions, position_filter),
            leaderboard: self.leaderboard(&feed.account_totals),
            accounts: self.account_cards(&feed.accounts),
        };

        debug!(
            trades = snapshot.trades.len(),
            positions = snapshot.positions.len(),
            leaderboard = snapshot.leaderboard.len(),
            accounts = snapshot.accounts.len(),
            "Dashboard snapshot collected"
        );

        snapshot
    }

    /// The trade feed: newest `trade_limit` trades, then the model filter.
    ///
    /// The limit is applied before filtering, so a filtered feed shows the
    /// selected model's trades among the latest `trade_limit` overall.
    pub fn recent_trades(
        &self,
        trades: &[TradeRecord],
        filter: &ModelFilter,
        now: DateTime<Utc>,
    ) -> Vec<TradeView> {
        let mut ordered: Vec<&TradeRecord> = trades.iter().collect();
        ordered.sort_by_key(|t| std::cmp::Reverse(t.sort_time_ms()));

        ordered
            .into_iter()
            .take(self.config.trade_limit)
            .filter(|t| filter.matches(t.model_id_or_empty()))
            .map(|t| self.trade_view(t, now))
            .collect()
    }

    fn trade_view(&self, trade: &TradeRecord, now: DateTime<Utc>) -> TradeView {
        let abs_qty = trade.quantity.unwrap_or(Decimal::ZERO).abs();
        let entry_notional = abs_qty.checked_mul(trade.entry_price.unwrap_or(Decimal::ZERO));
        let exit_notional = abs_qty.checked_mul(trade.exit_price.unwrap_or(Decimal::ZERO));

        TradeView {
            trade_id: trade.id.clone(),
            model: self.registry.model_meta(trade.model_id_or_empty()),
            symbol: trade.symbol.as_deref().unwrap_or("").to_uppercase(),
            side: trade.side,
            quantity: trade.quantity,
            entry_price: trade.entry_price,
            exit_price: trade.exit_price,
            entry_price_display: fmt_price(trade.entry_price),
            exit_price_display: fmt_price(trade.exit_price),
            entry_notional,
            exit_notional,
            hold_display: fmt_hold(trade.entry_time, trade.exit_time, now),
            time_ms: trade.sort_time_ms(),
            time_display: fmt_time(
                trade
                    .exit_time
                    .filter(EpochTime::is_set)
                    .or(trade.entry_time),
            ),
            realized_net_pnl: trade.realized_net_pnl,
            realized_net_pnl_display: trade
                .realized_net_pnl
                .map(fmt_usd)
                .unwrap_or_else(|| MISSING.to_string()),
            pnl_tone: PnlTone::of(trade.realized_net_pnl),
        }
    }

    /// Distinct model ids across all trades, sorted, labeled by display name.
    pub fn model_options(&self, trades: &[TradeRecord]) -> Vec<ModelOption> {
        let mut ids: Vec<&str> = trades
            .iter()
            .map(TradeRecord::model_id_or_empty)
            .filter(|id| !id.is_empty())
            .collect();
        ids.sort_unstable();
        ids.dedup();

        ids.into_iter()
            .map(|id| {
                let meta = self.registry.model_meta(id);
                ModelOption {
                    value: meta.id,
                    label: meta.display_name,
                    color: meta.color.to_string(),
                }
            })
            .collect()
    }

    /// Highest and lowest account value among the latest totals.
    ///
    /// Missing values count as zero; on ties the first row wins.
    pub fn ticker_extremes(&self, totals: &[AccountTotal]) -> TickerExtremes {
        let latest = latest_per_model(totals);
        let Some(first) = latest.first() else {
            return TickerExtremes::default();
        };

        let mut highest = *first;
        let mut lowest = *first;
        for row in &latest {
            if row.value_or_zero() > highest.value_or_zero() {
                highest = *row;
            }
            if row.value_or_zero() < lowest.value_or_zero() {
                lowest = *row;
            }
        }

        TickerExtremes {
            highest: Some(self.ticker_entry(highest)),
            lowest: Some(self.ticker_entry(lowest)),
        }
    }

    fn ticker_entry(&self, total: &AccountTotal) -> TickerEntry {
        let return_pct = total.return_pct.unwrap_or(Decimal::ZERO);
        TickerEntry {
            model: self.registry.model_meta(&total.model_id),
            account_value: total.value_or_zero(),
            account_value_display: fmt_usd(total.value_or_zero()),
            return_pct,
            return_display: fmt_fraction_pct(return_pct),
            tone: PnlTone::of_return(return_pct),
        }
    }

    /// Models ranked by latest account value, highest first.
    pub fn leaderboard(&self, totals: &[AccountTotal]) -> Vec<LeaderboardRow> {
        let mut latest = latest_per_model(totals);
        // stable: equal values keep upstream order
        latest.sort_by(|a, b| b.value_or_zero().cmp(&a.value_or_zero()));

        let cap = self.config.leaderboard_cap().unwrap_or(latest.len());

        latest
            .into_iter()
            .take(cap)
            .enumerate()
            .map(|(i, total)| LeaderboardRow {
                rank: i + 1,
                model: self.registry.model_meta(&total.model_id),
                account_value: total.value_or_zero(),
                account_value_display: fmt_usd(total.value_or_zero()),
                return_pct: total.return_pct,
                return_display: total
                    .return_pct
                    .map(fmt_fraction_pct)
                    .unwrap_or_else(|| MISSING.to_string()),
                tone: PnlTone::of(total.return_pct),
            })
            .collect()
    }

    /// Account cards in upstream order.
    pub fn account_cards(&self, accounts: &[ModelAccount]) -> Vec<AccountCard> {
        accounts
            .iter()
            .map(|a| AccountCard {
                model: self.registry.model_meta(&a.model_id),
                exchange_id: a.exchange_id.clone(),
                strategy: a.strategy.clone(),
                risk_level: a.risk_level,
                risk_label: a.risk_level.label().to_string(),
                equity: a.dollar_equity,
                equity_display: fmt_usd(a.dollar_equity),
                realized_pnl: a.realized_pnl,
                realized_pnl_display: signed_usd(a.realized_pnl),
                realized_tone: PnlTone::of_return(a.realized_pnl),
                unrealized_pnl: a.unrealized_pnl,
                unrealized_pnl_display: signed_usd(a.unrealized_pnl),
                unrealized_tone: PnlTone::of_return(a.unrealized_pnl),
                return_pct: a.return_pct,
                return_display: fmt_signed_pct(a.return_pct),
                return_tone: PnlTone::of_return(a.return_pct),
                sharpe_ratio: a.sharpe_ratio,
                win_rate_pct: (a.win_rate * 1000.0).round() / 10.0,
                total_trades: a.total_trades,
                winning_trades: a.winning_trades,
                losing_trades: a.losing_trades,
            })
            .collect()
    }

    /// Open positions passing `filter`, in upstream order.
    pub fn positions(
        &self,
        positions: &[PositionRecord],
        filter: &PositionFilter,
    ) -> Vec<PositionView> {
        positions
            .iter()
            .filter(|p| filter.matches(p))
            .map(|p| PositionView {
                model: self
                    .registry
                    .model_meta(p.model_id.as_deref().unwrap_or("")),
                symbol: p.symbol.as_deref().unwrap_or("").to_uppercase(),
                side: p.side,
                quantity: p.quantity,
                entry_price_display: fmt_price(p.entry_price),
                current_price_display: fmt_price(p.current_price),
                unrealized_pnl: p.unrealized_pnl,
                unrealized_pnl_display: p
                    .unrealized_pnl
                    .map(fmt_usd)
                    .unwrap_or_else(|| MISSING.to_string()),
                tone: PnlTone::of(p.unrealized_pnl),
            })
            .collect()
    }
}

/// `+$1,234.50` / `-$1,234.50`.
fn signed_usd(amount: Decimal) -> String {
    if amount.is_sign_negative() && !amount.is_zero() {
        fmt_usd(amount)
    } else {
        format!("+{}", fmt_usd(amount))
    }
}

/// Keep the latest row per model id, in first-seen order.
///
/// Rows with a later (or equal/missing) timestamp replace earlier ones, so
/// an upstream series collapses to its last point.
fn latest_per_model(totals: &[AccountTotal]) -> Vec<&AccountTotal> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut latest: Vec<&AccountTotal> = Vec::new();

    for row in totals {
        match index.get(row.model_id.as_str()) {
            Some(&i) => {
                let current = latest[i].timestamp.map(|t| t.as_millis()).unwrap_or(0);
                let candidate = row.timestamp.map(|t| t.as_millis()).unwrap_or(0);
                if candidate >= current {
                    latest[i] = row;
                }
            }
            None => {
                index.insert(row.model_id.as_str(), latest.len());
                latest.push(row);
            }
        }
    }

    latest
}
