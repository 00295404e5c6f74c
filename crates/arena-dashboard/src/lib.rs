//! arena-dashboard - Display-ready views of the trading arena.
//!
//! This crate turns upstream records (trades, open positions, account
//! totals, per-model accounts) into rows a renderer can show directly:
//!
//! - Trade feed, newest first, limited and optionally filtered by model
//! - Model filter options
//! - Ticker with the highest and lowest account value
//! - Leaderboard ranked by latest account value
//! - Account cards and open positions
//!
//! Every row carries a `ResolvedIdentity` from the injected registry, so a
//! model shows the same label and color everywhere.
//!
//! # Data flow
//!
//! ```text
//! ┌──────────────┐   ┌─────────────────┐   ┌────────────────────┐
//! │ MonitorFeed  │──▶│  DashboardView  │──▶│ DashboardSnapshot  │──▶ JSON
//! │ (arena-core) │   │  (&ModelRegistry│   │  (serde)           │
//! └──────────────┘   │   + config)     │   └────────────────────┘
//!                    └─────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use arena_core::MonitorFeed;
//! use arena_dashboard::{DashboardConfig, DashboardView, ModelFilter};
//! use arena_registry::ModelRegistry;
//!
//! let registry = ModelRegistry::builtin();
//! let view = DashboardView::new(&registry, DashboardConfig::default());
//!
//! let feed = MonitorFeed::from_json(r#"{"trades": [{"id": "t1", "model_id": "grok4"}]}"#).unwrap();
//! let snapshot = view.collect_snapshot(&feed, &ModelFilter::all());
//! assert_eq!(snapshot.trades[0].model.display_name, "Grok 4");
//! ```

mod config;
mod filter;
mod format;
mod types;
mod view;

pub use config::DashboardConfig;
pub use filter::{ModelFilter, PositionFilter, SideFilter};
pub use format::{
    fmt_fraction_pct, fmt_hold, fmt_price, fmt_signed_pct, fmt_time, fmt_usd, MISSING,
    MISSING_HOLD,
};
pub use types::{
    AccountCard, DashboardSnapshot, LeaderboardRow, ModelOption, PnlTone, PositionView,
    TickerEntry, TickerExtremes, TradeView,
};
pub use view::DashboardView;
