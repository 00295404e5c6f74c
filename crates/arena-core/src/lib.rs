//! Core record types for the arena trading monitor.
//!
//! This crate provides the shapes the upstream data layer delivers as JSON:
//! - `TradeRecord`, `PositionRecord`: closed trades and open positions per model
//! - `AccountTotal`, `ModelAccount`: account value series and per-model account cards
//! - `TradeSide`, `RiskLevel`: enums tolerant of unknown upstream values
//! - `MonitorFeed`: one exchange's records bundled together
//! - `EpochTime`: second/millisecond epoch timestamps

pub mod account;
pub mod error;
pub mod feed;
pub mod time;
pub mod trade;

pub use account::{AccountTotal, ModelAccount, RiskLevel};
pub use error::{CoreError, Result};
pub use feed::MonitorFeed;
pub use time::EpochTime;
pub use trade::{PositionRecord, TradeRecord, TradeSide};
