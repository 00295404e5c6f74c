//! Bundle of upstream records for one exchange.

use crate::account::{AccountTotal, ModelAccount};
use crate::error::Result;
use crate::trade::{PositionRecord, TradeRecord};
use serde::{Deserialize, Serialize};

/// Everything the dashboard needs for one exchange, as fetched upstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorFeed {
    /// Exchange the records belong to (e.g. "binance", "ctp").
    pub exchange_id: Option<String>,
    pub trades: Vec<TradeRecord>,
    pub positions: Vec<PositionRecord>,
    pub account_totals: Vec<AccountTotal>,
    pub accounts: Vec<ModelAccount>,
}

impl MonitorFeed {
    /// Parse a feed from JSON.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Distinct, non-empty model ids seen anywhere in the feed, sorted.
    pub fn model_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .trades
            .iter()
            .filter_map(|t| t.model_id.clone())
            .chain(self.positions.iter().filter_map(|p| p.model_id.clone()))
            .chain(self.account_totals.iter().map(|a| a.model_id.clone()))
            .chain(self.accounts.iter().map(|a| a.model_id.clone()))
            .filter(|id| !id.is_empty())
            .collect();
        ids.sort();
        ids.dedup();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object() {
        let feed = MonitorFeed::from_json("{}").unwrap();
        assert!(feed.trades.is_empty());
        assert!(feed.exchange_id.is_none());
    }

    #[test]
    fn test_trade_without_id_keeps_feed() {
        let feed = MonitorFeed::from_json(r#"{"trades": [{"model_id": "gpt-5"}, {"id": "t2"}]}"#)
            .unwrap();
        assert_eq!(feed.trades.len(), 2);
        assert!(feed.trades[0].id.is_empty());
        assert_eq!(feed.trades[0].model_id.as_deref(), Some("gpt-5"));
    }

    #[test]
    fn test_invalid_json() {
        assert!(MonitorFeed::from_json("[1, 2").is_err());
    }

    #[test]
    fn test_model_ids_distinct_sorted() {
        let raw = r#"{
            "trades": [{"id": "a", "model_id": "grok-4"}, {"id": "b", "model_id": ""}],
            "positions": [{"model_id": "gpt-5"}],
            "account_totals": [{"model_id": "grok-4"}],
            "accounts": [{"model_id": "claude-sonnet-4-5"}]
        }"#;
        let feed = MonitorFeed::from_json(raw).unwrap();
        assert_eq!(
            feed.model_ids(),
            vec!["claude-sonnet-4-5", "gpt-5", "grok-4"]
        );
    }
}
