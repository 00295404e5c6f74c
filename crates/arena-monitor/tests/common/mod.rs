//! Shared fixtures for arena-monitor integration tests.

use arena_monitor::{AppConfig, Application};

/// A feed as exported upstream: mixed id spellings, second and millisecond
/// timestamps, missing fields.
pub const FEED: &str = r##"{
    "exchange_id": "binance",
    "trades": [
        {
            "id": "t-old",
            "model_id": "gpt-5",
            "symbol": "btc",
            "side": "long",
            "quantity": "0.5",
            "entry_price": "60000",
            "exit_price": "61000",
            "entry_time": 1706390000,
            "exit_time": 1706400000,
            "realized_net_pnl": "500"
        },
        {
            "id": "t-new",
            "model_id": "Claude Sonnet",
            "symbol": "eth",
            "side": "short",
            "quantity": "-2",
            "entry_price": "3000",
            "exit_price": "2950",
            "entry_time": 1706440000000,
            "exit_time": 1706450000000,
            "realized_net_pnl": "100"
        },
        {
            "id": "t-open",
            "model_id": "GPT-5",
            "symbol": "sol",
            "side": "long",
            "quantity": "10",
            "entry_price": "95.5",
            "entry_time": 1706420000
        },
        {
            "id": "t-unknown",
            "model_id": "mystery-bot",
            "side": "sideways"
        }
    ],
    "positions": [
        {
            "model_id": "grok-4",
            "symbol": "eth",
            "side": "short",
            "quantity": "-1",
            "entry_price": "3100",
            "current_price": "3050",
            "unrealized_pnl": "50"
        },
        {
            "model_id": "gpt-5",
            "symbol": "btc",
            "side": "long",
            "quantity": "0.1",
            "unrealized_pnl": "-20"
        }
    ],
    "account_totals": [
        {"model_id": "gpt-5", "account_value": "10400", "return_pct": "0.04", "timestamp": 1706400000},
        {"model_id": "grok-4", "account_value": "9800", "return_pct": "-0.02", "timestamp": 1706400000},
        {"model_id": "gpt-5", "account_value": "10900", "return_pct": "0.09", "timestamp": 1706450000},
        {"model_id": "qwen", "account_value": "10100", "return_pct": "0.01", "timestamp": 1706450000}
    ],
    "accounts": [
        {
            "model_id": "deepseek",
            "strategy": "momentum",
            "risk_level": "MEDIUM",
            "dollar_equity": "10250",
            "realized_pnl": "300",
            "unrealized_pnl": "-50",
            "return_pct": "2.5",
            "sharpe_ratio": 1.4,
            "win_rate": 0.6,
            "total_trades": 10,
            "winning_trades": 6,
            "losing_trades": 4
        }
    ]
}"##;

pub fn app() -> Application {
    Application::new(AppConfig::default()).unwrap()
}

pub fn app_with(toml: &str) -> Application {
    Application::new(AppConfig::from_toml(toml).unwrap()).unwrap()
}
