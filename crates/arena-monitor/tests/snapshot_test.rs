//! End-to-end snapshot tests.
//!
//! Drive `Application` with an exported feed and check what the dashboard
//! would render.

mod common;

use arena_dashboard::PnlTone;
use arena_monitor::{AppError, SnapshotQuery};
use rust_decimal_macros::dec;

fn query(model: Option<&str>) -> SnapshotQuery {
    SnapshotQuery {
        model: model.map(str::to_string),
        ..Default::default()
    }
}

#[test]
fn test_trade_feed_newest_first() {
    let app = common::app();
    let snapshot = app.snapshot_json(common::FEED, &query(None)).unwrap();

    let ids: Vec<&str> = snapshot.trades.iter().map(|t| t.trade_id.as_str()).collect();
    assert_eq!(ids, vec!["t-new", "t-open", "t-old", "t-unknown"]);
    assert_eq!(snapshot.exchange_id.as_deref(), Some("binance"));
    assert!(snapshot.model_filter.is_none());

    let newest = &snapshot.trades[0];
    assert_eq!(newest.model.id, "Claude Sonnet");
    assert_eq!(newest.model.display_name, "Claude Sonnet 4.5");
    assert_eq!(newest.model.color.as_str(), "#ff6b35");
    assert_eq!(newest.symbol, "ETH");
    assert_eq!(newest.entry_notional, Some(dec!(6000)));
    assert_eq!(newest.exit_notional, Some(dec!(5900)));
    assert_eq!(newest.hold_display, "2h 46m");
    assert_eq!(newest.realized_net_pnl_display, "$100.00");

    let open = &snapshot.trades[1];
    assert_eq!(open.entry_price_display, "$95.5000");
    assert_eq!(open.exit_price_display, "--");
    assert_eq!(open.pnl_tone, PnlTone::Unknown);

    let unknown = &snapshot.trades[3];
    assert_eq!(unknown.model.display_name, "mystery-bot");
    assert_eq!(unknown.model.color.as_str(), "#a1a1aa");
}

#[test]
fn test_model_filter_is_case_insensitive_on_raw_id() {
    let app = common::app();
    let snapshot = app.snapshot_json(common::FEED, &query(Some("gpt-5"))).unwrap();

    let ids: Vec<&str> = snapshot.trades.iter().map(|t| t.trade_id.as_str()).collect();
    assert_eq!(ids, vec!["t-open", "t-old"]);
    assert_eq!(snapshot.model_filter.as_deref(), Some("gpt-5"));

    // Positions follow the same model filter.
    assert_eq!(snapshot.positions.len(), 1);
    assert_eq!(snapshot.positions[0].symbol, "BTC");
    assert_eq!(snapshot.positions[0].tone, PnlTone::Negative);
}

#[test]
fn test_all_filter_keeps_everything() {
    let app = common::app();
    let snapshot = app.snapshot_json(common::FEED, &query(Some("ALL"))).unwrap();
    assert_eq!(snapshot.trades.len(), 4);
    assert_eq!(snapshot.positions.len(), 2);
}

#[test]
fn test_model_options_labeled() {
    let app = common::app();
    let snapshot = app.snapshot_json(common::FEED, &query(None)).unwrap();

    let values: Vec<&str> = snapshot.model_options.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(values, vec!["Claude Sonnet", "GPT-5", "gpt-5", "mystery-bot"]);

    let labels: Vec<&str> = snapshot.model_options.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Claude Sonnet 4.5", "GPT\u{2011}5", "GPT\u{2011}5", "mystery-bot"]
    );
}

#[test]
fn test_ticker_and_leaderboard_use_latest_totals() {
    let app = common::app();
    let snapshot = app.snapshot_json(common::FEED, &query(None)).unwrap();

    let highest = snapshot.ticker.highest.as_ref().unwrap();
    let lowest = snapshot.ticker.lowest.as_ref().unwrap();
    assert_eq!(highest.model.id, "gpt-5");
    assert_eq!(highest.account_value, dec!(10900));
    assert_eq!(highest.return_display, "+9.00%");
    assert_eq!(lowest.model.id, "grok-4");
    assert_eq!(lowest.return_display, "-2.00%");
    assert_eq!(lowest.tone, PnlTone::Negative);

    let board: Vec<(usize, &str)> = snapshot
        .leaderboard
        .iter()
        .map(|r| (r.rank, r.model.display_name.as_str()))
        .collect();
    assert_eq!(
        board,
        vec![(1, "GPT\u{2011}5"), (2, "Qwen3 Max"), (3, "Grok 4")]
    );
    assert_eq!(snapshot.leaderboard[1].model.id, "qwen");
}

#[test]
fn test_account_cards() {
    let app = common::app();
    let snapshot = app.snapshot_json(common::FEED, &query(None)).unwrap();

    let card = &snapshot.accounts[0];
    assert_eq!(card.model.display_name, "DeepSeek v3.1");
    assert_eq!(card.risk_label, "Medium risk");
    assert_eq!(card.equity_display, "$10,250.00");
    assert_eq!(card.realized_pnl_display, "+$300.00");
    assert_eq!(card.unrealized_tone, PnlTone::Negative);
    assert_eq!(card.return_display, "+2.50%");
    assert!((card.win_rate_pct - 60.0).abs() < 1e-9);
}

#[test]
fn test_trade_limit_applies_before_filter() {
    let app = common::app_with("[dashboard]\ntrade_limit = 2\n");
    let snapshot = app.snapshot_json(common::FEED, &query(Some("GPT-5"))).unwrap();

    let ids: Vec<&str> = snapshot.trades.iter().map(|t| t.trade_id.as_str()).collect();
    assert_eq!(ids, vec!["t-open"]);
}

#[test]
fn test_registry_overlay_reaches_views() {
    let app = common::app_with(
        r##"
        [[registry.models]]
        id = "mystery-bot"
        display_name = "Mystery Bot"
        color = "#123456"
        "##,
    );
    let snapshot = app.snapshot_json(common::FEED, &query(None)).unwrap();

    let option = snapshot
        .model_options
        .iter()
        .find(|o| o.value == "mystery-bot")
        .unwrap();
    assert_eq!(option.label, "Mystery Bot");
    assert_eq!(option.color, "#123456");
}

#[test]
fn test_snapshot_file() {
    let path = std::env::temp_dir().join(format!("arena-feed-{}.json", std::process::id()));
    std::fs::write(&path, common::FEED).unwrap();

    let app = common::app();
    let snapshot = app.snapshot_file(&path, &query(None)).unwrap();
    assert_eq!(snapshot.trades.len(), 4);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_missing_feed_file() {
    let app = common::app();
    let err = app
        .snapshot_file("does/not/exist/feed.json", &query(None))
        .unwrap_err();
    assert!(matches!(err, AppError::Io(_)));
}

#[test]
fn test_snapshot_serializes() {
    let app = common::app();
    let snapshot = app.snapshot_json(common::FEED, &query(None)).unwrap();
    let json = serde_json::to_value(&snapshot).unwrap();

    assert_eq!(json["trades"][0]["model"]["display_name"], "Claude Sonnet 4.5");
    assert_eq!(json["trades"][0]["side"], "short");
    assert_eq!(json["accounts"][0]["risk_level"], "MEDIUM");
}
