//! End-to-end tests: captured ANX JSON payloads through the public API.

use exchange_adapters::domain::account::wire::AnxAccountInfo;
use exchange_adapters::domain::order::wire::AnxDepth;
use exchange_adapters::domain::trade::wire::AnxTradesResponse;
use exchange_adapters::domain::user_trade::wire::AnxTradeResultsResponse;
use exchange_adapters::domain::{account, order, trade, user_trade};
use exchange_adapters::prelude::*;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

const TRADES_JSON: &str = r#"{
    "data": [
        {"tid": "1393281234005", "amount": "0.25000000", "price": "650.10000",
         "item": "BTC", "price_currency": "USD", "trade_type": "bid", "primary": "Y"},
        {"tid": "1393281234003", "amount": "1.00000000", "price": "650.00000",
         "item": "BTC", "price_currency": "USD", "trade_type": "ask", "primary": "Y"},
        {"tid": "1393281234009", "amount": "0.10000000", "price": "651.00000",
         "item": "BTC", "price_currency": "USD", "trade_type": "bid", "primary": "Y"}
    ]
}"#;

const USER_TRADES_JSON: &str = r#"{
    "data": [
        {"tradeId": "a1", "orderId": "o1", "timestamp": 1393411075000,
         "tradedCurrencyFillAmount": "2.00000000", "settlementCurrencyFillAmount": "1300.25",
         "ccyPair": "BTCUSD", "side": "bid"},
        {"tradeId": "a2", "orderId": "o2", "timestamp": 1393411099000,
         "tradedCurrencyFillAmount": "50000", "settlementCurrencyFillAmount": "0.0095",
         "ccyPair": "DOGEBTC", "side": "ask"}
    ]
}"#;

#[test]
fn trades_track_max_tid_in_input_order() {
    let resp: AnxTradesResponse = serde_json::from_str(TRADES_JSON).unwrap();
    let trades = trade::adapt_trades(&resp.data).unwrap();

    assert_eq!(trades.len(), 3);
    assert_eq!(trades.latest_trade_id, 1_393_281_234_009);
    assert_eq!(trades.sort_type, TradeSortType::SortById);

    let ids: Vec<_> = trades.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["1393281234005", "1393281234003", "1393281234009"]);
    assert_eq!(trades.trades[1].side, Side::Ask);
    assert_eq!(trades.trades[1].timestamp.timestamp_millis(), 1_393_281_234_003);
}

#[test]
fn user_trades_priced_with_bundled_metadata() {
    let resp: AnxTradeResultsResponse = serde_json::from_str(USER_TRADES_JSON).unwrap();
    let meta = ExchangeMetaData::anx().unwrap();
    let fills = user_trade::adapt_user_trades(&resp.data, &meta).unwrap();

    assert_eq!(fills.most_recent_timestamp_of_first_element, 1_393_411_075_000);
    assert_eq!(fills.sort_type, TradeSortType::SortByTimestamp);

    let btc = &fills.trades[0];
    assert_eq!(btc.currency_pair, CurrencyPair::new("BTC", "USD"));
    // 1300.25 / 2 = 650.125, scale 5
    assert_eq!(btc.price.to_string(), "650.12500");

    let doge = &fills.trades[1];
    assert_eq!(doge.currency_pair, CurrencyPair::doge_btc());
    assert_eq!(doge.price, dec("0.00000019"));
    assert_eq!(doge.side, Side::Ask);
    assert!(doge.fee_amount.is_none());
}

#[test]
fn user_trades_unknown_pair_fails_whole_batch() {
    let resp: AnxTradeResultsResponse = serde_json::from_str(USER_TRADES_JSON).unwrap();
    let mut scales: HashMap<CurrencyPair, u32> = HashMap::new();
    scales.insert(CurrencyPair::new("BTC", "USD"), 5);

    match user_trade::adapt_user_trades(&resp.data, &scales) {
        Err(AdapterError::UnknownPairScale(pair)) => assert_eq!(pair, CurrencyPair::doge_btc()),
        other => panic!("expected UnknownPairScale, got {other:?}"),
    }
}

#[test]
fn depth_snapshot_round_trips_level_fields() {
    let json = r#"{
        "now": "1393411075123456",
        "asks": [
            {"price": "651.00000", "amount": "0.50000000", "stamp": "1393411070000"},
            {"price": "652.50000", "amount": "2.00000000", "stamp": "1393411071000"}
        ],
        "bids": [
            {"price": "649.99000", "amount": "1.10000000", "stamp": "1393411072000"}
        ]
    }"#;
    let depth: AnxDepth = serde_json::from_str(json).unwrap();
    let book = order::adapt_order_book(&depth, "BTC", "USD").unwrap();

    assert_eq!(book.timestamp.timestamp_millis(), 1_393_411_075_123);
    for (adapted, src) in book.asks.iter().zip(&depth.asks) {
        assert_eq!(adapted.side, Side::Ask);
        assert_eq!(adapted.currency_pair.to_string(), "BTC/USD");
        assert_eq!(adapted.amount, src.amount);
        assert_eq!(adapted.limit_price, src.price);
        assert!(adapted.id.is_none());
    }
    assert_eq!(book.best_bid(), Some(dec("649.99")));
}

#[test]
fn account_info_skips_null_wallets() {
    let json = r#"{
        "Login": "trader@example.com",
        "Trade_Fee": "0.60",
        "Rights": ["get_info", "trade"],
        "Wallets": {
            "BTC": {
                "Balance": {"value": "1.50000000", "currency": "BTC"},
                "Available_Balance": {"value": "1.00000000", "currency": "BTC"}
            },
            "USD": {
                "Balance": {"value": "1000.00", "currency": "USD"},
                "Available_Balance": {"value": "1000.00", "currency": "USD"}
            },
            "DOGE": null
        }
    }"#;
    let raw: AnxAccountInfo = serde_json::from_str(json).unwrap();
    let info = account::adapt_account_info(&raw);

    assert_eq!(info.trading_fee, dec("0.0060"));
    assert_eq!(info.wallet.len(), 2);
    let btc = info.wallet.balance(&Currency::from("BTC")).unwrap();
    assert_eq!(btc.frozen(), dec("0.5"));
    assert!(info.wallet.balance(&Currency::from("DOGE")).is_none());
}

#[test]
fn numeric_decimals_accepted_on_wire() {
    let json = r#"{
        "Login": "trader@example.com",
        "Trade_Fee": 0.6,
        "Wallets": {
            "BTC": {
                "Balance": {"value": 1.5, "currency": "BTC"},
                "Available_Balance": {"value": "1.00000000", "currency": "BTC"}
            }
        }
    }"#;
    let raw: AnxAccountInfo = serde_json::from_str(json).unwrap();
    let info = account::adapt_account_info(&raw);
    assert_eq!(info.trading_fee, dec("0.006"));
    let btc = info.wallet.balance(&Currency::from("BTC")).unwrap();
    assert_eq!(btc.total, dec("1.5"));
    assert_eq!(btc.frozen(), dec("0.5"));

    let trades = r#"{"data": [{"tid": 1393281234005, "amount": 0.25, "price": 650.1,
        "item": "BTC", "price_currency": "USD", "trade_type": "bid"}]}"#;
    let resp: AnxTradesResponse = serde_json::from_str(trades).unwrap();
    assert_eq!(resp.data[0].price, dec("650.1"));
    assert_eq!(resp.data[0].amount, dec("0.25"));
}

#[test]
fn tagged_payloads_through_adapter() {
    let ticker_json = r#"{
        "exchange": "anx",
        "payload": {
            "high": {"value": "700", "currency": "USD"},
            "low": {"value": "600", "currency": "USD"},
            "avg": {"value": "650", "currency": "USD"},
            "vol": {"value": "1234.5", "currency": "BTC"},
            "last": {"value": "655", "currency": "USD"},
            "buy": {"value": "654", "currency": "USD"},
            "sell": {"value": "656", "currency": "USD"},
            "now": 1393411075123456
        }
    }"#;
    let payload: TickerPayload = serde_json::from_str(ticker_json).unwrap();
    let ticker = Adapter::default().ticker(&payload).unwrap();
    assert_eq!(ticker.currency_pair, CurrencyPair::new("BTC", "USD"));
    assert_eq!(ticker.volume, dec("1234.5"));

    let orders_json = r#"{
        "exchange": "anx",
        "payload": [{
            "oid": "oid-1", "currency": "USD", "item": "BTC", "type": "BID",
            "amount": {"value": "1", "currency": "BTC"},
            "price": {"value": "640", "currency": "USD"},
            "date": 1393411075000
        }]
    }"#;
    let payload: OpenOrdersPayload = serde_json::from_str(orders_json).unwrap();
    let strict = Adapter::new(AdapterConfig::strict());
    let orders = strict.open_orders(&payload).unwrap();
    assert_eq!(orders[0].side, Side::Bid);
    assert_eq!(orders[0].id.as_deref(), Some("oid-1"));
}

#[test]
fn envelope_errors_surface_before_adaptation() {
    let json = r#"{"error": ["EGeneral:Invalid arguments"], "result": null}"#;
    let env: ExchangeResult<Vec<exchange_adapters::domain::trade::wire::AnxTrade>> =
        serde_json::from_str(json).unwrap();
    assert!(!env.is_success());
    assert!(matches!(env.into_result(), Err(AdapterError::Exchange(_))));
}
