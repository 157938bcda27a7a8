use crypto_dashboard_wasm::domain::market_data::{
    AlertDirection, AlertEvaluator, CoinId, CoinRecord, Percent, Price, PriceSeries, Volume,
};

fn record_with_change(change: Option<f64>) -> CoinRecord {
    CoinRecord {
        id: CoinId::from("bitcoin"),
        name: "Bitcoin".to_string(),
        symbol: "BTC".to_string(),
        image: String::new(),
        current_price: Price::from(43000.0),
        market_cap_rank: Some(1),
        price_change_24h: change.map(Percent::from),
        total_volume: Volume::from(0.0),
        high_24h: Price::from(0.0),
        low_24h: Price::from(0.0),
        market_cap: Price::from(0.0),
        ath: Price::from(0.0),
        atl: Price::from(0.0),
        sparkline: PriceSeries::default(),
    }
}

#[test]
fn change_below_threshold_does_not_exceed() {
    let signal = AlertEvaluator::evaluate(&record_with_change(Some(4.9)), 5.0);
    assert!(!signal.exceeds);
}

#[test]
fn change_at_threshold_exceeds() {
    let signal = AlertEvaluator::evaluate(&record_with_change(Some(5.0)), 5.0);
    assert!(signal.exceeds);
    assert_eq!(signal.direction, AlertDirection::Up);
}

#[test]
fn magnitude_counts_for_negative_changes() {
    let signal = AlertEvaluator::evaluate(&record_with_change(Some(-12.3)), 5.0);
    assert!(signal.exceeds);
    assert_eq!(signal.direction, AlertDirection::Down);
}

#[test]
fn zero_change_counts_as_up() {
    let signal = AlertEvaluator::evaluate(&record_with_change(Some(0.0)), 5.0);
    assert!(!signal.exceeds);
    assert_eq!(signal.direction, AlertDirection::Up);
}

#[test]
fn missing_change_never_exceeds() {
    let signal = AlertEvaluator::evaluate(&record_with_change(None), 0.5);
    assert!(!signal.exceeds);
    assert_eq!(signal.direction, AlertDirection::Up);
}
