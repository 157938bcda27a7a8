use crypto_dashboard_wasm::domain::market_data::{
    CoinId, CoinRecord, FilterKey, Percent, Price, PriceSeries, RecordFilter, Volume,
};

fn record(id: &str) -> CoinRecord {
    CoinRecord {
        id: CoinId::from(id),
        name: id.to_string(),
        symbol: id.to_uppercase(),
        image: String::new(),
        current_price: Price::from(100.0),
        market_cap_rank: Some(1),
        price_change_24h: Some(Percent::from(1.0)),
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
fn all_is_identity() {
    let records = vec![record("bitcoin"), record("ethereum"), record("dogecoin")];
    let filtered = RecordFilter::apply(&records, &FilterKey::All);
    assert_eq!(filtered, records);
}

#[test]
fn id_keeps_matching_records_in_order() {
    let records = vec![record("bitcoin"), record("ethereum"), record("bitcoin")];
    let filtered = RecordFilter::apply(&records, &FilterKey::parse("bitcoin"));
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|r| r.id.value() == "bitcoin"));
}

#[test]
fn unknown_id_yields_empty_set() {
    let records = vec![record("bitcoin"), record("ethereum")];
    let filtered = RecordFilter::apply(&records, &FilterKey::parse("cardano"));
    assert!(filtered.is_empty());
}

#[test]
fn inputs_are_not_mutated() {
    let records = vec![record("bitcoin"), record("ethereum")];
    let before = records.clone();
    let _ = RecordFilter::apply(&records, &FilterKey::parse("bitcoin"));
    assert_eq!(records, before);
}

#[test]
fn filter_key_parses_the_all_sentinel() {
    assert_eq!(FilterKey::parse("all"), FilterKey::All);
    assert_eq!(FilterKey::parse("bitcoin"), FilterKey::Id(CoinId::from("bitcoin")));
    assert_eq!(FilterKey::parse("all").as_str(), "all");
    assert_eq!(FilterKey::parse("bitcoin").as_str(), "bitcoin");
}
