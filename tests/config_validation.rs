use crypto_dashboard_wasm::application::config::{
    ConfigStore, DashboardConfig, DEFAULT_ALERT_THRESHOLD, DEFAULT_RETRY_BUDGET,
    DEFAULT_UPDATE_INTERVAL_MS, MIN_UPDATE_INTERVAL_MS, keys,
};
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Default)]
struct MemoryStore {
    map: RefCell<HashMap<String, String>>,
}

impl ConfigStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.map.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

#[test]
fn empty_store_loads_defaults() {
    let store = MemoryStore::default();
    let config = DashboardConfig::load(&store);
    assert_eq!(config.alert_threshold, DEFAULT_ALERT_THRESHOLD);
    assert_eq!(config.update_interval_ms, DEFAULT_UPDATE_INTERVAL_MS);
    assert_eq!(config.retry_budget, DEFAULT_RETRY_BUDGET);
    assert!(!config.dark_mode);
}

#[test]
fn persisted_values_round_trip() {
    let store = MemoryStore::default();
    let mut config = DashboardConfig::default();
    config.store_threshold(&store, 7.5).unwrap();
    config.store_interval_ms(&store, 30_000).unwrap();
    config.store_retry_budget(&store, 5).unwrap();
    config.store_dark_mode(&store, true);

    let reloaded = DashboardConfig::load(&store);
    assert_eq!(reloaded.alert_threshold, 7.5);
    assert_eq!(reloaded.update_interval_ms, 30_000);
    assert_eq!(reloaded.retry_budget, 5);
    assert!(reloaded.dark_mode);
}

#[test]
fn invalid_threshold_is_rejected_and_nothing_is_stored() {
    let store = MemoryStore::default();
    let mut config = DashboardConfig::default();

    assert!(config.store_threshold(&store, 0.0).is_err());
    assert!(config.store_threshold(&store, -2.0).is_err());
    assert!(config.store_threshold(&store, f64::NAN).is_err());

    // previous value stays in effect, store untouched
    assert_eq!(config.alert_threshold, DEFAULT_ALERT_THRESHOLD);
    assert!(store.get(keys::ALERT_THRESHOLD).is_none());
}

#[test]
fn interval_below_minimum_is_rejected() {
    let store = MemoryStore::default();
    let mut config = DashboardConfig::default();

    assert!(config.store_interval_ms(&store, MIN_UPDATE_INTERVAL_MS - 1).is_err());
    assert_eq!(config.update_interval_ms, DEFAULT_UPDATE_INTERVAL_MS);
    assert!(store.get(keys::UPDATE_INTERVAL).is_none());

    // the minimum itself is fine
    assert_eq!(config.store_interval_ms(&store, MIN_UPDATE_INTERVAL_MS).unwrap(), MIN_UPDATE_INTERVAL_MS);
}

#[test]
fn retry_budget_must_cover_one_attempt() {
    let store = MemoryStore::default();
    let mut config = DashboardConfig::default();
    assert!(config.store_retry_budget(&store, 0).is_err());
    assert_eq!(config.retry_budget, DEFAULT_RETRY_BUDGET);
    assert_eq!(config.store_retry_budget(&store, 1).unwrap(), 1);
}

#[test]
fn unparseable_or_invalid_stored_values_fall_back_to_defaults() {
    let store = MemoryStore::default();
    store.set(keys::ALERT_THRESHOLD, "-3");
    store.set(keys::UPDATE_INTERVAL, "not-a-number");
    store.set(keys::RETRY_BUDGET, "0");

    let config = DashboardConfig::load(&store);
    assert_eq!(config.alert_threshold, DEFAULT_ALERT_THRESHOLD);
    assert_eq!(config.update_interval_ms, DEFAULT_UPDATE_INTERVAL_MS);
    assert_eq!(config.retry_budget, DEFAULT_RETRY_BUDGET);
}

#[test]
fn dark_mode_uses_the_legacy_enabled_marker() {
    let store = MemoryStore::default();
    store.set(keys::DARK_MODE, "enabled");
    assert!(DashboardConfig::load(&store).dark_mode);

    store.set(keys::DARK_MODE, "disabled");
    assert!(!DashboardConfig::load(&store).dark_mode);
}
