use crate::app::ToastMessage;
use crate::domain::market_data::{CoinId, CoinRecord};
use leptos::*;
use once_cell::sync::OnceCell;
use std::collections::HashMap;

pub struct Globals {
    pub records: RwSignal<Vec<CoinRecord>>,
    pub filter_options: RwSignal<Vec<(String, String)>>,
    pub filter_key: RwSignal<String>,
    pub alert_threshold: RwSignal<f64>,
    pub update_interval_secs: RwSignal<u64>,
    pub dark_mode: RwSignal<bool>,
    pub displayed_prices: RwSignal<HashMap<CoinId, f64>>,
    pub toast: RwSignal<Option<ToastMessage>>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        records: create_rw_signal(Vec::new()),
        filter_options: create_rw_signal(Vec::new()),
        filter_key: create_rw_signal("all".to_string()),
        alert_threshold: create_rw_signal(crate::application::config::DEFAULT_ALERT_THRESHOLD),
        update_interval_secs: create_rw_signal(
            crate::application::config::DEFAULT_UPDATE_INTERVAL_MS / 1000,
        ),
        dark_mode: create_rw_signal(false),
        displayed_prices: create_rw_signal(HashMap::new()),
        toast: create_rw_signal(None),
    })
}

crate::global_signals! {
    pub dashboard_records => records: Vec<CoinRecord>,
    pub filter_options => filter_options: Vec<(String, String)>,
    pub filter_key => filter_key: String,
    pub alert_threshold => alert_threshold: f64,
    pub update_interval_secs => update_interval_secs: u64,
    pub dark_mode => dark_mode: bool,
    pub displayed_prices => displayed_prices: HashMap<CoinId, f64>,
    pub toast => toast: Option<ToastMessage>,
}
