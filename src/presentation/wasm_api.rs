use crate::app::{self, App};
use leptos::*;
use wasm_bindgen::prelude::*;

/// Mounts the dashboard UI and starts the sync scheduler.
#[wasm_bindgen]
pub fn start_dashboard() {
    app::bootstrap();
    mount_to_body(|| view! { <App/> });
}

/// Manual refresh, independent of the periodic schedule.
#[wasm_bindgen]
pub fn refresh_dashboard() {
    app::manual_refresh();
}

#[wasm_bindgen]
pub fn set_alert_threshold(value: f64) -> Result<(), JsValue> {
    app::apply_alert_threshold(value)
        .map(|_| ())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn set_update_interval_secs(secs: u32) -> Result<(), JsValue> {
    app::apply_interval_secs(secs as u64)
        .map(|_| ())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn set_dark_mode(enabled: bool) {
    app::apply_dark_mode(enabled);
}
