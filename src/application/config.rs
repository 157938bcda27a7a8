use crate::domain::errors::{AppError, ConfigResult};
use crate::domain::logging::{LogComponent, get_logger};

/// Storage keys shared with earlier releases of the dashboard, so a
/// returning browser keeps its settings.
pub mod keys {
    pub const ALERT_THRESHOLD: &str = "alertThreshold";
    pub const UPDATE_INTERVAL: &str = "updateInterval";
    pub const RETRY_BUDGET: &str = "retryBudget";
    pub const DARK_MODE: &str = "darkMode";
}

pub const DEFAULT_ALERT_THRESHOLD: f64 = 5.0;
pub const DEFAULT_UPDATE_INTERVAL_MS: u64 = 60_000;
pub const MIN_UPDATE_INTERVAL_MS: u64 = 10_000;
pub const DEFAULT_RETRY_BUDGET: u32 = 3;

/// Outbound port for settings persistence. The core only ever touches
/// get/set primitives keyed by name; the browser impl sits on
/// localStorage.
pub trait ConfigStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Validated dashboard configuration. All mutation goes through the
/// `store_*` methods, which reject invalid input before anything is
/// persisted - the previous value stays in effect.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub alert_threshold: f64,
    pub update_interval_ms: u64,
    pub retry_budget: u32,
    pub dark_mode: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            alert_threshold: DEFAULT_ALERT_THRESHOLD,
            update_interval_ms: DEFAULT_UPDATE_INTERVAL_MS,
            retry_budget: DEFAULT_RETRY_BUDGET,
            dark_mode: false,
        }
    }
}

impl DashboardConfig {
    /// Loads settings from the store, falling back to defaults for
    /// missing or unparseable entries. A stored value that no longer
    /// passes validation is ignored the same way.
    pub fn load(store: &dyn ConfigStore) -> Self {
        let defaults = Self::default();

        let alert_threshold = store
            .get(keys::ALERT_THRESHOLD)
            .and_then(|raw| raw.parse::<f64>().ok())
            .and_then(|v| Self::validate_threshold(v).ok())
            .unwrap_or(defaults.alert_threshold);

        let update_interval_ms = store
            .get(keys::UPDATE_INTERVAL)
            .and_then(|raw| raw.parse::<u64>().ok())
            .and_then(|v| Self::validate_interval_ms(v).ok())
            .unwrap_or(defaults.update_interval_ms);

        let retry_budget = store
            .get(keys::RETRY_BUDGET)
            .and_then(|raw| raw.parse::<u32>().ok())
            .and_then(|v| Self::validate_retry_budget(v).ok())
            .unwrap_or(defaults.retry_budget);

        let dark_mode =
            store.get(keys::DARK_MODE).map(|raw| raw == "enabled").unwrap_or(defaults.dark_mode);

        get_logger().info(
            LogComponent::Application("Config"),
            &format!(
                "Loaded config: threshold ±{}%, interval {}ms, retry budget {}, dark mode {}",
                alert_threshold, update_interval_ms, retry_budget, dark_mode
            ),
        );

        Self { alert_threshold, update_interval_ms, retry_budget, dark_mode }
    }

    pub fn validate_threshold(value: f64) -> ConfigResult<f64> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(AppError::InvalidConfig("alert threshold must be a positive number".to_string()))
        }
    }

    pub fn validate_interval_ms(value: u64) -> ConfigResult<u64> {
        if value >= MIN_UPDATE_INTERVAL_MS {
            Ok(value)
        } else {
            Err(AppError::InvalidConfig(format!(
                "update interval must be at least {}ms",
                MIN_UPDATE_INTERVAL_MS
            )))
        }
    }

    pub fn validate_retry_budget(value: u32) -> ConfigResult<u32> {
        if value >= 1 {
            Ok(value)
        } else {
            Err(AppError::InvalidConfig("retry budget must be at least 1".to_string()))
        }
    }

    pub fn store_threshold(&mut self, store: &dyn ConfigStore, value: f64) -> ConfigResult<f64> {
        let value = Self::validate_threshold(value)?;
        self.alert_threshold = value;
        store.set(keys::ALERT_THRESHOLD, &value.to_string());
        Ok(value)
    }

    pub fn store_interval_ms(&mut self, store: &dyn ConfigStore, value: u64) -> ConfigResult<u64> {
        let value = Self::validate_interval_ms(value)?;
        self.update_interval_ms = value;
        store.set(keys::UPDATE_INTERVAL, &value.to_string());
        Ok(value)
    }

    pub fn store_retry_budget(&mut self, store: &dyn ConfigStore, value: u32) -> ConfigResult<u32> {
        let value = Self::validate_retry_budget(value)?;
        self.retry_budget = value;
        store.set(keys::RETRY_BUDGET, &value.to_string());
        Ok(value)
    }

    pub fn store_dark_mode(&mut self, store: &dyn ConfigStore, enabled: bool) {
        self.dark_mode = enabled;
        store.set(keys::DARK_MODE, if enabled { "enabled" } else { "disabled" });
    }
}
