use crate::application::config::ConfigStore;
use crate::domain::logging::{LogComponent, get_logger};
use gloo::storage::{LocalStorage, Storage};

/// Settings persistence on browser localStorage.
#[derive(Clone, Copy, Default)]
pub struct LocalStorageConfigStore;

impl LocalStorageConfigStore {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigStore for LocalStorageConfigStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::get::<String>(key).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = LocalStorage::set(key, value.to_string()) {
            get_logger().warn(
                LogComponent::Infrastructure("Storage"),
                &format!("Failed to persist '{}': {:?}", key, e),
            );
        }
    }
}
