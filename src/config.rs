//! Application configuration
//!
//! Defaults reproduce the legacy page exactly. The browser entry point may
//! override any field with a JSON object stored under `habits.config`.

use serde::{Deserialize, Serialize};

/// LocalStorage key holding optional config overrides
pub const CONFIG_STORAGE_KEY: &str = "habits.config";

/// Habit tracker settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HabitConfig {
    /// Storage slot the habit list is written to
    pub storage_key: String,
    /// Upper bound on habit name length in characters (None = unbounded)
    pub max_name_chars: Option<usize>,
    /// Placeholder shown when there are no habits
    pub empty_message: String,
    /// `log` level filter name
    pub log_level: String,
}

impl Default for HabitConfig {
    fn default() -> Self {
        Self {
            storage_key: "habits".to_string(),
            max_name_chars: None,
            empty_message: "No habits yet. Add one above!".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl HabitConfig {
    /// Parse overrides; fields missing from `json` keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parsed `log_level`, falling back to `Info` for unknown names
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// Load overrides from the browser's LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(CONFIG_STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config overrides from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring malformed config overrides: {}", e),
                }
            }
        }

        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HabitConfig::default();
        assert_eq!(config.storage_key, "habits");
        assert_eq!(config.max_name_chars, None);
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_partial_override() {
        let config = HabitConfig::from_json(r#"{"max_name_chars": 40, "log_level": "debug"}"#).unwrap();
        assert_eq!(config.max_name_chars, Some(40));
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);
        assert_eq!(config.storage_key, "habits");
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let config = HabitConfig {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_malformed_override_is_an_error() {
        assert!(HabitConfig::from_json("{not json").is_err());
    }
}
