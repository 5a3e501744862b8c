//! Application settings — counter bounds, storage keys and timings.
//!
//! Every field has a default, so a settings file only needs to list the
//! values it changes:
//!
//! ```
//! use descended_logic::config::{validate_config, AppConfig};
//!
//! let config = AppConfig::default();
//! assert_eq!(config.max_count, 999);
//! assert!(validate_config(&config).is_empty());
//! ```

use serde::{Deserialize, Serialize};

use crate::selection::CountLimits;

/// Colour theme of the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn id(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Tunable settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Value a counter starts at and falls back to on bad input.
    pub default_count: u32,
    pub min_count: u32,
    pub max_count: u32,
    /// Store key for the boss selection; other calculators append `:<type>`.
    pub storage_key: String,
    /// Idle time after the last edit before the selection is saved.
    pub auto_save_delay_ms: u64,
    pub max_history_items: usize,
    /// How long a notification stays visible.
    pub notification_ms: u64,
    pub default_theme: Theme,
    pub theme_storage_key: String,
    pub type_storage_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_count: 0,
            min_count: 0,
            max_count: 999,
            storage_key: "calculator_selection".to_string(),
            auto_save_delay_ms: 1000,
            max_history_items: 10,
            notification_ms: 3000,
            default_theme: Theme::Dark,
            theme_storage_key: "calculator_theme".to_string(),
            type_storage_key: "calculator_type".to_string(),
        }
    }
}

impl AppConfig {
    pub fn limits(&self) -> CountLimits {
        CountLimits {
            min: self.min_count,
            max: self.max_count,
            default: self.default_count,
        }
    }
}

/// Settings validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `min_count` is above `max_count`.
    InvertedBounds { min: u32, max: u32 },
    /// `default_count` lies outside the bounds.
    DefaultOutOfRange(u32),
    /// A storage key is blank.
    EmptyStorageKey(&'static str),
    /// Two settings share the same storage key.
    SharedStorageKey(String),
    /// History must keep at least one entry.
    NoHistory,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvertedBounds { min, max } => {
                write!(f, "min_count {} is greater than max_count {}", min, max)
            }
            ConfigError::DefaultOutOfRange(v) => {
                write!(f, "default_count {} is outside min_count..=max_count", v)
            }
            ConfigError::EmptyStorageKey(field) => write!(f, "{} must not be empty", field),
            ConfigError::SharedStorageKey(key) => {
                write!(f, "storage key \"{}\" is used twice", key)
            }
            ConfigError::NoHistory => write!(f, "max_history_items must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Validate settings, returning all errors found.
pub fn validate_config(config: &AppConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    if config.min_count > config.max_count {
        errors.push(ConfigError::InvertedBounds {
            min: config.min_count,
            max: config.max_count,
        });
    } else if !(config.min_count..=config.max_count).contains(&config.default_count) {
        errors.push(ConfigError::DefaultOutOfRange(config.default_count));
    }

    let keys = [
        ("storage_key", &config.storage_key),
        ("theme_storage_key", &config.theme_storage_key),
        ("type_storage_key", &config.type_storage_key),
    ];
    for (i, (field, key)) in keys.iter().enumerate() {
        if key.trim().is_empty() {
            errors.push(ConfigError::EmptyStorageKey(*field));
        } else if keys[..i].iter().any(|(_, other)| other == key) {
            errors.push(ConfigError::SharedStorageKey(key.to_string()));
        }
    }

    if config.max_history_items == 0 {
        errors.push(ConfigError::NoHistory);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_valid() {
        assert!(validate_config(&AppConfig::default()).is_empty());
    }

    #[test]
    fn test_inverted_bounds() {
        let config = AppConfig {
            min_count: 10,
            max_count: 5,
            ..AppConfig::default()
        };
        let errors = validate_config(&config);
        assert_eq!(errors, vec![ConfigError::InvertedBounds { min: 10, max: 5 }]);
    }

    #[test]
    fn test_default_out_of_range() {
        let config = AppConfig {
            min_count: 1,
            ..AppConfig::default()
        };
        assert_eq!(validate_config(&config), vec![ConfigError::DefaultOutOfRange(0)]);
    }

    #[test]
    fn test_storage_keys_checked() {
        let config = AppConfig {
            storage_key: " ".into(),
            theme_storage_key: "calculator_type".into(),
            max_history_items: 0,
            ..AppConfig::default()
        };
        let errors = validate_config(&config);
        assert!(errors.contains(&ConfigError::EmptyStorageKey("storage_key")));
        assert!(errors.contains(&ConfigError::SharedStorageKey("calculator_type".into())));
        assert!(errors.contains(&ConfigError::NoHistory));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"max_count": 50}"#).unwrap();
        assert_eq!(config.max_count, 50);
        assert_eq!(config.storage_key, "calculator_selection");
        assert_eq!(config.limits().max, 50);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::from_id(Theme::Light.id()), Some(Theme::Light));
        assert_eq!(Theme::from_id("sepia"), None);
    }
}
