//! Save/Load of selections and preferences through a [`KeyValueStore`].
//!
//! Selections are stored as the versioned snapshot JSON, one key per
//! calculator type. Preferences (theme, active calculator) are stored as
//! their bare ids.

use descended_logic::calculator_type::CalculatorType;
use descended_logic::config::{AppConfig, Theme};
use descended_logic::history::History;
use descended_logic::selection::Selection;
use descended_logic::snapshot::{parse_snapshot, ImportError, SelectionSnapshot};

use crate::store::{KeyValueStore, StoreError};

/// Store key holding the selection of a calculator type. The boss selection
/// uses the configured key as-is.
pub fn selection_key(config: &AppConfig, calculator: CalculatorType) -> String {
    match calculator {
        CalculatorType::Boss => config.storage_key.clone(),
        other => format!("{}:{}", config.storage_key, other.id()),
    }
}

/// Write a selection snapshot.
pub fn save_selection(
    store: &mut dyn KeyValueStore,
    key: &str,
    selection: &Selection,
    timestamp: u64,
) -> Result<(), PersistError> {
    let json = SelectionSnapshot::capture(selection, timestamp).to_json();
    store.set(key, &json)?;
    Ok(())
}

/// Read a stored snapshot into `selection`. Returns `Ok(false)` when nothing
/// is stored; a malformed blob is an error and leaves `selection` untouched.
pub fn load_selection(
    store: &dyn KeyValueStore,
    key: &str,
    selection: &mut Selection,
) -> Result<bool, PersistError> {
    let Some(json) = store.get(key)? else {
        return Ok(false);
    };
    let imported = parse_snapshot(&json, selection.categories())?;
    if !imported.ignored.is_empty() {
        log::debug!("dropped unknown keys from {}: {:?}", key, imported.ignored);
    }
    imported.apply_to(selection);
    Ok(true)
}

pub fn save_theme(
    store: &mut dyn KeyValueStore,
    config: &AppConfig,
    theme: Theme,
) -> Result<(), PersistError> {
    store.set(&config.theme_storage_key, theme.id())?;
    Ok(())
}

/// Stored theme; `None` when absent or unrecognised.
pub fn load_theme(
    store: &dyn KeyValueStore,
    config: &AppConfig,
) -> Result<Option<Theme>, PersistError> {
    Ok(store
        .get(&config.theme_storage_key)?
        .and_then(|id| Theme::from_id(id.trim())))
}

pub fn save_calculator_type(
    store: &mut dyn KeyValueStore,
    config: &AppConfig,
    calculator: CalculatorType,
) -> Result<(), PersistError> {
    store.set(&config.type_storage_key, calculator.id())?;
    Ok(())
}

/// Stored calculator type; `None` when absent or unrecognised.
pub fn load_calculator_type(
    store: &dyn KeyValueStore,
    config: &AppConfig,
) -> Result<Option<CalculatorType>, PersistError> {
    Ok(store
        .get(&config.type_storage_key)?
        .and_then(|id| CalculatorType::from_id(id.trim())))
}

/// Store key holding the calculation history.
pub fn history_key(config: &AppConfig) -> String {
    format!("{}:history", config.storage_key)
}

pub fn save_history(
    store: &mut dyn KeyValueStore,
    config: &AppConfig,
    history: &History,
) -> Result<(), PersistError> {
    let json = serde_json::to_string(history).map_err(PersistError::Encode)?;
    store.set(&history_key(config), &json)?;
    Ok(())
}

/// Stored history, re-capped to the configured size; `None` when absent.
pub fn load_history(
    store: &dyn KeyValueStore,
    config: &AppConfig,
) -> Result<Option<History>, PersistError> {
    let Some(json) = store.get(&history_key(config))? else {
        return Ok(None);
    };
    let mut history: History = serde_json::from_str(&json).map_err(ImportError::from)?;
    history.set_capacity(config.max_history_items);
    Ok(Some(history))
}

/// Errors that can occur during save/load
#[derive(Debug)]
pub enum PersistError {
    Store(StoreError),
    Format(ImportError),
    Encode(serde_json::Error),
}

impl From<StoreError> for PersistError {
    fn from(e: StoreError) -> Self {
        PersistError::Store(e)
    }
}

impl From<ImportError> for PersistError {
    fn from(e: ImportError) -> Self {
        PersistError::Format(e)
    }
}

impl std::fmt::Display for PersistError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersistError::Store(e) => write!(f, "{}", e),
            PersistError::Format(e) => write!(f, "Saved data unreadable: {}", e),
            PersistError::Encode(e) => write!(f, "Could not encode data: {}", e),
        }
    }
}

impl std::error::Error for PersistError {}
