//! Selection snapshots — the JSON blob used for saving, export and import.
//!
//! ```json
//! { "version": 1, "selection": { "T4_Abyssal": 2, ... }, "timestamp": 1737150000000 }
//! ```
//!
//! Import is lenient about content and strict about shape: unknown tiers and
//! non-numeric values are skipped, but anything that is not an object with an
//! object `selection` field is rejected before any value is applied.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::categories::{self, Category};
use crate::selection::Selection;

/// Snapshot format version written by this crate.
pub const SNAPSHOT_VERSION: u64 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSnapshot {
    pub version: u64,
    pub selection: BTreeMap<String, u32>,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
}

impl SelectionSnapshot {
    pub fn capture(selection: &Selection, timestamp: u64) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            selection: selection.to_map(),
            timestamp,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Errors that reject an import outright.
#[derive(Debug)]
pub enum ImportError {
    Json(serde_json::Error),
    NotAnObject,
    MissingSelection,
    UnsupportedVersion(u64),
}

impl From<serde_json::Error> for ImportError {
    fn from(e: serde_json::Error) -> Self {
        ImportError::Json(e)
    }
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Json(e) => write!(f, "Invalid JSON: {}", e),
            ImportError::NotAnObject => write!(f, "Invalid format: expected a JSON object"),
            ImportError::MissingSelection => {
                write!(f, "Invalid format: missing \"selection\" object")
            }
            ImportError::UnsupportedVersion(v) => {
                write!(
                    f,
                    "Unsupported version {} (newest supported is {})",
                    v, SNAPSHOT_VERSION
                )
            }
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Json(e) => Some(e),
            _ => None,
        }
    }
}

/// The usable part of an imported snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedSelection {
    /// Known categories with their raw numeric values, in key order.
    pub values: Vec<(&'static str, f64)>,
    /// Keys that were skipped: unknown tiers or non-numeric values.
    pub ignored: Vec<String>,
    pub timestamp: Option<u64>,
}

impl ImportedSelection {
    /// Write the values into a selection, clamping each. Returns how many
    /// counters were set.
    pub fn apply_to(&self, selection: &mut Selection) -> usize {
        self.values
            .iter()
            .filter(|(id, value)| selection.set(id, *value).is_ok())
            .count()
    }
}

/// Parse and shape-check a snapshot against a category set.
pub fn parse_snapshot(
    json: &str,
    categories: &'static [Category],
) -> Result<ImportedSelection, ImportError> {
    let root: Value = serde_json::from_str(json)?;
    let root = root.as_object().ok_or(ImportError::NotAnObject)?;

    if let Some(version) = root.get("version").and_then(Value::as_u64) {
        if version > SNAPSHOT_VERSION {
            return Err(ImportError::UnsupportedVersion(version));
        }
    }

    let entries = root
        .get("selection")
        .and_then(Value::as_object)
        .ok_or(ImportError::MissingSelection)?;

    let mut values = Vec::new();
    let mut ignored = Vec::new();
    for (key, value) in entries {
        match (categories::find(categories, key), value.as_f64()) {
            (Some(category), Some(n)) => values.push((category.id, n)),
            _ => ignored.push(key.clone()),
        }
    }

    Ok(ImportedSelection {
        values,
        ignored,
        timestamp: root.get("timestamp").and_then(Value::as_u64),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator_type::CalculatorType;
    use crate::categories::BOSS_TIERS;
    use crate::selection::CountLimits;

    #[test]
    fn test_export_import_roundtrip() {
        let mut original = Selection::new(CalculatorType::Boss, CountLimits::default());
        original.set("T4_Abyssal", 2).unwrap();
        original.set("T8_Descension", 999).unwrap();
        original.set("T9_3Seal", 17).unwrap();

        let json = SelectionSnapshot::capture(&original, 1_700_000_000_000).to_json();
        let imported = parse_snapshot(&json, &BOSS_TIERS).unwrap();
        assert!(imported.ignored.is_empty());
        assert_eq!(imported.timestamp, Some(1_700_000_000_000));

        let mut restored = Selection::new(CalculatorType::Boss, CountLimits::default());
        restored.set("T5_Chaos", 4).unwrap();
        assert_eq!(imported.apply_to(&mut restored), 18);
        assert_eq!(restored, original);
    }

    #[test]
    fn test_unknown_and_non_numeric_ignored() {
        let json = r#"{"selection": {"T4_Abyssal": 3, "T99": 1, "T9_Cube": "many", "T6_Giga": 5000}}"#;
        let imported = parse_snapshot(json, &BOSS_TIERS).unwrap();
        assert_eq!(imported.values, vec![("T4_Abyssal", 3.0), ("T6_Giga", 5000.0)]);
        assert_eq!(imported.ignored.len(), 2);

        let mut sel = Selection::new(CalculatorType::Boss, CountLimits::default());
        imported.apply_to(&mut sel);
        assert_eq!(sel.get("T6_Giga"), 999);
        assert_eq!(sel.get("T9_Cube"), 0);
    }

    #[test]
    fn test_shape_rejected() {
        assert!(matches!(
            parse_snapshot("{not json", &BOSS_TIERS),
            Err(ImportError::Json(_))
        ));
        assert!(matches!(
            parse_snapshot("[1, 2]", &BOSS_TIERS),
            Err(ImportError::NotAnObject)
        ));
        assert!(matches!(
            parse_snapshot(r#"{"selection": 4}"#, &BOSS_TIERS),
            Err(ImportError::MissingSelection)
        ));
        assert!(matches!(
            parse_snapshot(r#"{"version": 2, "selection": {}}"#, &BOSS_TIERS),
            Err(ImportError::UnsupportedVersion(2))
        ));
    }

    #[test]
    fn test_snapshot_shape() {
        let sel = Selection::new(CalculatorType::Key, CountLimits::default());
        let json = SelectionSnapshot::capture(&sel, 5).to_json();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["version"], 1);
        assert_eq!(value["timestamp"], 5);
        assert_eq!(value["selection"]["God_Key"], 0);
    }
}
