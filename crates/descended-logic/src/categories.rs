//! Selection categories — boss tiers, key kinds and token kinds.
//!
//! A category is a plain `&'static str` id (the same id that appears in the
//! persisted JSON) plus a display label and the grid column it is shown in.
//! The sets are fixed at build time; nothing registers categories at runtime.

use serde::Serialize;

/// Number of columns the counter grid is laid out in.
pub const NUM_COLUMNS: u8 = 3;

/// One selectable counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Stable id, used as the persisted key.
    pub id: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Grid column (0..NUM_COLUMNS).
    pub column: u8,
}

const fn cat(id: &'static str, label: &'static str, column: u8) -> Category {
    Category { id, label, column }
}

/// Boss tiers in display order. Column 0 holds T4–T6, column 1 T7–T8,
/// column 2 T9.
pub const BOSS_TIERS: [Category; 18] = [
    cat("T4_Abyssal", "T4 Abyssal", 0),
    cat("T4_Celestial", "T4 Celestial", 0),
    cat("T5_Nidhogg", "T5 Nidhogg", 0),
    cat("T5_Chaos", "T5 Chaos", 0),
    cat("T5_Order", "T5 Order", 0),
    cat("T6_Normal", "T6 Normal", 0),
    cat("T6_Giga", "T6 Giga", 0),
    cat("T7_DodoBleu", "T7 DodoBleu", 1),
    cat("T7_DodoRouge", "T7 DodoRouge", 1),
    cat("T7_WReaper", "T7 WReaper", 1),
    cat("T7_WGiga", "T7 WGiga", 1),
    cat("T8_Ascension", "T8 Ascension", 1),
    cat("T8_Descension", "T8 Descension", 1),
    cat("T9_1Seal", "T9 1Seal", 2),
    cat("T9_2Seal", "T9 2Seal", 2),
    cat("T9_3Seal", "T9 3Seal", 2),
    cat("T9_4Seal", "T9 4Seal", 2),
    cat("T9_Cube", "T9 Cube", 2),
];

/// Key kinds for the key calculator.
pub const KEY_KINDS: [Category; 3] = [
    cat(keys::ABYSSAL, "Abyssal Warfare Key", 0),
    cat(keys::CELESTIAL, "Celestial Warfare Key", 1),
    cat(keys::GOD, "God Key", 2),
];

/// Token kinds for the ancient token calculator.
pub const TOKEN_KINDS: [Category; 2] = [
    cat(tokens::CLUSTER, "Ancient Token Cluster", 0),
    cat(tokens::ANCIENT_DINO, "Ancient Dino", 1),
];

pub mod keys {
    pub const ABYSSAL: &str = "Abyssal_Key";
    pub const CELESTIAL: &str = "Celestial_Key";
    pub const GOD: &str = "God_Key";
}

pub mod tokens {
    pub const CLUSTER: &str = "Token_Cluster";
    pub const ANCIENT_DINO: &str = "Ancient_Dino";
}

/// Find a category by id within a set.
pub fn find<'a>(categories: &'a [Category], id: &str) -> Option<&'a Category> {
    categories.iter().find(|c| c.id == id)
}

/// Returns true if `id` names a category in the set.
pub fn is_valid(categories: &[Category], id: &str) -> bool {
    find(categories, id).is_some()
}

/// Column for a category id; unknown ids land in column 0.
pub fn column_for(categories: &[Category], id: &str) -> u8 {
    find(categories, id).map(|c| c.column).unwrap_or(0)
}

/// Display label for a category id; unknown ids are returned unchanged.
pub fn label_for<'a>(categories: &'a [Category], id: &'a str) -> &'a str {
    find(categories, id).map(|c| c.label).unwrap_or(id)
}

/// Categories shown in one grid column, in display order.
pub fn in_column(categories: &[Category], column: u8) -> Vec<&Category> {
    categories.iter().filter(|c| c.column == column).collect()
}

/// Derive a label from an id by replacing its first underscore with a space.
pub fn default_label(id: &str) -> String {
    id.replacen('_', " ", 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boss_labels_match_ids() {
        for tier in &BOSS_TIERS {
            assert_eq!(tier.label, default_label(tier.id), "{}", tier.id);
        }
    }

    #[test]
    fn test_boss_columns() {
        assert_eq!(in_column(&BOSS_TIERS, 0).len(), 7);
        assert_eq!(in_column(&BOSS_TIERS, 1).len(), 6);
        assert_eq!(in_column(&BOSS_TIERS, 2).len(), 5);
        assert!(BOSS_TIERS.iter().all(|t| t.column < NUM_COLUMNS));
    }

    #[test]
    fn test_ids_unique() {
        for set in [&BOSS_TIERS[..], &KEY_KINDS[..], &TOKEN_KINDS[..]] {
            for (i, a) in set.iter().enumerate() {
                assert!(set[i + 1..].iter().all(|b| b.id != a.id), "{}", a.id);
            }
        }
    }

    #[test]
    fn test_lookup_helpers() {
        assert!(is_valid(&BOSS_TIERS, "T9_Cube"));
        assert!(!is_valid(&BOSS_TIERS, "T10_Nope"));
        assert_eq!(column_for(&BOSS_TIERS, "T8_Ascension"), 1);
        assert_eq!(column_for(&BOSS_TIERS, "unknown"), 0);
        assert_eq!(label_for(&KEY_KINDS, keys::GOD), "God Key");
        assert_eq!(label_for(&KEY_KINDS, "mystery"), "mystery");
    }
}
