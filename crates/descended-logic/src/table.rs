//! Cost table types — items and their per-category unit costs.

use serde::Serialize;

use crate::categories::{self, Category};

/// Directory the icon files are served from.
pub const ICONS_PATH: &str = "/icons-20260117T210540Z-1-001/icons/";

/// Icon file used when an item has none of its own.
pub const DEFAULT_ICON: &str = "default.png";

/// A resource item and what it costs per category.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Item {
    pub name: &'static str,
    /// Icon file name, relative to [`ICONS_PATH`].
    pub icon: &'static str,
    /// (category id, unit cost) pairs. Categories not listed cost 0.
    pub costs: &'static [(&'static str, u32)],
}

impl Item {
    /// Unit cost at a category, 0 if absent.
    pub fn cost(&self, category: &str) -> u32 {
        self.costs
            .iter()
            .find(|(id, _)| *id == category)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    pub fn has_any_cost(&self) -> bool {
        self.costs.iter().any(|(_, c)| *c > 0)
    }

    /// Full icon path, falling back to the default icon.
    pub fn icon_path(&self) -> String {
        icon_path(self.icon)
    }
}

/// Resolve an icon file name under [`ICONS_PATH`].
pub fn icon_path(file: &str) -> String {
    let file = if file.is_empty() { DEFAULT_ICON } else { file };
    format!("{}{}", ICONS_PATH, file)
}

/// An ordered view over a set of static items.
#[derive(Debug, Clone)]
pub struct CostTable {
    items: Vec<&'static Item>,
}

impl CostTable {
    pub fn new(items: Vec<&'static Item>) -> Self {
        Self { items }
    }

    pub fn from_slice(items: &'static [Item]) -> Self {
        Self {
            items: items.iter().collect(),
        }
    }

    pub fn items(&self) -> &[&'static Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&'static Item> {
        self.items.iter().copied().find(|i| i.name == name)
    }

    /// Unit cost of `item` at `category`; 0 for unknown items or categories.
    pub fn cost(&self, item: &str, category: &str) -> u32 {
        self.get(item).map(|i| i.cost(category)).unwrap_or(0)
    }

    /// Icon path for an item; empty string when the item is unknown.
    pub fn icon(&self, item: &str) -> String {
        self.get(item).map(Item::icon_path).unwrap_or_default()
    }

    /// Item names sorted the way results are displayed.
    pub fn names_sorted(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.items.iter().map(|i| i.name).collect();
        names.sort_by_cached_key(|n| (name_sort_key(n), n.to_string()));
        names
    }
}

/// Collation key for item names: case- and accent-insensitive.
pub fn name_sort_key(name: &str) -> String {
    name.chars().flat_map(fold_char).collect()
}

fn fold_char(c: char) -> impl Iterator<Item = char> {
    let base = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'a',
        'ç' | 'Ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' | 'È' | 'É' | 'Ê' | 'Ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'Ì' | 'Í' | 'Î' | 'Ï' => 'i',
        'ñ' | 'Ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' | 'Ù' | 'Ú' | 'Û' | 'Ü' => 'u',
        'ý' | 'ÿ' | 'Ý' => 'y',
        other => other,
    };
    base.to_lowercase()
}

/// Structural problem found in a cost table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    MissingIcon(&'static str),
    UnknownCategory {
        item: &'static str,
        category: &'static str,
    },
    DuplicateItem(&'static str),
    DuplicateCost {
        item: &'static str,
        category: &'static str,
    },
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::MissingIcon(item) => write!(f, "{}: missing icon", item),
            TableError::UnknownCategory { item, category } => {
                write!(f, "{}: unknown tier \"{}\"", item, category)
            }
            TableError::DuplicateItem(item) => write!(f, "{}: duplicate item name", item),
            TableError::DuplicateCost { item, category } => {
                write!(f, "{}: cost for \"{}\" listed twice", item, category)
            }
        }
    }
}

/// Check a table against the category set it is meant to be used with.
pub fn validate_table(table: &CostTable, categories: &[Category]) -> Vec<TableError> {
    let mut errors = Vec::new();

    for (i, item) in table.items().iter().enumerate() {
        if item.icon.is_empty() {
            errors.push(TableError::MissingIcon(item.name));
        }
        if table.items()[..i].iter().any(|other| other.name == item.name) {
            errors.push(TableError::DuplicateItem(item.name));
        }
        for (j, &(category, _)) in item.costs.iter().enumerate() {
            if !categories::is_valid(categories, category) {
                errors.push(TableError::UnknownCategory {
                    item: item.name,
                    category,
                });
            }
            if item.costs[..j].iter().any(|(c, _)| *c == category) {
                errors.push(TableError::DuplicateCost {
                    item: item.name,
                    category,
                });
            }
        }
    }

    errors
}
