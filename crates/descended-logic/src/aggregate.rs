//! Aggregation — unit cost × quantity summed per item across categories.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::selection::Selection;
use crate::table::{name_sort_key, CostTable};

/// Item name → total quantity. Items that total zero are absent.
pub type Totals = BTreeMap<String, u64>;

/// One line of the results list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatedResult {
    pub item: String,
    pub quantity: u64,
    pub icon: String,
}

fn accumulate(totals: &mut Totals, table: &CostTable, category: &str, quantity: u32) {
    if quantity == 0 {
        return;
    }
    for item in table.items() {
        let cost = item.cost(category);
        if cost > 0 {
            *totals.entry(item.name.to_string()).or_insert(0) += cost as u64 * quantity as u64;
        }
    }
}

/// Total every item over all categories with a non-zero quantity.
pub fn aggregate(table: &CostTable, selection: &Selection) -> Totals {
    let mut totals = Totals::new();
    for (category, quantity) in selection.selected() {
        accumulate(&mut totals, table, category.id, quantity);
    }
    totals
}

/// Totals contributed by a single category.
pub fn aggregate_for_category(table: &CostTable, selection: &Selection, category: &str) -> Totals {
    let mut totals = Totals::new();
    accumulate(&mut totals, table, category, selection.get(category));
    totals
}

/// Item-wise sum of two totals.
pub fn merge_totals(a: &Totals, b: &Totals) -> Totals {
    let mut merged = a.clone();
    for (item, qty) in b {
        *merged.entry(item.clone()).or_insert(0) += qty;
    }
    merged
}

fn to_results(table: &CostTable, totals: &Totals) -> Vec<CalculatedResult> {
    totals
        .iter()
        .map(|(item, &quantity)| CalculatedResult {
            item: item.clone(),
            quantity,
            icon: table.icon(item),
        })
        .collect()
}

/// Results sorted by name, ignoring case and accents.
pub fn sorted_by_name(table: &CostTable, totals: &Totals) -> Vec<CalculatedResult> {
    let mut results = to_results(table, totals);
    results.sort_by_cached_key(|r| (name_sort_key(&r.item), r.item.clone()));
    results
}

/// Results sorted by descending quantity; ties fall back to name order.
pub fn sorted_by_quantity(table: &CostTable, totals: &Totals) -> Vec<CalculatedResult> {
    let mut results = sorted_by_name(table, totals);
    results.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    results
}

/// Results for one category, shown under its own heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub category: &'static str,
    pub title: &'static str,
    pub quantity: u32,
    pub results: Vec<CalculatedResult>,
}

/// One section per selected category, in display order.
pub fn sections(table: &CostTable, selection: &Selection) -> Vec<Section> {
    selection
        .selected()
        .map(|(category, quantity)| {
            let totals = aggregate_for_category(table, selection, category.id);
            Section {
                category: category.id,
                title: category.label,
                quantity,
                results: sorted_by_quantity(table, &totals),
            }
        })
        .filter(|s| !s.results.is_empty())
        .collect()
}

/// Counts shown next to the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub tiers_selected: usize,
    pub total_quantity: u64,
    pub total_item_types: usize,
}

pub fn summarize(selection: &Selection, totals: &Totals) -> Summary {
    Summary {
        tiers_selected: selection.selected().count(),
        total_quantity: selection.total_quantity(),
        total_item_types: totals.len(),
    }
}
