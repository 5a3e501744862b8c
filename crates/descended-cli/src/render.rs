//! Plain-text views of the calculator state.

use std::fmt::Write;

use descended_core::engine::{Level, Notification};
use descended_logic::aggregate::{CalculatedResult, Section, Summary};
use descended_logic::calculator_type::CalculatorType;
use descended_logic::categories::NUM_COLUMNS;
use descended_logic::history::History;
use descended_logic::selection::Selection;
use descended_logic::tokens::mobs_needed;

/// Counter grid, one block per column.
pub fn counters(selection: &Selection) -> String {
    let calculator = selection.calculator();
    let mut out = format!(
        "{} {} - {}\n",
        calculator.icon(),
        calculator.label(),
        calculator.description()
    );
    for column in 0..NUM_COLUMNS {
        let tiers = selection.tiers_for_column(column);
        if tiers.is_empty() {
            continue;
        }
        out.push('\n');
        for (category, qty) in tiers {
            let _ = writeln!(out, "  {:<24} {:>3}", category.label, qty);
        }
    }
    out
}

/// Counter ids, for use with `set`.
pub fn tier_ids(selection: &Selection) -> String {
    let mut out = String::new();
    for (category, _) in selection.iter() {
        let _ = writeln!(out, "{:<16} {}", category.id, category.label);
    }
    out
}

/// Result lines; token counts on the token calculator also show mob kills.
pub fn results(calculator: CalculatorType, results: &[CalculatedResult]) -> String {
    if results.is_empty() {
        return "No resources needed. Set some counters first.\n".to_string();
    }
    let mut out = String::new();
    for r in results {
        let _ = write!(out, "{:>8}  {}", r.quantity, r.item);
        if calculator == CalculatorType::AncientToken && r.item.ends_with(" Token") {
            let _ = write!(out, "  ({} mobs)", mobs_needed(r.quantity));
        }
        out.push('\n');
    }
    out
}

pub fn sections(calculator: CalculatorType, sections: &[Section]) -> String {
    if sections.is_empty() {
        return "Nothing selected.\n".to_string();
    }
    let mut out = String::new();
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{} x{}", section.title, section.quantity);
        out.push_str(&results(calculator, &section.results));
    }
    out
}

pub fn summary(summary: &Summary) -> String {
    format!(
        "Tiers selected: {}\nTotal quantity: {}\nItem types:     {}\n",
        summary.tiers_selected, summary.total_quantity, summary.total_item_types
    )
}

pub fn history(history: &History) -> String {
    if history.is_empty() {
        return "History is empty.\n".to_string();
    }
    let mut out = String::new();
    for (i, entry) in history.iter().enumerate() {
        let picked: Vec<String> = entry
            .selection
            .iter()
            .filter(|(_, q)| **q > 0)
            .map(|(id, q)| format!("{}={}", id, q))
            .collect();
        let _ = writeln!(
            out,
            "[{}] {} @{}  {}  ({} item types)",
            i,
            entry.calculator,
            entry.timestamp,
            picked.join(" "),
            entry.results.len()
        );
    }
    out
}

pub fn notification(n: &Notification) -> String {
    let tag = match n.level {
        Level::Info => "info",
        Level::Success => "ok",
        Level::Warning => "warning",
        Level::Error => "error",
    };
    format!("[{}] {}", tag, n.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use descended_logic::aggregate::{aggregate, sorted_by_name};
    use descended_logic::categories::tokens;
    use descended_logic::selection::CountLimits;

    #[test]
    fn test_counters_lists_every_tier() {
        let mut sel = Selection::new(CalculatorType::Boss, CountLimits::default());
        sel.set("T8_Ascension", 7).unwrap();
        let text = counters(&sel);
        assert!(text.contains("Boss"));
        assert!(text.contains("T8 Ascension"));
        assert!(text.lines().any(|l| l.contains("T8 Ascension") && l.ends_with("  7")));
        assert_eq!(text.lines().filter(|l| l.starts_with("  T")).count(), 18);
    }

    #[test]
    fn test_token_results_show_mobs() {
        let mut sel = Selection::new(CalculatorType::AncientToken, CountLimits::default());
        sel.set(tokens::CLUSTER, 30).unwrap();
        let table = CalculatorType::AncientToken.table();
        let rows = sorted_by_name(&table, &aggregate(&table, &sel));
        let text = results(CalculatorType::AncientToken, &rows);
        assert!(text.contains("60  Rex Token  (3 mobs)"));
    }

    #[test]
    fn test_empty_results() {
        assert!(results(CalculatorType::Boss, &[]).starts_with("No resources"));
        assert_eq!(history(&History::new(3)), "History is empty.\n");
    }
}
