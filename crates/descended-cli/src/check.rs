//! Self-check harness for the built-in tables and calculation rules.
//!
//! Runs entirely in-process against a memory store. Prints a pass/fail list
//! and reports whether everything passed.

use descended_core::engine::Calculator;
use descended_core::store::MemoryStore;
use descended_logic::aggregate::{aggregate, merge_totals};
use descended_logic::calculator_type::CalculatorType;
use descended_logic::config::{validate_config, AppConfig};
use descended_logic::database;
use descended_logic::selection::{CountLimits, Selection};
use descended_logic::table::validate_table;

// ── Test harness ────────────────────────────────────────────────────────

pub struct TestResult {
    pub name: String,
    pub passed: bool,
    pub detail: String,
}

/// Run every check. Returns true when all passed.
pub fn run(config: &AppConfig, verbose: bool) -> bool {
    println!("=== Descended Calculator Check ===\n");

    let mut results = Vec::new();

    // 1. Static tables
    results.extend(validate_tables());

    // 2. Configuration
    results.extend(validate_settings(config));

    // 3. Calculation rules
    results.extend(validate_calculation());

    // 4. Import/export
    results.extend(validate_snapshots());

    // ── Summary ──
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.len() - passed;

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed,
        results.len(),
        failed
    );
    failed == 0
}

// ── 1. Tables ───────────────────────────────────────────────────────────

fn validate_tables() -> Vec<TestResult> {
    let mut results = Vec::new();

    for calculator in CalculatorType::ALL {
        let table = calculator.table();
        let errors = validate_table(&table, calculator.categories());
        results.push(TestResult {
            name: format!("{}_table_valid", calculator.id()),
            passed: errors.is_empty(),
            detail: if errors.is_empty() {
                format!("{} items", table.len())
            } else {
                errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ")
            },
        });

        let unused: Vec<_> = calculator
            .categories()
            .iter()
            .filter(|c| !table.items().iter().any(|item| item.cost(c.id) > 0))
            .map(|c| c.id)
            .collect();
        results.push(TestResult {
            name: format!("{}_every_tier_costs_something", calculator.id()),
            passed: unused.is_empty(),
            detail: if unused.is_empty() {
                format!("{} tiers", calculator.categories().len())
            } else {
                format!("no costs for {:?}", unused)
            },
        });
    }

    let boss = database::boss_table();
    let leaked: Vec<_> = boss
        .items()
        .iter()
        .filter(|i| i.name.to_lowercase().contains("key"))
        .map(|i| i.name)
        .collect();
    results.push(TestResult {
        name: "boss_table_excludes_keys".into(),
        passed: leaked.is_empty(),
        detail: format!("{} items, {} key items", boss.len(), leaked.len()),
    });

    results
}

// ── 2. Settings ─────────────────────────────────────────────────────────

fn validate_settings(config: &AppConfig) -> Vec<TestResult> {
    let errors = validate_config(config);
    vec![TestResult {
        name: "config_valid".into(),
        passed: errors.is_empty(),
        detail: if errors.is_empty() {
            format!("counts {}..={}", config.min_count, config.max_count)
        } else {
            errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ")
        },
    }]
}

// ── 3. Calculation ──────────────────────────────────────────────────────

fn validate_calculation() -> Vec<TestResult> {
    let mut results = Vec::new();
    let limits = CountLimits::default();

    // Clamping at both ends
    let mut sel = Selection::new(CalculatorType::Boss, limits);
    let high = sel.set("T4_Abyssal", 5000).unwrap_or(0);
    let low = sel.set("T4_Abyssal", -5).unwrap_or(1);
    let text = sel.set("T4_Abyssal", "12abc").unwrap_or(0);
    results.push(TestResult {
        name: "quantities_clamped".into(),
        passed: high == limits.max && low == limits.min && text == 12,
        detail: format!("5000→{}, -5→{}, \"12abc\"→{}", high, low, text),
    });

    // 2 × T4 Abyssal = 4 Artefact
    let table = CalculatorType::Boss.table();
    let mut sel = Selection::new(CalculatorType::Boss, limits);
    let _ = sel.set("T4_Abyssal", 2);
    let totals = aggregate(&table, &sel);
    let artefacts = totals.get("Artefact").copied().unwrap_or(0);
    results.push(TestResult {
        name: "two_abyssal_four_artefacts".into(),
        passed: artefacts == 4,
        detail: format!("Artefact = {}", artefacts),
    });

    // Linearity over every pair of disjoint tiers
    let mut broken = Vec::new();
    let tiers = CalculatorType::Boss.categories();
    for (i, a) in tiers.iter().enumerate() {
        for b in &tiers[i + 1..] {
            let mut left = Selection::new(CalculatorType::Boss, limits);
            let mut right = Selection::new(CalculatorType::Boss, limits);
            let mut both = Selection::new(CalculatorType::Boss, limits);
            let _ = left.set(a.id, 3);
            let _ = right.set(b.id, 7);
            let _ = both.set(a.id, 3);
            let _ = both.set(b.id, 7);
            let merged = merge_totals(&aggregate(&table, &left), &aggregate(&table, &right));
            if merged != aggregate(&table, &both) {
                broken.push(format!("{}+{}", a.id, b.id));
            }
        }
    }
    results.push(TestResult {
        name: "aggregation_linear".into(),
        passed: broken.is_empty(),
        detail: if broken.is_empty() {
            "all tier pairs".into()
        } else {
            broken.join(", ")
        },
    });

    results
}

// ── 4. Snapshots ────────────────────────────────────────────────────────

fn validate_snapshots() -> Vec<TestResult> {
    let mut results = Vec::new();
    let config = AppConfig::default();

    let mut source = Calculator::open(config.clone(), Box::new(MemoryStore::new()), 0);
    let _ = source.set_tier("T5_Order", 4, 0);
    let _ = source.set_tier("T9_4Seal", 999, 0);
    let json = source.export(0);

    let mut target = Calculator::open(config.clone(), Box::new(MemoryStore::new()), 0);
    let imported = target.import(&json, 0).is_ok();
    results.push(TestResult {
        name: "export_import_roundtrip".into(),
        passed: imported && target.selection() == source.selection(),
        detail: format!("{} bytes", json.len()),
    });

    let before = target.selection().clone();
    let rejected = target.import("{\"selection\": [1, 2]}", 0).is_err();
    results.push(TestResult {
        name: "malformed_import_rejected".into(),
        passed: rejected && target.selection() == &before,
        detail: "selection unchanged".into(),
    });

    let lenient = target
        .import(
            r#"{"version":1,"selection":{"T5_Order":"many","Nope":3,"T6_Giga":2.9},"timestamp":0}"#,
            0,
        )
        .unwrap_or(0);
    results.push(TestResult {
        name: "import_skips_unknown_and_non_numeric".into(),
        passed: lenient == 1 && target.get_tier("T6_Giga") == 2 && target.get_tier("T5_Order") == 4,
        detail: format!("{} value(s) applied", lenient),
    });

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_checks_pass() {
        let failures: Vec<_> = validate_tables()
            .into_iter()
            .chain(validate_settings(&AppConfig::default()))
            .chain(validate_calculation())
            .chain(validate_snapshots())
            .filter(|r| !r.passed)
            .map(|r| format!("{}: {}", r.name, r.detail))
            .collect();
        assert!(failures.is_empty(), "{:?}", failures);
    }

    #[test]
    fn test_bad_config_fails() {
        let config = AppConfig {
            min_count: 10,
            max_count: 5,
            ..AppConfig::default()
        };
        assert!(!validate_settings(&config)[0].passed);
    }
}
