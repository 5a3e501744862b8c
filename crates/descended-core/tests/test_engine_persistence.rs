//! Integration tests for the engine against real stores.
//!
//! Exercises: edit → debounce → save → reopen → restore, for the file
//! store and for each calculator type.

use descended_core::prelude::*;
use descended_core::store::FileStore;

// ── Helpers ────────────────────────────────────────────────────────────

fn open_file(path: &std::path::Path, now: u64) -> Calculator {
    let store = FileStore::open(path).unwrap();
    Calculator::open(AppConfig::default(), Box::new(store), now)
}

// ── Persistence ────────────────────────────────────────────────────────

#[test]
fn autosave_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("calc.store");

    let mut calc = open_file(&path, 0);
    calc.set_tier("T8_Descension", 3, 10).unwrap();
    calc.set_tier("T4_Celestial", "12abc", 20).unwrap();
    calc.update(1_020);
    drop(calc);

    let mut reopened = open_file(&path, 5_000);
    assert_eq!(reopened.get_tier("T8_Descension"), 3);
    assert_eq!(reopened.get_tier("T4_Celestial"), 12);
    let notes = reopened.drain_notifications();
    assert!(notes.iter().any(|n| n.level == Level::Info));
}

#[test]
fn edit_without_elapsed_delay_is_not_saved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("calc.store");

    let mut calc = open_file(&path, 0);
    calc.set_tier("T9_2Seal", 4, 0).unwrap();
    calc.update(500);
    drop(calc);

    let reopened = open_file(&path, 600);
    assert_eq!(reopened.get_tier("T9_2Seal"), 0);
}

#[test]
fn flush_saves_pending_edit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("calc.store");

    let mut calc = open_file(&path, 0);
    calc.set_tier("T9_2Seal", 4, 0).unwrap();
    calc.flush(1);
    assert!(!calc.autosave_pending());
    drop(calc);

    assert_eq!(open_file(&path, 2).get_tier("T9_2Seal"), 4);
}

#[test]
fn stored_blob_has_versioned_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("calc.store");

    let mut calc = open_file(&path, 0);
    calc.set_tier("T6_Normal", 2, 0).unwrap();
    assert!(calc.save(1_234));
    drop(calc);

    let store = FileStore::open(&path).unwrap();
    let blob = store.get("calculator_selection").unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&blob).unwrap();
    assert_eq!(value["version"], 1);
    assert_eq!(value["timestamp"], 1_234);
    assert_eq!(value["selection"]["T6_Normal"], 2);
    assert_eq!(value["selection"]["T9_Cube"], 0);
}

#[test]
fn corrupt_selection_falls_back_to_defaults() {
    let mut store = MemoryStore::new();
    store.set("calculator_selection", "not json at all").unwrap();
    store.set("calculator_theme", "light").unwrap();

    let mut calc = Calculator::open(AppConfig::default(), Box::new(store), 0);
    assert!(!calc.has_changes());
    assert_eq!(calc.theme(), Theme::Light);
    let notes = calc.drain_notifications();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].level, Level::Warning);
}

// ── Calculator types ───────────────────────────────────────────────────

#[test]
fn each_type_saves_under_its_own_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("calc.store");

    let mut calc = open_file(&path, 0);
    calc.set_tier("T4_Abyssal", 1, 0).unwrap();
    calc.set_calculator_type(CalculatorType::Key, 0);
    calc.set_tier("Celestial_Key", 2, 0).unwrap();
    calc.set_calculator_type(CalculatorType::AncientToken, 0);
    calc.set_tier("Ancient_Dino", 3, 0).unwrap();
    calc.update(1_000);
    drop(calc);

    let reopened = open_file(&path, 0);
    assert_eq!(reopened.calculator_type(), CalculatorType::AncientToken);
    assert_eq!(reopened.get_tier("Ancient_Dino"), 3);
    assert_eq!(
        reopened.selection_for(CalculatorType::Key).get("Celestial_Key"),
        2
    );
    assert_eq!(
        reopened.selection_for(CalculatorType::Boss).get("T4_Abyssal"),
        1
    );
}

#[test]
fn import_into_key_calculator_ignores_boss_tiers() {
    let mut calc = Calculator::open(AppConfig::default(), Box::new(MemoryStore::new()), 0);
    calc.set_calculator_type(CalculatorType::Key, 0);
    let applied = calc
        .import(
            r#"{"version":1,"selection":{"God_Key":1,"T4_Abyssal":5},"timestamp":1}"#,
            0,
        )
        .unwrap();
    assert_eq!(applied, 1);

    let totals = calc.calculate();
    assert_eq!(totals["Unreal Essence"], 500);
    assert!(!totals.contains_key("Artefact"));
}

#[test]
fn export_then_import_into_fresh_engine() {
    let mut first = Calculator::open(AppConfig::default(), Box::new(MemoryStore::new()), 0);
    first.set_tier("T7_DodoRouge", 11, 0).unwrap();
    first.set_tier("T9_Cube", 999, 0).unwrap();
    let json = first.export(42);

    let mut second = Calculator::open(AppConfig::default(), Box::new(MemoryStore::new()), 0);
    second.import(&json, 0).unwrap();
    assert_eq!(second.selection(), first.selection());
    assert_eq!(second.calculate(), first.calculate());
}

#[test]
fn events_describe_changes() {
    let mut calc = Calculator::open(AppConfig::default(), Box::new(MemoryStore::new()), 0);
    calc.drain_events();

    calc.set_tier("T5_Chaos", 2, 0).unwrap();
    calc.reset(0);
    calc.toggle_theme(0);
    calc.set_calculator_type(CalculatorType::Key, 0);

    let events = calc.drain_events();
    assert_eq!(
        events,
        vec![
            ChangeEvent::Tier {
                calculator: CalculatorType::Boss,
                id: "T5_Chaos".to_string(),
                value: 2,
            },
            ChangeEvent::Selection(CalculatorType::Boss),
            ChangeEvent::Theme(Theme::Light),
            ChangeEvent::CalculatorType(CalculatorType::Key),
        ]
    );
}
