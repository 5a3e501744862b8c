//! Calculator engine - the single owner of all calculator state.
//!
//! Front ends call into the engine and then read back two queues:
//! [`ChangeEvent`]s (what to redraw) and [`Notification`]s (short messages
//! for the user). Store and format failures never escape as panics or hard
//! errors from the persistence paths; they become notifications.

use std::collections::{BTreeMap, BTreeSet};

use descended_logic::aggregate::{
    self, sorted_by_name, sorted_by_quantity, CalculatedResult, Section, Summary, Totals,
};
use descended_logic::calculator_type::CalculatorType;
use descended_logic::config::{AppConfig, Theme};
use descended_logic::export::{self, ExportFormat};
use descended_logic::history::History;
use descended_logic::selection::{RawQuantity, Selection, SelectionError};
use descended_logic::snapshot::{parse_snapshot, ImportError, SelectionSnapshot};
use descended_logic::table::CostTable;

use crate::autosave::Debouncer;
use crate::persistence;
use crate::store::KeyValueStore;

/// What changed, for redrawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent {
    /// One counter changed.
    Tier {
        calculator: CalculatorType,
        id: String,
        value: u32,
    },
    /// The whole selection changed (reset, import, restore, load).
    Selection(CalculatorType),
    CalculatorType(CalculatorType),
    Theme(Theme),
    History(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

/// A message for the user that disappears after `expires_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub message: String,
    pub expires_at: u64,
}

/// Main calculator engine
pub struct Calculator {
    config: AppConfig,
    store: Box<dyn KeyValueStore>,
    calculator_type: CalculatorType,
    selections: BTreeMap<CalculatorType, Selection>,
    tables: BTreeMap<CalculatorType, CostTable>,
    history: History,
    previous_results: Totals,
    theme: Theme,
    autosave: Debouncer,
    /// Selections edited since their last save.
    dirty: BTreeSet<CalculatorType>,
    events: Vec<ChangeEvent>,
    notifications: Vec<Notification>,
}

impl Calculator {
    /// Create an engine and restore everything the store holds. Unreadable
    /// entries fall back to defaults with a warning.
    pub fn open(config: AppConfig, store: Box<dyn KeyValueStore>, now: u64) -> Self {
        let limits = config.limits();
        let selections = CalculatorType::ALL
            .into_iter()
            .map(|t| (t, Selection::new(t, limits)))
            .collect();
        let tables = CalculatorType::ALL
            .into_iter()
            .map(|t| (t, t.table()))
            .collect();

        let mut calc = Self {
            autosave: Debouncer::new(config.auto_save_delay_ms),
            history: History::new(config.max_history_items),
            theme: config.default_theme,
            config,
            store,
            calculator_type: CalculatorType::default(),
            selections,
            tables,
            previous_results: Totals::new(),
            dirty: BTreeSet::new(),
            events: Vec::new(),
            notifications: Vec::new(),
        };

        match persistence::load_calculator_type(calc.store.as_ref(), &calc.config) {
            Ok(Some(t)) => calc.calculator_type = t,
            Ok(None) => {}
            Err(e) => log::warn!("could not read calculator type: {}", e),
        }
        match persistence::load_theme(calc.store.as_ref(), &calc.config) {
            Ok(Some(theme)) => calc.theme = theme,
            Ok(None) => {}
            Err(e) => log::warn!("could not read theme: {}", e),
        }

        match persistence::load_history(calc.store.as_ref(), &calc.config) {
            Ok(Some(history)) => calc.history = history,
            Ok(None) => {}
            Err(e) => log::warn!("ignoring saved history: {}", e),
        }

        let mut restored = false;
        for t in CalculatorType::ALL {
            restored |= calc.load_type(t, now) && calc.selections[&t].has_changes();
        }
        if restored {
            calc.notify(Level::Info, "Configuration restored from save", now);
        }
        log::info!(
            "calculator opened (type: {}, theme: {})",
            calc.calculator_type,
            calc.theme.id()
        );
        calc
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn calculator_type(&self) -> CalculatorType {
        self.calculator_type
    }

    /// Switch calculators and remember the choice.
    pub fn set_calculator_type(&mut self, calculator: CalculatorType, now: u64) {
        if calculator == self.calculator_type {
            return;
        }
        self.calculator_type = calculator;
        self.previous_results.clear();
        if let Err(e) =
            persistence::save_calculator_type(self.store.as_mut(), &self.config, calculator)
        {
            log::error!("could not save calculator type: {}", e);
            self.notify(Level::Error, format!("Could not save preference: {}", e), now);
        }
        self.events.push(ChangeEvent::CalculatorType(calculator));
    }

    /// The active selection.
    pub fn selection(&self) -> &Selection {
        self.selection_for(self.calculator_type)
    }

    pub fn selection_for(&self, calculator: CalculatorType) -> &Selection {
        &self.selections[&calculator]
    }

    fn selection_mut(&mut self) -> &mut Selection {
        let (calculator, limits) = (self.calculator_type, self.config.limits());
        self.selections
            .entry(calculator)
            .or_insert_with(|| Selection::new(calculator, limits))
    }

    /// The active cost table.
    pub fn table(&self) -> &CostTable {
        &self.tables[&self.calculator_type]
    }

    pub fn get_tier(&self, id: &str) -> u32 {
        self.selection().get(id)
    }

    /// Set a counter from raw input. Schedules an autosave on success.
    pub fn set_tier(
        &mut self,
        id: &str,
        raw: impl Into<RawQuantity>,
        now: u64,
    ) -> Result<u32, SelectionError> {
        let result = self.selection_mut().set(id, raw);
        self.after_edit(id, result, now)
    }

    /// Move a counter by a signed delta.
    pub fn change_tier(&mut self, id: &str, delta: i64, now: u64) -> Result<u32, SelectionError> {
        let result = self.selection_mut().change(id, delta);
        self.after_edit(id, result, now)
    }

    pub fn clear_tier(&mut self, id: &str, now: u64) -> Result<u32, SelectionError> {
        let result = self.selection_mut().clear(id);
        self.after_edit(id, result, now)
    }

    fn after_edit(
        &mut self,
        id: &str,
        result: Result<u32, SelectionError>,
        now: u64,
    ) -> Result<u32, SelectionError> {
        match &result {
            Ok(value) => {
                self.dirty.insert(self.calculator_type);
                self.autosave.schedule(now);
                self.events.push(ChangeEvent::Tier {
                    calculator: self.calculator_type,
                    id: id.to_string(),
                    value: *value,
                });
            }
            Err(e) => {
                log::warn!("{}", e);
                self.notify(Level::Warning, e.to_string(), now);
            }
        }
        result
    }

    /// Zero every counter of the active calculator and save at once.
    pub fn reset(&mut self, now: u64) {
        self.selection_mut().reset();
        self.previous_results.clear();
        self.save(now);
        self.events.push(ChangeEvent::Selection(self.calculator_type));
    }

    /// Totals for the active selection. Also kept as the previous results.
    pub fn calculate(&mut self) -> Totals {
        let totals = aggregate::aggregate(self.table(), self.selection());
        self.previous_results = totals.clone();
        totals
    }

    /// Totals sorted by item name.
    pub fn calculate_sorted(&mut self) -> Vec<CalculatedResult> {
        let totals = self.calculate();
        sorted_by_name(self.table(), &totals)
    }

    /// Totals sorted by descending quantity.
    pub fn calculate_by_quantity(&mut self) -> Vec<CalculatedResult> {
        let totals = self.calculate();
        sorted_by_quantity(self.table(), &totals)
    }

    /// Totals contributed by one counter alone.
    pub fn calculate_for_tier(&self, id: &str) -> Totals {
        aggregate::aggregate_for_category(self.table(), self.selection(), id)
    }

    /// Per-counter result sections, as the key and token views show them.
    pub fn sections(&self) -> Vec<Section> {
        aggregate::sections(self.table(), self.selection())
    }

    /// Results of the last `calculate`, for change highlighting.
    pub fn previous_results(&self) -> &Totals {
        &self.previous_results
    }

    pub fn has_changes(&self) -> bool {
        self.selection().has_changes()
    }

    pub fn summary(&self) -> Summary {
        let totals = aggregate::aggregate(self.table(), self.selection());
        aggregate::summarize(self.selection(), &totals)
    }

    /// Snapshot JSON of the active selection.
    pub fn export(&self, now: u64) -> String {
        SelectionSnapshot::capture(self.selection(), now).to_json()
    }

    /// Import snapshot JSON into the active selection. A malformed document
    /// changes nothing. Returns the number of counters set.
    pub fn import(&mut self, json: &str, now: u64) -> Result<usize, ImportError> {
        let imported = match parse_snapshot(json, self.selection().categories()) {
            Ok(imported) => imported,
            Err(e) => {
                log::error!("import failed: {}", e);
                self.notify(Level::Error, format!("Import failed: {}", e), now);
                return Err(e);
            }
        };

        let applied = imported.apply_to(self.selection_mut());
        if !imported.ignored.is_empty() {
            log::info!("import skipped {:?}", imported.ignored);
        }
        self.events.push(ChangeEvent::Selection(self.calculator_type));
        self.save(now);
        self.notify(Level::Success, format!("Imported {} values", applied), now);
        Ok(applied)
    }

    /// Save the active selection now. Returns false (and notifies) on failure.
    pub fn save(&mut self, now: u64) -> bool {
        self.save_type(self.calculator_type, now)
    }

    fn save_type(&mut self, calculator: CalculatorType, now: u64) -> bool {
        let key = persistence::selection_key(&self.config, calculator);
        let result = persistence::save_selection(
            self.store.as_mut(),
            &key,
            &self.selections[&calculator],
            now,
        );
        match result {
            Ok(()) => {
                self.dirty.remove(&calculator);
                log::debug!("saved {}", key);
                true
            }
            Err(e) => {
                log::error!("could not save {}: {}", key, e);
                self.notify(Level::Error, format!("Could not save: {}", e), now);
                false
            }
        }
    }

    /// Reload the active selection from the store.
    pub fn load(&mut self, now: u64) -> bool {
        let loaded = self.load_type(self.calculator_type, now);
        if loaded {
            self.events.push(ChangeEvent::Selection(self.calculator_type));
        }
        loaded
    }

    fn load_type(&mut self, calculator: CalculatorType, now: u64) -> bool {
        let key = persistence::selection_key(&self.config, calculator);
        let mut selection = Selection::new(calculator, self.config.limits());
        match persistence::load_selection(self.store.as_ref(), &key, &mut selection) {
            Ok(true) => {
                self.selections.insert(calculator, selection);
                true
            }
            Ok(false) => false,
            Err(e) => {
                log::warn!("ignoring saved {}: {}", key, e);
                self.notify(Level::Warning, format!("Saved data ignored: {}", e), now);
                false
            }
        }
    }

    /// Advance the clock: run a due autosave and expire notifications.
    pub fn update(&mut self, now: u64) {
        if self.autosave.fire(now) {
            self.save_dirty(now);
        }
        self.notifications.retain(|n| n.expires_at > now);
    }

    /// Save immediately if an autosave is pending.
    pub fn flush(&mut self, now: u64) {
        if self.autosave.is_pending() {
            self.autosave.cancel();
            self.save_dirty(now);
        }
    }

    pub fn autosave_pending(&self) -> bool {
        self.autosave.is_pending()
    }

    fn save_dirty(&mut self, now: u64) {
        let dirty: Vec<_> = self.dirty.iter().copied().collect();
        for calculator in dirty {
            self.save_type(calculator, now);
        }
    }

    /// Record the active selection and its totals.
    pub fn add_to_history(&mut self, now: u64) {
        let totals = self.calculate();
        let selection = &self.selections[&self.calculator_type];
        self.history.push(selection, totals, now);
        self.save_history(now);
        self.events.push(ChangeEvent::History(self.history.len()));
    }

    /// Re-apply a history entry to the active selection.
    pub fn restore_from_history(&mut self, index: usize, now: u64) -> bool {
        let calculator = self.calculator_type;
        let Some(selection) = self.selections.get_mut(&calculator) else {
            return false;
        };
        if !self.history.restore(index, selection) {
            return false;
        }
        self.dirty.insert(calculator);
        self.autosave.schedule(now);
        self.events.push(ChangeEvent::Selection(calculator));
        true
    }

    pub fn clear_history(&mut self, now: u64) {
        self.history.clear();
        self.save_history(now);
        self.events.push(ChangeEvent::History(0));
    }

    fn save_history(&mut self, now: u64) {
        let result = persistence::save_history(self.store.as_mut(), &self.config, &self.history);
        if let Err(e) = result {
            log::error!("could not save history: {}", e);
            self.notify(Level::Error, format!("Could not save history: {}", e), now);
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Render the name-sorted results in an export format.
    pub fn export_results(&mut self, format: ExportFormat) -> String {
        let results = self.calculate_sorted();
        export::render(&results, format)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip between dark and light and remember the choice.
    pub fn toggle_theme(&mut self, now: u64) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(e) = persistence::save_theme(self.store.as_mut(), &self.config, self.theme) {
            log::error!("could not save theme: {}", e);
            self.notify(Level::Error, format!("Could not save preference: {}", e), now);
        }
        self.events.push(ChangeEvent::Theme(self.theme));
        self.theme
    }

    fn notify(&mut self, level: Level, message: impl Into<String>, now: u64) {
        self.notifications.push(Notification {
            level,
            message: message.into(),
            expires_at: now.saturating_add(self.config.notification_ms),
        });
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    pub fn drain_events(&mut self) -> Vec<ChangeEvent> {
        std::mem::take(&mut self.events)
    }
}
