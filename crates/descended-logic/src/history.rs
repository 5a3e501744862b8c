//! Calculation history — recent selections with their results, newest first.

use std::collections::{BTreeMap, VecDeque};

use serde::{Deserialize, Serialize};

use crate::aggregate::Totals;
use crate::calculator_type::CalculatorType;
use crate::selection::Selection;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: u64,
    pub calculator: CalculatorType,
    pub selection: BTreeMap<String, u32>,
    pub results: Totals,
}

/// Bounded history; pushing past capacity drops the oldest entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, selection: &Selection, results: Totals, timestamp: u64) {
        self.entries.push_front(HistoryEntry {
            timestamp,
            calculator: selection.calculator(),
            selection: selection.to_map(),
            results,
        });
        self.entries.truncate(self.capacity.max(1));
    }

    /// Change the cap, dropping the oldest entries past it.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        self.entries.truncate(capacity.max(1));
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Re-apply a stored selection. Returns false for an out-of-range index
    /// or an entry taken from a different calculator.
    pub fn restore(&self, index: usize, selection: &mut Selection) -> bool {
        let Some(entry) = self.entries.get(index) else {
            return false;
        };
        if entry.calculator != selection.calculator() {
            return false;
        }
        for (id, &qty) in &entry.selection {
            // Same calculator, so every id resolves
            let _ = selection.set(id, qty);
        }
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}
