//! Counter selection — one bounded quantity per category.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::calculator_type::CalculatorType;
use crate::categories::{self, Category};

/// Bounds and fallback for a counter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountLimits {
    pub min: u32,
    pub max: u32,
    /// Used when input cannot be parsed.
    pub default: u32,
}

impl Default for CountLimits {
    fn default() -> Self {
        Self {
            min: 0,
            max: 999,
            default: 0,
        }
    }
}

impl CountLimits {
    pub fn clamp(&self, value: i64) -> u32 {
        value.clamp(self.min as i64, self.max.max(self.min) as i64) as u32
    }
}

/// Unvalidated counter input, either typed text or a number.
#[derive(Debug, Clone, PartialEq)]
pub enum RawQuantity {
    Number(f64),
    Text(String),
}

impl From<i64> for RawQuantity {
    fn from(v: i64) -> Self {
        RawQuantity::Number(v as f64)
    }
}

impl From<i32> for RawQuantity {
    fn from(v: i32) -> Self {
        RawQuantity::Number(v as f64)
    }
}

impl From<u32> for RawQuantity {
    fn from(v: u32) -> Self {
        RawQuantity::Number(v as f64)
    }
}

impl From<f64> for RawQuantity {
    fn from(v: f64) -> Self {
        RawQuantity::Number(v)
    }
}

impl From<&str> for RawQuantity {
    fn from(v: &str) -> Self {
        RawQuantity::Text(v.to_string())
    }
}

impl From<String> for RawQuantity {
    fn from(v: String) -> Self {
        RawQuantity::Text(v)
    }
}

/// Parse the leading integer of a string: optional whitespace, an optional
/// sign, then digits. Anything after the digits is ignored. Returns `None`
/// when there are no digits. Values past `i64` saturate.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let s = text.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen = true;
        value = value.saturating_mul(10).saturating_add((b - b'0') as i64);
    }

    seen.then(|| if negative { -value } else { value })
}

/// Turn raw input into a counter value inside `limits`.
pub fn validate_quantity(raw: &RawQuantity, limits: &CountLimits) -> u32 {
    let value = match raw {
        RawQuantity::Number(n) if n.is_nan() => None,
        // `as` saturates out-of-range floats, infinities included
        RawQuantity::Number(n) => Some(n.trunc() as i64),
        RawQuantity::Text(t) => parse_leading_int(t),
    };
    limits.clamp(value.unwrap_or(limits.default as i64))
}

/// Selection operation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    UnknownCategory {
        calculator: CalculatorType,
        id: String,
    },
}

impl std::fmt::Display for SelectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionError::UnknownCategory { calculator, id } => {
                write!(f, "unknown tier \"{}\" for the {} calculator", id, calculator)
            }
        }
    }
}

impl std::error::Error for SelectionError {}

/// The quantities entered for one calculator. Always holds one entry per
/// category, each inside the limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    calculator: CalculatorType,
    limits: CountLimits,
    counts: BTreeMap<&'static str, u32>,
}

impl Selection {
    pub fn new(calculator: CalculatorType, limits: CountLimits) -> Self {
        let start = limits.clamp(limits.default as i64);
        let counts = calculator
            .categories()
            .iter()
            .map(|c| (c.id, start))
            .collect();
        Self {
            calculator,
            limits,
            counts,
        }
    }

    pub fn calculator(&self) -> CalculatorType {
        self.calculator
    }

    pub fn limits(&self) -> CountLimits {
        self.limits
    }

    pub fn categories(&self) -> &'static [Category] {
        self.calculator.categories()
    }

    fn resolve(&self, id: &str) -> Result<&'static str, SelectionError> {
        categories::find(self.categories(), id)
            .map(|c| c.id)
            .ok_or_else(|| SelectionError::UnknownCategory {
                calculator: self.calculator,
                id: id.to_string(),
            })
    }

    /// Current quantity; the default for unknown ids.
    pub fn get(&self, id: &str) -> u32 {
        self.counts.get(id).copied().unwrap_or(self.limits.default)
    }

    /// Validate and store a quantity, returning the value actually stored.
    pub fn set(&mut self, id: &str, raw: impl Into<RawQuantity>) -> Result<u32, SelectionError> {
        let key = self.resolve(id)?;
        let value = validate_quantity(&raw.into(), &self.limits);
        self.counts.insert(key, value);
        Ok(value)
    }

    /// Add a signed delta to a counter.
    pub fn change(&mut self, id: &str, delta: i64) -> Result<u32, SelectionError> {
        let current = self.get(id) as i64;
        self.set(id, current.saturating_add(delta))
    }

    pub fn clear(&mut self, id: &str) -> Result<u32, SelectionError> {
        self.set(id, self.limits.default)
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.calculator, self.limits);
    }

    /// True when any counter is above zero.
    pub fn has_changes(&self) -> bool {
        self.counts.values().any(|&q| q > 0)
    }

    /// Categories with their quantities, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static Category, u32)> + '_ {
        self.categories().iter().map(|c| (c, self.get(c.id)))
    }

    /// Only the categories with a quantity above zero.
    pub fn selected(&self) -> impl Iterator<Item = (&'static Category, u32)> + '_ {
        self.iter().filter(|(_, q)| *q > 0)
    }

    /// Counters shown in one grid column.
    pub fn tiers_for_column(&self, column: u8) -> Vec<(&'static Category, u32)> {
        self.iter().filter(|(c, _)| c.column == column).collect()
    }

    pub fn total_quantity(&self) -> u64 {
        self.counts.values().map(|&q| q as u64).sum()
    }

    /// Plain id → quantity map, as persisted.
    pub fn to_map(&self) -> BTreeMap<String, u32> {
        self.counts
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect()
    }
}
