//! Pure calculator logic for the ARK: Primal Descended resource calculator.
//!
//! This crate holds the static cost tables and every calculation that does
//! not need storage or a clock. Functions take plain data and return results,
//! so the engine crate, the command-line front end and the tests all share
//! the same code.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`aggregate`] | Cost × quantity totals, sorting, per-category sections, summary |
//! | [`calculator_type`] | Boss / key / ancient-token calculators and their tables |
//! | [`categories`] | Boss tiers, key kinds, token kinds (ids, labels, columns) |
//! | [`config`] | Counter bounds, storage keys, timings, theme |
//! | [`database`] | Boss item database |
//! | [`export`] | Text, Markdown, CSV and JSON result rendering |
//! | [`history`] | Bounded newest-first calculation history |
//! | [`keys`] | Key crafting component costs |
//! | [`selection`] | Validated, clamped counter state |
//! | [`snapshot`] | Versioned selection JSON for save, export and import |
//! | [`table`] | Item / cost table types and table validation |
//! | [`tokens`] | Ancient Token Cluster costs |

pub mod aggregate;
pub mod calculator_type;
pub mod categories;
pub mod config;
pub mod database;
pub mod export;
pub mod history;
pub mod keys;
pub mod selection;
pub mod snapshot;
pub mod table;
pub mod tokens;
