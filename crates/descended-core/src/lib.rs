//! Descended Core - Calculator Engine
//!
//! Owns everything stateful about the calculator: one selection per
//! calculator type, the key-value store they are saved to, the debounced
//! autosave, the history list and the user's theme.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `store` | `KeyValueStore` trait, in-memory and file backends |
//! | `persistence` | Selection/preference save and load under fixed keys |
//! | `autosave` | Deadline-based debounce driven by an explicit clock |
//! | `engine` | `Calculator`, the single owner of state |
//!
//! # Example
//!
//! ```rust
//! use descended_core::prelude::*;
//!
//! let mut calc = Calculator::open(AppConfig::default(), Box::new(MemoryStore::new()), 0);
//! calc.set_tier("T4_Abyssal", 2, 0).unwrap();
//!
//! let totals = calc.calculate();
//! assert_eq!(totals["Artefact"], 4);
//!
//! // The save lands once the autosave delay has passed
//! calc.update(1_000);
//! ```

pub mod autosave;
pub mod engine;
pub mod persistence;
pub mod store;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::engine::{Calculator, ChangeEvent, Level, Notification};
    pub use crate::store::{FileStore, KeyValueStore, MemoryStore, StoreError};
    pub use descended_logic::calculator_type::CalculatorType;
    pub use descended_logic::config::{AppConfig, Theme};
    pub use descended_logic::export::ExportFormat;
}
