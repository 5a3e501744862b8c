//! Debounced autosave timer.
//!
//! Time is passed in explicitly (milliseconds since the epoch), the same
//! way the engine is driven by `update`, so the timer needs no thread.

/// A save deadline that moves back with every new edit.
#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    delay_ms: u64,
    deadline: Option<u64>,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            deadline: None,
        }
    }

    /// Replace any pending deadline with `now + delay`.
    pub fn schedule(&mut self, now: u64) {
        self.deadline = Some(now.saturating_add(self.delay_ms));
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// True once when the deadline has passed; clears it.
    pub fn fire(&mut self, now: u64) -> bool {
        match self.deadline {
            Some(at) if now >= at => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
