//! Advisory capture

use std::cell::RefCell;

use kubext_core::KitLogger;

/// Collects every warning it receives, in order.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    warnings: RefCell<Vec<String>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.borrow().is_empty()
    }
}

impl KitLogger for RecordingLogger {
    fn warn(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }
}
