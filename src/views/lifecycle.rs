// src/views/lifecycle.rs
//
// Ownership of one initialization's animation loop and subscriptions.
// A handle is torn down exactly once (further calls are no-ops) and is
// always torn down before its replacement exists, so two loops for the
// same instance can never be live at once.

use std::cell::Cell;
use std::rc::Rc;

/// Cooperative cancellation flag shared with anything that may resume
/// after a suspension point (the font-readiness wait). Checked before any
/// mutating work once the wait resolves.
#[derive(Debug, Clone)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

#[derive(Debug)]
pub struct LifecycleHandle {
    cancelled: Rc<Cell<bool>>,
    torn_down: bool,
}

impl LifecycleHandle {
    pub fn new() -> Self {
        Self {
            cancelled: Rc::new(Cell::new(false)),
            torn_down: false,
        }
    }

    pub fn token(&self) -> CancelToken {
        CancelToken(Rc::clone(&self.cancelled))
    }

    pub fn is_active(&self) -> bool {
        !self.cancelled.get()
    }

    /// Cancels the loop and releases subscriptions. Idempotent.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.cancelled.set(true);
        self.torn_down = true;
    }
}

impl Default for LifecycleHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teardown_is_idempotent() {
        let mut handle = LifecycleHandle::new();
        assert!(handle.is_active());
        handle.teardown();
        handle.teardown();
        assert!(!handle.is_active());
    }

    #[test]
    fn test_token_sees_cancellation() {
        let mut handle = LifecycleHandle::new();
        let token = handle.token();
        assert!(!token.is_cancelled());
        handle.teardown();
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_replacement_handle_starts_active() {
        let mut handle = LifecycleHandle::new();
        let old_token = handle.token();
        handle.teardown();
        let handle = LifecycleHandle::new();
        assert!(old_token.is_cancelled());
        assert!(handle.is_active());
    }
}
