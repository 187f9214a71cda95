//! Drawer visibility state and the shared handle that controls it.
//!
//! The drawer is the one piece of cross-cutting state in the shell: the
//! header opens it, the drawer surface closes it, and neither references
//! the other directly. Both hold a clone of [`DrawerHandle`], created once
//! by the application context, so every consumer observes the same value.

use std::sync::{Arc, Mutex};

/// Drawer visibility. Starts closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawerState {
    pub open: bool,
}

/// Clone-able handle to the single drawer state.
///
/// All clones share one underlying [`DrawerState`]. Operations are
/// unconditional assignments and cannot fail; opening an open drawer or
/// closing a closed one is a no-op.
#[derive(Clone, Default, Debug)]
pub struct DrawerHandle {
    state: Arc<Mutex<DrawerState>>,
}

impl DrawerHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self) {
        self.set(true);
    }

    pub fn close(&self) {
        self.set(false);
    }

    pub fn toggle(&self) {
        if let Ok(mut state) = self.state.lock() {
            state.open = !state.open;
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.lock().map(|state| state.open).unwrap_or(false)
    }

    fn set(&self, open: bool) {
        if let Ok(mut state) = self.state.lock() {
            state.open = open;
        }
    }
}
