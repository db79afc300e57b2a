//! Delegate surface for tab-bar selection
//!
//! Both hooks are defaulted, so callers implement only the ones they
//! care about. A missing delegate behaves exactly like
//! [`NoOpTabStackDelegate`].

use super::tab_stack::TabStackController;
use super::types::ScreenId;

/// Hooks consulted by [`TabStackController::tap_tab`].
pub trait TabStackDelegate {
    /// Asked before a tapped tab's root replaces the visible stack.
    ///
    /// Returning `false` declines the selection: the visual tab-bar
    /// selection reverts to the previous tab and the stack is untouched.
    fn should_select(&mut self, controller: &TabStackController, screen: ScreenId) -> bool {
        let _ = (controller, screen);
        true
    }

    /// Notified after a tap was handled, whether or not the selection
    /// was accepted.
    fn did_select(&mut self, controller: &TabStackController, screen: ScreenId) {
        let _ = (controller, screen);
    }
}

/// Delegate that accepts every selection and observes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpTabStackDelegate;

impl TabStackDelegate for NoOpTabStackDelegate {}
