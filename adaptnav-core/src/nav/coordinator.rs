//! Split coordinator: collapse/expand transitions and detail routing
//!
//! [`AdaptiveNavigator`] owns the two columns of a split presentation: a
//! [`TabStackController`] as the primary column and a [`DetailStack`] as
//! the secondary column. While the environment is expanded, detail
//! pushes land beside the tab stack; when the environment collapses to a
//! single column, the detail content folds into the tab stack, and on
//! expansion it moves back out. Transfers are lossless and preserve
//! relative order in both directions.
//!
//! The host environment drives the transitions: it calls
//! [`collapse`](AdaptiveNavigator::collapse) when the size class shrinks
//! and the [`begin_expand`](AdaptiveNavigator::begin_expand) /
//! [`finish_expand`](AdaptiveNavigator::finish_expand) pair around the
//! expansion (mirroring the will/did callbacks windowing toolkits
//! deliver). These handlers run to completion before any subsequent push
//! is processed, because the host serializes size-class callbacks with
//! user interaction on its single UI loop.

use tracing::{debug, warn};

use super::detail::{DetailStack, Placeholder};
use super::tab_stack::{PushOutcome, TabStackController};
use super::types::{Column, DetailSource, ScreenId};

/// Coordinates a two-column split presentation that collapses into a
/// single tab-bar-driven stack on narrow environments.
#[derive(Debug)]
pub struct AdaptiveNavigator {
    primary: TabStackController,
    secondary: DetailStack,
    /// Screens captured from the primary stack during an expand
    /// transition, replayed into the secondary stack once the
    /// environment finishes expanding. Empty at all other times.
    pending_transfer: Vec<ScreenId>,
    collapsed: bool,
}

impl AdaptiveNavigator {
    /// Creates a coordinator around the given tab-stack controller.
    ///
    /// The placeholder provider is invoked once, here, to seed the
    /// secondary stack with its empty-state sentinel. The environment
    /// starts expanded; hosts that come up narrow call
    /// [`collapse`](Self::collapse) before presenting.
    ///
    /// The controller is typically constructed with
    /// [`TabStackController::embedded`] so that its own pushes route
    /// back through [`push`](Self::push).
    #[must_use]
    pub fn new<F>(primary: TabStackController, placeholder_provider: F) -> Self
    where
        F: FnOnce() -> Placeholder,
    {
        Self {
            primary,
            secondary: DetailStack::new(placeholder_provider()),
            pending_transfer: Vec::new(),
            collapsed: false,
        }
    }

    /// Returns true while the environment is collapsed to one column.
    #[must_use]
    pub const fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Returns the primary column's tab-stack controller.
    #[must_use]
    pub const fn primary(&self) -> &TabStackController {
        &self.primary
    }

    /// Returns the primary column's tab-stack controller mutably.
    pub const fn primary_mut(&mut self) -> &mut TabStackController {
        &mut self.primary
    }

    /// Returns the secondary (detail) stack.
    #[must_use]
    pub const fn secondary(&self) -> &DetailStack {
        &self.secondary
    }

    /// Returns how many screens wait in the pending-transfer buffer.
    ///
    /// Non-zero only between [`begin_expand`](Self::begin_expand) and
    /// [`finish_expand`](Self::finish_expand).
    #[must_use]
    pub fn pending_transfer_len(&self) -> usize {
        self.pending_transfer.len()
    }

    /// Pushes a screen through the tab stack's personality.
    ///
    /// This is the entry point applications call for user-initiated
    /// pushes: an embedded controller hands the screen back and it is
    /// routed through [`show_detail`](Self::show_detail) with the tab
    /// stack as the source; an `Alone` controller keeps it locally.
    pub fn push(&mut self, screen: ScreenId) {
        match self.primary.push(screen) {
            PushOutcome::Pushed => {}
            PushOutcome::Delegated(screen) => {
                self.show_detail(screen, DetailSource::TabStack);
            }
        }
    }

    /// Routes a "show detail" request to the right column.
    ///
    /// Collapsed: the screen is a local push onto the primary stack.
    ///
    /// Expanded: the screen lands on the secondary stack. When the
    /// request comes from the active tab root and real detail content is
    /// already showing, the secondary stack first pops back to its
    /// placeholder — a push from the tab root starts a fresh detail
    /// thread, while a push from anywhere else continues the current one.
    pub fn show_detail(&mut self, screen: ScreenId, source: DetailSource) {
        if self.collapsed {
            debug!(screen = %screen, "show_detail while collapsed; pushing locally");
            self.primary.raw_push(screen);
            return;
        }

        let from_active_root = match source {
            DetailSource::TabStack => true,
            DetailSource::Screen(id) => self.primary.selected_root() == Some(id),
        };

        if from_active_root && !self.secondary.is_placeholder_top() {
            debug!(screen = %screen, "starting fresh detail thread");
            let _ = self.secondary.pop_to_root();
        }
        self.secondary.push(screen, true);
    }

    /// Collapse transition: folds the secondary stack into the primary.
    ///
    /// Every real detail screen moves onto the primary stack, bottom to
    /// top, through the local-push path — the depth counter climbs with
    /// each one and the tab bar hides once the stack is deep. Returns
    /// the column that tops the collapsed presentation.
    ///
    /// Calling this while already collapsed is a no-op.
    pub fn collapse(&mut self) -> Column {
        if self.collapsed {
            warn!("collapse requested while already collapsed; ignoring");
            return Column::Primary;
        }

        let moved = self.secondary.pop_to_root();
        debug!(screens = moved.len(), "collapsing; folding detail into primary");
        for screen in moved {
            self.primary.raw_push(screen);
        }
        self.collapsed = true;
        Column::Primary
    }

    /// First phase of the expand transition.
    ///
    /// Captures every screen above the primary stack's tab root into the
    /// pending-transfer buffer and resets the primary to its root (depth
    /// 1, tab bar visible again). The buffered screens are replayed by
    /// [`finish_expand`](Self::finish_expand) once the environment has
    /// finished expanding.
    ///
    /// Calling this while already expanded is a no-op.
    pub fn begin_expand(&mut self) {
        if !self.collapsed {
            warn!("expand requested while already expanded; ignoring");
            return;
        }

        self.pending_transfer = self.primary.pop_to_root();
        debug!(
            screens = self.pending_transfer.len(),
            "expanding; captured primary stack for transfer"
        );
        self.collapsed = false;
    }

    /// Second phase of the expand transition.
    ///
    /// Replays the pending-transfer buffer onto the secondary stack in
    /// original order and clears it. A no-op when the buffer is empty.
    pub fn finish_expand(&mut self) {
        if self.pending_transfer.is_empty() {
            return;
        }
        debug!(
            screens = self.pending_transfer.len(),
            "replaying transfer buffer into detail stack"
        );
        for screen in std::mem::take(&mut self.pending_transfer) {
            self.secondary.push(screen, false);
        }
    }

    /// Runs both expand phases back to back.
    ///
    /// Convenience for hosts whose expansion is synchronous from the
    /// model's point of view.
    pub fn expand(&mut self) {
        self.begin_expand();
        self.finish_expand();
    }
}
