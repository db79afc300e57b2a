//! Tab-stack controller: a navigation stack doubling as a tab switcher
//!
//! The controller has two push personalities selected by
//! [`NavigationMode`]: `Alone` pushes land on the local stack, `Embedded`
//! pushes are handed back to the owning split coordinator. Selecting a
//! tab replaces the entire visible stack with that tab's root screen.
//!
//! The depth counter tracks how many screens sit on the stack since the
//! last reset to a tab root; the tab-bar affordance is visible exactly
//! while the counter is at most 1.

use tracing::debug;

use super::delegate::TabStackDelegate;
use super::types::{NavigationMode, ScreenId, TabItem};

/// A tab-bar entry: the tab's root screen plus its label/icon pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabRoot {
    /// Root screen shown when the tab is selected.
    pub screen: ScreenId,
    /// Label and icon shown in the tab bar.
    pub item: TabItem,
}

impl TabRoot {
    /// Creates a tab entry with an explicit tab item.
    #[must_use]
    pub const fn new(screen: ScreenId, item: TabItem) -> Self {
        Self { screen, item }
    }

    /// Creates a tab entry with a default (empty) tab item.
    #[must_use]
    pub fn untitled(screen: ScreenId) -> Self {
        Self {
            screen,
            item: TabItem::default(),
        }
    }
}

/// Visual state of the tab-bar affordance.
///
/// Each controller instance owns its own tab bar; there is no shared or
/// process-wide tab-bar state. The visual selection can diverge from the
/// logical selection momentarily during a declined tap, which is why it
/// is tracked separately.
#[derive(Debug, Clone, Default)]
pub struct TabBarState {
    items: Vec<TabItem>,
    selected: Option<usize>,
    hidden: bool,
}

impl TabBarState {
    /// Returns the tab items in display order.
    #[must_use]
    pub fn items(&self) -> &[TabItem] {
        &self.items
    }

    /// Returns the index of the visually selected item.
    #[must_use]
    pub const fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Returns true if the affordance is currently hidden.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }
}

/// Outcome of a [`TabStackController::push`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum PushOutcome {
    /// The screen was pushed onto the local stack.
    Pushed,
    /// The push belongs to the owning coordinator's `show_detail`; the
    /// local stack was not touched.
    Delegated(ScreenId),
}

impl PushOutcome {
    /// Returns true if the push was handed back to the coordinator.
    #[must_use]
    pub const fn is_delegated(&self) -> bool {
        matches!(self, Self::Delegated(_))
    }
}

/// Navigation stack with tab-switching behavior.
#[derive(Debug, Clone)]
pub struct TabStackController {
    mode: NavigationMode,
    tabs: Vec<TabRoot>,
    /// Index of the logically selected tab.
    selected: Option<usize>,
    /// Visible stack, bottom to top. Empty until a tab is selected or a
    /// screen is pushed.
    stack: Vec<ScreenId>,
    /// Screens pushed since the last reset to a tab root.
    depth: usize,
    tab_bar: TabBarState,
}

impl TabStackController {
    /// Creates a controller with the given push personality.
    #[must_use]
    pub fn new(mode: NavigationMode) -> Self {
        Self {
            mode,
            tabs: Vec::new(),
            selected: None,
            stack: Vec::new(),
            depth: 0,
            tab_bar: TabBarState::default(),
        }
    }

    /// Creates a plain, standalone navigation stack.
    #[must_use]
    pub fn alone() -> Self {
        Self::new(NavigationMode::Alone)
    }

    /// Creates a controller intended to be owned by a split coordinator.
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(NavigationMode::Embedded)
    }

    /// Returns the controller's push personality.
    #[must_use]
    pub const fn mode(&self) -> NavigationMode {
        self.mode
    }

    /// Returns the configured tab entries.
    #[must_use]
    pub fn tabs(&self) -> &[TabRoot] {
        &self.tabs
    }

    /// Returns the visible stack, bottom to top.
    #[must_use]
    pub fn screens(&self) -> &[ScreenId] {
        &self.stack
    }

    /// Returns the depth counter.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the index of the logically selected tab.
    #[must_use]
    pub const fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Returns the root screen of the selected tab.
    #[must_use]
    pub fn selected_root(&self) -> Option<ScreenId> {
        self.selected.map(|index| self.tabs[index].screen)
    }

    /// Returns the tab-bar state.
    #[must_use]
    pub const fn tab_bar(&self) -> &TabBarState {
        &self.tab_bar
    }

    /// Returns true if the tab-bar affordance is hidden.
    #[must_use]
    pub const fn is_tab_bar_hidden(&self) -> bool {
        self.tab_bar.hidden
    }

    /// Replaces the tab-bar configuration.
    ///
    /// May be called at any time. The logical selection survives when the
    /// previously selected root is still present (its index is updated);
    /// otherwise the selection is cleared. The visible stack is left as
    /// it is either way.
    pub fn set_tabs(&mut self, tabs: Vec<TabRoot>) {
        let previous_root = self.selected_root();
        self.tabs = tabs;
        self.tab_bar.items = self.tabs.iter().map(|tab| tab.item.clone()).collect();

        self.selected = previous_root
            .and_then(|root| self.tabs.iter().position(|tab| tab.screen == root));
        self.tab_bar.selected = self.selected;
    }

    /// Pushes a screen according to the controller's personality.
    ///
    /// In `Alone` mode the screen lands on the local stack. In `Embedded`
    /// mode the local stack is not touched: the screen is handed back as
    /// [`PushOutcome::Delegated`] for the owning coordinator to route
    /// through its `show_detail`.
    pub fn push(&mut self, screen: ScreenId) -> PushOutcome {
        match self.mode {
            NavigationMode::Embedded => {
                debug!(screen = %screen, "push delegated to split coordinator");
                PushOutcome::Delegated(screen)
            }
            NavigationMode::Alone => {
                self.raw_push(screen);
                PushOutcome::Pushed
            }
        }
    }

    /// Pushes a screen onto the local stack, bypassing detail redirection.
    ///
    /// This is the path the split coordinator uses when it moves detail
    /// screens into this stack during a collapse.
    pub fn raw_push(&mut self, screen: ScreenId) {
        self.stack.push(screen);
        self.set_depth(self.depth + 1);
        debug!(screen = %screen, depth = self.depth, "raw push");
    }

    /// Selects a tab, replacing the entire stack with its root screen.
    ///
    /// Resets the depth counter to 1 and syncs the visual tab-bar
    /// selection. An out-of-range index is a no-op returning false.
    pub fn select_tab(&mut self, index: usize) -> bool {
        if index >= self.tabs.len() {
            return false;
        }

        let root = self.tabs[index].screen;
        self.stack.clear();
        self.stack.push(root);
        self.selected = Some(index);
        self.tab_bar.selected = Some(index);
        self.set_depth(1);
        debug!(index, root = %root, "tab selected");
        true
    }

    /// Handles a tab-bar tap, consulting an optional delegate.
    ///
    /// If the delegate declines via `should_select`, the visual selection
    /// reverts to the previous tab and the stack is untouched. Either
    /// way, `did_select` fires afterwards. Returns true if the tab's root
    /// replaced the stack.
    pub fn tap_tab(
        &mut self,
        index: usize,
        mut delegate: Option<&mut dyn TabStackDelegate>,
    ) -> bool {
        if index >= self.tabs.len() {
            return false;
        }
        let screen = self.tabs[index].screen;

        // The tap already moved the visual selection.
        self.tab_bar.selected = Some(index);

        let accepted = delegate
            .as_deref_mut()
            .is_none_or(|delegate| delegate.should_select(self, screen));

        let replaced = if accepted {
            self.select_tab(index)
        } else {
            // Declined: revert the visual selection only.
            self.tab_bar.selected = self.selected;
            false
        };

        if let Some(delegate) = delegate {
            delegate.did_select(self, screen);
        }
        replaced
    }

    /// Pops the top screen, never the root.
    ///
    /// Returns the popped screen, or `None` when the stack is already at
    /// its root (or empty). The depth counter follows the stack down and
    /// the tab bar reappears at depth 1.
    pub fn pop(&mut self) -> Option<ScreenId> {
        if self.stack.len() <= 1 {
            return None;
        }
        let popped = self.stack.pop();
        self.set_depth(self.depth.saturating_sub(1));
        popped
    }

    /// Pops every screen above the root and resets the depth counter to 1.
    ///
    /// Returns the popped screens oldest first (stack order), so the
    /// coordinator can redistribute them in their original order.
    pub fn pop_to_root(&mut self) -> Vec<ScreenId> {
        let popped: Vec<ScreenId> = if self.stack.len() > 1 {
            self.stack.drain(1..).collect()
        } else {
            Vec::new()
        };
        self.set_depth(1);
        popped
    }

    /// Hides the tab-bar affordance. Already hidden is a no-op.
    ///
    /// Hosts animate the change over
    /// [`TAB_BAR_FADE`](super::types::TAB_BAR_FADE).
    pub fn hide_tab_bar(&mut self) {
        if self.tab_bar.hidden {
            return;
        }
        self.tab_bar.hidden = true;
        debug!("tab bar hidden");
    }

    /// Shows the tab-bar affordance. Already visible is a no-op.
    pub fn show_tab_bar(&mut self) {
        if !self.tab_bar.hidden {
            return;
        }
        self.tab_bar.hidden = false;
        debug!("tab bar shown");
    }

    /// Updates the depth counter and applies its visibility side effect:
    /// the tab bar shows at depth <= 1 and hides above it.
    fn set_depth(&mut self, depth: usize) {
        self.depth = depth;
        if self.depth <= 1 {
            self.show_tab_bar();
        } else {
            self.hide_tab_bar();
        }
    }
}
