//! Adaptive split/tab navigation model
//!
//! This module implements the state machinery behind a two-pane
//! master/detail presentation that collapses into a single
//! tab-bar-driven stack on narrow environments and expands back on wide
//! ones, preserving navigation history across the transition.
//!
//! # Architecture
//!
//! Two cooperating state machines:
//!
//! - [`AdaptiveNavigator`] — the split coordinator. Owns the
//!   collapsed/expanded decision and moves stack content between the
//!   columns at each transition.
//! - [`TabStackController`] — the primary column. A navigation stack
//!   that also behaves as a tab switcher; when embedded in a split, its
//!   pushes are routed to the detail column instead of landing locally.
//!
//! The model is deliberately free of view concerns: screens are tracked
//! as [`ScreenId`]s, and hosts mirror the stacks into whatever windowing
//! toolkit they use. After every operation the host reads the stacks and
//! the tab-bar state back and applies the difference (animating tab-bar
//! visibility changes over [`TAB_BAR_FADE`]).
//!
//! # Module Structure
//!
//! - `types` - Identifier types and small enums (`ScreenId`, `Column`, ...)
//! - `detail` - The placeholder-rooted secondary stack
//! - `tab_stack` - `TabStackController` and its tab-bar state
//! - `delegate` - Optional selection hooks for tab-bar taps
//! - `coordinator` - `AdaptiveNavigator` collapse/expand coordination
//!
//! # Example
//!
//! ```
//! use adaptnav_core::nav::{
//!     AdaptiveNavigator, DetailSource, Placeholder, ScreenId, TabItem, TabRoot,
//!     TabStackController,
//! };
//!
//! let inbox = ScreenId::new();
//! let mut primary = TabStackController::embedded();
//! primary.set_tabs(vec![TabRoot::new(inbox, TabItem::new("Inbox"))]);
//! primary.select_tab(0);
//!
//! let mut navigator = AdaptiveNavigator::new(primary, Placeholder::new);
//!
//! // Expanded: a pushed screen lands on the detail stack.
//! let message = ScreenId::new();
//! navigator.push(message);
//! assert_eq!(navigator.secondary().real_screens(), vec![message]);
//!
//! // Collapsed: the detail thread folds into the tab stack.
//! navigator.collapse();
//! assert_eq!(navigator.primary().screens(), &[inbox, message]);
//! ```

mod coordinator;
mod delegate;
mod detail;
mod tab_stack;
mod types;

pub use coordinator::AdaptiveNavigator;
pub use delegate::{NoOpTabStackDelegate, TabStackDelegate};
pub use detail::{DetailStack, Placeholder, StackEntry};
pub use tab_stack::{PushOutcome, TabBarState, TabRoot, TabStackController};
pub use types::{Column, DetailSource, NavigationMode, ScreenId, TAB_BAR_FADE, TabItem};
