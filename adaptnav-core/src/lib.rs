//! `adaptnav` Core Library
//!
//! This crate provides the core state model for adapting a two-pane
//! master/detail presentation (a split view) into a single
//! tab-bar-driven stack on narrow environments and back, preserving
//! navigation history across the transition.
//!
//! # Crate Structure
//!
//! - [`nav`] - The navigation model: split coordinator, tab-stack
//!   controller, detail stack and delegate surface
//! - [`tracing`] - Structured-logging setup for embedding hosts
//!
//! The crate is view-toolkit agnostic: it tracks screens by ID and hosts
//! mirror the modeled stacks into their own windowing toolkit.

// Enable missing_docs warning for public API documentation
#![warn(missing_docs)]

pub mod nav;
pub mod tracing;

// =============================================================================
// Convenience re-exports
//
// Flat re-exports for callers that prefer `adaptnav_core::AdaptiveNavigator`
// over the modular paths.
// =============================================================================

pub use nav::{
    AdaptiveNavigator, Column, DetailSource, DetailStack, NavigationMode, NoOpTabStackDelegate,
    Placeholder, PushOutcome, ScreenId, StackEntry, TAB_BAR_FADE, TabBarState, TabItem, TabRoot,
    TabStackController, TabStackDelegate,
};
pub use self::tracing::{
    TracingConfig, TracingError, TracingLevel, TracingOutput, TracingResult, get_tracing_config,
    init_tracing, is_tracing_initialized,
};
