//! Secondary (detail) stack and its placeholder sentinel
//!
//! The detail stack is the right-hand column of an expanded split
//! presentation. Its bottom entry is always a [`Placeholder`], a
//! recognizable empty-state screen shown until real detail content is
//! pushed. Real screens sit above the placeholder in push order.

use super::types::ScreenId;

/// Sentinel empty-state screen at the bottom of the detail stack.
///
/// A placeholder has no behavior beyond being distinguishable from real
/// content by type. Each instance carries its own [`ScreenId`] so hosts
/// can still address the underlying view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    id: ScreenId,
}

impl Placeholder {
    /// Creates a new placeholder with a fresh screen ID.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: ScreenId::new(),
        }
    }

    /// Returns the placeholder's screen ID.
    #[must_use]
    pub const fn id(&self) -> ScreenId {
        self.id
    }
}

impl Default for Placeholder {
    fn default() -> Self {
        Self::new()
    }
}

/// One entry of the detail stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackEntry {
    /// The empty-state sentinel at the bottom of the stack.
    Placeholder(Placeholder),
    /// A real detail screen.
    Content(ScreenId),
}

impl StackEntry {
    /// Returns true if this entry is the placeholder sentinel.
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }

    /// Returns the screen ID behind this entry.
    #[must_use]
    pub const fn screen_id(&self) -> ScreenId {
        match self {
            Self::Placeholder(placeholder) => placeholder.id(),
            Self::Content(id) => *id,
        }
    }
}

/// The secondary navigation stack of a split presentation.
///
/// # Shape invariant
///
/// The placeholder is always the bottom entry. [`push`](Self::push) only
/// appends and [`pop_to_root`](Self::pop_to_root) only removes content
/// entries, so the stack is never empty and never loses its sentinel.
#[derive(Debug, Clone)]
pub struct DetailStack {
    entries: Vec<StackEntry>,
    /// Animation hint of the most recent mutation, for hosts mirroring
    /// the stack into an animated container.
    last_animated: bool,
}

impl DetailStack {
    /// Creates a detail stack seeded with the given placeholder.
    #[must_use]
    pub fn new(placeholder: Placeholder) -> Self {
        Self {
            entries: vec![StackEntry::Placeholder(placeholder)],
            last_animated: false,
        }
    }

    /// Returns the top entry of the stack.
    #[must_use]
    pub fn top(&self) -> &StackEntry {
        // Never empty: the placeholder is permanent.
        &self.entries[self.entries.len() - 1]
    }

    /// Returns true if no real content sits above the placeholder.
    #[must_use]
    pub fn is_placeholder_top(&self) -> bool {
        self.top().is_placeholder()
    }

    /// Returns the placeholder at the bottom of the stack.
    #[must_use]
    pub fn placeholder(&self) -> Placeholder {
        match self.entries[0] {
            StackEntry::Placeholder(placeholder) => placeholder,
            // Unreachable by the shape invariant; fall back to the entry's id.
            StackEntry::Content(id) => Placeholder { id },
        }
    }

    /// Pushes a real screen onto the stack.
    pub fn push(&mut self, screen: ScreenId, animated: bool) {
        self.entries.push(StackEntry::Content(screen));
        self.last_animated = animated;
    }

    /// Pops every real screen, leaving only the placeholder.
    ///
    /// Returns the removed screens in stack order (bottom to top), so a
    /// caller replaying them elsewhere preserves their relative order.
    pub fn pop_to_root(&mut self) -> Vec<ScreenId> {
        let popped = self
            .entries
            .drain(1..)
            .map(|entry| entry.screen_id())
            .collect();
        self.last_animated = false;
        popped
    }

    /// Returns the real screens above the placeholder, bottom to top.
    #[must_use]
    pub fn real_screens(&self) -> Vec<ScreenId> {
        self.entries[1..]
            .iter()
            .map(StackEntry::screen_id)
            .collect()
    }

    /// Returns the number of real screens above the placeholder.
    #[must_use]
    pub fn content_len(&self) -> usize {
        self.entries.len() - 1
    }

    /// Returns all entries, placeholder included, bottom to top.
    #[must_use]
    pub fn entries(&self) -> &[StackEntry] {
        &self.entries
    }

    /// Returns whether the most recent mutation was animated.
    #[must_use]
    pub const fn last_transition_animated(&self) -> bool {
        self.last_animated
    }
}
