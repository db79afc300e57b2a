//! Core type definitions for the adaptive navigation model
//!
//! This module contains the fundamental identifier types and enums used
//! throughout the navigation system.

use std::fmt;
use std::time::Duration;
use uuid::Uuid;

/// Fade duration hosts should apply when the tab bar is shown or hidden.
pub const TAB_BAR_FADE: Duration = Duration::from_millis(250);

/// Unique identifier for a screen.
///
/// The model tracks screens by ID only; the host environment owns the
/// actual views. An ID persists while the screen moves between the
/// primary and secondary stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenId(pub Uuid);

impl ScreenId {
    /// Creates a new random screen ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a screen ID from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ScreenId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Screen({})", self.0)
    }
}

/// Column of a two-pane split presentation.
///
/// Transition handlers report which column becomes (or stays) the top
/// column so hosts can direct focus after a size-class change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// The tab-stack column.
    Primary,
    /// The detail column.
    Secondary,
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => write!(f, "Primary"),
            Self::Secondary => write!(f, "Secondary"),
        }
    }
}

/// Push personality of a [`TabStackController`](super::TabStackController).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
    /// Cooperates with an owning split coordinator: pushes are delegated
    /// to the coordinator's `show_detail` instead of landing locally.
    Embedded,
    /// A plain navigation stack: pushes land locally.
    Alone,
}

impl fmt::Display for NavigationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "Embedded"),
            Self::Alone => write!(f, "Alone"),
        }
    }
}

/// Who initiated a `show_detail` request.
///
/// The coordinator inspects the source to decide whether a push starts a
/// fresh detail thread (pop the secondary stack to its placeholder first)
/// or continues the existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailSource {
    /// The tab stack itself (or its selected root) initiated the push.
    TabStack,
    /// A specific screen initiated the push.
    Screen(ScreenId),
}

/// Label and icon pair shown for a tab-bar entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TabItem {
    /// Title shown under the tab icon.
    pub title: String,
    /// Optional icon name, resolved by the host.
    pub icon: Option<String>,
}

impl TabItem {
    /// Creates a tab item with a title and no icon.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: None,
        }
    }

    /// Creates a tab item with a title and an icon name.
    #[must_use]
    pub fn with_icon(title: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: Some(icon.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_id_new_creates_unique_ids() {
        let id1 = ScreenId::new();
        let id2 = ScreenId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn screen_id_equality() {
        let uuid = Uuid::new_v4();
        let id1 = ScreenId(uuid);
        let id2 = ScreenId(uuid);
        assert_eq!(id1, id2);
    }

    #[test]
    fn screen_id_display() {
        let id = ScreenId(Uuid::nil());
        assert!(format!("{id}").contains("Screen("));
    }

    #[test]
    fn column_display() {
        assert_eq!(format!("{}", Column::Primary), "Primary");
        assert_eq!(format!("{}", Column::Secondary), "Secondary");
    }

    #[test]
    fn navigation_mode_display() {
        assert_eq!(format!("{}", NavigationMode::Embedded), "Embedded");
        assert_eq!(format!("{}", NavigationMode::Alone), "Alone");
    }

    #[test]
    fn detail_source_from_screen_compares_by_id() {
        let id = ScreenId::new();
        assert_eq!(DetailSource::Screen(id), DetailSource::Screen(id));
        assert_ne!(
            DetailSource::Screen(id),
            DetailSource::Screen(ScreenId::new())
        );
    }

    #[test]
    fn tab_item_new_has_no_icon() {
        let item = TabItem::new("Inbox");
        assert_eq!(item.title, "Inbox");
        assert!(item.icon.is_none());
    }

    #[test]
    fn tab_item_with_icon_stores_both() {
        let item = TabItem::with_icon("Inbox", "tray");
        assert_eq!(item.title, "Inbox");
        assert_eq!(item.icon.as_deref(), Some("tray"));
    }

    #[test]
    fn tab_bar_fade_is_a_quarter_second() {
        assert_eq!(TAB_BAR_FADE, Duration::from_millis(250));
    }
}
