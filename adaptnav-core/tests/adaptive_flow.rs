//! Scenario tests for the adaptive split/tab navigation flow
//!
//! These walk the documented collapse/expand scenarios end to end:
//! pushes landing on the right column, history surviving the round trip
//! through a size-class change, and the tab-bar affordance tracking the
//! depth counter.

use adaptnav_core::nav::{
    AdaptiveNavigator, DetailSource, Placeholder, ScreenId, TabItem, TabRoot, TabStackController,
    TabStackDelegate,
};

fn navigator_with_tabs(titles: &[&str]) -> (AdaptiveNavigator, Vec<ScreenId>) {
    let roots: Vec<ScreenId> = titles.iter().map(|_| ScreenId::new()).collect();
    let mut primary = TabStackController::embedded();
    primary.set_tabs(
        roots
            .iter()
            .zip(titles)
            .map(|(&screen, &title)| TabRoot::new(screen, TabItem::new(title)))
            .collect(),
    );
    primary.select_tab(0);
    (AdaptiveNavigator::new(primary, Placeholder::new), roots)
}

#[test]
fn collapsed_push_then_expand_moves_screen_to_detail() {
    let (mut navigator, roots) = navigator_with_tabs(&["Inbox"]);
    navigator.collapse();

    let a = ScreenId::new();
    navigator.push(a);

    assert_eq!(navigator.primary().screens(), &[roots[0], a]);
    assert_eq!(navigator.primary().depth(), 2);
    assert!(navigator.primary().is_tab_bar_hidden());

    navigator.expand();

    assert_eq!(navigator.primary().screens(), &[roots[0]]);
    assert_eq!(navigator.primary().depth(), 1);
    assert!(!navigator.primary().is_tab_bar_hidden());
    assert_eq!(navigator.secondary().real_screens(), vec![a]);
    assert!(navigator.secondary().entries()[0].is_placeholder());
}

#[test]
fn detail_push_from_active_root_replaces_current_thread() {
    let (mut navigator, roots) = navigator_with_tabs(&["Inbox"]);
    let b = ScreenId::new();
    let c = ScreenId::new();
    navigator.show_detail(b, DetailSource::TabStack);
    assert_eq!(navigator.secondary().real_screens(), vec![b]);

    navigator.show_detail(c, DetailSource::Screen(roots[0]));

    assert_eq!(navigator.secondary().real_screens(), vec![c]);
}

#[test]
fn detail_push_from_deep_screen_extends_current_thread() {
    let (mut navigator, _) = navigator_with_tabs(&["Inbox"]);
    let b = ScreenId::new();
    let c = ScreenId::new();
    navigator.show_detail(b, DetailSource::TabStack);

    navigator.show_detail(c, DetailSource::Screen(b));

    assert_eq!(navigator.secondary().real_screens(), vec![b, c]);
}

#[test]
fn collapse_with_empty_detail_leaves_primary_untouched() {
    let (mut navigator, roots) = navigator_with_tabs(&["Inbox"]);

    navigator.collapse();

    assert_eq!(navigator.primary().screens(), &[roots[0]]);
    assert_eq!(navigator.primary().depth(), 1);
    assert!(!navigator.primary().is_tab_bar_hidden());
}

#[test]
fn multi_screen_history_survives_expand_collapse_round_trip() {
    let (mut navigator, roots) = navigator_with_tabs(&["Inbox"]);
    navigator.collapse();

    let pushed: Vec<ScreenId> = (0..5).map(|_| ScreenId::new()).collect();
    for &screen in &pushed {
        navigator.push(screen);
    }

    navigator.expand();
    assert_eq!(navigator.secondary().real_screens(), pushed);

    navigator.collapse();
    let mut expected = vec![roots[0]];
    expected.extend(&pushed);
    assert_eq!(navigator.primary().screens(), expected);
    assert_eq!(navigator.primary().depth(), pushed.len() + 1);
}

#[test]
fn switching_tabs_resets_depth_and_shows_tab_bar() {
    let (mut navigator, roots) = navigator_with_tabs(&["Inbox", "Archive"]);
    navigator.collapse();
    navigator.push(ScreenId::new());
    assert!(navigator.primary().is_tab_bar_hidden());

    navigator.primary_mut().select_tab(1);

    assert_eq!(navigator.primary().screens(), &[roots[1]]);
    assert_eq!(navigator.primary().depth(), 1);
    assert!(!navigator.primary().is_tab_bar_hidden());
}

#[test]
fn tab_switch_then_detail_push_targets_new_tabs_thread() {
    let (mut navigator, roots) = navigator_with_tabs(&["Inbox", "Archive"]);
    let from_inbox = ScreenId::new();
    navigator.show_detail(from_inbox, DetailSource::TabStack);

    navigator.primary_mut().select_tab(1);
    let from_archive = ScreenId::new();
    // Archive's root is now the active root, so its push starts fresh.
    navigator.show_detail(from_archive, DetailSource::Screen(roots[1]));

    assert_eq!(navigator.secondary().real_screens(), vec![from_archive]);
}

#[test]
fn declined_tab_tap_changes_nothing_but_still_notifies() {
    struct GateDelegate {
        allow: bool,
        notified: usize,
    }

    impl TabStackDelegate for GateDelegate {
        fn should_select(&mut self, _: &TabStackController, _: ScreenId) -> bool {
            self.allow
        }

        fn did_select(&mut self, _: &TabStackController, _: ScreenId) {
            self.notified += 1;
        }
    }

    let (mut navigator, roots) = navigator_with_tabs(&["Inbox", "Archive"]);
    let mut gate = GateDelegate {
        allow: false,
        notified: 0,
    };

    assert!(!navigator.primary_mut().tap_tab(1, Some(&mut gate)));
    assert_eq!(navigator.primary().screens(), &[roots[0]]);
    assert_eq!(navigator.primary().tab_bar().selected(), Some(0));
    assert_eq!(gate.notified, 1);

    gate.allow = true;
    assert!(navigator.primary_mut().tap_tab(1, Some(&mut gate)));
    assert_eq!(navigator.primary().screens(), &[roots[1]]);
    assert_eq!(gate.notified, 2);
}

#[test]
fn standalone_controller_pushes_locally() {
    let root = ScreenId::new();
    let mut controller = TabStackController::alone();
    controller.set_tabs(vec![TabRoot::new(root, TabItem::new("Only"))]);
    controller.select_tab(0);

    let detail = ScreenId::new();
    let outcome = controller.push(detail);

    assert!(!outcome.is_delegated());
    assert_eq!(controller.screens(), &[root, detail]);
    assert!(controller.is_tab_bar_hidden());
}
