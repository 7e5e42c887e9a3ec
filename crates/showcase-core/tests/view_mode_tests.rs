// Host-side tests for the map/cards switch.

use showcase_core::{ViewMode, ViewModeController, ViewPresenter};
use std::collections::BTreeSet;

/// Mimics the DOM: a container class set and a button label.
#[derive(Default)]
struct FakeDom {
    classes: BTreeSet<String>,
    label: String,
    presented: usize,
}

impl ViewPresenter for FakeDom {
    fn present(&mut self, mode: ViewMode) {
        self.presented += 1;
        if mode == ViewMode::Map {
            self.classes.insert("adventure-active".to_string());
        } else {
            self.classes.remove("adventure-active");
        }
        self.label = mode.toggle_label().to_string();
    }
}

#[test]
fn starts_in_map_mode() {
    assert_eq!(ViewModeController::new().mode(), ViewMode::Map);
}

#[test]
fn toggle_flips_and_presents() {
    let mut view = ViewModeController::new();
    let mut dom = FakeDom::default();
    view.sync(&mut dom);
    assert_eq!(dom.label, "Card View");

    assert_eq!(view.toggle(&mut dom), ViewMode::Cards);
    assert!(dom.classes.is_empty());
    assert_eq!(dom.label, "Map View");
    assert_eq!(dom.presented, 2);
}

#[test]
fn two_toggles_restore_state_and_classes() {
    let mut view = ViewModeController::new();
    let mut dom = FakeDom::default();
    dom.classes.insert("projects-showcase".to_string());
    view.sync(&mut dom);
    let original_mode = view.mode();
    let original_classes = dom.classes.clone();
    let original_label = dom.label.clone();

    view.toggle(&mut dom);
    view.toggle(&mut dom);

    assert_eq!(view.mode(), original_mode);
    assert_eq!(dom.classes, original_classes);
    assert_eq!(dom.label, original_label);
}

#[test]
fn flipped_is_an_involution() {
    for mode in [ViewMode::Map, ViewMode::Cards] {
        assert_ne!(mode.flipped(), mode);
        assert_eq!(mode.flipped().flipped(), mode);
    }
}
