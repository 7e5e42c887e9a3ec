use crate::constants::{CARD_HIDDEN_CLASS, CARD_SELECTOR, MAP_ACTIVE_CLASS};
use showcase_core::{ViewMode, ViewModeController, ViewPresenter};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Mirrors a [`ViewMode`] onto the showcase container, its cards and the
/// toggle label.
pub struct DomViewPresenter {
    container: web::Element,
    label: Option<web::Element>,
}

impl DomViewPresenter {
    pub fn new(container: web::Element, label: Option<web::Element>) -> Self {
        Self { container, label }
    }

    fn cards(&self) -> Vec<web::Element> {
        let Ok(list) = self.container.query_selector_all(CARD_SELECTOR) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|n| n.dyn_into::<web::Element>().ok())
            .collect()
    }
}

impl ViewPresenter for DomViewPresenter {
    fn present(&mut self, mode: ViewMode) {
        let map = mode == ViewMode::Map;
        _ = self
            .container
            .class_list()
            .toggle_with_force(MAP_ACTIVE_CLASS, map);
        for card in self.cards() {
            _ = card.class_list().toggle_with_force(CARD_HIDDEN_CLASS, map);
        }
        if let Some(label) = &self.label {
            label.set_text_content(Some(mode.toggle_label()));
        }
    }
}

/// Controller plus its DOM side, owned by the map scene.
pub struct MapView {
    pub controller: ViewModeController,
    pub presenter: DomViewPresenter,
}

impl MapView {
    pub fn new(presenter: DomViewPresenter) -> Self {
        let mut view = Self {
            controller: ViewModeController::new(),
            presenter,
        };
        view.controller.sync(&mut view.presenter);
        view
    }

    pub fn toggle(&mut self) -> ViewMode {
        self.controller.toggle(&mut self.presenter)
    }
}
