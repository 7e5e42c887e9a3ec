use crate::constants::{CARD_HIGHLIGHT_CLASS, CARD_ID_ATTRIBUTE, DETAIL_PANEL_FN};
use crate::helpers::card_selector_for;
use showcase_core::SelectionHost;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Forwards node selections to the page: a global `openModal(id)` when the
/// page defines one, otherwise the `[data-project=id]` card.
pub struct DomSelectionHost {
    window: web::Window,
    document: web::Document,
    reduced_motion: bool,
}

impl DomSelectionHost {
    pub fn new(window: web::Window, document: web::Document, reduced_motion: bool) -> Self {
        Self {
            window,
            document,
            reduced_motion,
        }
    }
}

impl SelectionHost for DomSelectionHost {
    fn open_detail_panel(&mut self, node_id: &str) -> bool {
        let Ok(value) = js_sys::Reflect::get(&self.window, &JsValue::from_str(DETAIL_PANEL_FN))
        else {
            return false;
        };
        let Ok(open) = value.dyn_into::<js_sys::Function>() else {
            return false;
        };
        match open.call1(&JsValue::NULL, &JsValue::from_str(node_id)) {
            Ok(_) => true,
            Err(e) => {
                log::warn!("[select] {DETAIL_PANEL_FN}({node_id}) threw: {e:?}");
                false
            }
        }
    }

    fn reveal_element(&mut self, node_id: &str) -> bool {
        let selector = card_selector_for(CARD_ID_ATTRIBUTE, node_id);
        let Ok(Some(card)) = self.document.query_selector(&selector) else {
            return false;
        };

        let opts = web::ScrollIntoViewOptions::new();
        opts.set_behavior(if self.reduced_motion {
            web::ScrollBehavior::Auto
        } else {
            web::ScrollBehavior::Smooth
        });
        opts.set_block(web::ScrollLogicalPosition::Center);
        card.scroll_into_view_with_scroll_into_view_options(&opts);

        // restart the pulse, cleared again when the animation ends
        let classes = card.class_list();
        _ = classes.remove_1(CARD_HIGHLIGHT_CLASS);
        _ = classes.add_1(CARD_HIGHLIGHT_CLASS);
        let done = Closure::once_into_js(move || {
            _ = classes.remove_1(CARD_HIGHLIGHT_CLASS);
        });
        let once = web::AddEventListenerOptions::new();
        once.set_once(true);
        _ = card.add_event_listener_with_callback_and_add_event_listener_options(
            "animationend",
            done.unchecked_ref(),
            &once,
        );
        true
    }
}
