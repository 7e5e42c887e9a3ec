#![cfg(target_arch = "wasm32")]
use anyhow::{anyhow, Context};
use showcase_core::{EngineConfig, FrameLoop, MotionPreference, SceneKind, ViewMode};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod helpers;
mod scene;
mod selection;
mod surface;
mod view;

use constants::*;
use scene::Scene;

thread_local! {
    static SCENES: RefCell<Vec<Rc<RefCell<Scene>>>> = const { RefCell::new(Vec::new()) };
}

/// JS-side handle to one mounted canvas.
#[wasm_bindgen]
#[derive(Clone)]
pub struct SceneHandle {
    scene: Rc<RefCell<Scene>>,
}

#[wasm_bindgen]
impl SceneHandle {
    /// Stop the loop and remove every listener. Safe to call twice.
    pub fn dispose(&self) {
        if let Ok(mut s) = self.scene.try_borrow_mut() {
            s.dispose();
        }
        SCENES.with(|all| all.borrow_mut().retain(|s| !Rc::ptr_eq(s, &self.scene)));
    }

    /// Flip the map/cards view; returns the new mode, or `undefined` for the hero.
    #[wasm_bindgen(js_name = toggleView)]
    pub fn toggle_view(&self) -> Option<String> {
        let mode = self.scene.try_borrow_mut().ok()?.toggle_view()?;
        Some(view_mode_name(mode).to_string())
    }

    /// Select a node by id as if it had been clicked.
    pub fn select(&self, node_id: &str) -> Result<(), JsValue> {
        let mut s = self
            .scene
            .try_borrow_mut()
            .map_err(|_| JsValue::from_str("scene is busy"))?;
        s.select(node_id)
            .map(|_| ())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Tooltip text for a node id, `undefined` when unknown.
    pub fn describe(&self, node_id: &str) -> Option<String> {
        self.scene.try_borrow().ok()?.describe(node_id)
    }

    pub fn frames(&self) -> f64 {
        self.scene
            .try_borrow()
            .map(|s| s.frame_loop.frames_rendered() as f64)
            .unwrap_or(0.0)
    }
}

fn view_mode_name(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Map => "map",
        ViewMode::Cards => "cards",
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    dom::on_dom_ready(auto_mount);
}

fn auto_mount() {
    let Some(document) = dom::window_document() else {
        return;
    };
    if document.get_element_by_id(HERO_CANVAS_ID).is_some() {
        mount_logged(SceneKind::Hero);
    }
    let path = document
        .location()
        .and_then(|l| l.pathname().ok())
        .unwrap_or_default();
    if helpers::is_project_listing_path(&path) {
        mount_logged(SceneKind::ProjectMap);
    }
}

/// Mount `kind`, logging instead of raising: a page without the canvas or
/// with a broken one keeps working, just without the effect.
fn mount_logged(kind: SceneKind) -> Option<SceneHandle> {
    match mount(kind) {
        Ok(Some(handle)) => Some(handle),
        Ok(None) => {
            log::info!("[mount] {kind:?}: nothing to mount on this page");
            None
        }
        Err(e) => {
            log::error!("[mount] {kind:?}: {e:#}");
            None
        }
    }
}

#[wasm_bindgen(js_name = mountHero)]
pub fn mount_hero() -> Option<SceneHandle> {
    mount_logged(SceneKind::Hero)
}

#[wasm_bindgen(js_name = mountProjectMap)]
pub fn mount_project_map() -> Option<SceneHandle> {
    mount_logged(SceneKind::ProjectMap)
}

/// Toggle the first mounted project map, if any.
#[wasm_bindgen(js_name = toggleView)]
pub fn toggle_view() -> Option<String> {
    let scenes = SCENES.with(|all| all.borrow().clone());
    scenes
        .into_iter()
        .find_map(|scene| SceneHandle { scene }.toggle_view())
}

#[wasm_bindgen(js_name = disposeAll)]
pub fn dispose_all() {
    let scenes = SCENES.with(|all| std::mem::take(&mut *all.borrow_mut()));
    for scene in scenes {
        if let Ok(mut s) = scene.try_borrow_mut() {
            s.dispose();
        }
    }
}

/// `Ok(None)` when the page has nothing to mount on.
fn mount(kind: SceneKind) -> anyhow::Result<Option<SceneHandle>> {
    let Some(window) = web::window() else {
        return Ok(None);
    };
    let Some(document) = window.document() else {
        return Ok(None);
    };
    let canvas_id = match kind {
        SceneKind::Hero => HERO_CANVAS_ID,
        SceneKind::ProjectMap => {
            if !inject_map_markup(&document)? {
                return Ok(None);
            }
            MAP_CANVAS_ID
        }
    };
    let Some(element) = document.get_element_by_id(canvas_id) else {
        return Ok(None);
    };
    let canvas = element
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| anyhow!("#{canvas_id} is not a canvas"))?;

    if canvas.has_attribute(MOUNTED_ATTRIBUTE) {
        log::info!("[mount] #{canvas_id} already mounted");
        return Ok(mounted_handle(&canvas));
    }

    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow!("getContext failed: {:?}", e))?
        .context("2d context unavailable")?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|_| anyhow!("unexpected context type"))?;

    let config = load_config(kind, &canvas);
    let reduced = dom::prefers_reduced_motion(&window);
    let motion = if reduced {
        MotionPreference::Reduced
    } else {
        MotionPreference::Full
    };

    let (sizing, toggle, view) = match kind {
        SceneKind::Hero => {
            let banner = canvas
                .closest(HERO_CONTAINER_SELECTOR)
                .ok()
                .flatten()
                .or_else(|| canvas.parent_element())
                .unwrap_or_else(|| canvas.clone().into());
            (dom::CanvasSizing::Pinned(banner), None, None)
        }
        SceneKind::ProjectMap => {
            let view = canvas
                .closest(MAP_CONTAINER_SELECTOR)
                .ok()
                .flatten()
                .map(|container| {
                    let label = document.get_element_by_id(MAP_LABEL_ID);
                    view::MapView::new(view::DomViewPresenter::new(container, label))
                });
            let toggle = document.get_element_by_id(MAP_TOGGLE_ID);
            let aspect = f64::from(config.reference_size.x) / f64::from(config.reference_size.y);
            (dom::CanvasSizing::FillWidth { aspect }, toggle, view)
        }
    };

    let seed = helpers::seed_from_unit(js_sys::Math::random());
    let scene = Rc::new(RefCell::new(Scene {
        engine: showcase_core::Engine::new(config, seed),
        frame_loop: FrameLoop::new(frame::RafScheduler::new(window.clone())),
        surface: surface::CanvasSurface::new(ctx),
        canvas: canvas.clone(),
        sizing,
        host: selection::DomSelectionHost::new(window.clone(), document.clone(), reduced),
        view,
        listeners: Vec::new(),
    }));

    scene.borrow_mut().resize_from_dom();
    events::wire_scene(&scene, &window, toggle.as_ref());
    frame::start_loop(&scene, motion);
    _ = canvas.set_attribute(MOUNTED_ATTRIBUTE, "");
    SCENES.with(|all| all.borrow_mut().push(scene.clone()));

    log::info!("[mount] #{canvas_id} {kind:?} motion={motion:?}");
    Ok(Some(SceneHandle { scene }))
}

fn mounted_handle(canvas: &web::HtmlCanvasElement) -> Option<SceneHandle> {
    SCENES.with(|all| {
        all.borrow()
            .iter()
            .find(|s| s.try_borrow().map(|s| s.canvas == *canvas).unwrap_or(false))
            .cloned()
            .map(|scene| SceneHandle { scene })
    })
}

/// Preset for `kind`, overlaid with the canvas's JSON config attribute when
/// present. A malformed overlay is logged and ignored.
fn load_config(kind: SceneKind, canvas: &web::HtmlCanvasElement) -> EngineConfig {
    let preset = EngineConfig::preset(kind);
    let Some(json) = canvas.get_attribute(CONFIG_ATTRIBUTE) else {
        return preset;
    };
    match preset.overlay_json(&json) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("[mount] ignoring {CONFIG_ATTRIBUTE}: {e}");
            preset
        }
    }
}

/// Add the map stylesheet, and the map markup when the page does not ship
/// its own canvas. `false` when there is neither a canvas nor a container.
fn inject_map_markup(document: &web::Document) -> anyhow::Result<bool> {
    let has_canvas = document.get_element_by_id(MAP_CANVAS_ID).is_some();
    let container = document
        .query_selector(MAP_CONTAINER_SELECTOR)
        .map_err(|e| anyhow!("{:?}", e))?;
    if !has_canvas && container.is_none() {
        return Ok(false);
    }
    ensure_map_styles(document)?;
    if has_canvas {
        return Ok(true);
    }
    let Some(container) = container else {
        return Ok(false);
    };

    let section = document
        .create_element("div")
        .map_err(|e| anyhow!("{:?}", e))?;
    section.set_class_name("adventure-view");
    section.set_inner_html(MAP_MARKUP);
    container
        .insert_before(&section, container.first_child().as_ref())
        .map_err(|e| anyhow!("{:?}", e))?;
    log::info!("[mount] injected project map markup");
    Ok(true)
}

/// The map stylesheet goes in once per document, whoever supplied the canvas.
fn ensure_map_styles(document: &web::Document) -> anyhow::Result<()> {
    if document.get_element_by_id(MAP_STYLE_ID).is_some() {
        return Ok(());
    }
    let style = document
        .create_element("style")
        .map_err(|e| anyhow!("{:?}", e))?;
    style.set_id(MAP_STYLE_ID);
    style.set_text_content(Some(MAP_STYLES));
    if let Some(head) = document.head() {
        _ = head.append_child(&style);
    }
    Ok(())
}
