// Host-side tests for the pure helpers used by the wasm front-end.

mod helpers {
    include!("../src/helpers.rs");
}

use helpers::*;

#[test]
fn project_listing_routes() {
    assert!(is_project_listing_path("/projects"));
    assert!(is_project_listing_path("/projects.html"));
    assert!(is_project_listing_path("/en/projects/"));
    assert!(!is_project_listing_path("/"));
    assert!(!is_project_listing_path("/about.html"));
    assert!(!is_project_listing_path("/Projects"));
}

#[test]
fn card_selector_quotes_the_id() {
    assert_eq!(
        card_selector_for("data-project", "samepath"),
        "[data-project=\"samepath\"]"
    );
}

#[test]
fn card_selector_escapes_quotes_and_backslashes() {
    assert_eq!(
        card_selector_for("data-project", "a\"b\\c"),
        "[data-project=\"a\\\"b\\\\c\"]"
    );
}

#[test]
fn seed_spans_the_unit_interval() {
    assert_eq!(seed_from_unit(0.0), 0);
    assert_eq!(seed_from_unit(-3.0), 0);
    assert_eq!(seed_from_unit(1.0), u64::MAX);
    assert_ne!(seed_from_unit(0.25), seed_from_unit(0.75));
}

#[test]
fn fill_width_canvas_keeps_the_reference_aspect() {
    assert_eq!(fill_width_css_size(800.0, 2.0, 800.0), (800.0, 400.0));
    assert_eq!(fill_width_css_size(360.0, 2.0, 800.0), (360.0, 180.0));
    // no layout box yet
    assert_eq!(fill_width_css_size(0.0, 2.0, 800.0), (800.0, 400.0));
    assert_eq!(fill_width_css_size(f64::NAN, 2.0, 800.0), (800.0, 400.0));
    // a degenerate aspect falls back to 2:1
    assert_eq!(fill_width_css_size(600.0, 0.0, 800.0), (600.0, 300.0));
}

#[test]
fn high_dpi_backing_store_does_not_grow_across_resizes() {
    // The measured width comes from the parent, never from the backing
    // store, so repeated resizes at dpr 2 settle on the same sizes.
    let container_width = 800.0;
    let dpr = sanitize_pixel_ratio(2.0);
    let mut sizes = Vec::new();
    for _ in 0..4 {
        let (w, h) = fill_width_css_size(container_width, 2.0, 800.0);
        sizes.push((w, h, backing_store_px(w, dpr), backing_store_px(h, dpr)));
    }
    assert!(sizes.iter().all(|s| *s == (800.0, 400.0, 1600, 800)));
}

#[test]
fn backing_store_is_never_empty() {
    assert_eq!(backing_store_px(0.0, 2.0), 1);
    assert_eq!(backing_store_px(100.4, 1.0), 100);
    assert_eq!(backing_store_px(100.5, 1.5), 151);
    assert_eq!(sanitize_pixel_ratio(0.0), 1.0);
    assert_eq!(sanitize_pixel_ratio(f64::NAN), 1.0);
    assert_eq!(css_extent_or(-5.0, 9.0), 9.0);
}
