/// Whether `path` is a project-listing page (`/projects`, `/projects.html`,
/// or any path mentioning `projects`).
#[inline]
pub fn is_project_listing_path(path: &str) -> bool {
    path.contains("projects")
}

/// CSS attribute selector for the element tagged with a node id.
#[inline]
pub fn card_selector_for(attribute: &str, node_id: &str) -> String {
    let escaped = node_id.replace('\\', "\\\\").replace('"', "\\\"");
    format!("[{attribute}=\"{escaped}\"]")
}

/// Seed the engine RNG from a uniform `[0, 1)` sample.
#[inline]
pub fn seed_from_unit(sample: f64) -> u64 {
    (sample.clamp(0.0, 1.0) * u64::MAX as f64) as u64
}

/// A measured CSS extent, or `fallback` when the element has no layout box.
#[inline]
pub fn css_extent_or(measured: f64, fallback: f64) -> f64 {
    if measured.is_finite() && measured > 0.0 {
        measured
    } else {
        fallback
    }
}

/// Logical size of a canvas that fills its parent's width at `aspect`
/// (width / height).
pub fn fill_width_css_size(measured_width: f64, aspect: f64, fallback_width: f64) -> (f64, f64) {
    let width = css_extent_or(measured_width, fallback_width);
    let aspect = css_extent_or(aspect, 2.0);
    (width, width / aspect)
}

#[inline]
pub fn sanitize_pixel_ratio(dpr: f64) -> f64 {
    css_extent_or(dpr, 1.0)
}

/// Backing-store pixels for a CSS extent, never zero.
#[inline]
pub fn backing_store_px(css: f64, dpr: f64) -> u32 {
    ((css * dpr).round() as u32).max(1)
}
