use crate::config::Settings;
use crate::surface::backing_size;
use anyhow::Context;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .with_context(|| format!("missing #{id}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{id} is not a canvas: {:?}", e)))
}

/// Detached canvas used as the off-screen buffer.
pub fn create_buffer_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

/// Settings overridden by `data-*` attributes on the canvas, e.g. `data-ratio="0.2"`.
pub fn read_settings(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Settings> {
    Settings::from_lookup(|key| canvas.get_attribute(&format!("data-{key}")))
}

pub fn window_inner_size() -> Option<(f64, f64)> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

/// Backing size for the current window, or `None` outside a browser window.
pub fn current_backing_size(settings: &Settings) -> Option<(u32, u32)> {
    let (w, h) = window_inner_size()?;
    Some(backing_size(w, h, settings.ratio))
}

/// Stretch the low-resolution canvas over the window and apply the cursor blur.
pub fn style_visible_canvas(canvas: &web::HtmlCanvasElement, settings: &Settings) {
    let style = canvas.style();
    _ = style.set_property("position", "absolute");
    _ = style.set_property("left", "0");
    _ = style.set_property("top", "0");
    _ = style.set_property("filter", &settings.cursor_filter());
    fit_to_window(canvas);
}

pub fn fit_to_window(canvas: &web::HtmlCanvasElement) {
    if let Some((w, h)) = window_inner_size() {
        let style = canvas.style();
        _ = style.set_property("width", &format!("{w}px"));
        _ = style.set_property("height", &format!("{h}px"));
    }
}
