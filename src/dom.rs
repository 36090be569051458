use crate::constants::{FALLBACK_HEIGHT, FALLBACK_WIDTH};
use glam::DVec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn find_canvas(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{} is not a canvas: {:?}", id, e)))
}

/// Viewport size in CSS pixels, falling back to a fixed size when the window
/// does not report one.
pub fn viewport_size() -> DVec2 {
    let Some(window) = web::window() else {
        return DVec2::new(FALLBACK_WIDTH, FALLBACK_HEIGHT);
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(FALLBACK_WIDTH);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(FALLBACK_HEIGHT);
    DVec2::new(width, height)
}

/// Make the canvas backing store match the viewport.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) {
    let size = viewport_size();
    canvas.set_width((size.x as u32).max(1));
    canvas.set_height((size.y as u32).max(1));
}

/// Keep the canvas sized to the viewport for the lifetime of the page.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    sync_canvas_to_viewport(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        sync_canvas_to_viewport(&canvas_resize);
        log::debug!(
            "[dom] canvas resized to {}x{}",
            canvas_resize.width(),
            canvas_resize.height()
        );
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
