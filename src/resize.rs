// Surface size tracking. A size change repaints immediately instead of
// waiting for the next frame so the new framing is never stale.
use web_sys::{HtmlCanvasElement, Window};

use crate::mapper::SurfaceSize;
use crate::renderer::Renderer;
use crate::state::ViewportState;

#[derive(Debug, Clone)]
pub struct ResizeWatcher {
    surface: SurfaceSize,
}

impl ResizeWatcher {
    pub fn new(surface: SurfaceSize) -> Self {
        Self { surface }
    }

    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    pub fn on_resize<R: Renderer>(&mut self, width: u32, height: u32, view: &ViewportState, renderer: &R) {
        log::debug!("surface resized to {width}x{height}");
        self.surface = SurfaceSize::new(f64::from(width), f64::from(height));
        renderer.resize(width, height);
        renderer.render(view.center_re, view.center_im, view.scale);
    }
}

/// Window inner size in whole pixels, with a fallback when the host
/// cannot report one.
pub fn window_inner_size(window: &Window) -> (u32, u32) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(800.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(600.0);
    (width.max(0.0) as u32, height.max(0.0) as u32)
}

/// Size the canvas backing store to fill the window.
pub fn fit_canvas_to_window(window: &Window, canvas: &HtmlCanvasElement) -> (u32, u32) {
    let (w, h) = window_inner_size(window);
    canvas.set_width(w);
    canvas.set_height(h);
    (w, h)
}
