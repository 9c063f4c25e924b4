//! Binding to the external GPU renderer.
//!
//! The renderer is a black box living on the JS side as a global
//! `GPURenderer` class. Everything in this crate talks to it through the
//! [`Renderer`] trait so the controller can run against a fake in tests.

use wasm_bindgen::prelude::*;

use crate::error::ViewerError;

pub trait Renderer {
    fn resize(&self, width: u32, height: u32);
    /// Draw the plane at the given center and scale. Safe to call every frame.
    fn render(&self, center_re: f64, center_im: f64, scale: f64);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = GPURenderer)]
    type GpuRenderer;

    #[wasm_bindgen(constructor, catch, js_class = "GPURenderer")]
    fn new(canvas_id: &str, max_iter: i32) -> Result<GpuRenderer, JsValue>;

    #[wasm_bindgen(method, js_class = "GPURenderer")]
    fn resize(this: &GpuRenderer, w: i32, h: i32);

    #[wasm_bindgen(method, js_class = "GPURenderer")]
    fn render(this: &GpuRenderer, re: f64, im: f64, scale: f64);

    #[wasm_bindgen(method, js_class = "GPURenderer")]
    fn free(this: &GpuRenderer);
}

/// Owned handle to a live renderer. Dropping it releases the JS-side
/// resources, so it is disposed exactly once.
pub struct RendererHandle {
    inner: GpuRenderer,
}

impl RendererHandle {
    /// Bind a renderer to the canvas with id `surface_id`.
    pub fn create(surface_id: &str, max_iterations: i32) -> Result<Self, ViewerError> {
        let window = web_sys::window().ok_or(ViewerError::NoWindow)?;
        let document = window.document().ok_or(ViewerError::NoWindow)?;
        if document.get_element_by_id(surface_id).is_none() {
            return Err(ViewerError::SurfaceNotFound(surface_id.to_string()));
        }
        let inner = GpuRenderer::new(surface_id, max_iterations).map_err(ViewerError::from_js)?;
        log::info!("renderer bound to #{surface_id} (max_iter={max_iterations})");
        Ok(Self { inner })
    }

    pub fn dispose(self) {
        drop(self);
    }
}

impl Renderer for RendererHandle {
    fn resize(&self, width: u32, height: u32) {
        let w = i32::try_from(width).unwrap_or(i32::MAX);
        let h = i32::try_from(height).unwrap_or(i32::MAX);
        self.inner.resize(w, h);
    }

    fn render(&self, center_re: f64, center_im: f64, scale: f64) {
        self.inner.render(center_re, center_im, scale);
    }
}

impl Drop for RendererHandle {
    fn drop(&mut self) {
        self.inner.free();
        log::info!("renderer disposed");
    }
}
