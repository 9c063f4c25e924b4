//! Top-level viewport controller.
//!
//! `Viewer` owns the renderer and composes gestures, the render loop and the
//! resize watcher around a single [`ViewportState`]. It has no DOM
//! dependency; the yew component feeds it surface-local coordinates and
//! frame timestamps.

use crate::config::ViewerConfig;
use crate::gesture::{GestureController, WheelInput};
use crate::mapper::{ScreenPoint, SurfaceSize};
use crate::render_loop::RenderLoop;
use crate::renderer::Renderer;
use crate::resize::ResizeWatcher;
use crate::state::{DragSource, ViewportState};

pub struct Viewer<R: Renderer> {
    renderer: R,
    view: ViewportState,
    home: ViewportState,
    gestures: GestureController,
    render_loop: RenderLoop,
    resize: ResizeWatcher,
}

impl<R: Renderer> Viewer<R> {
    /// Take ownership of a freshly created renderer and paint the start view.
    ///
    /// The fully zoomed-out scale is fixed here from the startup surface height.
    pub fn new(renderer: R, config: &ViewerConfig, surface: SurfaceSize, now_ms: f64) -> Self {
        let max_scale = config.max_scale(surface.height);
        let home = ViewportState::new(config.initial_center_re, config.initial_center_im, max_scale);
        renderer.render(home.center_re, home.center_im, home.scale);
        Self {
            renderer,
            view: home,
            home,
            gestures: GestureController::new(max_scale, config.zoom_in_factor),
            render_loop: RenderLoop::new(now_ms, config.fps_window_ms),
            resize: ResizeWatcher::new(surface),
        }
    }

    pub fn view(&self) -> ViewportState {
        self.view
    }

    pub fn surface(&self) -> SurfaceSize {
        self.resize.surface()
    }

    pub fn max_scale(&self) -> f64 {
        self.gestures.max_scale()
    }

    pub fn is_mouse_dragging(&self) -> bool {
        self.gestures.state().is_dragging_by(DragSource::Mouse)
    }

    pub fn on_mouse_down(&mut self, p: ScreenPoint) {
        self.gestures.pointer_down(p);
    }

    pub fn on_mouse_move(&mut self, p: ScreenPoint) {
        self.gestures.pointer_move(p, &mut self.view);
    }

    pub fn on_mouse_up(&mut self) {
        self.gestures.pointer_up();
    }

    pub fn on_wheel(&mut self, input: WheelInput) {
        let surface = self.surface();
        self.gestures.wheel(input, &mut self.view, surface);
    }

    pub fn on_touch_start(&mut self, touches: &[ScreenPoint]) {
        self.gestures.touch_start(touches, &self.view);
    }

    pub fn on_touch_move(&mut self, touches: &[ScreenPoint]) {
        let surface = self.surface();
        self.gestures.touch_move(touches, &mut self.view, surface);
    }

    pub fn on_touch_end(&mut self, remaining: usize) {
        self.gestures.touch_end(remaining);
    }

    pub fn zoom_in(&mut self) {
        let surface = self.surface();
        let factor = self.gestures.zoom_in_factor();
        self.gestures.zoom_at(surface.center(), factor, &mut self.view, surface);
    }

    pub fn zoom_out(&mut self) {
        let surface = self.surface();
        let factor = self.gestures.zoom_out_factor();
        self.gestures.zoom_at(surface.center(), factor, &mut self.view, surface);
    }

    /// Back to the startup center, fully zoomed out.
    pub fn reset(&mut self) {
        self.view = self.home;
    }

    pub fn frame(&mut self, now_ms: f64) -> Option<f64> {
        self.render_loop.tick(now_ms, &self.view, &self.renderer)
    }

    pub fn restart_loop(&mut self, now_ms: f64) {
        self.render_loop.restart(now_ms);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.resize.on_resize(width, height, &self.view, &self.renderer);
    }

    /// Give up the renderer for disposal.
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
