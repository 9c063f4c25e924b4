//! Frame-synchronized render loop.
//!
//! [`RenderLoop`] is the per-frame work (push the view into the renderer,
//! count the frame). [`FrameScheduler`] drives it from
//! `requestAnimationFrame` and can be stopped and started again.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::render::{AnimationFrame, request_animation_frame};

use crate::renderer::Renderer;
use crate::state::{FpsCounter, ViewportState};

#[derive(Debug, Clone)]
pub struct RenderLoop {
    fps: FpsCounter,
}

impl RenderLoop {
    pub fn new(now_ms: f64, fps_window_ms: f64) -> Self {
        Self {
            fps: FpsCounter::new(now_ms, fps_window_ms),
        }
    }

    /// Render the current view unconditionally and count the frame.
    /// Returns a fresh FPS reading when a sampling window closes.
    pub fn tick<R: Renderer>(&mut self, now_ms: f64, view: &ViewportState, renderer: &R) -> Option<f64> {
        renderer.render(view.center_re, view.center_im, view.scale);
        self.fps.tick(now_ms)
    }

    /// Start a new sampling window, e.g. after the loop was paused.
    pub fn restart(&mut self, now_ms: f64) {
        self.fps.reset(now_ms);
    }
}

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;
type FrameFn = Rc<RefCell<dyn FnMut(f64)>>;

/// Owns the `requestAnimationFrame` chain. Dropping it cancels the pending frame.
#[derive(Default)]
pub struct FrameScheduler {
    pending: FrameSlot,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.pending.borrow().is_some()
    }

    /// Call `on_frame` with the frame timestamp once per display refresh
    /// until [`stop`](Self::stop). Replaces any loop already running.
    pub fn start<F>(&mut self, on_frame: F)
    where
        F: FnMut(f64) + 'static,
    {
        self.stop();
        let on_frame: FrameFn = Rc::new(RefCell::new(on_frame));
        schedule(&self.pending, on_frame);
    }

    pub fn stop(&mut self) {
        // dropping the handle cancels the frame
        self.pending.borrow_mut().take();
    }
}

fn schedule(slot: &FrameSlot, on_frame: FrameFn) {
    let next = slot.clone();
    let handle = request_animation_frame(move |now| {
        (&mut *on_frame.borrow_mut())(now);
        // an emptied slot means the loop was stopped during this frame
        if next.borrow().is_some() {
            schedule(&next, on_frame);
        }
    });
    *slot.borrow_mut() = Some(handle);
}
