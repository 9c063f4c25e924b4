//! Gesture handling: mouse drag, wheel pan/zoom, one-finger drag and
//! two-finger pinch. Handlers only mutate the [`ViewportState`]; painting is
//! left to the render loop.

use crate::mapper::{
    center_for_anchor, screen_delta_to_world, screen_point_to_world, ScreenPoint, SurfaceSize,
};
use crate::state::{DragSession, DragSource, PinchSession, TouchState, ViewportState};

/// A wheel or trackpad scroll event in surface coordinates.
#[derive(Debug, Clone, Copy)]
pub struct WheelInput {
    pub position: ScreenPoint,
    pub delta_x: f64,
    pub delta_y: f64,
    /// Ctrl held, or the browser's synthesized trackpad pinch.
    pub zoom: bool,
}

#[derive(Debug, Clone)]
pub struct GestureController {
    touch: TouchState,
    max_scale: f64,
    zoom_in_factor: f64,
}

impl GestureController {
    pub fn new(max_scale: f64, zoom_in_factor: f64) -> Self {
        Self {
            touch: TouchState::Idle,
            max_scale,
            zoom_in_factor,
        }
    }

    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    pub fn state(&self) -> &TouchState {
        &self.touch
    }

    pub fn zoom_in_factor(&self) -> f64 {
        self.zoom_in_factor
    }

    /// Exact inverse of the zoom-in step, so in-then-out returns to the same scale.
    pub fn zoom_out_factor(&self) -> f64 {
        1.0 / self.zoom_in_factor
    }

    pub fn pointer_down(&mut self, p: ScreenPoint) {
        if self.touch.is_pinching() {
            return;
        }
        self.touch = TouchState::Dragging(DragSession {
            source: DragSource::Mouse,
            last: p,
        });
    }

    pub fn pointer_move(&mut self, p: ScreenPoint, view: &mut ViewportState) {
        self.drag_to(DragSource::Mouse, p, view);
    }

    pub fn pointer_up(&mut self) {
        if self.touch.is_dragging_by(DragSource::Mouse) {
            self.touch = TouchState::Idle;
        }
    }

    pub fn wheel(&self, input: WheelInput, view: &mut ViewportState, surface: SurfaceSize) {
        if input.zoom {
            let factor = if input.delta_y < 0.0 {
                self.zoom_in_factor()
            } else {
                self.zoom_out_factor()
            };
            self.zoom_at(input.position, factor, view, surface);
        } else {
            view.center_re += input.delta_x * view.scale;
            view.center_im -= input.delta_y * view.scale;
        }
    }

    /// Scale by `factor` keeping the world point under `p` fixed on screen.
    pub fn zoom_at(&self, p: ScreenPoint, factor: f64, view: &mut ViewportState, surface: SurfaceSize) {
        let anchor = screen_point_to_world(p, view, surface);
        let new_scale = view.clamped_scale(view.scale * factor, self.max_scale);
        let c = center_for_anchor(anchor, p, new_scale, surface);
        view.commit(c.re, c.im, new_scale);
    }

    pub fn touch_start(&mut self, touches: &[ScreenPoint], view: &ViewportState) {
        match touches {
            [a, b] => self.touch = TouchState::Pinching(PinchSession::open(*a, *b, *view)),
            [only] => {
                self.touch = TouchState::Dragging(DragSession {
                    source: DragSource::Touch,
                    last: *only,
                });
            }
            _ => {}
        }
    }

    pub fn touch_move(&mut self, touches: &[ScreenPoint], view: &mut ViewportState, surface: SurfaceSize) {
        match touches {
            [a, b] => {
                if let TouchState::Pinching(pinch) = self.touch {
                    self.pinch_to(&pinch, a.distance(*b), view, surface);
                }
            }
            [only] => self.drag_to(DragSource::Touch, *only, view),
            _ => {}
        }
    }

    /// `remaining` is the number of touch points still on the surface.
    pub fn touch_end(&mut self, remaining: usize) {
        // A lifted pinch finger does not hand over to a drag; the next
        // touchstart re-arms one. A mouse drag is left alone.
        let close = match self.touch {
            TouchState::Pinching(_) => remaining < 2,
            TouchState::Dragging(d) => d.source == DragSource::Touch && remaining == 0,
            TouchState::Idle => false,
        };
        if close {
            self.touch = TouchState::Idle;
        }
    }

    fn drag_to(&mut self, source: DragSource, p: ScreenPoint, view: &mut ViewportState) {
        let TouchState::Dragging(session) = &mut self.touch else {
            return;
        };
        if session.source != source {
            return;
        }
        let d = screen_delta_to_world(p.x - session.last.x, p.y - session.last.y, view.scale);
        session.last = p;
        // content follows the pointer
        view.center_re -= d.re;
        view.center_im -= d.im;
    }

    fn pinch_to(&self, pinch: &PinchSession, distance: f64, view: &mut ViewportState, surface: SurfaceSize) {
        if !(distance > 0.0 && pinch.initial_distance > 0.0) {
            return;
        }
        let start = &pinch.initial_view;
        let target = start.scale * (pinch.initial_distance / distance);
        if !target.is_finite() {
            return;
        }
        let new_scale = start.clamped_scale(target, self.max_scale);
        let anchor = screen_point_to_world(pinch.midpoint, start, surface);
        let c = center_for_anchor(anchor, pinch.midpoint, new_scale, surface);
        view.commit(c.re, c.im, new_scale);
    }
}
