//! Screen <-> world coordinate transforms.
//!
//! Screen space is CSS pixels relative to the surface's top-left corner with
//! Y growing downward. World space is the complex plane with the imaginary
//! axis growing upward, so every vertical term flips sign.

use crate::state::ViewportState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: ScreenPoint) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    pub fn midpoint(self, other: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldPoint {
    pub re: f64,
    pub im: f64,
}

impl WorldPoint {
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

/// Surface dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Offset of `p` from the surface center.
    fn offset(&self, p: ScreenPoint) -> (f64, f64) {
        (p.x - self.width / 2.0, p.y - self.height / 2.0)
    }

    pub fn center(&self) -> ScreenPoint {
        ScreenPoint::new(self.width / 2.0, self.height / 2.0)
    }
}

pub fn screen_delta_to_world(dx: f64, dy: f64, scale: f64) -> WorldPoint {
    WorldPoint::new(dx * scale, -dy * scale)
}

/// World point under the pixel `p`.
pub fn screen_point_to_world(p: ScreenPoint, view: &ViewportState, surface: SurfaceSize) -> WorldPoint {
    let (ox, oy) = surface.offset(p);
    WorldPoint::new(view.center_re + ox * view.scale, view.center_im - oy * view.scale)
}

/// Center that places `world` under the pixel `p` at `scale`.
pub fn center_for_anchor(world: WorldPoint, p: ScreenPoint, scale: f64, surface: SurfaceSize) -> WorldPoint {
    let (ox, oy) = surface.offset(p);
    WorldPoint::new(world.re - ox * scale, world.im + oy * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn surface() -> SurfaceSize {
        SurfaceSize::new(800.0, 600.0)
    }

    fn world_point_to_screen(w: WorldPoint, view: &ViewportState, surface: SurfaceSize) -> ScreenPoint {
        ScreenPoint::new(
            surface.width / 2.0 + (w.re - view.center_re) / view.scale,
            surface.height / 2.0 - (w.im - view.center_im) / view.scale,
        )
    }

    #[test]
    fn delta_inverts_vertical_axis() {
        let d = screen_delta_to_world(10.0, 20.0, 0.5);
        assert_eq!(d, WorldPoint::new(5.0, -10.0));
    }

    #[test]
    fn surface_center_maps_to_view_center() {
        let view = ViewportState::new(-0.5, 0.25, 0.01);
        let w = screen_point_to_world(surface().center(), &view, surface());
        assert_eq!(w, WorldPoint::new(-0.5, 0.25));
    }

    #[test]
    fn top_left_pixel_is_up_and_left_of_center() {
        let view = ViewportState::new(0.0, 0.0, 0.01);
        let w = screen_point_to_world(ScreenPoint::new(0.0, 0.0), &view, surface());
        assert!((w.re - -4.0).abs() < EPS);
        assert!((w.im - 3.0).abs() < EPS);
    }

    #[test]
    fn forward_then_inverse_is_lossless() {
        let view = ViewportState::new(-0.743, 0.131, 3.7e-5);
        for p in [
            ScreenPoint::new(0.0, 0.0),
            ScreenPoint::new(123.5, 456.25),
            ScreenPoint::new(799.0, 1.0),
        ] {
            let w = screen_point_to_world(p, &view, surface());
            let back = world_point_to_screen(w, &view, surface());
            assert!((back.x - p.x).abs() < 1e-6);
            assert!((back.y - p.y).abs() < 1e-6);
        }
    }

    #[test]
    fn anchor_center_puts_world_point_under_pixel() {
        let p = ScreenPoint::new(100.0, 500.0);
        let target = WorldPoint::new(0.3, -0.2);
        let c = center_for_anchor(target, p, 0.002, surface());
        let view = ViewportState::new(c.re, c.im, 0.002);
        let w = screen_point_to_world(p, &view, surface());
        assert!((w.re - target.re).abs() < EPS);
        assert!((w.im - target.im).abs() < EPS);
    }

    #[test]
    fn point_helpers() {
        let a = ScreenPoint::new(0.0, 0.0);
        let b = ScreenPoint::new(6.0, 8.0);
        assert_eq!(a.distance(b), 10.0);
        assert_eq!(a.midpoint(b), ScreenPoint::new(3.0, 4.0));
    }
}
