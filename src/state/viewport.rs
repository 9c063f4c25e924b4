use serde::{Deserialize, Serialize};

/// What is on screen: the world point at the surface center and the
/// world distance covered by one screen pixel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    pub center_re: f64,
    pub center_im: f64,
    pub scale: f64,
}

impl ViewportState {
    pub fn new(center_re: f64, center_im: f64, scale: f64) -> Self {
        Self {
            center_re,
            center_im,
            scale,
        }
    }

    /// Clamp a computed scale into `(0, max_scale]`. NaN keeps the current scale.
    pub fn clamped_scale(&self, scale: f64, max_scale: f64) -> f64 {
        if scale.is_nan() {
            return self.scale;
        }
        scale.clamp(f64::MIN_POSITIVE, max_scale)
    }

    /// Move the center and set the scale together.
    pub fn commit(&mut self, center_re: f64, center_im: f64, scale: f64) {
        self.center_re = center_re;
        self.center_im = center_im;
        self.scale = scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_caps_at_max_scale() {
        let v = ViewportState::new(0.0, 0.0, 0.01);
        assert_eq!(v.clamped_scale(0.5, 0.02), 0.02);
    }

    #[test]
    fn clamp_keeps_scale_positive() {
        let v = ViewportState::new(0.0, 0.0, 0.01);
        assert!(v.clamped_scale(0.0, 0.02) > 0.0);
        assert!(v.clamped_scale(-3.0, 0.02) > 0.0);
    }

    #[test]
    fn clamp_ignores_nan() {
        let v = ViewportState::new(0.0, 0.0, 0.01);
        assert_eq!(v.clamped_scale(f64::NAN, 0.02), 0.01);
    }

    #[test]
    fn clamp_passes_values_in_range() {
        let v = ViewportState::new(0.0, 0.0, 0.01);
        assert_eq!(v.clamped_scale(0.015, 0.02), 0.015);
    }
}
