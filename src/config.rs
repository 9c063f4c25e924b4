//! Viewer configuration.
//!
//! Defaults reproduce the stock viewer: a 4-unit tall view of the plane
//! centered at -0.5, 500 iterations, 10% zoom steps and a 250 ms FPS window.
//! A JSON override may be stored in `localStorage` under [`CONFIG_KEY`].

use serde::{Deserialize, Serialize};

use crate::error::ViewerError;

pub const CONFIG_KEY: &str = "fv_config";
pub const SHOW_FPS_KEY: &str = "fv_setting_show_fps";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Element id of the canvas the renderer binds to.
    pub surface_id: String,
    pub max_iterations: i32,
    pub initial_center_re: f64,
    pub initial_center_im: f64,
    /// World height visible when fully zoomed out.
    pub initial_span: f64,
    /// Scale multiplier for one zoom-in step. Zoom-out uses its inverse.
    pub zoom_in_factor: f64,
    pub fps_window_ms: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            surface_id: "mandelbrot".to_string(),
            max_iterations: 500,
            initial_center_re: -0.5,
            initial_center_im: 0.0,
            initial_span: 4.0,
            zoom_in_factor: 0.9,
            fps_window_ms: 250.0,
        }
    }
}

impl ViewerConfig {
    pub fn from_json(raw: &str) -> Result<Self, ViewerError> {
        let cfg: ViewerConfig = serde_json::from_str(raw)?;
        Ok(cfg.validated())
    }

    /// Replace out-of-range values with their defaults.
    pub fn validated(mut self) -> Self {
        let d = Self::default();
        if self.surface_id.is_empty() {
            self.surface_id = d.surface_id;
        }
        if self.max_iterations <= 0 {
            self.max_iterations = d.max_iterations;
        }
        if !(self.initial_span.is_finite() && self.initial_span > 0.0) {
            self.initial_span = d.initial_span;
        }
        if !(self.zoom_in_factor > 0.0 && self.zoom_in_factor < 1.0) {
            self.zoom_in_factor = d.zoom_in_factor;
        }
        if !(self.fps_window_ms.is_finite() && self.fps_window_ms > 0.0) {
            self.fps_window_ms = d.fps_window_ms;
        }
        if !self.initial_center_re.is_finite() {
            self.initial_center_re = d.initial_center_re;
        }
        if !self.initial_center_im.is_finite() {
            self.initial_center_im = d.initial_center_im;
        }
        self
    }

    /// Scale at which `initial_span` fills a surface `height` pixels tall.
    pub fn max_scale(&self, height: f64) -> f64 {
        self.initial_span / height.max(1.0)
    }

    /// Load the stored override, falling back to defaults.
    pub fn load() -> Self {
        let Some(raw) = read_setting(CONFIG_KEY) else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(cfg) => cfg,
            Err(err) => {
                log::warn!("ignoring stored config: {err}");
                Self::default()
            }
        }
    }
}

fn read_setting(key: &str) -> Option<String> {
    let win = web_sys::window()?;
    let store = win.local_storage().ok()??;
    store.get_item(key).ok()?
}

fn write_setting(key: &str, value: &str) {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            if store.set_item(key, value).is_err() {
                log::warn!("could not persist setting {key}");
            }
        }
    }
}

/// FPS overlay visibility; shown unless explicitly turned off.
pub fn load_show_fps() -> bool {
    read_setting(SHOW_FPS_KEY).map_or(true, |v| !(v == "0" || v == "false"))
}

pub fn save_show_fps(show: bool) {
    write_setting(SHOW_FPS_KEY, if show { "1" } else { "0" });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let cfg = ViewerConfig::from_json("{}").unwrap();
        assert_eq!(cfg, ViewerConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg = ViewerConfig::from_json(r#"{"max_iterations": 2000, "surface_id": "fractal"}"#).unwrap();
        assert_eq!(cfg.max_iterations, 2000);
        assert_eq!(cfg.surface_id, "fractal");
        assert_eq!(cfg.zoom_in_factor, 0.9);
        assert_eq!(cfg.initial_center_re, -0.5);
    }

    #[test]
    fn bad_values_fall_back() {
        let cfg = ViewerConfig::from_json(
            r#"{"max_iterations": 0, "initial_span": -1.0, "zoom_in_factor": 1.5, "fps_window_ms": 0.0, "surface_id": ""}"#,
        )
        .unwrap();
        assert_eq!(cfg, ViewerConfig::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = ViewerConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ViewerError::Config(_)));
    }

    #[test]
    fn max_scale_fits_span_to_height() {
        let cfg = ViewerConfig::default();
        assert_eq!(cfg.max_scale(800.0), 4.0 / 800.0);
        assert_eq!(cfg.max_scale(0.0), 4.0);
    }
}
