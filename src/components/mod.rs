pub mod app;
pub mod fps_overlay;
pub mod fractal_view;
pub mod view_controls;
