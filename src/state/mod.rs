pub mod fps;
pub mod touch;
pub mod viewport;

pub use fps::FpsCounter;
pub use touch::{DragSession, DragSource, PinchSession, TouchState};
pub use viewport::ViewportState;
