// Drag and pinch sessions. Only one gesture is tracked at a time.
use crate::mapper::ScreenPoint;
use crate::state::ViewportState;

/// Which input opened a drag; each input only ends its own drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSource {
    Mouse,
    Touch,
}

/// A single pointer or single finger being dragged across the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub source: DragSource,
    pub last: ScreenPoint,
}

/// Snapshot taken the moment a second finger lands.
///
/// Every pinch update is computed from this snapshot rather than from the
/// current view, so many small moves end where one big move would.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchSession {
    pub initial_distance: f64,
    pub initial_view: ViewportState,
    pub midpoint: ScreenPoint,
}

impl PinchSession {
    pub fn open(a: ScreenPoint, b: ScreenPoint, view: ViewportState) -> Self {
        Self {
            initial_distance: a.distance(b),
            initial_view: view,
            midpoint: a.midpoint(b),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TouchState {
    #[default]
    Idle,
    Dragging(DragSession),
    Pinching(PinchSession),
}

impl TouchState {
    pub fn is_pinching(&self) -> bool {
        matches!(self, Self::Pinching(_))
    }

    pub fn is_dragging_by(&self, source: DragSource) -> bool {
        matches!(self, Self::Dragging(d) if d.source == source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinch_snapshot_records_distance_and_midpoint() {
        let view = ViewportState::new(-0.5, 0.0, 0.01);
        let p = PinchSession::open(ScreenPoint::new(0.0, 0.0), ScreenPoint::new(30.0, 40.0), view);
        assert_eq!(p.initial_distance, 50.0);
        assert_eq!(p.midpoint, ScreenPoint::new(15.0, 20.0));
        assert_eq!(p.initial_view, view);
    }

    #[test]
    fn drag_remembers_its_source() {
        let s = TouchState::Dragging(DragSession {
            source: DragSource::Touch,
            last: ScreenPoint::new(1.0, 2.0),
        });
        assert!(s.is_dragging_by(DragSource::Touch));
        assert!(!s.is_dragging_by(DragSource::Mouse));
    }

    #[test]
    fn default_state_is_idle() {
        let s = TouchState::default();
        assert!(!s.is_dragging_by(DragSource::Mouse));
        assert!(!s.is_dragging_by(DragSource::Touch));
        assert!(!s.is_pinching());
    }
}
