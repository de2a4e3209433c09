//! Pointer-event unification and drag-session state.

use crate::geometry::Point;
use crate::objects::ObjectId;

/// A pointer sample from the input surface. Mouse and touch event shapes
/// funnel into the same three-phase gesture lifecycle; `position()` is the
/// single normalized coordinate extraction.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerInput {
    Mouse(Point),
    /// Active touch points; the first one drives the gesture.
    Touch(Vec<Point>),
    /// Points that just lifted (touch end/cancel events report these).
    TouchEnded(Vec<Point>),
}

impl PointerInput {
    /// Normalize to a single (x, y) pair in viewport coordinates.
    /// Touch events with no reported points yield `None` and the gesture
    /// event is ignored.
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::Mouse(p) => Some(*p),
            Self::Touch(pts) | Self::TouchEnded(pts) => pts.first().copied(),
        }
    }
}

/// Transient state of an in-progress drag. Exists only between press-start
/// and press-end; cleared unconditionally on release.
#[derive(Debug, Clone, Copy)]
pub struct DragSession {
    pub id: ObjectId,
    /// Pointer offset from the object's top-left corner at grab time, so
    /// the same grab point tracks the pointer throughout the gesture.
    pub grab: Point,
}
