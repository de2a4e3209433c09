//! Plain geometry types and the trapezoidal drop-zone test.

/// A point in page or viewport coordinates (pixels).
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// The pan's drop target: a trapezoid derived from the pan's bounding box,
/// with the top edge inset on each side to match the tapered pan shape.
/// The zone is more permissive at the bottom than at the top.
#[derive(Debug, Clone, Copy)]
pub struct PanZone {
    rect: Rect,
    top_inset_ratio: f32,
}

impl PanZone {
    pub fn new(rect: Rect, top_inset_ratio: f32) -> Self {
        Self {
            rect,
            top_inset_ratio,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    /// Trapezoid membership test for a dropped object's center point.
    ///
    /// Rejects outside the vertical span, then linearly interpolates the
    /// left/right boundaries between the inset top corners and the
    /// full-width bottom corners at the center's vertical progress.
    /// Horizontal containment is strict.
    pub fn contains(&self, center: Point) -> bool {
        let r = self.rect;
        let inset = r.width * self.top_inset_ratio;
        let top_left_x = r.left + inset;
        let top_right_x = r.right() - inset;

        if center.y < r.top || center.y > r.bottom() {
            return false;
        }
        let progress = (center.y - r.top) / r.height;
        let left_bound = r.left + (top_left_x - r.left) * (1.0 - progress);
        let right_bound = r.right() + (top_right_x - r.right()) * (1.0 - progress);
        center.x > left_bound && center.x < right_bound
    }
}
