use crate::config;
use crate::geometry::BoundingBox;

// Represents the bounded area the robot drives in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f64,        // Right edge, in pixels
    pub height: f64,       // Bottom edge, in pixels
    pub lower_margin: f64, // Smallest x1/y1 still considered inside
}

impl Arena {
    pub fn new(width: f64, height: f64, lower_margin: f64) -> Self {
        Arena {
            width,
            height,
            lower_margin,
        }
    }

    /// True if any edge of `bbox` is past the arena bounds.
    pub fn is_violated_by(&self, bbox: &BoundingBox) -> bool {
        bbox.x2 > self.width
            || bbox.x1 < self.lower_margin
            || bbox.y2 > self.height
            || bbox.y1 < self.lower_margin
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(
            config::CANVAS_WIDTH,
            config::CANVAS_HEIGHT,
            config::LOWER_MARGIN,
        )
    }
}
