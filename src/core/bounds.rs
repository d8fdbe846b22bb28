use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in integer pixel coordinates.
///
/// Coordinates are half-open: a bounds of `[0, 0, 512, 512]` covers pixels
/// `0..512` on both axes. Tile extents and clipped annotation boxes are both
/// expressed with this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelBounds {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl PixelBounds {
    /// Creates new bounds from corner coordinates
    pub fn new(min_x: i64, min_y: i64, max_x: i64, max_y: i64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Gets the width of the bounds
    pub fn width(&self) -> i64 {
        self.max_x - self.min_x
    }

    /// Gets the height of the bounds
    pub fn height(&self) -> i64 {
        self.max_y - self.min_y
    }

    /// Checks if the bounds are valid (min <= max)
    pub fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }

    /// Checks for strict overlap with another bounds.
    ///
    /// Uses the half-open interval test: the rectangles must share a region of
    /// non-zero area on both axes. Touching along an edge or corner does not
    /// count as an intersection.
    pub fn intersects_strict(&self, other: &PixelBounds) -> bool {
        self.min_x < other.max_x
            && self.max_x > other.min_x
            && self.min_y < other.max_y
            && self.max_y > other.min_y
    }

    /// Gets the intersection of two bounds, or `None` when they do not
    /// strictly overlap
    pub fn intersection(&self, other: &PixelBounds) -> Option<PixelBounds> {
        if !self.intersects_strict(other) {
            return None;
        }

        Some(PixelBounds::new(
            self.min_x.max(other.min_x),
            self.min_y.max(other.min_y),
            self.max_x.min(other.max_x),
            self.max_y.min(other.max_y),
        ))
    }

    /// Returns the bounds shifted by the given offsets
    pub fn translated(&self, dx: i64, dy: i64) -> PixelBounds {
        PixelBounds::new(
            self.min_x + dx,
            self.min_y + dy,
            self.max_x + dx,
            self.max_y + dy,
        )
    }
}
