use crate::core::bounds::PixelBounds;
use serde::{Deserialize, Serialize};

/// A six-coefficient affine transform mapping raster pixel indices to
/// projected map coordinates, in the order raster metadata readers report it:
/// `a` = x pixel size, `b` = x skew, `c` = x origin, `d` = y skew,
/// `e` = y pixel size, `f` = y origin.
///
/// `e` is usually negative because raster rows grow downward while map Y grows
/// upward. The skew coefficients `b` and `d` are carried for completeness but
/// assumed zero by the projector. Immutable once read from the raster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl AffineTransform {
    /// Creates a new transform from the six coefficients
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// The identity transform: pixel coordinates equal map coordinates
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0)
    }

    /// A transform with a zero scale factor cannot be inverted
    pub fn is_degenerate(&self) -> bool {
        self.a == 0.0 || self.e == 0.0
    }
}

/// An object bounding box in projected map coordinates, as read from a vector
/// annotation source.
///
/// Callers own these and must supply them normalized (`min <= max` on both
/// axes); a violating box is rejected with [`TileError::InvalidBox`] when
/// projected. The optional `label` and `height` attributes travel with the box
/// through projection and tiling untouched.
///
/// [`TileError::InvalidBox`]: crate::TileError::InvalidBox
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub label: Option<String>,
    pub height: Option<f64>,
}

impl WorldBox {
    /// Creates a new box from corner coordinates, without attributes
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
            label: None,
            height: None,
        }
    }

    /// Attaches a class label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Attaches an object height attribute (used by caller-side filtering)
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Checks that the box is normalized (min <= max)
    pub fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }
}

/// An object bounding box in integer pixel coordinates, produced by
/// [`project`] and consumed by the tile annotator. Never hand-constructed.
///
/// [`project`]: crate::project::project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PixelBox {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
    pub label: Option<String>,
    pub height: Option<f64>,
}

impl PixelBox {
    pub(crate) fn from_bounds(
        bounds: PixelBounds,
        label: Option<String>,
        height: Option<f64>,
    ) -> Self {
        Self {
            min_x: bounds.min_x,
            min_y: bounds.min_y,
            max_x: bounds.max_x,
            max_y: bounds.max_y,
            label,
            height,
        }
    }

    /// The box's extent as plain pixel bounds
    pub fn bounds(&self) -> PixelBounds {
        PixelBounds::new(self.min_x, self.min_y, self.max_x, self.max_y)
    }

    /// Gets the width of the box in pixels
    pub fn width(&self) -> i64 {
        self.max_x - self.min_x
    }

    /// Gets the height of the box in pixels
    pub fn height_px(&self) -> i64 {
        self.max_y - self.min_y
    }

    /// Clips the box to a tile's extent and re-bases it to the tile's
    /// top-left origin.
    ///
    /// Returns `None` when the box and the tile do not strictly overlap, so a
    /// box that only touches a tile edge produces nothing. Local coordinates
    /// of the result always lie in `[0, tile_width] x [0, tile_height]`.
    pub fn clipped_to(&self, tile: &PixelBounds) -> Option<PixelBox> {
        let clipped = self.bounds().intersection(tile)?;
        let local = clipped.translated(-tile.min_x, -tile.min_y);
        Some(PixelBox::from_bounds(
            local,
            self.label.clone(),
            self.height,
        ))
    }
}
