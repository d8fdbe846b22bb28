use crate::core::geo::{AffineTransform, WorldBox};
use crate::{Result, TileError};
use serde::{Deserialize, Serialize};

/// Metadata of an already-opened raster: pixel dimensions plus the affine
/// transform from its header. The raster reader that produced it (rasterio,
/// GDAL, a TIFF parser) stays outside this crate; only these values cross the
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RasterMeta {
    pub width: u32,
    pub height: u32,
    pub transform: AffineTransform,
}

impl RasterMeta {
    pub fn new(width: u32, height: u32, transform: AffineTransform) -> Self {
        Self {
            width,
            height,
            transform,
        }
    }

    /// Computes the raster's footprint in map coordinates.
    ///
    /// Maps the pixel corners `(0, 0)` and `(width, height)` through the
    /// transform and normalizes the result, so a negative y scale still yields
    /// `min <= max`.
    pub fn world_extent(&self) -> Result<WorldBox> {
        if self.transform.is_degenerate() {
            return Err(TileError::DegenerateTransform {
                a: self.transform.a,
                e: self.transform.e,
            });
        }

        let x0 = self.transform.c;
        let y0 = self.transform.f;
        let x1 = self.transform.c + f64::from(self.width) * self.transform.a;
        let y1 = self.transform.f + f64::from(self.height) * self.transform.e;

        Ok(WorldBox::new(
            x0.min(x1),
            y0.min(y1),
            x0.max(x1),
            y0.max(y1),
        ))
    }
}
