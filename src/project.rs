//! Projection of world-coordinate boxes into raster pixel coordinates.
//!
//! The inverse of the raster's pixel-to-world affine transform, applied per
//! axis: `px = (wx - c) / a`, `py = (wy - f) / e`. The sign of `e` alone
//! decides whether the Y axis flips between the two spaces; the projector
//! transforms both corners and re-sorts each axis, so the returned box is
//! normalized for any sign combination.

use crate::core::geo::{AffineTransform, PixelBox, WorldBox};
use crate::core::bounds::PixelBounds;
use crate::{Result, TileError};

/// Projects a world-coordinate box into integer pixel coordinates.
///
/// Coordinates are rounded half away from zero. The `label` and `height`
/// attributes of the input carry over unchanged.
///
/// # Errors
///
/// - [`TileError::DegenerateTransform`] when `transform.a` or `transform.e`
///   is zero.
/// - [`TileError::InvalidBox`] when the input violates `min <= max`; callers
///   batching many boxes should skip the box and continue.
pub fn project(world: &WorldBox, transform: &AffineTransform) -> Result<PixelBox> {
    if transform.is_degenerate() {
        return Err(TileError::DegenerateTransform {
            a: transform.a,
            e: transform.e,
        });
    }
    if !world.is_valid() {
        return Err(TileError::InvalidBox {
            min_x: world.min_x,
            min_y: world.min_y,
            max_x: world.max_x,
            max_y: world.max_y,
        });
    }

    let x0 = ((world.min_x - transform.c) / transform.a).round() as i64;
    let x1 = ((world.max_x - transform.c) / transform.a).round() as i64;
    let y0 = ((world.min_y - transform.f) / transform.e).round() as i64;
    let y1 = ((world.max_y - transform.f) / transform.e).round() as i64;

    // A negative scale swaps the corners; re-sort so min <= max holds again.
    let bounds = PixelBounds::new(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1));

    Ok(PixelBox::from_bounds(
        bounds,
        world.label.clone(),
        world.height,
    ))
}
