//! End-to-end composition: filter, project and tile a raster's annotations in
//! one call.
//!
//! This is the layer the original collection scripts wired by hand for every
//! raster: read the shapefile boxes, drop the objects below the height
//! threshold, push the survivors through the affine transform and split the
//! result into training tiles. One malformed box must not abort the batch, so
//! per-box projection failures are collected and reported next to the result.

use crate::core::geo::{PixelBox, WorldBox};
use crate::core::raster::RasterMeta;
use crate::project::project;
use crate::tiling::annotator::{annotate, TileAnnotations};
use crate::{Result, TileError};

/// Tuning knobs for one tiling pass
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOptions {
    pub tile_width: i64,
    pub tile_height: i64,
    /// Drop boxes whose `height` attribute falls below this value. Boxes
    /// without a height attribute always pass.
    pub min_height: Option<f64>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            tile_width: 512,
            tile_height: 512,
            min_height: None,
        }
    }
}

/// A box that could not be projected, with its position in the input slice
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedBox {
    pub index: usize,
    pub reason: TileError,
}

/// Result of [`annotate_raster`]: the per-tile mapping plus the boxes that
/// were skipped on the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineOutcome {
    pub tiles: TileAnnotations,
    pub skipped: Vec<SkippedBox>,
}

/// Projects every world box into pixel space and assigns the results to the
/// raster's tile grid.
///
/// Partial-failure semantics: a box rejected by the projector (degenerate
/// transform, unnormalized corners) is recorded in `skipped` and processing
/// continues with the rest. Configuration errors abort the whole call.
///
/// # Errors
///
/// [`TileError::InvalidTileSize`] when the options carry non-positive tile
/// dimensions; nothing is projected in that case.
pub fn annotate_raster(
    raster: &RasterMeta,
    boxes: &[WorldBox],
    options: &PipelineOptions,
) -> Result<PipelineOutcome> {
    // Reject bad configuration before doing any per-box work.
    if options.tile_width <= 0 || options.tile_height <= 0 {
        return Err(TileError::InvalidTileSize {
            width: options.tile_width,
            height: options.tile_height,
        });
    }

    let mut pixel_boxes: Vec<PixelBox> = Vec::with_capacity(boxes.len());
    let mut skipped = Vec::new();

    for (index, world) in boxes.iter().enumerate() {
        if let (Some(min), Some(height)) = (options.min_height, world.height) {
            if height < min {
                continue;
            }
        }

        match project(world, &raster.transform) {
            Ok(pixel) => pixel_boxes.push(pixel),
            Err(reason) => {
                log::debug!("skipping box {index}: {reason}");
                skipped.push(SkippedBox { index, reason });
            }
        }
    }

    let tiles = annotate(raster, &pixel_boxes, options.tile_width, options.tile_height)?;

    Ok(PipelineOutcome { tiles, skipped })
}
