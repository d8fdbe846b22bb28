//! Assignment of projected annotation boxes to raster tiles.
//!
//! For every tile of the grid, collects the boxes that strictly overlap it,
//! clips each to the tile's extent and re-bases it to the tile's top-left
//! corner. A box spanning a tile boundary yields one independent clipped copy
//! per intersected tile; tiles that end up with no boxes are not materialized
//! at all. Whether the image-cropping side of the pipeline still writes a
//! crop for such a tile is its own business: both outputs are keyed by
//! `(row, col)` and emitted independently.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::geo::PixelBox;
use crate::core::raster::RasterMeta;
use crate::spatial::index::BoxIndex;
use crate::tiling::grid::{Tile, TileGrid, TileId};
use crate::{Result, TileError};

/// The boxes landing on a single tile, in input order, with coordinates local
/// to the tile's origin. Serializable as-is for downstream annotation
/// writers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileRecord {
    pub tile: Tile,
    pub boxes: Vec<PixelBox>,
}

/// Result of one tiling pass: non-empty tiles keyed by grid position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TileAnnotations {
    pub tiles: BTreeMap<TileId, TileRecord>,
}

impl TileAnnotations {
    /// Number of non-empty tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn get(&self, id: TileId) -> Option<&TileRecord> {
        self.tiles.get(&id)
    }

    /// Iterates records in row-major tile order
    pub fn records(&self) -> impl Iterator<Item = &TileRecord> {
        self.tiles.values()
    }

    /// Total number of clipped boxes across all tiles
    pub fn box_count(&self) -> usize {
        self.tiles.values().map(|r| r.boxes.len()).sum()
    }
}

/// Partitions the raster into `tile_width` x `tile_height` tiles and assigns
/// every box to each tile it strictly overlaps.
///
/// Stateless and re-entrant; each call builds a fresh result. Cost is bounded
/// by the number of tiles plus an R-tree lookup per tile.
///
/// # Errors
///
/// [`TileError::InvalidTileSize`] for non-positive tile dimensions. A raster
/// smaller than one tile is not an error here: it is logged and yields an
/// empty mapping.
pub fn annotate(
    raster: &RasterMeta,
    boxes: &[PixelBox],
    tile_width: i64,
    tile_height: i64,
) -> Result<TileAnnotations> {
    let grid = match TileGrid::new(raster.width, raster.height, tile_width, tile_height) {
        Ok(grid) => grid,
        Err(err @ TileError::EmptyGrid { .. }) => {
            log::warn!("{err}; emitting no annotations");
            return Ok(TileAnnotations::default());
        }
        Err(err) => return Err(err),
    };

    let index = BoxIndex::build(boxes);

    let mut tiles = BTreeMap::new();
    for tile in grid.tiles() {
        let clipped: Vec<PixelBox> = index
            .candidates_in(&tile.bounds)
            .into_iter()
            .filter_map(|idx| boxes[idx].clipped_to(&tile.bounds))
            .collect();

        if !clipped.is_empty() {
            tiles.insert(tile.id, TileRecord {
                tile,
                boxes: clipped,
            });
        }
    }

    Ok(TileAnnotations { tiles })
}
