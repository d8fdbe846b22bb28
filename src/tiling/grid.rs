use crate::core::bounds::PixelBounds;
use crate::{Result, TileError};
use serde::{Deserialize, Serialize};

/// Grid position of a tile. Ordered row-major so mappings keyed by it iterate
/// deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId {
    pub row: u32,
    pub col: u32,
}

impl TileId {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// A fixed-size rectangular pixel region of the raster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub bounds: PixelBounds,
}

/// A regular grid of non-overlapping fixed-size tiles over a raster's pixel
/// extent.
///
/// The grid origin is pixel `(0, 0)`. Leftover pixels beyond the last full
/// tile row or column are dropped, so every tile has exactly the requested
/// size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    rows: u32,
    cols: u32,
    tile_width: i64,
    tile_height: i64,
}

impl TileGrid {
    /// Lays a grid over a raster of the given pixel dimensions.
    ///
    /// # Errors
    ///
    /// - [`TileError::InvalidTileSize`] for non-positive tile dimensions.
    /// - [`TileError::EmptyGrid`] when the raster is smaller than one tile in
    ///   either dimension.
    pub fn new(
        image_width: u32,
        image_height: u32,
        tile_width: i64,
        tile_height: i64,
    ) -> Result<Self> {
        if tile_width <= 0 || tile_height <= 0 {
            return Err(TileError::InvalidTileSize {
                width: tile_width,
                height: tile_height,
            });
        }

        let cols = (i64::from(image_width) / tile_width) as u32;
        let rows = (i64::from(image_height) / tile_height) as u32;
        if rows == 0 || cols == 0 {
            return Err(TileError::EmptyGrid {
                image_width,
                image_height,
                tile_width,
                tile_height,
            });
        }

        Ok(Self {
            rows,
            cols,
            tile_width,
            tile_height,
        })
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn tile_width(&self) -> i64 {
        self.tile_width
    }

    pub fn tile_height(&self) -> i64 {
        self.tile_height
    }

    /// Number of tiles in the grid
    pub fn len(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The tile at a grid position. Panics on an out-of-range id; ids should
    /// come from iterating the grid itself.
    pub fn tile(&self, id: TileId) -> Tile {
        assert!(id.row < self.rows && id.col < self.cols, "tile id out of grid");
        let min_x = i64::from(id.col) * self.tile_width;
        let min_y = i64::from(id.row) * self.tile_height;
        Tile {
            id,
            bounds: PixelBounds::new(
                min_x,
                min_y,
                min_x + self.tile_width,
                min_y + self.tile_height,
            ),
        }
    }

    /// Iterates all tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        (0..self.rows).flat_map(move |row| {
            (0..self.cols).map(move |col| self.tile(TileId::new(row, col)))
        })
    }
}
