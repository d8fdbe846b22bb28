//! # tilecut
//!
//! Splits a georeferenced raster into a grid of fixed-size tiles and carries
//! vector annotation boxes along: each box is projected from map coordinates
//! into pixel coordinates, assigned to every tile it overlaps, clipped to the
//! tile's extent and re-based to the tile's own origin.
//!
//! The crate is a pure computation core. Raster decoding, shapefile parsing,
//! annotation file formats and map retrieval are left to external
//! collaborators; this library only needs the raster's pixel dimensions, its
//! affine transform and the world-coordinate boxes.
//!
//! ```
//! use tilecut::prelude::*;
//!
//! let raster = RasterMeta::new(1024, 1024, AffineTransform::identity());
//! let boxes = vec![WorldBox::new(400.0, 400.0, 600.0, 600.0)];
//!
//! let outcome = annotate_raster(&raster, &boxes, &PipelineOptions::default()).unwrap();
//! // the box straddles all four 512x512 tiles
//! assert_eq!(outcome.tiles.len(), 4);
//! ```

pub mod core;
pub mod pipeline;
pub mod prelude;
pub mod project;
pub mod spatial;
pub mod tiling;

// Re-export public API
pub use crate::core::{
    bounds::PixelBounds,
    geo::{AffineTransform, PixelBox, WorldBox},
    raster::RasterMeta,
};

pub use crate::project::project;

pub use crate::tiling::{
    annotator::{annotate, TileAnnotations, TileRecord},
    grid::{Tile, TileGrid, TileId},
};

pub use crate::spatial::index::BoxIndex;

pub use crate::pipeline::{annotate_raster, PipelineOptions, PipelineOutcome, SkippedBox};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, TileError>;

/// Common error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TileError {
    /// A zero scale factor makes the affine transform non-invertible. Fatal to
    /// the single projection, not to a batch: callers may skip the box.
    #[error("degenerate affine transform: zero scale factor (a={a}, e={e})")]
    DegenerateTransform { a: f64, e: f64 },

    /// A world box that violates `min <= max` on either axis.
    #[error("invalid box: min ({min_x}, {min_y}) exceeds max ({max_x}, {max_y})")]
    InvalidBox {
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    },

    /// Non-positive tile dimensions. Fatal to the whole tiling call.
    #[error("invalid tile size: {width}x{height}")]
    InvalidTileSize { width: i64, height: i64 },

    /// The raster does not fit a single tile in at least one dimension. The
    /// annotator reports this and returns an empty mapping instead of failing.
    #[error("raster {image_width}x{image_height} is smaller than one {tile_width}x{tile_height} tile")]
    EmptyGrid {
        image_width: u32,
        image_height: u32,
        tile_width: i64,
        tile_height: i64,
    },
}

/// Error type alias for convenience
pub type Error = TileError;
