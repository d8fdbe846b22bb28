//! Prelude module for common tilecut types
//!
//! Re-exports the types most callers need, for easy importing with
//! `use tilecut::prelude::*;`

pub use crate::core::{
    bounds::PixelBounds,
    geo::{AffineTransform, PixelBox, WorldBox},
    raster::RasterMeta,
};

pub use crate::pipeline::{annotate_raster, PipelineOptions, PipelineOutcome, SkippedBox};

pub use crate::project::project;

pub use crate::spatial::index::BoxIndex;

pub use crate::tiling::{
    annotator::{annotate, TileAnnotations, TileRecord},
    grid::{Tile, TileGrid, TileId},
};

pub use crate::{Result, TileError};
