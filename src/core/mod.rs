//! Core value types: affine transforms, world/pixel boxes, pixel rectangles
//! and raster metadata.

pub mod bounds;
pub mod geo;
pub mod raster;
