//! Spatial acceleration structures.

pub mod index;
