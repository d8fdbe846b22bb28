//! Tile grid layout and per-tile annotation assignment.

pub mod annotator;
pub mod grid;
