//! Node-Gosper space-filling curve for planar point sets.
//!
//! Points are quantised into a hexagonal grid, the grid hierarchy of a
//! recursive Gosper island is climbed from the finest level to the coarsest,
//! and the per-level child indices are packed into a `u64` code (three bits
//! per level, coarsest most significant). Sorting points by code yields a
//! locality preserving order, in the way Hilbert or Z-order codes are used
//! by spatial indexes.
//!
//! # Indexation patterns
//!
//! - Center: raw child indices
//! - Precise: continuous Node-Gosper curve
//! - Simple: Node-Gosper child order without cross-level transforms
//! - Linear
//! - Snake

/// Dataset loading and normalisation.
pub mod cloud;
/// Point hashing and curve construction.
pub mod curve;
/// Error types used across the crate.
pub mod error;
/// Grid scale derived from a bounding box and level.
pub mod grid;
/// Hexagonal cells and the level walk.
pub mod hex;
/// Code packing helpers.
pub mod ops;
/// Indexation patterns.
pub mod patterns;
/// Planar points and bounding boxes.
pub mod point;
/// Central registry of pattern metadata.
pub mod registry;
/// Ordering of codes.
pub mod sort;

pub use crate::{
    cloud::PointCloud,
    curve::{NodeGosperCurve, SortedCurve, SortedCurveEntry},
    grid::{GridSpec, MAX_LEVEL},
    hex::CubeCoord,
    ops::Code,
    patterns::Pattern,
    point::{BoundingBox, Point},
};

/// Construct a curve by pattern name.
///
/// Returns an error if the name is unknown, the level is too deep, or the
/// bounding box is degenerate.
pub fn curve_from_name(
    name: &str,
    level: u32,
    bbox: &BoundingBox,
) -> error::Result<NodeGosperCurve> {
    NodeGosperCurve::new(level, registry::lookup(name)?, bbox)
}
