//! Grid specification: the immutable scale of the finest hexagonal grid for
//! a given bounding box and recursion depth.

use log::debug;

use crate::{
    error::{self, Error},
    hex::{self, CubeCoord, Walk},
    ops,
    point::{BoundingBox, Point},
};

/// Deepest supported recursion level. Twenty-one levels of three bits fill
/// 63 bits of a `u64` code.
pub const MAX_LEVEL: u32 = 20;

/// `1 / sqrt(7)`, the linear scale factor between consecutive levels.
const F1_SQRT7: f64 = 0.3779644730092272;

/// Radius of the circle inscribed into a Gosper island of each depth,
/// relative to the island's unit scale. Geometric constants of the fractal.
const NORM_INSC: [f64; MAX_LEVEL as usize + 1] = [
    0.755928946000,
    0.755928946000,
    0.750121467308,
    0.746782631146,
    0.746782631146,
    0.746577727521,
    0.746348363909,
    0.746348363909,
    0.746344578768,
    0.746327538283,
    0.746327538283,
    0.746327538283,
    0.746326555879,
    0.746326555879,
    0.746326555879,
    0.746326510616,
    0.746326510616,
    0.746326510616,
    0.746326508597,
    0.746326508597,
    0.746326508597,
];

/// Default residual below which a contraction step lands in the central
/// child. This is the single-precision literal `1e-5` widened to `f64`.
pub const DEFAULT_TOLERANCE: f64 = 1e-5_f32 as f64;

/// Validate a requested recursion level.
pub fn check_level(level: u32) -> error::Result<()> {
    if level > MAX_LEVEL {
        return Err(Error::Level {
            level,
            max: MAX_LEVEL,
        });
    }
    Ok(())
}

/// Finest-level hexagon size for a bounding box and level.
///
/// The half diagonal of the box fits exactly into the circle inscribed into
/// the Gosper island of depth `level + 1`.
pub fn small_hex_size(bbox: &BoundingBox, level: u32) -> error::Result<f64> {
    check_level(level)?;
    let half_diagonal = 0.5 * bbox.diagonal();
    if !half_diagonal.is_finite() || half_diagonal <= 0.0 {
        return Err(Error::Shape(format!("bounding box {bbox:?} has no extent")));
    }
    let island = half_diagonal / NORM_INSC[level as usize];
    Ok(island * F1_SQRT7.powf(f64::from(level)))
}

/// Immutable quantisation parameters shared by every point of a curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    /// Index of the deepest level (depth minus one).
    level: u32,
    /// Edge length of the finest hexagons.
    hex_size: f64,
    /// Central-child residual tolerance.
    tolerance: f64,
}

impl GridSpec {
    /// Derive the grid for `bbox` at `level`.
    ///
    /// Fails with [`Error::Level`] for levels above [`MAX_LEVEL`] and with
    /// [`Error::Shape`] for a box without extent.
    pub fn new(level: u32, bbox: &BoundingBox) -> error::Result<Self> {
        let hex_size = small_hex_size(bbox, level)?;
        debug!("grid: level {level}, finest hexagon size {hex_size:e}");
        Ok(Self {
            level,
            hex_size,
            tolerance: DEFAULT_TOLERANCE,
        })
    }

    /// Replace the central-child tolerance.
    pub fn with_tolerance(self, tolerance: f64) -> Self {
        Self { tolerance, ..self }
    }

    /// Index of the deepest level.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Number of levels walked per point.
    pub fn depth(&self) -> u32 {
        self.level + 1
    }

    /// Edge length of the finest hexagons.
    pub fn small_hex_size(&self) -> f64 {
        self.hex_size
    }

    /// Central-child residual tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Width of every code produced for this grid.
    pub fn code_bits(&self) -> u32 {
        ops::code_bits(self.level)
    }

    /// Largest value a code can take.
    pub fn max_code(&self) -> ops::Code {
        ops::code_mask(self.level)
    }

    /// Finest-level cell containing `p`.
    pub fn localize(&self, p: &Point) -> CubeCoord {
        hex::localize(p, self.hex_size)
    }

    /// Planar centre of a finest-level cell.
    pub fn cell_center(&self, cell: CubeCoord) -> Point {
        hex::cell_center(cell, self.hex_size)
    }

    /// Climb the hierarchy from a finest-level cell.
    pub fn walk(&self, cell: CubeCoord) -> Walk {
        hex::walk(cell, self.level, self.tolerance)
    }
}
