//! Hexagonal lattice addressing: localisation of points into finest-level
//! cells and the Gosper contraction that climbs the cell hierarchy.
//!
//! Cells are addressed with cube coordinates `(x, y, z)` where
//! `x + y + z == 0`. Codes are expected to be bit-for-bit reproducible, so
//! the truncated constants and the rounding helper below must not be
//! replaced with "more exact" values.

use smallvec::SmallVec;

use crate::{grid::MAX_LEVEL, point::Point};

/// `sqrt(3) / 3`, truncated. Codes depend on this exact value.
const SQRT3_3: f64 = 0.5773502691896257;
/// `1 / 3`.
const F1_3: f64 = 0.3333333333333333;
/// `2 / 3`.
const F2_3: f64 = 0.6666666666666667;
/// `1 / 7`. Note the final digit: multiplication by this value is not the
/// same as division by seven.
const F1_7: f64 = 0.1428571428571428;

/// Maximum number of levels a walk can visit.
pub const MAX_DEPTH: usize = MAX_LEVEL as usize + 1;

/// Child index for a non-central cell, by `[residual is negative][axis]`.
const CHILD: [[u8; 3]; 2] = [[5, 1, 3], [2, 4, 6]];

/// Per-level raw child indices, finest level first.
pub type Digits = SmallVec<[u8; MAX_DEPTH]>;

/// Round half away from zero by truncating `v ± 0.5`.
///
/// This is not quite `f64::round`: `0.49999999999999994 + 0.5` is `1.0` in
/// binary floating point, so the two disagree on a handful of inputs and we
/// need the truncating form for reproducible codes.
#[inline]
pub fn round_half_away(v: f64) -> i64 {
    if v < 0.0 {
        (v - 0.5) as i64
    } else {
        (v + 0.5) as i64
    }
}

/// Integer cube coordinate of a hexagonal cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CubeCoord {
    /// First cube axis.
    pub x: i64,
    /// Second cube axis, always `-x - z`.
    pub y: i64,
    /// Third cube axis.
    pub z: i64,
}

impl CubeCoord {
    /// The central cell.
    pub const ORIGIN: Self = Self { x: 0, y: 0, z: 0 };

    /// Cell from its `x` and `z` axes; `y` is derived to keep the zero sum.
    pub const fn new(x: i64, z: i64) -> Self {
        Self { x, y: -x - z, z }
    }

    /// Number of steps between two cells on the hexagonal lattice.
    pub fn distance(&self, other: &Self) -> i64 {
        (self.x - other.x)
            .abs()
            .max((self.y - other.y).abs())
            .max((self.z - other.z).abs())
    }

    /// Whether the zero-sum invariant holds.
    pub fn is_valid(&self) -> bool {
        self.x + self.y + self.z == 0
    }
}

/// Locate the finest-level cell containing `p` for hexagons of edge length
/// `hex_size`.
///
/// Each fractional axis is rounded independently; the axis with the largest
/// rounding residual is then recomputed from the other two. `x` is only
/// recomputed when its residual is strictly the largest and `y` only when it
/// strictly beats `z`, so exact ties fall through to the later axis.
pub fn localize(p: &Point, hex_size: f64) -> CubeCoord {
    let fx = (p.x * SQRT3_3 - p.y * F1_3) / hex_size;
    let fz = p.y * F2_3 / hex_size;
    let fy = -fx - fz;

    let (mut x, mut y, mut z) = (
        round_half_away(fx),
        round_half_away(fy),
        round_half_away(fz),
    );

    let rx = (x as f64 - fx).abs();
    let ry = (y as f64 - fy).abs();
    let rz = (z as f64 - fz).abs();

    if rx > ry && rx > rz {
        x = -y - z;
    } else if ry > rz {
        y = -x - z;
    } else {
        z = -x - y;
    }
    CubeCoord { x, y, z }
}

/// Inverse of [`localize`] for cell centres: the planar centre of `cell`.
pub fn cell_center(cell: CubeCoord, hex_size: f64) -> Point {
    let y = 1.5 * cell.z as f64 * hex_size;
    let x = 3f64.sqrt() * hex_size * (cell.x as f64 + 0.5 * cell.z as f64);
    Point::new(x, y)
}

/// Climb one level: return the parent cell of `cell` and the raw child index
/// (0 for the central child, 1-6 around it) of `cell` within that parent.
///
/// `tolerance` is the residual below which the cell counts as central.
pub fn contract(cell: CubeCoord, tolerance: f64) -> (CubeCoord, u8) {
    let dx = (cell.x + cell.x - cell.z) as f64 * F1_7;
    let dz = (cell.x + cell.z + cell.z + cell.z) as f64 * F1_7;
    let dy = -dx - dz;

    let (px, py, pz) = (round_half_away(dx), round_half_away(dy), round_half_away(dz));
    let residual = [dx - px as f64, dy - py as f64, dz - pz as f64];
    let [ax, ay, az] = residual.map(f64::abs);

    // z wins only if it beats both others, otherwise y must beat x.
    let dominant = if az > ax && az > ay {
        2
    } else if ay > ax {
        1
    } else {
        0
    };

    let r = residual[dominant];
    let digit = if r.abs() < tolerance {
        0
    } else {
        CHILD[usize::from(r < 0.0)][dominant]
    };

    // The independently rounded `py` only feeds the residual; the parent keeps
    // the zero sum by deriving its y axis.
    (CubeCoord::new(px, pz), digit)
}

/// Result of climbing the hierarchy from a finest-level cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Walk {
    /// Raw child index at every level, finest first.
    pub digits: Digits,
    /// The ancestor reached after the coarsest level.
    pub root: CubeCoord,
}

impl Walk {
    /// Whether the walked cell lies inside the Gosper island rooted at the
    /// origin. Cells outside it alias codes of cells inside.
    pub fn in_island(&self) -> bool {
        self.root == CubeCoord::ORIGIN
    }
}

/// Apply [`contract`] `level + 1` times starting at `cell`.
pub fn walk(cell: CubeCoord, level: u32, tolerance: f64) -> Walk {
    let mut digits = Digits::new();
    let mut current = cell;
    for _ in 0..=level {
        let (parent, digit) = contract(current, tolerance);
        digits.push(digit);
        current = parent;
    }
    Walk {
        digits,
        root: current,
    }
}
