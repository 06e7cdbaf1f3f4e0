//! The Node-Gosper curve: hashing of points into codes and construction of
//! the curve order over a point set.

use log::{debug, warn};

use crate::{
    error::{self, Error},
    grid::GridSpec,
    hex::CubeCoord,
    ops::Code,
    patterns::Pattern,
    point::{BoundingBox, Point},
    sort,
};

/// A configured Node-Gosper curve over a fixed bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeGosperCurve {
    /// Quantisation of the plane.
    grid: GridSpec,
    /// Child numbering.
    pattern: Pattern,
}

impl NodeGosperCurve {
    /// Configure a curve of depth `level + 1` whose top-level island covers
    /// `bbox`.
    ///
    /// Fails before any hashing if `level` exceeds
    /// [`crate::grid::MAX_LEVEL`] or the box has no extent.
    pub fn new(level: u32, pattern: Pattern, bbox: &BoundingBox) -> error::Result<Self> {
        let grid = GridSpec::new(level, bbox)?;
        debug!("curve: {pattern} pattern, {} bit codes", grid.code_bits());
        Ok(Self { grid, pattern })
    }

    /// Build a curve from an existing grid specification.
    pub fn from_grid(grid: GridSpec, pattern: Pattern) -> Self {
        Self { grid, pattern }
    }

    /// The grid the curve quantises points with.
    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    /// The indexation pattern.
    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    /// Index of the deepest level.
    pub fn level(&self) -> u32 {
        self.grid.level()
    }

    /// Code of a point. Points outside the bounding box are not rejected;
    /// their codes may alias codes of points inside it.
    pub fn hash(&self, p: &Point) -> Code {
        self.hash_cell(self.grid.localize(p))
    }

    /// Code of a finest-level cell.
    pub fn hash_cell(&self, cell: CubeCoord) -> Code {
        self.pattern.hash_cell(&self.grid, cell)
    }

    /// Hash every point and order the point indices along the curve.
    ///
    /// Fails with [`Error::Dataset`] if the collection has more points than a
    /// `u32` index can address.
    pub fn construct(&self, points: &[Point]) -> error::Result<SortedCurve> {
        let n = index_count(points.len())?;

        let level = self.grid.level();
        let mut outside = 0usize;
        let mut codes = Vec::with_capacity(points.len());
        for p in points {
            let walk = self.grid.walk(self.grid.localize(p));
            if !walk.in_island() {
                outside += 1;
            }
            codes.push(self.pattern.encode(&walk, level));
        }
        if outside > 0 {
            warn!("{outside} of {n} points fall outside the curve's island; their codes may alias");
        }

        let mut indices: Vec<u32> = (0..n).collect();
        sort::sort_by_code(&mut codes, &mut indices);
        debug!("curve: ordered {n} points");

        Ok(SortedCurve {
            level,
            pattern: self.pattern,
            indices,
            codes,
        })
    }
}

/// Number of points as a `u32` index bound.
fn index_count(len: usize) -> error::Result<u32> {
    u32::try_from(len).map_err(|_| {
        Error::Dataset(format!(
            "{len} points exceed the {} addressable by u32 indices",
            u32::MAX
        ))
    })
}

/// One position along a constructed curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortedCurveEntry {
    /// Position of the point in the input collection.
    pub index: u32,
    /// Its code.
    pub code: Code,
}

/// A point collection ordered along the curve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortedCurve {
    /// Index of the deepest level used.
    level: u32,
    /// Pattern used.
    pattern: Pattern,
    /// Input positions in curve order.
    indices: Vec<u32>,
    /// Codes in curve order, parallel to `indices`.
    codes: Vec<Code>,
}

impl SortedCurve {
    /// Number of points on the curve.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the curve is empty.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Index of the deepest level used.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Pattern used to compute the codes.
    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    /// Input positions in curve order.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Codes in curve order (non-decreasing).
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    /// Entry at curve position `rank`.
    pub fn get(&self, rank: usize) -> Option<SortedCurveEntry> {
        Some(SortedCurveEntry {
            index: *self.indices.get(rank)?,
            code: *self.codes.get(rank)?,
        })
    }

    /// Entries in curve order.
    pub fn entries(&self) -> impl Iterator<Item = SortedCurveEntry> + '_ {
        self.indices
            .iter()
            .zip(&self.codes)
            .map(|(&index, &code)| SortedCurveEntry { index, code })
    }

    /// Rank of every input point: `ranks()[i]` is the curve position of the
    /// `i`-th input point.
    pub fn ranks(&self) -> Vec<u32> {
        let mut ranks = vec![0; self.indices.len()];
        for (rank, &index) in (0u32..).zip(&self.indices) {
            ranks[index as usize] = rank;
        }
        ranks
    }

    /// Code of every input point, in input order.
    pub fn codes_by_index(&self) -> Vec<Code> {
        let mut codes = vec![0; self.indices.len()];
        for e in self.entries() {
            codes[e.index as usize] = e.code;
        }
        codes
    }

    /// The input points in curve order. `points` must be the collection the
    /// curve was constructed from.
    pub fn points<'a>(&'a self, points: &'a [Point]) -> impl Iterator<Item = &'a Point> + 'a {
        debug_assert_eq!(points.len(), self.len(), "point collection mismatch");
        self.indices.iter().map(move |&i| &points[i as usize])
    }
}
