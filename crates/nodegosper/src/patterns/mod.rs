//! Indexation patterns: how the seven children of each Gosper motif are
//! numbered.
//!
//! Every pattern shares the same cell assignment (the raw [`Pattern::Center`]
//! indices produced by the level walk); patterns only change the order in
//! which cells are visited.

use std::{fmt, str::FromStr};

use crate::{
    error::{self, Error},
    grid::GridSpec,
    hex::{CubeCoord, Digits, Walk},
    ops::{self, Accumulation, Code},
    registry,
};

/// The precise pattern's state machine.
pub mod precise;
/// Stateless permutation tables.
pub mod table;

use self::table::Table;

/// Node-Gosper indexation pattern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Raw child indices: the centre is 0, the ring 1-6.
    Center,
    /// Continuous curve: the simple order with per-level rotation and
    /// reversal.
    #[default]
    Precise,
    /// The precise order without the cross-level transformations.
    Simple,
    /// Children visited in three parallel rows.
    Linear,
    /// Children visited along a serpentine path.
    Snake,
}

impl Pattern {
    /// Every pattern, in registry order.
    pub const ALL: [Self; 5] = [
        Self::Center,
        Self::Precise,
        Self::Simple,
        Self::Linear,
        Self::Snake,
    ];

    /// Permutation applied independently at every level, if the pattern is
    /// stateless and not the identity.
    pub fn table(self) -> Option<&'static Table> {
        match self {
            Self::Simple => Some(&table::SIMPLE),
            Self::Linear => Some(&table::LINEAR),
            Self::Snake => Some(&table::SNAKE),
            Self::Center | Self::Precise => None,
        }
    }

    /// Registry key of the pattern.
    pub fn key(self) -> &'static str {
        registry::entry(self).key
    }

    /// Code of the finest-level `cell` under this pattern.
    pub fn hash_cell(self, grid: &GridSpec, cell: CubeCoord) -> Code {
        self.encode(&grid.walk(cell), grid.level())
    }

    /// Code of an already walked cell.
    pub fn encode(self, walk: &Walk, level: u32) -> Code {
        match self {
            Self::Center => ops::pack(&walk.digits, Accumulation::TopDown),
            Self::Precise => {
                precise::fold(ops::pack(&walk.digits, Accumulation::BottomUp), level)
            }
            Self::Simple | Self::Linear | Self::Snake => {
                let center = ops::pack(&walk.digits, Accumulation::TopDown);
                match self.table() {
                    Some(t) => t.remap_code(center, level),
                    None => center,
                }
            }
        }
    }

    /// Raw child indices, coarsest first, encoded by a code of this pattern.
    ///
    /// Returns `None` if any group of `code` is not a valid child index.
    pub fn center_digits(self, code: Code, level: u32) -> Option<Digits> {
        let groups = ops::digits(code, level);
        if groups.iter().any(|&d| d > 6) {
            return None;
        }
        Some(match self {
            Self::Center => groups,
            Self::Precise => precise::unfold(code, level).collect(),
            Self::Simple | Self::Linear | Self::Snake => match self.table() {
                Some(t) => groups.into_iter().map(|d| t.unmap(d)).collect(),
                None => groups,
            },
        })
    }

    /// Translate a code of this pattern into the [`Pattern::Center`] code of
    /// the same cell.
    pub fn to_center(self, code: Code, level: u32) -> Option<Code> {
        self.center_digits(code, level).map(ops::pack_coarsest_first)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> error::Result<Self> {
        registry::lookup(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::BoundingBox;

    #[test]
    fn names_round_trip() -> error::Result<()> {
        for p in Pattern::ALL {
            assert_eq!(p.to_string().parse::<Pattern>()?, p);
        }
        assert_eq!("SNAKE".parse::<Pattern>()?, Pattern::Snake);
        assert!("hilbert".parse::<Pattern>().is_err());
        Ok(())
    }

    #[test]
    fn origin_cell() -> error::Result<()> {
        let grid = GridSpec::new(2, &BoundingBox::centered(1.0))?;
        let origin = CubeCoord::ORIGIN;
        assert_eq!(Pattern::Center.hash_cell(&grid, origin), 0);
        assert_eq!(Pattern::Simple.hash_cell(&grid, origin), 0o444);
        assert_eq!(Pattern::Linear.hash_cell(&grid, origin), 0o333);
        assert_eq!(Pattern::Snake.hash_cell(&grid, origin), 0o333);
        assert_eq!(Pattern::Precise.hash_cell(&grid, origin), 0o424);
        Ok(())
    }

    #[test]
    fn decode_to_center() -> error::Result<()> {
        let grid = GridSpec::new(3, &BoundingBox::centered(1.0))?;
        for x in -6..=6 {
            for z in -6..=6 {
                let cell = CubeCoord::new(x, z);
                let center = Pattern::Center.hash_cell(&grid, cell);
                for p in Pattern::ALL {
                    let code = p.hash_cell(&grid, cell);
                    assert_eq!(p.to_center(code, 3), Some(center), "{p} {cell:?}");
                }
            }
        }
        assert_eq!(Pattern::Simple.center_digits(0o7, 0), None);
        Ok(())
    }
}
