//! Stateless per-level permutations of the seven children of a Gosper motif.

use crate::ops::{self, Code};

/// A permutation of the child indices `0..=6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Table {
    /// Image of each raw index.
    forward: [u8; 7],
    /// Preimage of each mapped index.
    inverse: [u8; 7],
}

impl Table {
    /// Build a table and its inverse. Entries must be a permutation of
    /// `0..=6`; this is checked when the table is evaluated at compile time.
    pub const fn new(forward: [u8; 7]) -> Self {
        let mut inverse = [u8::MAX; 7];
        let mut i = 0;
        while i < 7 {
            let target = forward[i] as usize;
            assert!(target < 7, "table entry out of range");
            assert!(inverse[target] == u8::MAX, "table entry repeated");
            inverse[target] = i as u8;
            i += 1;
        }
        Self { forward, inverse }
    }

    /// Mapped index of a raw child index.
    #[inline]
    pub fn remap(&self, raw: u8) -> u8 {
        self.forward[raw as usize]
    }

    /// Raw child index of a mapped index.
    #[inline]
    pub fn unmap(&self, mapped: u8) -> u8 {
        self.inverse[mapped as usize]
    }

    /// The forward mapping.
    pub fn entries(&self) -> &[u8; 7] {
        &self.forward
    }

    /// Whether every index in `0..=6` is hit exactly once.
    pub fn is_bijection(&self) -> bool {
        let mut seen = [false; 7];
        for &v in &self.forward {
            match seen.get_mut(v as usize) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }

    /// Remap every level of a code independently.
    pub fn remap_code(&self, code: Code, level: u32) -> Code {
        self.map_groups(code, level, |d| self.remap(d))
    }

    /// Undo [`Table::remap_code`].
    pub fn unmap_code(&self, code: Code, level: u32) -> Code {
        self.map_groups(code, level, |d| self.unmap(d))
    }

    /// Apply `f` to every three-bit group of `code`.
    fn map_groups(&self, code: Code, level: u32, f: impl Fn(u8) -> u8) -> Code {
        ops::pack_coarsest_first(ops::digits(code, level).into_iter().map(f))
    }
}

/// Child order of the simple pattern; also the inner table of the precise
/// pattern.
pub const SIMPLE: Table = Table::new([4, 0, 1, 2, 3, 6, 5]);

/// Child order of the linear pattern.
pub const LINEAR: Table = Table::new([3, 2, 0, 1, 4, 6, 5]);

/// Child order of the snake pattern.
pub const SNAKE: Table = Table::new([3, 4, 0, 1, 2, 6, 5]);
