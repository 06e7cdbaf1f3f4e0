//! The precise Node-Gosper indexation: the simple table plus a small state
//! machine carried from the coarsest level down, which rotates and reverses
//! child orders so that consecutive codes address adjacent cells.

use super::table::SIMPLE;
use crate::ops::{self, Code};

/// Rotate an outer child index by `steps` positions around the six-cycle.
/// The central index 0 is fixed.
#[inline]
fn rotate(raw: u8, steps: i8) -> u8 {
    if raw == 0 || steps == 0 {
        return raw;
    }
    let r = raw as i8 + steps;
    if r < 1 {
        (r + 6) as u8
    } else if r > 6 {
        (r - 6) as u8
    } else {
        r as u8
    }
}

/// Orientation state threaded through the levels of one code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PreciseState {
    /// Rotation in units of 120 degrees: -1, 0 or 1.
    rot: i8,
    /// Whether children are traversed backwards.
    backward: bool,
}

impl PreciseState {
    /// State at the coarsest level.
    pub const fn new() -> Self {
        Self {
            rot: 0,
            backward: false,
        }
    }

    /// Current rotation, always in `-1..=1`.
    pub fn rot(&self) -> i8 {
        self.rot
    }

    /// Whether the current level is traversed backwards.
    pub fn backward(&self) -> bool {
        self.backward
    }

    /// Advance the rotation and direction after emitting `mapped`.
    fn advance(&mut self, mapped: u8) {
        match mapped {
            0 | 3 => self.rot = if self.rot == -1 { 1 } else { self.rot - 1 },
            5 => self.rot = if self.rot == 1 { -1 } else { self.rot + 1 },
            _ => {}
        }
        if matches!(mapped, 0 | 4 | 5) {
            self.backward = !self.backward;
        }
    }

    /// Map one raw child index and advance to the next finer level.
    pub fn step(&mut self, raw: u8) -> u8 {
        let mapped = SIMPLE.remap(rotate(raw, 2 * self.rot));
        let emitted = if self.backward { 6 - mapped } else { mapped };
        self.advance(mapped);
        emitted
    }

    /// Inverse of [`PreciseState::step`]: recover the raw child index from an
    /// emitted one, advancing identically.
    pub fn unstep(&mut self, emitted: u8) -> u8 {
        let mapped = if self.backward { 6 - emitted } else { emitted };
        let raw = rotate(SIMPLE.unmap(mapped), -2 * self.rot);
        self.advance(mapped);
        raw
    }
}

/// Fold a center code accumulated bottom-up (finest level most
/// significant) into a precise code.
///
/// The low group of the input is the coarsest level, so it is consumed
/// first; each emitted group is shifted in from the right, leaving the
/// coarsest level most significant in the result.
pub fn fold(bottom_up: Code, level: u32) -> Code {
    let mut state = PreciseState::new();
    let mut center = bottom_up;
    let mut code: Code = 0;
    for _ in 0..=level {
        let raw = (center & ops::LEVEL_MASK) as u8;
        center >>= ops::BITS_PER_LEVEL;
        code = (code << ops::BITS_PER_LEVEL) | Code::from(state.step(raw));
    }
    code
}

/// Raw child indices, coarsest first, of a precise code. Every group of
/// `code` must be a valid child index (`0..=6`).
pub fn unfold(code: Code, level: u32) -> impl Iterator<Item = u8> {
    let mut state = PreciseState::new();
    ops::digits(code, level)
        .into_iter()
        .map(move |d| state.unstep(d))
}
