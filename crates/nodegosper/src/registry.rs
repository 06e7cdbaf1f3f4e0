//! Pattern metadata and name lookup used by the CLI and by
//! `Pattern::from_str`.

use crate::{
    error::{self, Error},
    patterns::Pattern,
};

/// Metadata describing one indexation pattern.
#[derive(Debug)]
pub struct PatternEntry {
    /// The pattern itself.
    pub pattern: Pattern,
    /// Lower-case name accepted on the command line.
    pub key: &'static str,
    /// Human readable name.
    pub display: &'static str,
    /// Short description.
    pub info: &'static str,
    /// Whether consecutive codes always address adjacent cells inside the
    /// Gosper island.
    pub continuous: bool,
}

/// All registered patterns.
pub const REGISTRY: &[PatternEntry] = &[
    PatternEntry {
        pattern: Pattern::Center,
        key: "center",
        display: "Center (P1)",
        info: "Raw child indices: the central hexagon first, then the ring in a\n\
        fixed angular order. Cheapest to compute; the curve jumps between\n\
        siblings.",
        continuous: false,
    },
    PatternEntry {
        pattern: Pattern::Precise,
        key: "precise",
        display: "Precise Node-Gosper (P2)",
        info: "The simple order with rotations and reversals carried from coarse\n\
        to fine levels, yielding a continuous curve through adjacent hexagons.",
        continuous: true,
    },
    PatternEntry {
        pattern: Pattern::Simple,
        key: "simple",
        display: "Simple Node-Gosper (P2 without transforms)",
        info: "The Node-Gosper child order applied identically at every level.\n\
        Continuous within a motif but not across motif boundaries.",
        continuous: false,
    },
    PatternEntry {
        pattern: Pattern::Linear,
        key: "linear",
        display: "Linear (P3)",
        info: "Children visited row by row across each motif.",
        continuous: false,
    },
    PatternEntry {
        pattern: Pattern::Snake,
        key: "snake",
        display: "Snake (P4)",
        info: "Children visited along a serpentine path through each motif.",
        continuous: false,
    },
];

/// Keys of all registered patterns.
pub const PATTERN_NAMES: &[&str] = &["center", "precise", "simple", "linear", "snake"];

/// Registry entry for `pattern`.
pub fn entry(pattern: Pattern) -> &'static PatternEntry {
    // Every variant is registered; the index is the registry position.
    &REGISTRY[pattern as usize]
}

/// Find a pattern by key, ignoring case and surrounding whitespace.
pub fn lookup(name: &str) -> error::Result<Pattern> {
    let name = name.trim();
    REGISTRY
        .iter()
        .find(|e| e.key.eq_ignore_ascii_case(name))
        .map(|e| e.pattern)
        .ok_or_else(|| {
            Error::Pattern(format!(
                "'{name}' (valid options: {})",
                PATTERN_NAMES.join(", ")
            ))
        })
}
