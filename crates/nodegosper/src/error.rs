//! Error types shared by the curve, grid and loader modules.

use std::{io, result};

use thiserror::Error;

/// Errors raised while configuring a curve or loading a dataset.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested recursion level is deeper than the inscribed-circle table
    /// and the 64-bit code budget support.
    #[error("level {level} exceeds the maximum supported level of {max}")]
    Level {
        /// Requested level.
        level: u32,
        /// Deepest supported level.
        max: u32,
    },
    /// Geometry that cannot be quantised, such as a degenerate bounding box.
    #[error("invalid shape: {0}")]
    Shape(String),
    /// An indexation pattern name that is not registered.
    #[error("unknown pattern: {0}")]
    Pattern(String),
    /// A malformed point dataset.
    #[error("dataset error: {0}")]
    Dataset(String),
    /// Underlying I/O failure while reading a dataset.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Convenience alias for results returned by this crate.
pub type Result<T> = result::Result<T, Error>;
