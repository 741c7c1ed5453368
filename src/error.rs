//! Error types for board parsing and configuration loading

use std::path::PathBuf;

/// Errors from parsing a board in text form
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Wrong number of stone counts
    #[error("expected 14 stone counts, got {0}")]
    SlotCount(usize),

    /// A stone count that is not a small non-negative integer
    #[error("invalid stone count {value:?} at slot {slot}")]
    InvalidCount { slot: usize, value: String },

    /// Side token other than `top` or `bottom`
    #[error("unknown side {0:?}, expected \"top\" or \"bottom\"")]
    UnknownSide(String),

    /// More stones than a slot can hold once they gather in one store
    #[error("board holds {0} stones, at most 255 allowed")]
    TooManyStones(u32),
}

/// Errors from loading an engine configuration
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or type error
    #[error(transparent)]
    Parse(#[from] toml::de::Error),

    /// Values that parse but cannot be used
    #[error("invalid config: {0}")]
    Invalid(String),
}
