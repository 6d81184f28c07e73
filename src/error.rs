//! Error type shared by every stage of the encoder.
//!
//! All failures are detected before the pixel grid is allocated, so an
//! `Err` never comes with a partially drawn symbol.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("character {character:?} at position {position} has no text compaction code")]
    UnencodableCharacter { character: char, position: usize },

    /// The payload needs `required` codewords, the symbol holds 1 to
    /// `maximum`. An empty payload is reported with `required` set to 0.
    #[error("codewords count {required} does not fit a symbol (1 to {maximum})")]
    CapacityExceeded { required: usize, maximum: usize },

    #[error("correction level {0} is out of range (0-8)")]
    InvalidCorrectionLevel(u8),

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("layout of {rows} rows and {columns} data columns is outside the symbol limits")]
    InvalidLayout { rows: usize, columns: usize },

    #[error("pattern table must hold {expected} entries, got {actual}")]
    InvalidTable { expected: usize, actual: usize },
}

pub type Result<T> = core::result::Result<T, Error>;
