//! Error types for level construction and decoding.

use std::fmt;

/// Validation failures that abort a level build.
///
/// Any of these ends the whole build attempt; no file is written. The
/// `Display` impls render the exact user-facing sentences, without the
/// `(!)` prefix the editor session adds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelError {
    /// A tilemap character is not in the symbol table.
    ///
    /// Carries the offending symbol after case-folding to uppercase.
    InvalidSymbol(char),
    /// At least one border cell is not a wall tile.
    NotEnclosed,
    /// No `'S'` symbol appeared anywhere in the tilemap.
    MissingStart,
    /// No `'F'` symbol appeared anywhere in the tilemap.
    MissingFinish,
    /// The number of rows entered does not match the level height.
    RowCountMismatch {
        /// Rows required (the level height).
        expected: u32,
        /// Rows actually entered.
        entered: u32,
    },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::InvalidSymbol(symbol) => {
                write!(f, "Invalid tile symbol \"{symbol}\".")
            }
            LevelError::NotEnclosed => write!(f, "The level is not enclosed."),
            LevelError::MissingStart => write!(f, "Starting tile is not set."),
            LevelError::MissingFinish => write!(f, "Finish tile is not set."),
            LevelError::RowCountMismatch { expected, entered } => {
                write!(f, "Tilemap has {entered} rows, expected {expected}.")
            }
        }
    }
}

impl std::error::Error for LevelError {}

/// Failures while decoding a `.level` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The input ended before a field was fully read.
    UnexpectedEof,
    /// The biome string contains a byte outside the ASCII range.
    NonAsciiBiome,
    /// A dimension field is outside the supported `[4, 32]` range.
    DimensionOutOfRange(u32),
    /// A tile byte is not one of the known tile codes.
    InvalidTileCode(u8),
    /// Trailing bytes remained after the tile grid.
    TrailingBytes(usize),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::UnexpectedEof => write!(f, "unexpected end of level data"),
            DecodeError::NonAsciiBiome => write!(f, "biome is not ASCII"),
            DecodeError::DimensionOutOfRange(value) => {
                write!(f, "dimension {value} outside supported range")
            }
            DecodeError::InvalidTileCode(code) => {
                write!(f, "invalid tile code {code:#04x}")
            }
            DecodeError::TrailingBytes(count) => {
                write!(f, "{count} trailing bytes after tile grid")
            }
        }
    }
}

impl std::error::Error for DecodeError {}
