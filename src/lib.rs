// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Levelsmith: an interactive level editor for a tile-based
//! dynamite-platformer game.
//!
//! The editor collects a level name, biome, dimensions, and a tilemap typed
//! row-by-row, validates the result, and serializes it to a small fixed
//! binary `.level` format.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │        CLI (create / inspect)        │
//! ├──────────────────────────────────────┤
//! │    Editor session (prompt loops)     │
//! ├──────────────────────────────────────┤
//! │ Level model (build/validate/encode)  │
//! └──────────────────────────────────────┘
//! ```

pub mod editor;
pub mod error;
pub mod level;

pub use error::{DecodeError, LevelError};

// Re-export key level types at crate root for convenience
pub use level::{Coord, Level, LevelBuilder, TileType};
