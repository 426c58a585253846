//! Level model.
//!
//! Implements the editor's data layer:
//! - Tile types and the input symbol table
//! - Row-by-row level construction with validation
//! - The fixed binary `.level` encoding
//! - ASCII previews for inspection

mod builder;
mod encode;
mod render;
mod tile;

pub use builder::{Level, LevelBuilder};
pub use render::{render_ascii, tilemap_rows};
pub use tile::{Coord, TileType};

/// Smallest accepted level width or height.
pub const MIN_DIMENSION: u32 = 4;

/// Largest accepted level width or height.
pub const MAX_DIMENSION: u32 = 32;

/// Longest accepted name or biome, in bytes.
pub const MAX_LABEL_LEN: usize = 24;
