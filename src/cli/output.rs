//! Output formatting utilities for CLI.

use levelsmith::level::tilemap_rows;
use levelsmith::{Coord, Level};
use serde::Serialize;

/// JSON-serializable level.
#[derive(Debug, Serialize)]
pub(super) struct JsonLevel {
    /// File-safe level name (the file stem).
    pub(super) name: String,
    /// Human-readable title.
    pub(super) display_name: String,
    /// Biome identifier.
    pub(super) biome: String,
    /// Width in tiles.
    pub(super) width: u32,
    /// Height in tiles.
    pub(super) height: u32,
    /// Player spawn coordinate.
    pub(super) start: JsonCoord,
    /// Level exit coordinate.
    pub(super) finish: JsonCoord,
    /// Dynamite pickup coordinates, in scan order.
    pub(super) dynamites: Vec<JsonCoord>,
    /// Tilemap rows as typed, top row first, markers overlaid.
    pub(super) rows: Vec<String>,
}

/// JSON-serializable coordinate.
#[derive(Debug, Serialize)]
pub(super) struct JsonCoord {
    /// X coordinate (column).
    pub(super) x: u32,
    /// Y coordinate (row, from the bottom).
    pub(super) y: u32,
}

impl From<Coord> for JsonCoord {
    fn from(coord: Coord) -> Self {
        Self {
            x: coord.x,
            y: coord.y,
        }
    }
}

impl JsonLevel {
    /// Create from a decoded level.
    pub(super) fn from_level(level: &Level) -> Self {
        Self {
            name: level.name().to_string(),
            display_name: level.display_name(),
            biome: level.biome().to_string(),
            width: level.width(),
            height: level.height(),
            start: level.start().into(),
            finish: level.finish().into(),
            dynamites: level.dynamites().iter().copied().map(Into::into).collect(),
            rows: tilemap_rows(level),
        }
    }
}
