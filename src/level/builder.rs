//! Row-by-row level construction and validation.

// Grid indices use intentional u32 -> usize casts
#![allow(clippy::cast_possible_truncation)]

use crate::error::LevelError;
use crate::level::tile::{Coord, TileType};
use crate::level::{MAX_DIMENSION, MIN_DIMENSION};

/// A fully validated level, ready to encode.
///
/// Immutable once built: construction goes through [`LevelBuilder`] (or
/// decoding, see `Level::from_bytes`), and every `Level` satisfies the
/// grid invariants (tile count matches the dimensions, the border is all
/// wall, start and finish are set).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    /// File-safe name, used for the output file only.
    name: String,
    /// Biome identifier, embedded in the file.
    biome: String,
    /// Width in tiles.
    width: u32,
    /// Height in tiles.
    height: u32,
    /// Tiles in row-major order, index `y * width + x`, y from the bottom.
    tiles: Vec<TileType>,
    /// Player spawn coordinate.
    start: Coord,
    /// Level exit coordinate.
    finish: Coord,
    /// Dynamite pickup coordinates, in scan order.
    dynamites: Vec<Coord>,
}

impl Level {
    /// Assemble a level from already-validated parts.
    ///
    /// Used by the decoder; builder output goes through
    /// [`LevelBuilder::finish`] instead.
    pub(crate) fn from_parts(
        name: String,
        biome: String,
        width: u32,
        height: u32,
        tiles: Vec<TileType>,
        start: Coord,
        finish: Coord,
        dynamites: Vec<Coord>,
    ) -> Self {
        Self {
            name,
            biome,
            width,
            height,
            tiles,
            start,
            finish,
            dynamites,
        }
    }

    /// Get the file-safe level name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the biome identifier.
    #[must_use]
    pub fn biome(&self) -> &str {
        &self.biome
    }

    /// Get the width in tiles.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in tiles.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the tiles in row-major order (y=0 row first, x ascending).
    #[must_use]
    pub fn tiles(&self) -> &[TileType] {
        &self.tiles
    }

    /// Get the tile at a coordinate, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<TileType> {
        if coord.x < self.width && coord.y < self.height {
            let idx = (coord.y * self.width + coord.x) as usize;
            Some(self.tiles[idx])
        } else {
            None
        }
    }

    /// Get the start coordinate.
    #[must_use]
    pub const fn start(&self) -> Coord {
        self.start
    }

    /// Get the finish coordinate.
    #[must_use]
    pub const fn finish(&self) -> Coord {
        self.finish
    }

    /// Get the dynamite pickup coordinates, in scan order.
    #[must_use]
    pub fn dynamites(&self) -> &[Coord] {
        &self.dynamites
    }

    /// Convert the file-safe name back to a human-readable title.
    ///
    /// Underscores become spaces and the first letter of each word is
    /// capitalized: `"lava_caves"` becomes `"Lava Caves"`.
    #[must_use]
    pub fn display_name(&self) -> String {
        let mut title = String::with_capacity(self.name.len());
        let mut word_start = true;

        for ch in self.name.chars() {
            if ch == '_' {
                title.push(' ');
                word_start = true;
            } else if word_start {
                title.push(ch.to_ascii_uppercase());
                word_start = false;
            } else {
                title.push(ch);
            }
        }

        title
    }
}

/// Builds a [`Level`] one tilemap row at a time.
///
/// Rows are pushed in visual order, top row first. Internally the first
/// row pushed is stored at `y = height - 1` and the last at `y = 0`, so y
/// increases upward in the finished grid. Marker symbols (`'S'`, `'F'`,
/// `'D'`) are recorded as coordinates while their cells become ground.
#[derive(Debug, Clone)]
pub struct LevelBuilder {
    name: String,
    biome: String,
    width: u32,
    height: u32,
    tiles: Vec<TileType>,
    rows_entered: u32,
    start: Option<Coord>,
    finish: Option<Coord>,
    dynamites: Vec<Coord>,
}

impl LevelBuilder {
    /// Create a builder for a level of the given dimensions.
    ///
    /// Returns `None` if either dimension is outside `[4, 32]`. The name
    /// and biome are taken as-is; the editor session normalizes them
    /// before construction.
    #[must_use]
    pub fn new(name: impl Into<String>, biome: impl Into<String>, width: u32, height: u32) -> Option<Self> {
        if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&width)
            || !(MIN_DIMENSION..=MAX_DIMENSION).contains(&height)
        {
            return None;
        }

        let size = (width * height) as usize;

        Some(Self {
            name: name.into(),
            biome: biome.into(),
            width,
            height,
            tiles: vec![TileType::Ground; size],
            rows_entered: 0,
            start: None,
            finish: None,
            dynamites: Vec::new(),
        })
    }

    /// Get the width in tiles.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in tiles.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Push the next tilemap row, top row first.
    ///
    /// The row is truncated to `width` characters; shorter rows are
    /// right-padded with the wall symbol. Symbols are case-folded to
    /// uppercase before lookup.
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::InvalidSymbol`] on the first character not in
    /// the symbol table (the whole build is unusable at that point), or
    /// [`LevelError::RowCountMismatch`] if all rows were already pushed.
    pub fn push_row(&mut self, row: &str) -> Result<(), LevelError> {
        if self.rows_entered == self.height {
            return Err(LevelError::RowCountMismatch {
                expected: self.height,
                entered: self.height + 1,
            });
        }

        let y = self.height - 1 - self.rows_entered;
        let mut x = 0u32;

        for symbol in row.chars().take(self.width as usize) {
            self.place(x, y, symbol)?;
            x += 1;
        }

        // Pad short rows with wall
        while x < self.width {
            self.place(x, y, '#')?;
            x += 1;
        }

        self.rows_entered += 1;
        Ok(())
    }

    /// Place one symbol, recording any start/finish/dynamite marker.
    fn place(&mut self, x: u32, y: u32, symbol: char) -> Result<(), LevelError> {
        let symbol = symbol.to_ascii_uppercase();
        let tile =
            TileType::from_symbol(symbol).ok_or(LevelError::InvalidSymbol(symbol))?;

        self.tiles[(y * self.width + x) as usize] = tile;

        // Duplicate 'S'/'F' markers silently overwrite: the last one in
        // scan order wins.
        match symbol {
            'S' => self.start = Some(Coord::new(x, y)),
            'F' => self.finish = Some(Coord::new(x, y)),
            'D' => self.dynamites.push(Coord::new(x, y)),
            _ => {}
        }

        Ok(())
    }

    /// Validate the finished grid and produce the level.
    ///
    /// Checks run in order: row count, enclosure, start presence, finish
    /// presence.
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::RowCountMismatch`] if not all rows were
    /// pushed, [`LevelError::NotEnclosed`] if any border cell is not a
    /// wall, or [`LevelError::MissingStart`]/[`LevelError::MissingFinish`]
    /// if the corresponding marker never appeared.
    pub fn finish(self) -> Result<Level, LevelError> {
        if self.rows_entered != self.height {
            return Err(LevelError::RowCountMismatch {
                expected: self.height,
                entered: self.rows_entered,
            });
        }

        if !self.is_enclosed() {
            return Err(LevelError::NotEnclosed);
        }

        let start = self.start.ok_or(LevelError::MissingStart)?;
        let finish = self.finish.ok_or(LevelError::MissingFinish)?;

        Ok(Level {
            name: self.name,
            biome: self.biome,
            width: self.width,
            height: self.height,
            tiles: self.tiles,
            start,
            finish,
            dynamites: self.dynamites,
        })
    }

    /// Check that every border cell is a wall tile.
    fn is_enclosed(&self) -> bool {
        for y in 0..self.height {
            for x in 0..self.width {
                let on_border =
                    y == 0 || y == self.height - 1 || x == 0 || x == self.width - 1;

                if on_border
                    && self.tiles[(y * self.width + x) as usize] != TileType::Wall
                {
                    return false;
                }
            }
        }

        true
    }
}
