//! Binary `.level` encoding and decoding.
//!
//! Fixed little-endian layout:
//! - 4 bytes: biome length (u32)
//! - N bytes: biome (ASCII, no terminator)
//! - 4 bytes each: width, height
//! - 4 bytes each: start x, start y, finish x, finish y
//! - 4 bytes: dynamite count
//! - 8 bytes per dynamite: x, y (scan order)
//! - width*height bytes: tile codes, row-major, y=0 row first

use crate::error::DecodeError;
use crate::level::builder::Level;
use crate::level::tile::{Coord, TileType};
use crate::level::{MAX_DIMENSION, MIN_DIMENSION};
use std::fs;
use std::io;
use std::path::Path;

impl Level {
    /// Encode the level into the fixed binary layout.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(
            4 + self.biome().len()
                + 4 * 7
                + 8 * self.dynamites().len()
                + self.tiles().len(),
        );

        #[allow(clippy::cast_possible_truncation)]
        let biome_len = self.biome().len() as u32;
        bytes.extend_from_slice(&biome_len.to_le_bytes());
        bytes.extend_from_slice(self.biome().as_bytes());

        bytes.extend_from_slice(&self.width().to_le_bytes());
        bytes.extend_from_slice(&self.height().to_le_bytes());

        bytes.extend_from_slice(&self.start().x.to_le_bytes());
        bytes.extend_from_slice(&self.start().y.to_le_bytes());

        bytes.extend_from_slice(&self.finish().x.to_le_bytes());
        bytes.extend_from_slice(&self.finish().y.to_le_bytes());

        #[allow(clippy::cast_possible_truncation)]
        let dynamite_count = self.dynamites().len() as u32;
        bytes.extend_from_slice(&dynamite_count.to_le_bytes());

        for dynamite in self.dynamites() {
            bytes.extend_from_slice(&dynamite.x.to_le_bytes());
            bytes.extend_from_slice(&dynamite.y.to_le_bytes());
        }

        for tile in self.tiles() {
            bytes.push(tile.code());
        }

        bytes
    }

    /// Decode a level from the fixed binary layout.
    ///
    /// The name is not stored in the file; the caller supplies it
    /// (typically the file stem).
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if the input is truncated, has trailing
    /// bytes, or holds a non-ASCII biome, an out-of-range dimension, or an
    /// unknown tile code.
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut reader = Reader { bytes, pos: 0 };

        let biome_len = reader.read_u32()? as usize;
        let biome_bytes = reader.read_bytes(biome_len)?;
        if !biome_bytes.is_ascii() {
            return Err(DecodeError::NonAsciiBiome);
        }
        let biome = String::from_utf8_lossy(biome_bytes).into_owned();

        let width = reader.read_u32()?;
        let height = reader.read_u32()?;
        for dimension in [width, height] {
            if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&dimension) {
                return Err(DecodeError::DimensionOutOfRange(dimension));
            }
        }

        let start = Coord::new(reader.read_u32()?, reader.read_u32()?);
        let finish = Coord::new(reader.read_u32()?, reader.read_u32()?);

        let dynamite_count = reader.read_u32()? as usize;

        // A corrupt count must not drive allocation past the input size.
        if dynamite_count > reader.remaining() / 8 {
            return Err(DecodeError::UnexpectedEof);
        }

        let mut dynamites = Vec::with_capacity(dynamite_count);
        for _ in 0..dynamite_count {
            dynamites.push(Coord::new(reader.read_u32()?, reader.read_u32()?));
        }

        let tile_count = (width * height) as usize;
        let mut tiles = Vec::with_capacity(tile_count);
        for &code in reader.read_bytes(tile_count)? {
            tiles.push(TileType::from_code(code).ok_or(DecodeError::InvalidTileCode(code))?);
        }

        if reader.remaining() > 0 {
            return Err(DecodeError::TrailingBytes(reader.remaining()));
        }

        Ok(Level::from_parts(
            name.into(),
            biome,
            width,
            height,
            tiles,
            start,
            finish,
            dynamites,
        ))
    }

    /// Write the encoded level to a file.
    ///
    /// The file is only created after the level has passed validation, so
    /// a failed build never leaves a partial file behind.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.encode())
    }

    /// Read and decode a level file.
    ///
    /// The level name is taken from the file stem.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents do not
    /// decode.
    pub fn load(path: &Path) -> io::Result<Self> {
        let bytes = fs::read(path)?;
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_string());

        Self::from_bytes(name, &bytes)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// Cursor over the raw level bytes.
struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        let end = self
            .pos
            .checked_add(len)
            .ok_or(DecodeError::UnexpectedEof)?;
        if end > self.bytes.len() {
            return Err(DecodeError::UnexpectedEof);
        }

        let slice = &self.bytes[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn read_u32(&mut self) -> Result<u32, DecodeError> {
        let bytes = self.read_bytes(4)?;
        let mut buf = [0u8; 4];
        buf.copy_from_slice(bytes);
        Ok(u32::from_le_bytes(buf))
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::builder::LevelBuilder;

    fn sample_level() -> Level {
        let mut builder = LevelBuilder::new("sample", "grass", 4, 4).unwrap();
        for row in ["####", "#S #", "#FD#", "####"] {
            builder.push_row(row).unwrap();
        }
        builder.finish().unwrap()
    }

    #[test]
    fn test_encode_byte_exact() {
        let level = sample_level();
        let bytes = level.encode();

        let mut expected = Vec::new();
        expected.extend_from_slice(&5u32.to_le_bytes()); // biome length
        expected.extend_from_slice(b"grass");
        expected.extend_from_slice(&4u32.to_le_bytes()); // width
        expected.extend_from_slice(&4u32.to_le_bytes()); // height
        expected.extend_from_slice(&1u32.to_le_bytes()); // start x
        expected.extend_from_slice(&2u32.to_le_bytes()); // start y
        expected.extend_from_slice(&1u32.to_le_bytes()); // finish x
        expected.extend_from_slice(&1u32.to_le_bytes()); // finish y
        expected.extend_from_slice(&1u32.to_le_bytes()); // dynamite count
        expected.extend_from_slice(&2u32.to_le_bytes()); // dynamite x
        expected.extend_from_slice(&1u32.to_le_bytes()); // dynamite y

        // Tile grid, y=0 row first
        expected.extend_from_slice(&[4, 4, 4, 4]); // y=0: ####
        expected.extend_from_slice(&[4, 0, 0, 4]); // y=1: #FD#
        expected.extend_from_slice(&[4, 0, 0, 4]); // y=2: #S #
        expected.extend_from_slice(&[4, 4, 4, 4]); // y=3: ####

        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_round_trip() {
        let level = sample_level();
        let decoded = Level::from_bytes("sample", &level.encode()).unwrap();

        assert_eq!(decoded, level);
    }

    #[test]
    fn test_round_trip_with_all_tile_types() {
        let mut builder = LevelBuilder::new("mixed", "snow", 6, 5).unwrap();
        for row in ["######", "#S123#", "#D D #", "#  F #", "######"] {
            builder.push_row(row).unwrap();
        }
        let level = builder.finish().unwrap();

        let decoded = Level::from_bytes("mixed", &level.encode()).unwrap();
        assert_eq!(decoded, level);
    }

    #[test]
    fn test_decode_truncated() {
        let bytes = sample_level().encode();

        for len in 0..bytes.len() {
            let err = Level::from_bytes("sample", &bytes[..len]).unwrap_err();
            assert!(
                matches!(
                    err,
                    DecodeError::UnexpectedEof | DecodeError::TrailingBytes(_)
                ),
                "unexpected error {err:?} at length {len}"
            );
        }
    }

    #[test]
    fn test_decode_trailing_bytes() {
        let mut bytes = sample_level().encode();
        bytes.push(0);
        let err = Level::from_bytes("sample", &bytes).unwrap_err();
        assert_eq!(err, DecodeError::TrailingBytes(1));
    }

    #[test]
    fn test_decode_invalid_tile_code() {
        let mut bytes = sample_level().encode();
        let last = bytes.len() - 1;
        bytes[last] = 7;
        let err = Level::from_bytes("sample", &bytes).unwrap_err();
        assert_eq!(err, DecodeError::InvalidTileCode(7));
    }

    #[test]
    fn test_decode_non_ascii_biome() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&2u32.to_le_bytes());
        bytes.extend_from_slice(&[0xC3, 0xA9]); // "é"
        let err = Level::from_bytes("bad", &bytes).unwrap_err();
        assert_eq!(err, DecodeError::NonAsciiBiome);
    }

    #[test]
    fn test_decode_dimension_out_of_range() {
        let level = sample_level();
        let mut bytes = level.encode();
        // Width field sits right after the biome
        let width_offset = 4 + level.biome().len();
        bytes[width_offset..width_offset + 4].copy_from_slice(&100u32.to_le_bytes());
        let err = Level::from_bytes("bad", &bytes).unwrap_err();
        assert_eq!(err, DecodeError::DimensionOutOfRange(100));
    }

    #[test]
    fn test_decode_corrupt_dynamite_count() {
        let level = sample_level();
        let mut bytes = level.encode();
        let count_offset = 4 + level.biome().len() + 4 * 6;
        bytes[count_offset..count_offset + 4]
            .copy_from_slice(&u32::MAX.to_le_bytes());
        let err = Level::from_bytes("bad", &bytes).unwrap_err();
        assert_eq!(err, DecodeError::UnexpectedEof);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let level = sample_level();
        let path = dir.path().join("sample.level");

        level.save(&path).unwrap();
        let loaded = Level::load(&path).unwrap();

        assert_eq!(loaded, level);
    }

    #[test]
    fn test_load_names_level_after_file_stem() {
        let dir = tempfile::tempdir().unwrap();
        let level = sample_level();
        let path = dir.path().join("deep_mine.level");

        level.save(&path).unwrap();
        let loaded = Level::load(&path).unwrap();

        assert_eq!(loaded.name(), "deep_mine");
    }
}
