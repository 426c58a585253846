//! Tile and coordinate types.

/// A coordinate on the tile grid.
///
/// `y` increases upward: row 0 is the bottom of the level, which is the
/// last row the editor asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    /// X coordinate (column).
    pub x: u32,
    /// Y coordinate (row, from the bottom).
    pub y: u32,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Type of a tile, as stored in the `.level` tile grid.
///
/// Start, finish, and dynamite pickups are recorded as coordinates, not as
/// distinct tile codes, so their input symbols all map to `Ground`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TileType {
    /// Walkable ground.
    Ground = 0,
    /// Breakable stone.
    Stone = 1,
    /// Breakable wood, splinters when broken.
    Wood = 2,
    /// Buried dynamite, explodes when broken.
    Dynamite = 3,
    /// Outer wall, unbreakable.
    Wall = 4,
}

impl TileType {
    /// Look up an input symbol in the fixed symbol table.
    ///
    /// The table is closed: `' '`, `'S'`, `'F'`, and `'D'` map to ground
    /// (the marker is recorded separately), `'1'`–`'3'` to the breakable
    /// tiles, and `'#'` to wall. The caller is expected to have uppercased
    /// the symbol already; lowercase markers are not recognized here.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            ' ' | 'S' | 'F' | 'D' => Some(TileType::Ground),
            '1' => Some(TileType::Stone),
            '2' => Some(TileType::Wood),
            '3' => Some(TileType::Dynamite),
            '#' => Some(TileType::Wall),
            _ => None,
        }
    }

    /// Convert a stored tile code back to a tile type.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(TileType::Ground),
            1 => Some(TileType::Stone),
            2 => Some(TileType::Wood),
            3 => Some(TileType::Dynamite),
            4 => Some(TileType::Wall),
            _ => None,
        }
    }

    /// Get the code stored in the `.level` tile grid.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// The symbol used when rendering this tile back to ASCII.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            TileType::Ground => ' ',
            TileType::Stone => '1',
            TileType::Wood => '2',
            TileType::Dynamite => '3',
            TileType::Wall => '#',
        }
    }
}
