//! ASCII preview of a level for terminal inspection.

use crate::level::builder::Level;
use crate::level::tile::{Coord, TileType};

/// Reconstruct the tilemap rows as they were typed, top row first.
///
/// The start, finish, and dynamite markers are overlaid on their ground
/// cells, so the rows of a built level match the tilemap its author
/// entered.
#[must_use]
pub fn tilemap_rows(level: &Level) -> Vec<String> {
    (0..level.height())
        .rev()
        .map(|y| {
            (0..level.width())
                .map(|x| cell_symbol(level, Coord::new(x, y)))
                .collect()
        })
        .collect()
}

/// Render a level as ASCII.
///
/// Output format:
/// ```text
/// Deep Mine (grass, 6x5)
///
/// ######
/// #S1 3#
/// # D  #
/// #   F#
/// ######
///
/// Start: (1, 3)  Finish: (4, 1)  Dynamites: 1
/// ```
#[must_use]
pub fn render_ascii(level: &Level) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} ({}, {}x{})\n\n",
        level.display_name(),
        level.biome(),
        level.width(),
        level.height()
    ));

    for row in tilemap_rows(level) {
        output.push_str(&row);
        output.push('\n');
    }

    output.push_str(&format!(
        "\nStart: ({}, {})  Finish: ({}, {})  Dynamites: {}\n",
        level.start().x,
        level.start().y,
        level.finish().x,
        level.finish().y,
        level.dynamites().len()
    ));

    output
}

/// Pick the display symbol for one cell, markers first.
fn cell_symbol(level: &Level, coord: Coord) -> char {
    if coord == level.start() {
        'S'
    } else if coord == level.finish() {
        'F'
    } else if level.dynamites().contains(&coord) {
        'D'
    } else {
        level.get(coord).map_or('?', TileType::symbol)
    }
}
