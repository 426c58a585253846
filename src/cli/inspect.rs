//! Inspect command implementation.

use super::output::JsonLevel;
use super::{CliError, InspectFormat};
use levelsmith::Level;
use levelsmith::level::render_ascii;
use std::path::Path;

/// Execute the inspect command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded.
pub(crate) fn execute(file: &Path, format: InspectFormat) -> Result<(), CliError> {
    let level = Level::load(file).map_err(|e| {
        CliError::new(format!("Failed to read {}: {e}", file.display()))
    })?;

    match format {
        InspectFormat::Text => {
            print!("{}", render_ascii(&level));
        }
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&JsonLevel::from_level(&level))
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}
