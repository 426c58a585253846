//! Create command implementation.

use super::CliError;
use levelsmith::editor::EditorSession;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Execute the create command.
///
/// Runs the interactive session on stdin/stdout and writes
/// `<name>.level` on success. Validation failures end the run with a
/// `(!)` diagnostic and no file; they are not process errors.
///
/// # Errors
///
/// Returns an error if a stream fails mid-session or the file cannot be
/// written.
pub(crate) fn execute(output_dir: Option<PathBuf>) -> Result<(), CliError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = EditorSession::new(stdin.lock(), stdout.lock());

    let level = match session.run()? {
        Ok(level) => level,
        Err(e) => {
            println!("\n(!) {e}");
            return Ok(());
        }
    };
    drop(session);

    let dir = match output_dir {
        Some(dir) => dir,
        None => default_levels_dir()?,
    };
    fs::create_dir_all(&dir).map_err(|e| {
        CliError::new(format!("Failed to create {}: {e}", dir.display()))
    })?;

    let path = dir.join(format!("{}.level", level.name()));
    level.save(&path).map_err(|e| {
        CliError::new(format!("Failed to write {}: {e}", path.display()))
    })?;

    println!("\nSaved as \"{}.level\"!", level.name());

    Ok(())
}

/// Resolve the default `levels/` directory, next to the executable.
fn default_levels_dir() -> Result<PathBuf, CliError> {
    let exe = env::current_exe().map_err(|e| {
        CliError::new(format!("Failed to locate the executable: {e}"))
    })?;

    let dir = exe
        .parent()
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);

    Ok(dir.join("levels"))
}
