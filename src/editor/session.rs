//! The interactive prompt session.

use crate::editor::fields::{self, DimensionError, LabelError};
use crate::error::LevelError;
use crate::level::{Level, LevelBuilder, MAX_DIMENSION, MAX_LABEL_LEN, MIN_DIMENSION};
use std::io::{self, BufRead, Write};

/// Drives the prompt sequence over arbitrary input and output streams.
///
/// Field prompts re-ask until their own validation passes. Once the
/// tilemap phase begins, the first failure (bad symbol or a failed
/// post-scan check) ends the whole session.
#[derive(Debug)]
pub struct EditorSession<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> EditorSession<R, W> {
    /// Create a session over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run the full prompt sequence and build the level.
    ///
    /// The outer `Result` carries stream failures (including input closing
    /// mid-session); the inner one carries validation failures, which the
    /// caller reports with the `(!)` prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing a stream fails.
    pub fn run(&mut self) -> io::Result<Result<Level, LevelError>> {
        let name = self.prompt_label("Name:   ", "Name", "output")?;
        let biome = self.prompt_label("Biome:  ", "Biome", "grass")?;
        let width = self.prompt_dimension("Width:  ", "Width")?;
        let height = self.prompt_dimension("Height: ", "Height")?;

        writeln!(self.output, "\nTilemap:")?;

        // prompt_dimension only returns values the builder accepts
        let mut builder = LevelBuilder::new(name, biome, width, height)
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::InvalidInput, "dimensions out of range")
            })?;

        for _ in 0..height {
            write!(self.output, " ")?;
            self.output.flush()?;

            let row = self.read_line()?;
            if let Err(e) = builder.push_row(&row) {
                return Ok(Err(e));
            }
        }

        Ok(builder.finish())
    }

    /// Prompt for a name or biome until it validates.
    fn prompt_label(
        &mut self,
        prompt: &str,
        field: &str,
        default: &str,
    ) -> io::Result<String> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            match fields::normalize_label(&self.read_line()?, default) {
                Ok(label) => return Ok(label),
                Err(LabelError::TooLong) => writeln!(
                    self.output,
                    " (!) {field} must be up to {MAX_LABEL_LEN} characters long."
                )?,
                Err(LabelError::NotAscii) => writeln!(
                    self.output,
                    " (!) {field} must only use ASCII characters."
                )?,
            }
        }
    }

    /// Prompt for a width or height until it validates.
    fn prompt_dimension(&mut self, prompt: &str, field: &str) -> io::Result<u32> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            match fields::parse_dimension(&self.read_line()?) {
                Ok(value) => return Ok(value),
                Err(DimensionError::NotAnInteger) => writeln!(
                    self.output,
                    " (!) {field} must be an integer between {MIN_DIMENSION} and {MAX_DIMENSION}."
                )?,
                Err(DimensionError::OutOfRange) => writeln!(
                    self.output,
                    " (!) {field} must be between {MIN_DIMENSION} and {MAX_DIMENSION}."
                )?,
            }
        }
    }

    /// Read one input line without its trailing newline.
    ///
    /// A closed input stream is a hard error: the session cannot finish
    /// without the remaining answers.
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();

        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before the level was finished",
            ));
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Coord;
    use std::io::Cursor;

    fn run_session(script: &str) -> (io::Result<Result<Level, LevelError>>, String) {
        let mut output = Vec::new();
        let result = EditorSession::new(Cursor::new(script), &mut output).run();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_full_session() {
        let script = "Deep Mine\ngrass\n5\n4\n#####\n#S D#\n#F  #\n#####\n";
        let (result, output) = run_session(script);

        let level = result.unwrap().unwrap();
        assert_eq!(level.name(), "deep_mine");
        assert_eq!(level.biome(), "grass");
        assert_eq!(level.width(), 5);
        assert_eq!(level.height(), 4);
        assert_eq!(level.start(), Coord::new(1, 2));
        assert_eq!(level.finish(), Coord::new(1, 1));
        assert_eq!(level.dynamites(), &[Coord::new(3, 2)]);

        assert!(output.contains("Name:   "));
        assert!(output.contains("Biome:  "));
        assert!(output.contains("\nTilemap:\n"));
    }

    #[test]
    fn test_defaults_applied_on_empty_input() {
        let script = "\n\n4\n4\n####\n#S #\n#F #\n####\n";
        let (result, _) = run_session(script);

        let level = result.unwrap().unwrap();
        assert_eq!(level.name(), "output");
        assert_eq!(level.biome(), "grass");
    }

    #[test]
    fn test_field_errors_reprompt() {
        let long_name = "x".repeat(30);
        let script = format!(
            "{long_name}\ncafé\nmine\nsnow\nwide\n3\n99\n4\n4\n####\n#S #\n#F #\n####\n"
        );
        let (result, output) = run_session(&script);

        let level = result.unwrap().unwrap();
        assert_eq!(level.name(), "mine");
        assert_eq!(level.biome(), "snow");
        assert_eq!(level.width(), 4);

        assert!(output.contains(" (!) Name must be up to 24 characters long.\n"));
        assert!(output.contains(" (!) Name must only use ASCII characters.\n"));
        assert!(output.contains(" (!) Width must be an integer between 4 and 32.\n"));
        assert!(output.contains(" (!) Width must be between 4 and 32.\n"));
    }

    #[test]
    fn test_invalid_symbol_ends_session() {
        // Third tilemap row has a bad symbol; no further rows are read
        let script = "m\ngrass\n4\n4\n####\n#S #\n#q #\n";
        let (result, _) = run_session(script);

        assert_eq!(result.unwrap().unwrap_err(), LevelError::InvalidSymbol('Q'));
    }

    #[test]
    fn test_unenclosed_level_fails() {
        let script = "m\ngrass\n4\n4\n## #\n#S #\n#F #\n####\n";
        let (result, _) = run_session(script);

        assert_eq!(result.unwrap().unwrap_err(), LevelError::NotEnclosed);
    }

    #[test]
    fn test_missing_markers_fail() {
        let script = "m\ngrass\n4\n4\n####\n#  #\n#F #\n####\n";
        let (result, _) = run_session(script);
        assert_eq!(result.unwrap().unwrap_err(), LevelError::MissingStart);

        let script = "m\ngrass\n4\n4\n####\n#S #\n#  #\n####\n";
        let (result, _) = run_session(script);
        assert_eq!(result.unwrap().unwrap_err(), LevelError::MissingFinish);
    }

    #[test]
    fn test_input_closing_is_an_io_error() {
        let (result, _) = run_session("m\ngrass\n4\n");
        let err = result.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_crlf_input() {
        let script = "m\r\ngrass\r\n4\r\n4\r\n####\r\n#S #\r\n#F #\r\n####\r\n";
        let (result, _) = run_session(script);

        let level = result.unwrap().unwrap();
        assert_eq!(level.name(), "m");
        assert_eq!(level.width(), 4);
    }
}
