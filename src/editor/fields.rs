//! Pure validation for the scalar level fields.

use crate::level::{MAX_DIMENSION, MAX_LABEL_LEN, MIN_DIMENSION};

/// Why a name or biome was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelError {
    /// More than 24 characters after normalization.
    TooLong,
    /// Contains a code point outside the ASCII range.
    NotAscii,
}

/// Why a width or height was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionError {
    /// The input did not parse as an integer.
    NotAnInteger,
    /// The value is outside `[4, 32]`.
    OutOfRange,
}

/// Normalize and validate a name or biome.
///
/// Empty input falls back to `default`. The value is lowercased and spaces
/// become underscores before the checks run: at most 24 characters, ASCII
/// only. The length check runs first, matching the prompt order of the
/// diagnostics.
///
/// # Errors
///
/// Returns a [`LabelError`] describing the first failed check.
pub fn normalize_label(input: &str, default: &str) -> Result<String, LabelError> {
    let raw = if input.is_empty() { default } else { input };
    let label: String = raw.to_lowercase().replace(' ', "_");

    if label.chars().count() > MAX_LABEL_LEN {
        return Err(LabelError::TooLong);
    }

    if !label.is_ascii() {
        return Err(LabelError::NotAscii);
    }

    Ok(label)
}

/// Parse and range-check a width or height.
///
/// # Errors
///
/// Returns a [`DimensionError`] if the input is not an integer or is
/// outside `[4, 32]`.
pub fn parse_dimension(input: &str) -> Result<u32, DimensionError> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| DimensionError::NotAnInteger)?;

    if value < i64::from(MIN_DIMENSION) || value > i64::from(MAX_DIMENSION) {
        return Err(DimensionError::OutOfRange);
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let value = value as u32;
    Ok(value)
}
