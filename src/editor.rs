//! Interactive level acquisition.
//!
//! Field validation is split out from the prompt loops so both can be
//! tested without a terminal: [`fields`] holds the pure checks, and
//! [`EditorSession`] drives them over any `BufRead`/`Write` pair.

mod fields;
mod session;

pub use fields::{DimensionError, LabelError, normalize_label, parse_dimension};
pub use session::EditorSession;
