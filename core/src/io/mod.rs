//! Text formats for importing static cellular automaton patterns.
//!
//! Two formats are supported: Golly's 2-state
//! ["RLE"](http://golly.sourceforge.net/Help/formats.html#rle) and the sparse
//! ["Life 1.05"](https://conwaylife.com/wiki/Life_1.05) character grid. Use
//! [`parse_lif()`] to detect the format of some text and parse it.

use log::debug;
use std::fmt;
use thiserror::Error;

pub mod life105;
pub mod rle;

use crate::pattern::{ParsedPattern, PatternError};

/// Result type returned by fallible pattern import routines.
pub type LifResult<T> = Result<T, LifError>;

lazy_static! {
    /// Regex matching any line that looks like an RLE header.
    static ref RLE_HEADER_LINE_REGEX: regex::Regex =
        regex::Regex::new(r"(?m)^\s*x\s*=\s*\d+").unwrap();
}

/// Marker at the start of every Life 1.05 file.
pub const LIFE_105_MARKER: &str = "#Life 1.05";

/// Error encountered during pattern import.
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum LifError {
    #[error("unrecognized LIF format: {name}")]
    UnrecognizedFormat { name: String },
    #[error("RLE header missing dimensions")]
    MalformedHeader,
    #[error("Life 1.05 file contains no live cells")]
    EmptyPattern,
    #[error("bad #P origin directive on line {line}")]
    BadOriginDirective { line: usize },
    #[error("Life 1.05 coordinates out of range")]
    CoordinateOverflow,
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

/// Format that a pattern can be imported from.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LifFormat {
    /// Golly 2-state run-length encoding.
    Rle,
    /// Life 1.05 sparse character grid.
    Life105,
}
impl fmt::Display for LifFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifFormat::Rle => write!(f, "RLE"),
            LifFormat::Life105 => write!(f, "Life 1.05"),
        }
    }
}
impl LifFormat {
    /// Detects the format of some text, or returns `None` if it is not
    /// recognized.
    ///
    /// RLE takes priority: any line beginning with `x = <number>` marks the
    /// text as RLE, even if it also starts with the Life 1.05 marker.
    pub fn detect(text: &str) -> Option<Self> {
        if RLE_HEADER_LINE_REGEX.is_match(text) {
            Some(LifFormat::Rle)
        } else if text.trim_start().starts_with(LIFE_105_MARKER) {
            Some(LifFormat::Life105)
        } else {
            None
        }
    }

    /// Parses text known to be in this format.
    pub fn parse(self, text: &str) -> LifResult<ParsedPattern> {
        match self {
            LifFormat::Rle => rle::parse_rle(text),
            LifFormat::Life105 => life105::parse_life105(text),
        }
    }
}

/// Detects the format of `text` and parses it.
///
/// `name` identifies the input (usually its path) in the error returned when
/// neither format is recognized.
pub fn parse_lif(text: &str, name: &str) -> LifResult<ParsedPattern> {
    let text = text.trim();
    let format = LifFormat::detect(text).ok_or_else(|| LifError::UnrecognizedFormat {
        name: name.to_owned(),
    })?;
    debug!("Detected {} format in {}", format, name);
    let pattern = format.parse(text)?;
    debug!(
        "Parsed {}x{} pattern with {} runs ({} live cells)",
        pattern.width(),
        pattern.height(),
        pattern.runs().len(),
        pattern.population(),
    );
    Ok(pattern)
}
