//! Golly's 2-state ["RLE" format](http://golly.sourceforge.net/Help/formats.html#rle).
//!
//! Only the `b`, `o`, `$`, and `!` items are meaningful; everything else in
//! the body is skipped. Y values increase downwards, matching the row order
//! of [`ParsedPattern`].

mod render;
mod scanner;

use super::{LifError, LifResult};
use crate::pattern::ParsedPattern;
use scanner::{RleScanner, ScanStep};

lazy_static! {
    /// Regex matching the `x = <width>, y = <height>` pair in an RLE header.
    static ref RLE_SIZE_REGEX: regex::Regex =
        regex::Regex::new(r"x\s*=\s*(\d+)\s*,\s*y\s*=\s*(\d+)").unwrap();
}

/// Parses a 2-state RLE pattern.
///
/// Lines starting with `#` are comments. The first other nonblank line is the
/// header, and all lines after it are joined into a single body.
pub fn parse_rle(text: &str) -> LifResult<ParsedPattern> {
    let mut lines = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'));

    let header = lines.next().ok_or(LifError::MalformedHeader)?;
    let (width, height) = parse_header(header)?;

    let mut scanner = RleScanner::default();
    'body: for line in lines {
        for ch in line.chars() {
            if scanner.step(ch) == ScanStep::End {
                break 'body;
            }
        }
    }

    Ok(ParsedPattern::new(width, height, scanner.finish())?)
}

/// Extracts the pattern size from an RLE header line.
fn parse_header(header: &str) -> LifResult<(usize, usize)> {
    let caps = RLE_SIZE_REGEX
        .captures(header)
        .ok_or(LifError::MalformedHeader)?;
    let parse_size = |i: usize| -> LifResult<usize> {
        match caps[i].parse::<usize>() {
            Ok(0) | Err(_) => Err(LifError::MalformedHeader),
            Ok(n) => Ok(n),
        }
    };
    Ok((parse_size(1)?, parse_size(2)?))
}
