//! Run-length encoded representation of a static pattern.

use std::fmt;

use thiserror::Error;

/// Result type returned when constructing a pattern.
pub type PatternResult<T> = Result<T, PatternError>;

/// Horizontal span of live cells within a single row.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Run {
    /// Row index, with row 0 at the top of the pattern.
    pub row: usize,
    /// Column of the leftmost live cell.
    pub start: usize,
    /// Number of consecutive live cells; never zero.
    pub len: usize,
}
impl Run {
    /// Constructs a run of `len` live cells starting at `(start, row)`.
    pub const fn new(row: usize, start: usize, len: usize) -> Self {
        Self { row, start, len }
    }
    /// Returns the column just past the last live cell, saturating at
    /// `usize::MAX`.
    pub const fn end(self) -> usize {
        self.start.saturating_add(self.len)
    }
}
impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.row, self.start, self.len)
    }
}

/// Error produced when runs do not describe a well-formed pattern.
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum PatternError {
    #[error("pattern size {width}x{height} must be positive")]
    ZeroSize { width: usize, height: usize },
    #[error("run {0} is empty")]
    EmptyRun(Run),
    #[error("run {run} lies outside the {width}x{height} bounding box")]
    RunOutOfBounds {
        run: Run,
        width: usize,
        height: usize,
    },
    #[error("run {next} touches, overlaps, or precedes run {prev}")]
    RunsOutOfOrder { prev: Run, next: Run },
}

/// Pattern size and its live cells as ordered horizontal runs.
///
/// Runs are sorted by row, then by starting column, and runs within the same
/// row never touch or overlap. Downstream consumers rely on this order to
/// rebuild the pattern in a single pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPattern {
    width: usize,
    height: usize,
    runs: Vec<Run>,
}
impl ParsedPattern {
    /// Constructs a pattern, checking that every run is nonempty, lies inside
    /// the bounding box, and starts past the end of the previous run.
    pub fn new(width: usize, height: usize, runs: Vec<Run>) -> PatternResult<Self> {
        if width == 0 || height == 0 {
            return Err(PatternError::ZeroSize { width, height });
        }
        let mut prev: Option<Run> = None;
        for &run in &runs {
            if run.len == 0 {
                return Err(PatternError::EmptyRun(run));
            }
            if run.row >= height || run.start >= width || run.len > width - run.start {
                return Err(PatternError::RunOutOfBounds { run, width, height });
            }
            if let Some(prev) = prev {
                let in_order =
                    prev.row < run.row || (prev.row == run.row && prev.end() < run.start);
                if !in_order {
                    return Err(PatternError::RunsOutOfOrder { prev, next: run });
                }
            }
            prev = Some(run);
        }
        Ok(Self {
            width,
            height,
            runs,
        })
    }

    /// Returns the width of the bounding box.
    pub fn width(&self) -> usize {
        self.width
    }
    /// Returns the height of the bounding box.
    pub fn height(&self) -> usize {
        self.height
    }
    /// Returns the runs in emission order.
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }
    /// Returns the number of live cells.
    pub fn population(&self) -> usize {
        self.runs.iter().map(|run| run.len).sum()
    }
    /// Iterates over live cells as `(column, row)` pairs, in run order.
    pub fn cells(&self) -> impl '_ + Iterator<Item = (usize, usize)> {
        self.runs
            .iter()
            .flat_map(|run| (run.start..run.end()).map(move |x| (x, run.row)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_invariants() {
        let runs = vec![Run::new(0, 0, 1), Run::new(0, 2, 1), Run::new(1, 1, 1)];
        let p = ParsedPattern::new(3, 2, runs).expect("valid pattern rejected");
        assert_eq!(3, p.population());
        assert_eq!(vec![(0, 0), (2, 0), (1, 1)], p.cells().collect::<Vec<_>>());

        assert_eq!(
            Err(PatternError::ZeroSize { width: 0, height: 2 }),
            ParsedPattern::new(0, 2, vec![]),
        );
        assert_eq!(
            Err(PatternError::EmptyRun(Run::new(0, 0, 0))),
            ParsedPattern::new(3, 2, vec![Run::new(0, 0, 0)]),
        );
        assert!(matches!(
            ParsedPattern::new(3, 2, vec![Run::new(0, 1, 3)]),
            Err(PatternError::RunOutOfBounds { .. }),
        ));
        assert!(matches!(
            ParsedPattern::new(3, 2, vec![Run::new(2, 0, 1)]),
            Err(PatternError::RunOutOfBounds { .. }),
        ));
        // `start + len` would wrap around.
        assert!(matches!(
            ParsedPattern::new(3, 2, vec![Run::new(0, usize::MAX, 1)]),
            Err(PatternError::RunOutOfBounds { .. }),
        ));
        assert!(matches!(
            ParsedPattern::new(3, 2, vec![Run::new(0, 1, usize::MAX)]),
            Err(PatternError::RunOutOfBounds { .. }),
        ));
        assert_eq!(usize::MAX, Run::new(0, usize::MAX, 1).end());
        // Touching runs in the same row should have been merged.
        assert!(matches!(
            ParsedPattern::new(3, 2, vec![Run::new(0, 0, 1), Run::new(0, 1, 1)]),
            Err(PatternError::RunsOutOfOrder { .. }),
        ));
        assert!(matches!(
            ParsedPattern::new(3, 2, vec![Run::new(0, 0, 2), Run::new(0, 1, 1)]),
            Err(PatternError::RunsOutOfOrder { .. }),
        ));
        assert!(matches!(
            ParsedPattern::new(3, 2, vec![Run::new(1, 0, 1), Run::new(0, 0, 1)]),
            Err(PatternError::RunsOutOfOrder { .. }),
        ));
    }
}
