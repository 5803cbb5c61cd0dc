//! Fitting a padded pattern into a grid with a fixed aspect ratio.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error produced when parsing a [`Ratio`].
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum RatioError {
    #[error("ratio must be in W:H format, e.g. 16:10")]
    MissingColon,
    #[error("ratio must be in W:H format, e.g. 16:10")]
    NotANumber,
    #[error("ratio values must be positive")]
    NotPositive,
}

/// Target aspect ratio of a grid, as `width:height`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Ratio {
    w: usize,
    h: usize,
}
impl Ratio {
    /// Constructs a ratio, returning an error if either component is zero.
    pub fn new(w: usize, h: usize) -> Result<Self, RatioError> {
        if w == 0 || h == 0 {
            return Err(RatioError::NotPositive);
        }
        Ok(Self { w, h })
    }
    /// Returns the width component.
    pub fn w(self) -> usize {
        self.w
    }
    /// Returns the height component.
    pub fn h(self) -> usize {
        self.h
    }
}
impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.w, self.h)
    }
}
impl FromStr for Ratio {
    type Err = RatioError;

    fn from_str(s: &str) -> Result<Self, RatioError> {
        let (w, h) = s.split_once(':').ok_or(RatioError::MissingColon)?;
        let parse = |n: &str| {
            n.trim()
                .parse::<i64>()
                .map_err(|_| RatioError::NotANumber)
        };
        let (w, h) = (parse(w)?, parse(h)?);
        if w <= 0 || h <= 0 {
            return Err(RatioError::NotPositive);
        }
        Self::new(w as usize, h as usize)
    }
}

/// Size of the simulation grid, in cells.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
}
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Returns the smallest grid with aspect ratio `ratio` that holds a
/// `width`x`height` pattern with `pad` cells of padding on every side.
///
/// Both dimensions of the result are the same multiple `k` of the
/// corresponding ratio component.
pub fn compute_grid(width: usize, height: usize, pad: usize, ratio: Ratio) -> Grid {
    let padded_width = width + 2 * pad;
    let padded_height = height + 2 * pad;
    let k = std::cmp::max(
        padded_width.div_ceil(ratio.w),
        padded_height.div_ceil(ratio.h),
    );
    Grid {
        width: ratio.w * k,
        height: ratio.h * k,
    }
}
