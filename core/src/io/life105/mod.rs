//! The ["Life 1.05" format](https://conwaylife.com/wiki/Life_1.05).
//!
//! Each non-comment line is a row of cells where `*` is alive. `#P x y`
//! directives start a new block of rows whose top-left corner is at `(x, y)`;
//! blocks may appear in any order and at negative coordinates, so the result
//! is translated so that its bounding box starts at `(0, 0)`.

use itertools::{Itertools, MinMaxResult};
use std::collections::BTreeMap;
use std::convert::TryFrom;

use super::{LifError, LifResult};
use crate::pattern::{ParsedPattern, Run};

/// Parses a Life 1.05 pattern.
pub fn parse_life105(text: &str) -> LifResult<ParsedPattern> {
    let live = live_cells(text)?;

    let (min_x, max_x) = bounds(live.iter().map(|&(x, _)| x))?;
    let (min_y, max_y) = bounds(live.iter().map(|&(_, y)| y))?;
    let width = size(min_x, max_x)?;
    let height = size(min_y, max_y)?;

    // Group columns by row.
    let mut rows: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for &(x, y) in &live {
        rows.entry(offset(y, min_y)?)
            .or_default()
            .push(offset(x, min_x)?);
    }

    let mut runs = vec![];
    for (y, mut xs) in rows {
        xs.sort_unstable();
        // Overlapping blocks may list the same cell twice.
        xs.dedup();
        runs.extend(
            xs.into_iter()
                .map(|x| Run::new(y, x, 1))
                .coalesce(|a, b| {
                    if a.end() == b.start {
                        Ok(Run::new(y, a.start, a.len + b.len))
                    } else {
                        Err((a, b))
                    }
                }),
        );
    }

    Ok(ParsedPattern::new(width, height, runs)?)
}

/// Returns the absolute coordinates of every live cell, in the order they
/// appear in the text.
fn live_cells(text: &str) -> LifResult<Vec<(i64, i64)>> {
    let mut live = vec![];
    let (mut origin_x, mut origin_y) = (0_i64, 0_i64);
    let mut row = 0_i64;

    for (i, line) in text.lines().enumerate() {
        if line.starts_with("#P") {
            if let Some((_, x, y)) = line.split_whitespace().next_tuple() {
                let bad_origin =
                    |_: std::num::ParseIntError| LifError::BadOriginDirective { line: i + 1 };
                origin_x = x.parse().map_err(bad_origin)?;
                origin_y = y.parse().map_err(bad_origin)?;
                row = 0;
            }
            continue;
        }
        if line.starts_with('#') {
            continue;
        }

        for (column, ch) in line.chars().enumerate() {
            if ch == '*' {
                let x = (column as i64)
                    .checked_add(origin_x)
                    .ok_or(LifError::CoordinateOverflow)?;
                let y = row
                    .checked_add(origin_y)
                    .ok_or(LifError::CoordinateOverflow)?;
                live.push((x, y));
            }
        }
        row += 1;
    }

    Ok(live)
}

/// Returns `value - min` as an index.
fn offset(value: i64, min: i64) -> LifResult<usize> {
    value
        .checked_sub(min)
        .and_then(|d| usize::try_from(d).ok())
        .ok_or(LifError::CoordinateOverflow)
}

/// Returns the number of cells from `min` to `max`, inclusive.
fn size(min: i64, max: i64) -> LifResult<usize> {
    offset(max, min)?
        .checked_add(1)
        .ok_or(LifError::CoordinateOverflow)
}

/// Returns the minimum and maximum of some coordinates, or an error if there
/// are none.
fn bounds(coords: impl Iterator<Item = i64>) -> LifResult<(i64, i64)> {
    match coords.minmax() {
        MinMaxResult::NoElements => Err(LifError::EmptyPattern),
        MinMaxResult::OneElement(n) => Ok((n, n)),
        MinMaxResult::MinMax(min, max) => Ok((min, max)),
    }
}

#[cfg(test)]
mod tests;
