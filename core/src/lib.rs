//! Static cellular automaton pattern import, run-length compression, and grid
//! geometry for generating WGSL shaders.

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]
#![deny(clippy::correctness)]

#[macro_use]
extern crate lazy_static;

pub mod grid;
pub mod io;
mod pattern;
pub mod wgsl;

pub use pattern::{ParsedPattern, PatternError, PatternResult, Run};

pub mod prelude {
    //! Commonly used types and functions.

    pub use crate::grid::{compute_grid, Grid, Ratio, RatioError};
    pub use crate::io::{parse_lif, LifError, LifFormat, LifResult};
    pub use crate::pattern::{ParsedPattern, PatternError, Run};
    pub use crate::wgsl::{Credits, RunArray, ShaderHeader};
}
