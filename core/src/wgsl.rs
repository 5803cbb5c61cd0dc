//! WGSL source for embedding a pattern in a compute shader.
//!
//! Runs are emitted as a constant array of `Run` structs `(y, x, len)`, in the
//! same order as [`ParsedPattern::runs()`], so that the shader can rebuild the
//! pattern in a single pass.

use itertools::Itertools;
use std::fmt;

use crate::pattern::{ParsedPattern, Run};

/// Author information written as comments at the top of the compute shader.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credits {
    pub author: String,
    pub author_site: String,
    pub archive: String,
}

/// Array literal of the form `array<Run, N>(Run(0u, 1u, 1u), ...)`, with one
/// run per line.
#[derive(Debug, Copy, Clone)]
pub struct RunArray<'a>(pub &'a [Run]);
impl fmt::Display for RunArray<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "array<Run, {}>(", self.0.len())?;
        let entries = self
            .0
            .iter()
            .map(|run| format!("    Run({}u, {}u, {}u)", run.row, run.start, run.len))
            .join(",\n");
        writeln!(f, "{}", entries)?;
        write!(f, ")")
    }
}

/// Generated preamble of the compute shader: credits, pattern constants, the
/// `Run` struct, and the run array.
#[derive(Debug, Clone)]
pub struct ShaderHeader<'a> {
    /// Pattern to embed.
    pub pattern: &'a ParsedPattern,
    /// Name of the pattern file, mentioned in a comment.
    pub source: &'a str,
    /// Number of frames between compute steps.
    pub frame_interval: u32,
    /// Credits comment block, if any.
    pub credits: Option<&'a Credits>,
}
impl fmt::Display for ShaderHeader<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(credits) = self.credits {
            writeln!(f, "// Author: {}", credits.author)?;
            writeln!(f, "// Author's Website: {}", credits.author_site)?;
            writeln!(f, "// LIF archive: {}", credits.archive)?;
            writeln!(f)?;
        }

        let runs = self.pattern.runs();
        let run_count = runs.len();
        writeln!(f, "const COMPUTE_FRAME_INTERVAL : u32 = {}u;", self.frame_interval)?;
        writeln!(f)?;
        writeln!(f, "const PATTERN_WIDTH : u32 = {}u;", self.pattern.width())?;
        writeln!(f, "const PATTERN_HEIGHT : u32 = {}u;", self.pattern.height())?;
        writeln!(f, "const PATTERN_RUN_COUNT : u32 = {}u;", run_count)?;
        writeln!(f)?;
        writeln!(f, "struct Run\n{{")?;
        writeln!(f, "    y : u32,")?;
        writeln!(f, "    x : u32,")?;
        writeln!(f, "    len : u32,")?;
        writeln!(f, "}};")?;
        writeln!(f)?;
        writeln!(
            f,
            "// Run-length encoded live cell spans from {} (y, x, len).",
            self.source,
        )?;
        writeln!(
            f,
            "const PATTERN_RUNS : array<Run, {}> = {};",
            run_count,
            RunArray(runs),
        )?;
        writeln!(f)
    }
}
