//! Substitution of generated code into shader templates.

use anyhow::{bail, Context, Result};
use log::warn;
use std::fs;
use std::path::Path;

use lif2wgsl_core::grid::Grid;

/// Start of the part of the compute template that is kept.
pub const COMPUTE_MARKER: &str = "struct ShaderUniforms";

/// Template constant names and the generated constants that replace them.
const COMPUTE_RENAMES: &[(&str, &str)] = &[
    ("COMP_WIDTH", "PATTERN_WIDTH"),
    ("COMP_HEIGHT", "PATTERN_HEIGHT"),
    ("COMP_RUN_COUNT", "PATTERN_RUN_COUNT"),
    ("COMP_RUNS", "PATTERN_RUNS"),
];

lazy_static! {
    /// Regex matching the grid size declaration in the vertex template.
    static ref GRID_SIZE_REGEX: regex::Regex =
        regex::Regex::new(r"const\s+GRID_SIZE\s*:\s*vec3u\s*=\s*vec3u\([^\)]*\);").unwrap();
}

/// Reads a template, returning an empty string if it does not exist.
pub fn read_template(path: &Path) -> Result<String> {
    if !path.exists() {
        warn!("Template {} not found; using an empty template", path.display());
        return Ok(String::new());
    }
    fs::read_to_string(path).with_context(|| format!("failed to read template {}", path.display()))
}

/// Replaces everything before [`COMPUTE_MARKER`] in the compute template with
/// `header`, and renames the template's pattern constants to the generated
/// ones.
pub fn splice_compute(header: &str, template: &str) -> Result<String> {
    let start = match template.find(COMPUTE_MARKER) {
        Some(i) => i,
        None => bail!("compute template missing {}", COMPUTE_MARKER),
    };
    let mut rest = template[start..].to_owned();
    for (old, new) in COMPUTE_RENAMES {
        rest = rest.replace(old, new);
    }
    Ok(format!("{}{}", header, rest))
}

/// Replaces the first `GRID_SIZE` declaration in the vertex template with
/// the grid size.
pub fn set_grid_size(template: &str, grid: Grid) -> String {
    let declaration = format!(
        "const GRID_SIZE : vec3u = vec3u({}u, {}u, 1u);",
        grid.width, grid.height,
    );
    GRID_SIZE_REGEX
        .replacen(template, 1, regex::NoExpand(&declaration))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splice_compute() {
        let template = "\
const COMP_WIDTH : u32 = 1u;
struct ShaderUniforms { time : f32 };
fn f() { let n = COMP_RUN_COUNT; let r = COMP_RUNS[0]; let w = COMP_WIDTH + COMP_HEIGHT; }
";
        assert_eq!(
            "\
HEADER
struct ShaderUniforms { time : f32 };
fn f() { let n = PATTERN_RUN_COUNT; let r = PATTERN_RUNS[0]; let w = PATTERN_WIDTH + PATTERN_HEIGHT; }
",
            splice_compute("HEADER\n", template).unwrap(),
        );

        let err = splice_compute("HEADER\n", "fn main() {}").unwrap_err();
        assert_eq!("compute template missing struct ShaderUniforms", err.to_string());
    }

    #[test]
    fn test_set_grid_size() {
        let grid = Grid {
            width: 96,
            height: 60,
        };
        let template = "\
const GRID_SIZE   :  vec3u = vec3u(8u, 8u,
    1u);
const GRID_SIZE : vec3u = vec3u(1u, 1u, 1u);
";
        assert_eq!(
            "\
const GRID_SIZE : vec3u = vec3u(96u, 60u, 1u);
const GRID_SIZE : vec3u = vec3u(1u, 1u, 1u);
",
            set_grid_size(template, grid),
        );
        assert_eq!("no grid here", set_grid_size("no grid here", grid));
    }
}
