use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::Path;

use lif2wgsl_core::prelude::*;

use crate::config::Config;
use crate::template;

/// Contents of the three generated shader files.
#[derive(Debug, Clone)]
pub struct ShaderSet {
    pub compute: String,
    pub vertex: String,
    pub fragment: String,
}
impl ShaderSet {
    /// Parses the pattern in `lif_path` and fills in the templates from
    /// `template_dir`. If `grid` is `None`, the grid size is computed from the
    /// pattern size.
    pub fn build(
        lif_path: &Path,
        template_dir: &Path,
        grid: Option<Grid>,
        config: &Config,
    ) -> Result<Self> {
        let source = lif_path.display().to_string().replace('\\', "/");
        let text = fs::read_to_string(lif_path)
            .with_context(|| format!("failed to read {}", lif_path.display()))?;
        let pattern = parse_lif(&text, &source)?;

        let grid = grid.unwrap_or_else(|| {
            compute_grid(pattern.width(), pattern.height(), config.pad, config.ratio)
        });
        debug!(
            "Using {} grid for {}x{} pattern",
            grid,
            pattern.width(),
            pattern.height(),
        );

        let header = ShaderHeader {
            pattern: &pattern,
            source: &source,
            frame_interval: config.frame_interval,
            credits: Some(&config.credits).filter(|_| config.include_header),
        };

        let names = &config.templates;
        let compute_template = template::read_template(&template_dir.join(&names.compute))?;
        let vertex_template = template::read_template(&template_dir.join(&names.vertex))?;
        let fragment = template::read_template(&template_dir.join(&names.fragment))?;

        Ok(Self {
            compute: template::splice_compute(&header.to_string(), &compute_template)?,
            vertex: template::set_grid_size(&vertex_template, grid),
            fragment,
        })
    }

    /// Writes `<base_name>.compute.wgsl`, `<base_name>.vertex.wgsl`, and
    /// `<base_name>.fragment.wgsl` to `output_dir`, creating it if necessary.
    pub fn write(&self, output_dir: &Path, base_name: &str) -> Result<()> {
        fs::create_dir_all(output_dir)
            .with_context(|| format!("failed to create {}", output_dir.display()))?;
        for (kind, contents) in [
            ("compute", &self.compute),
            ("vertex", &self.vertex),
            ("fragment", &self.fragment),
        ] {
            let path = output_dir.join(format!("{}.{}.wgsl", base_name, kind));
            fs::write(&path, contents)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        Ok(())
    }
}
