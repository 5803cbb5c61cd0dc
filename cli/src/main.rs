//! Command-line converter from Life 1.05 or RLE pattern files to WGSL shader
//! triplets.
//!
//! Defaults match the Paul Rendell shader setup: a 16:10 grid with padding, a
//! centered pattern, and author/source comments at the top of the compute
//! shader.

#![warn(missing_docs)]

#[macro_use]
extern crate lazy_static;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error, info, LevelFilter};
use std::path::{Path, PathBuf};

use lif2wgsl_core::grid::{Grid, Ratio};

mod config;
mod convert;
mod template;

use config::Config;
use convert::ShaderSet;

/// Convert .lif file to WGSL shader triplet
#[derive(Parser, Debug)]
#[command(name = "lif2wgsl", version)]
struct Cli {
    /// Path to .lif file
    #[arg(value_name = "LIF")]
    lif: PathBuf,

    /// Output shader base name [default: <prefix><lowercase file stem>]
    #[arg(long)]
    name: Option<String>,

    /// Name prefix [default: gol_paul_rendell_]
    #[arg(long)]
    prefix: Option<String>,

    /// Output directory [default: template directory]
    #[arg(long = "output-dir", value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Directory containing the shader templates [default: directory of LIF]
    #[arg(long = "template-dir", value_name = "DIR")]
    template_dir: Option<PathBuf>,

    /// Padding around the pattern [default: 20]
    #[arg(long, value_name = "N")]
    pad: Option<usize>,

    /// Grid ratio W:H [default: 16:10]
    #[arg(long, value_name = "W:H")]
    ratio: Option<Ratio>,

    /// Override grid size
    #[arg(
        long,
        num_args = 2,
        value_names = ["W", "H"],
        value_parser = clap::value_parser!(u32).range(1..),
    )]
    grid: Option<Vec<u32>>,

    /// Compute frame interval [default: 3]
    #[arg(
        long = "frame-interval",
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(1..),
    )]
    frame_interval: Option<u32>,

    /// Omit author/source header
    #[arg(long = "no-header")]
    no_header: bool,

    /// Author name
    #[arg(long)]
    author: Option<String>,

    /// Author website
    #[arg(long = "author-site")]
    author_site: Option<String>,

    /// LIF archive URL
    #[arg(long = "lif-archive")]
    lif_archive: Option<String>,

    /// Log more details (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}
impl Cli {
    /// Returns the default configuration with command-line overrides applied.
    fn config(&self) -> Config {
        let mut config = Config::default();
        if let Some(prefix) = &self.prefix {
            config.prefix = prefix.clone();
        }
        if let Some(pad) = self.pad {
            config.pad = pad;
        }
        if let Some(ratio) = self.ratio {
            config.ratio = ratio;
        }
        if let Some(frame_interval) = self.frame_interval {
            config.frame_interval = frame_interval;
        }
        config.include_header = !self.no_header;
        if let Some(author) = &self.author {
            config.credits.author = author.clone();
        }
        if let Some(author_site) = &self.author_site {
            config.credits.author_site = author_site.clone();
        }
        if let Some(lif_archive) = &self.lif_archive {
            config.credits.archive = lif_archive.clone();
        }
        config
    }

    fn grid(&self) -> Option<Grid> {
        match self.grid.as_deref() {
            Some(&[width, height]) => Some(Grid {
                width: width as usize,
                height: height as usize,
            }),
            _ => None,
        }
    }

    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    simple_logger::SimpleLogger::new()
        .with_level(cli.log_level())
        .init()
        .unwrap();
    debug!("Starting lif2wgsl v{} ...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.config();

    let template_dir = match &cli.template_dir {
        Some(dir) => dir.clone(),
        None => parent_dir(&cli.lif),
    };
    let output_dir = cli.output_dir.clone().unwrap_or_else(|| template_dir.clone());
    let base_name = match &cli.name {
        Some(name) => name.clone(),
        None => {
            let stem = cli
                .lif
                .file_stem()
                .with_context(|| format!("{} has no file name", cli.lif.display()))?;
            format!("{}{}", config.prefix, stem.to_string_lossy().to_lowercase())
        }
    };

    let shaders = ShaderSet::build(&cli.lif, &template_dir, cli.grid(), &config)?;
    shaders.write(&output_dir, &base_name)?;
    info!("Generated {} shaders in {}", base_name, output_dir.display());
    Ok(())
}

/// Returns the directory containing `path`.
fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_owned(),
        _ => PathBuf::from("."),
    }
}
