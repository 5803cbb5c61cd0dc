use lif2wgsl_core::grid::Ratio;
use lif2wgsl_core::wgsl::Credits;

/// Settings for one conversion, before command-line overrides.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prefix of the output base name when no name is given.
    pub prefix: String,
    /// Empty cells on each side of the pattern.
    pub pad: usize,
    /// Aspect ratio of the generated grid.
    pub ratio: Ratio,
    /// Number of frames between compute steps.
    pub frame_interval: u32,
    /// Whether to write the credits comment block.
    pub include_header: bool,
    pub credits: Credits,
    pub templates: TemplateNames,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            prefix: "gol_paul_rendell_".to_owned(),
            pad: 20,
            ratio: Ratio::new(16, 10).expect("16:10 is a valid ratio"),
            frame_interval: 3,
            include_header: true,
            credits: Credits {
                author: "Paul Rendell".to_owned(),
                author_site: "http://rendell-attic.org/gol/tm.htm".to_owned(),
                archive: "https://d-k-ivanov.github.io/shaders/assets/shaders/celular/gol_paul_rendell_lifs.zip".to_owned(),
            },
            templates: TemplateNames::default(),
        }
    }
}

/// File names of the shader templates, relative to the template directory.
#[derive(Debug, Clone)]
pub struct TemplateNames {
    pub compute: String,
    pub vertex: String,
    pub fragment: String,
}
impl Default for TemplateNames {
    fn default() -> Self {
        Self {
            compute: "gol_paul_rendell_comp.compute.wgsl".to_owned(),
            vertex: "gol_paul_rendell_comp.vertex.wgsl".to_owned(),
            fragment: "gol_paul_rendell_comp.fragment.wgsl".to_owned(),
        }
    }
}
