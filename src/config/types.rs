use std::path::PathBuf;
use serde::Deserialize;

use crate::config::defaults;

/// Build configuration for one site
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory holding `content/`, `templates/` and `static/`
    pub site_root: PathBuf,

    /// Content root, relative to the site root unless absolute
    pub content_dir: PathBuf,

    /// Template directory, relative to the site root unless absolute
    pub templates_dir: PathBuf,

    /// Optional static-asset directory, relative to the site root unless absolute
    pub static_dir: PathBuf,

    /// Output root; cleared at the start of every build
    pub destination: PathBuf,

    /// Layout template every page is rendered through
    pub template: String,

    /// Extensions identifying content documents
    pub markdown_ext: Vec<String>,

    /// Reserved index document name
    pub index_file: String,

    /// Reserved output file name
    pub output_file: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            site_root: defaults::default_site_root(),
            content_dir: defaults::default_content_dir(),
            templates_dir: defaults::default_templates_dir(),
            static_dir: defaults::default_static_dir(),
            destination: defaults::default_destination(),
            template: defaults::default_template(),
            markdown_ext: defaults::default_markdown_ext(),
            index_file: defaults::default_index_file(),
            output_file: defaults::default_output_file(),
        }
    }
}

impl BuildConfig {
    /// Default configuration rooted at `site_root`
    pub fn for_site<P: Into<PathBuf>>(site_root: P) -> Self {
        BuildConfig {
            site_root: site_root.into(),
            ..BuildConfig::default()
        }
    }

    pub fn content_root(&self) -> PathBuf {
        self.site_root.join(&self.content_dir)
    }

    pub fn templates_root(&self) -> PathBuf {
        self.site_root.join(&self.templates_dir)
    }

    pub fn static_root(&self) -> PathBuf {
        self.site_root.join(&self.static_dir)
    }

    /// Merge values from a site configuration file
    pub fn merge(&mut self, file: ConfigFile) {
        if let Some(content_dir) = file.content_dir {
            self.content_dir = content_dir;
        }
        if let Some(templates_dir) = file.templates_dir {
            self.templates_dir = templates_dir;
        }
        if let Some(static_dir) = file.static_dir {
            self.static_dir = static_dir;
        }
        if let Some(destination) = file.destination {
            self.destination = destination;
        }
        if let Some(template) = file.template {
            self.template = template;
        }
        if let Some(markdown_ext) = file.markdown_ext {
            self.markdown_ext = markdown_ext;
        }
        if let Some(index_file) = file.index_file {
            self.index_file = index_file;
        }
        if let Some(output_file) = file.output_file {
            self.output_file = output_file;
        }
    }

    /// Apply command-line and environment overrides, which always win
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(destination) = &overrides.destination {
            self.destination = destination.clone();
        }
        if let Some(template) = &overrides.template {
            self.template = template.clone();
        }
    }
}

/// Keys accepted in `_config.yml` / `_config.toml`.
///
/// The site root itself is not configurable from inside the site.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    pub content_dir: Option<PathBuf>,
    pub templates_dir: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
    #[serde(alias = "output")]
    pub destination: Option<PathBuf>,
    pub template: Option<String>,
    pub markdown_ext: Option<Vec<String>>,
    pub index_file: Option<String>,
    pub output_file: Option<String>,
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub destination: Option<PathBuf>,
    pub template: Option<String>,
}
