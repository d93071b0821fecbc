use std::path::{Path, PathBuf};
use std::fs;
use log::debug;

use crate::config::types::{BuildConfig, ConfigFile};
use crate::utils::error::{BoxResult, SiteError};

/// Configuration file names to look for, in order
const CONFIG_FILES: [&str; 3] = ["_config.yml", "_config.yaml", "_config.toml"];

/// Load the build configuration for the site at `site_root`.
///
/// An explicit `config_file` replaces discovery; otherwise the first
/// `_config.*` file found in the site root is used, if any.
pub fn load_config<P: AsRef<Path>>(
    site_root: P,
    config_file: Option<PathBuf>,
) -> BoxResult<BuildConfig> {
    let mut config = BuildConfig::for_site(site_root.as_ref());

    let config_path = match config_file {
        Some(path) => Some(path),
        None => find_default_config_file(site_root.as_ref()),
    };

    match config_path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            config.merge(read_config_file(&path)?);
        },
        None => debug!("No configuration file found, using defaults"),
    }

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find the first default configuration file in the site root
fn find_default_config_file(site_root: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| site_root.join(name))
        .find(|path| path.is_file())
}

/// Read and parse one configuration file based on its extension
fn read_config_file(config_path: &Path) -> BoxResult<ConfigFile> {
    let content = fs::read_to_string(config_path)
        .map_err(|e| SiteError::Config(format!(
            "Failed to read configuration file {}: {}", config_path.display(), e
        )))?;

    let ext = config_path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let parsed = match ext.as_str() {
        "toml" => toml::from_str::<ConfigFile>(&content)
            .map_err(|e| SiteError::Config(format!(
                "Failed to parse TOML configuration ({}): {}", config_path.display(), e
            )))?,
        // YAML is the default, including extensionless files
        "yml" | "yaml" | "" => parse_yaml_config(&content, config_path)?,
        other => {
            return Err(SiteError::Config(format!(
                "Unsupported configuration file format: {}", other
            )).into());
        }
    };

    Ok(parsed)
}

fn parse_yaml_config(content: &str, path: &Path) -> BoxResult<ConfigFile> {
    // An empty YAML document is a valid, empty configuration
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    serde_yaml::from_str::<ConfigFile>(content)
        .map_err(|e| SiteError::Config(format!(
            "Failed to parse YAML configuration ({}): {}", path.display(), e
        )).into())
}
