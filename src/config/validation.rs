use std::path::Path;
use log::debug;

use crate::config::BuildConfig;
use crate::utils::error::{BoxResult, SiteError};
use crate::utils::path::has_any_extension;

/// Validate the configuration before anything is read or removed
pub fn validate_config(config: &BuildConfig) -> BoxResult<()> {
    validate_content_directory(config)?;
    validate_templates_directory(config)?;
    validate_reserved_names(config)?;
    Ok(())
}

fn validate_content_directory(config: &BuildConfig) -> BoxResult<()> {
    let content = config.content_root();

    if !content.exists() {
        return Err(SiteError::Config(format!(
            "Content directory does not exist: {}", content.display()
        )).into());
    }

    if !content.is_dir() {
        return Err(SiteError::Config(format!(
            "Content path is not a directory: {}", content.display()
        )).into());
    }

    debug!("Content directory: {}", content.display());
    Ok(())
}

fn validate_templates_directory(config: &BuildConfig) -> BoxResult<()> {
    let templates = config.templates_root();

    if !templates.is_dir() {
        return Err(SiteError::Config(format!(
            "Templates directory does not exist: {}", templates.display()
        )).into());
    }

    Ok(())
}

fn validate_reserved_names(config: &BuildConfig) -> BoxResult<()> {
    if config.markdown_ext.is_empty() {
        return Err(SiteError::Config("markdown_ext must not be empty".to_string()).into());
    }

    if !has_any_extension(&config.index_file, &config.markdown_ext) {
        return Err(SiteError::Config(format!(
            "Index file {} does not have a content extension ({})",
            config.index_file,
            config.markdown_ext.join(", ")
        )).into());
    }

    if !is_bare_file_name(&config.output_file) {
        return Err(SiteError::Config(format!(
            "Output file name must be a plain file name: {}", config.output_file
        )).into());
    }

    Ok(())
}

fn is_bare_file_name(name: &str) -> bool {
    !name.is_empty() && Path::new(name).file_name().map_or(false, |f| f == name)
}
