use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use log::info;

use crate::config::BuildConfig;
use crate::utils::error::{BoxResult, SiteError};
use crate::utils::path::normalize_path;

/// Clear and recreate the output root.
///
/// Refuses before deleting anything when the output root is a filesystem
/// root, is not a directory, contains one of the site's input directories,
/// or lies inside the content, templates or static directory.
pub fn prepare_output(config: &BuildConfig) -> BoxResult<()> {
    let destination = &config.destination;
    check_destination(config)?;

    if destination.exists() {
        info!("Cleaning destination directory: {}", destination.display());
        fs::remove_dir_all(destination)?;
    }

    fs::create_dir_all(destination)?;
    Ok(())
}

fn check_destination(config: &BuildConfig) -> BoxResult<()> {
    let destination = &config.destination;

    if destination.as_os_str().is_empty() {
        return Err(SiteError::Output("output directory is empty".to_string()).into());
    }

    if destination.exists() && !destination.is_dir() {
        return Err(SiteError::Output(format!(
            "output path exists and is not a directory: {}", destination.display()
        )).into());
    }

    let resolved = resolve(destination)?;
    if resolved.parent().is_none() {
        return Err(SiteError::Output(format!(
            "refusing to clear filesystem root: {}", destination.display()
        )).into());
    }

    // (label, dir, whether an output root inside it is also refused);
    // the site root commonly holds the output directory itself
    let protected = [
        ("site root", config.site_root.clone(), false),
        ("content directory", config.content_root(), true),
        ("templates directory", config.templates_root(), true),
        ("static directory", config.static_root(), true),
    ];

    for (label, dir, refuse_inside) in protected.iter() {
        let dir = resolve(dir)?;
        if dir.starts_with(&resolved) {
            return Err(SiteError::Output(format!(
                "refusing to clear {}: it contains the {} ({})",
                destination.display(),
                label,
                dir.display()
            )).into());
        }

        if *refuse_inside && resolved.starts_with(&dir) {
            return Err(SiteError::Output(format!(
                "refusing to clear {}: it lies inside the {} ({})",
                destination.display(),
                label,
                dir.display()
            )).into());
        }
    }

    Ok(())
}

/// Absolute, normalized form of a path that may not exist yet
fn resolve(path: &Path) -> io::Result<PathBuf> {
    if let Ok(canonical) = path.canonicalize() {
        return Ok(canonical);
    }

    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    // Canonicalize the deepest existing ancestor so symlinked prefixes
    // compare equal to their canonical counterparts.
    let absolute = normalize_path(absolute);
    let mut existing = absolute.as_path();
    let mut rest = Vec::new();
    while !existing.exists() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                rest.push(name.to_os_string());
                existing = parent;
            },
            _ => return Ok(absolute),
        }
    }

    let mut resolved = existing.canonicalize()?;
    for name in rest.iter().rev() {
        resolved.push(name);
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> (tempfile::TempDir, BuildConfig) {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("content")).unwrap();
        fs::create_dir_all(dir.path().join("templates")).unwrap();
        let mut config = BuildConfig::for_site(dir.path());
        config.destination = dir.path().join("dist");
        (dir, config)
    }

    #[test]
    fn test_clears_existing_output() {
        let (_dir, config) = site();
        fs::create_dir_all(config.destination.join("stale")).unwrap();
        fs::write(config.destination.join("stale/index.html"), "old").unwrap();

        prepare_output(&config).unwrap();

        assert!(config.destination.is_dir());
        assert!(!config.destination.join("stale").exists());
    }

    #[test]
    fn test_creates_missing_output() {
        let (_dir, config) = site();
        prepare_output(&config).unwrap();
        assert!(config.destination.is_dir());
    }

    #[test]
    fn test_refuses_site_root() {
        let (dir, mut config) = site();
        config.destination = dir.path().to_path_buf();

        let err = prepare_output(&config).unwrap_err();
        assert!(err.to_string().starts_with("Output error"));
        assert!(dir.path().join("content").exists());
    }

    #[test]
    fn test_refuses_content_dir_and_ancestors() {
        let (dir, mut config) = site();
        config.destination = dir.path().join("content");
        assert!(prepare_output(&config).is_err());

        config.destination = dir.path().join("..");
        assert!(prepare_output(&config).is_err());
        assert!(dir.path().join("content").exists());
    }

    #[test]
    fn test_refuses_output_inside_inputs() {
        let (dir, mut config) = site();
        fs::create_dir_all(dir.path().join("content/blog")).unwrap();
        fs::write(dir.path().join("content/blog/post.md"), "post").unwrap();

        config.destination = dir.path().join("content/blog");
        let err = prepare_output(&config).unwrap_err();
        assert!(err.to_string().contains("inside the content directory"));
        assert!(dir.path().join("content/blog/post.md").is_file());

        config.destination = dir.path().join("templates/out");
        assert!(prepare_output(&config).is_err());

        fs::create_dir_all(dir.path().join("static")).unwrap();
        config.destination = dir.path().join("static/dist");
        assert!(prepare_output(&config).is_err());
    }

    #[test]
    fn test_refuses_file_destination() {
        let (dir, mut config) = site();
        let file = dir.path().join("dist.txt");
        fs::write(&file, "x").unwrap();
        config.destination = file.clone();

        assert!(prepare_output(&config).is_err());
        assert!(file.exists());
    }

    #[test]
    fn test_refuses_filesystem_root() {
        let (_dir, mut config) = site();
        config.destination = PathBuf::from("/");
        assert!(prepare_output(&config).is_err());
    }
}
