use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::utils::error::BoxResult;
use crate::utils::path::has_any_extension;

/// Collect every content document below the content root.
///
/// Entries are visited depth-first with siblings sorted by file name, so
/// discovery order is identical on every run. Walk errors are fatal.
pub fn collect_content_files(content_root: &Path, extensions: &[String]) -> BoxResult<Vec<PathBuf>> {
    debug!("Collecting content from {}", content_root.display());
    let mut files = Vec::new();

    let walker = WalkDir::new(content_root)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() && has_any_extension(entry.path(), extensions) {
            files.push(entry.into_path());
        }
    }

    debug!("Collected {} content files", files.len());
    Ok(files)
}
