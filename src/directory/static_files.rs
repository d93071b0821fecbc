use std::path::Path;
use log::debug;
use walkdir::WalkDir;

use crate::utils::error::BoxResult;
use crate::utils::fs::copy_file;

/// Copy the static-asset tree verbatim into the output root.
///
/// A missing static directory is not an error. Must run before any page
/// is written so page output wins on path collisions.
pub fn copy_static_files(static_dir: &Path, destination: &Path) -> BoxResult<usize> {
    if !static_dir.is_dir() {
        debug!("No static directory at {}", static_dir.display());
        return Ok(0);
    }

    let mut copied_count = 0;

    for entry in WalkDir::new(static_dir).follow_links(true).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let rel_path = entry.path().strip_prefix(static_dir)?;
        let dest_path = destination.join(rel_path);
        copy_file(entry.path(), &dest_path)?;
        debug!("Copied static file: {} -> {}", entry.path().display(), dest_path.display());
        copied_count += 1;
    }

    Ok(copied_count)
}
