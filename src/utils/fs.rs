use std::fs;
use std::path::Path;

use crate::utils::error::BoxResult;

/// Create a directory and any parent directories if they don't exist
pub fn create_directory<P: AsRef<Path>>(path: P) -> BoxResult<()> {
    fs::create_dir_all(path.as_ref())?;
    Ok(())
}

/// Read a UTF-8 file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> BoxResult<String> {
    Ok(fs::read_to_string(path.as_ref())?)
}

/// Write a string to a file, creating parent directories first
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> BoxResult<()> {
    if let Some(parent) = path.as_ref().parent() {
        create_directory(parent)?;
    }

    fs::write(path.as_ref(), contents.as_bytes())?;
    Ok(())
}

/// Copy a file from source to destination
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(from: P, to: Q) -> BoxResult<u64> {
    if let Some(parent) = to.as_ref().parent() {
        create_directory(parent)?;
    }

    let bytes_copied = fs::copy(from, to)?;
    Ok(bytes_copied)
}
