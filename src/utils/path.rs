use std::path::{Component, Path, PathBuf};

/// Normalize a path, resolving ".." and "." components
pub fn normalize_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    let mut result = PathBuf::new();

    for component in path.components() {
        match component {
            Component::ParentDir => {
                if !result.as_os_str().is_empty() {
                    result.pop();
                }
            },
            Component::CurDir => {},
            _ => result.push(component),
        }
    }

    result
}

/// Get file name without extension
pub fn get_stem<P: AsRef<Path>>(path: P) -> Option<String> {
    path.as_ref()
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(|s| s.to_string())
}

/// Check if a path has one of the given extensions (case-insensitive)
pub fn has_any_extension<P: AsRef<Path>>(path: P, extensions: &[String]) -> bool {
    path.as_ref()
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .map_or(false, |ext| extensions.iter().any(|e| e.to_lowercase() == ext))
}

/// Join the normal components of a relative path with forward slashes.
///
/// Host separators never leak into URLs, and `.`/empty paths yield "".
pub fn to_url_path<P: AsRef<Path>>(path: P) -> String {
    path.as_ref()
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("a/./b/../c"), PathBuf::from("a/c"));
        assert_eq!(normalize_path("./"), PathBuf::new());
    }

    #[test]
    fn test_to_url_path() {
        assert_eq!(to_url_path("blog/rust/intro"), "blog/rust/intro");
        assert_eq!(to_url_path(""), "");
        assert_eq!(to_url_path("./docs"), "docs");

        let built: PathBuf = ["guides", "setup"].iter().collect();
        assert_eq!(to_url_path(built), "guides/setup");
    }

    #[test]
    fn test_has_any_extension() {
        let exts = vec!["md".to_string(), "markdown".to_string()];
        assert!(has_any_extension("post.md", &exts));
        assert!(has_any_extension("post.MD", &exts));
        assert!(!has_any_extension("post.html", &exts));
        assert!(!has_any_extension("README", &exts));
    }
}
