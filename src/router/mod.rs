//! Maps a content file's position in the content tree to its output
//! directory and public URL.
//!
//! Routing is a pure function of the relative path: no I/O, and no
//! dependency on other documents.

use std::path::{Path, PathBuf};

use crate::utils::path::{get_stem, to_url_path};
use crate::utils::text::humanize;

/// Which routing rule applied to a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    /// The reserved index document at the content root
    RootIndex,
    /// The reserved index document of a nested section
    SectionIndex,
    /// Any other content page
    Leaf,
}

/// Output location of one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub kind: RouteKind,
    pub output_dir: PathBuf,
    pub url: String,
}

/// Computes routes below one build root
#[derive(Debug, Clone)]
pub struct Router {
    build_root: PathBuf,
    index_file: String,
}

impl Router {
    pub fn new<P: Into<PathBuf>>(build_root: P, index_file: &str) -> Self {
        Router {
            build_root: build_root.into(),
            index_file: index_file.to_string(),
        }
    }

    pub fn build_root(&self) -> &Path {
        &self.build_root
    }

    pub fn index_file(&self) -> &str {
        &self.index_file
    }

    /// True when the file name is the reserved index name, at any depth
    pub fn is_index(&self, relative_path: &Path) -> bool {
        relative_path
            .file_name()
            .map_or(false, |name| name == self.index_file.as_str())
    }

    pub fn classify(&self, relative_path: &Path) -> RouteKind {
        if self.is_index(relative_path) {
            if section_of(relative_path).as_os_str().is_empty() {
                RouteKind::RootIndex
            } else {
                RouteKind::SectionIndex
            }
        } else {
            RouteKind::Leaf
        }
    }

    /// Compute the output directory and URL for a content path
    pub fn route(&self, relative_path: &Path) -> Route {
        let kind = self.classify(relative_path);
        let target = match kind {
            RouteKind::RootIndex => PathBuf::new(),
            RouteKind::SectionIndex => section_of(relative_path),
            RouteKind::Leaf => relative_path.with_extension(""),
        };

        Route {
            kind,
            output_dir: self.build_root.join(&target),
            url: url_for(&target),
        }
    }
}

/// Public URL of an output directory relative to the build root.
///
/// `/` for the root; otherwise `/a/b/` with a single trailing slash.
pub fn url_for(relative_dir: &Path) -> String {
    let path = to_url_path(relative_dir);
    if path.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", path)
    }
}

/// Section key of a content path: its immediate parent directory.
///
/// The root section is the empty path.
pub fn section_of(relative_path: &Path) -> PathBuf {
    relative_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
}

/// Title used when front matter supplies none
pub fn title_from_path(path: &Path) -> String {
    humanize(&get_stem(path).unwrap_or_default())
}
