use std::path::PathBuf;

use crate::front_matter::FrontMatter;
use crate::router::RouteKind;

/// A page in the site, finalized during discovery and never mutated after
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Path of the source document
    pub source: PathBuf,
    /// Source path relative to the content root
    pub relative_path: PathBuf,
    pub kind: RouteKind,
    pub output_dir: PathBuf,
    pub url: String,
    pub title: String,
    pub description: String,
    /// Rendered body markup
    pub content: String,
    /// Immediate parent directory, relative to the content root
    pub section: PathBuf,
    pub front_matter: FrontMatter,
}

impl Page {
    /// Whether this page is a root or section index document
    pub fn is_index(&self) -> bool {
        self.kind != RouteKind::Leaf
    }

    /// File this page is written to
    pub fn output_path(&self, output_file: &str) -> PathBuf {
        self.output_dir.join(output_file)
    }
}
