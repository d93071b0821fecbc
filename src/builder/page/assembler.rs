use std::path::PathBuf;

use crate::builder::page::loader::Document;
use crate::builder::page::model::Page;
use crate::router::{section_of, title_from_path, Route};

/// Combine loader, renderer and router output into a finished page.
///
/// Never fails: a missing title falls back to the file name, a missing
/// description to the empty string.
pub fn assemble_page(
    source: PathBuf,
    relative_path: PathBuf,
    document: Document,
    content: String,
    route: Route,
) -> Page {
    let title = document
        .front_matter
        .title
        .clone()
        .unwrap_or_else(|| title_from_path(&relative_path));
    let description = document
        .front_matter
        .description
        .clone()
        .unwrap_or_default();
    let section = section_of(&relative_path);

    Page {
        source,
        relative_path,
        kind: route.kind,
        output_dir: route.output_dir,
        url: route.url,
        title,
        description,
        content,
        section,
        front_matter: document.front_matter,
    }
}
