//! Listing pages for sections that have no index document of their own.

use std::path::{Path, PathBuf};

use crate::builder::page::Page;
use crate::builder::section::is_root_section;
use crate::builder::snapshot::SiteSnapshot;
use crate::router::{url_for, Router};
use crate::utils::text::humanize;

/// A generated listing page, ready to render
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticIndex {
    pub url: String,
    pub output_dir: PathBuf,
    pub heading: String,
    pub description: String,
    pub content: String,
}

/// Decide which sections get a synthetic index and build their listings.
///
/// A section qualifies when it is not the root, has no index document on
/// disk under `content_root`, and has at least one non-index page.
/// Children are listed by title; equal titles keep discovery order.
pub fn plan_synthetic_indexes(
    snapshot: &SiteSnapshot,
    content_root: &Path,
    router: &Router,
) -> Vec<SyntheticIndex> {
    let mut planned = Vec::new();

    for (section, _) in snapshot.sections.iter() {
        // the root is only ever served by its own index document
        if is_root_section(section) {
            continue;
        }

        if content_root.join(section).join(router.index_file()).exists() {
            continue;
        }

        let mut children: Vec<&Page> = snapshot
            .section_pages(section)
            .filter(|page| !page.is_index())
            .collect();

        if children.is_empty() {
            continue;
        }

        children.sort_by(|a, b| a.title.cmp(&b.title));

        let heading = section_heading(section);
        planned.push(SyntheticIndex {
            url: url_for(section),
            output_dir: router.build_root().join(section),
            description: format!("Index of {}", heading),
            content: listing_markup(&heading, &children),
            heading,
        });
    }

    planned
}

/// Heading derived from the section's last path component
pub fn section_heading(section: &Path) -> String {
    let name = section
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    humanize(&name)
}

/// `<h1>` heading followed by one linked list item per child
fn listing_markup(heading: &str, children: &[&Page]) -> String {
    let items = children
        .iter()
        .map(|page| {
            format!(
                "<li><a href=\"{}\">{}</a></li>",
                html_escape::encode_double_quoted_attribute(&page.url),
                html_escape::encode_text(&page.title),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "\n<h1>{}</h1>\n<ul>\n{}\n</ul>\n",
        html_escape::encode_text(heading),
        items
    )
}
