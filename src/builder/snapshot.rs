use std::path::Path;

use log::debug;

use crate::builder::page::{assemble_page, collect_content_files, load_document, Page};
use crate::builder::section::SectionIndex;
use crate::markdown::ContentRenderer;
use crate::router::Router;
use crate::utils::error::BoxResult;

/// Everything the discovery pass learned about the site.
///
/// Produced once, then only read by the write passes.
#[derive(Debug, Default, Clone)]
pub struct SiteSnapshot {
    pub pages: Vec<Page>,
    pub sections: SectionIndex,
}

impl SiteSnapshot {
    /// Pages of one section, in discovery order
    pub fn section_pages<'s>(&'s self, section: &Path) -> impl Iterator<Item = &'s Page> + 's {
        self.sections
            .pages(section)
            .iter()
            .map(move |&idx| &self.pages[idx])
    }
}

/// Discovery pass: load, render and route every content file.
///
/// Writes nothing. Any unreadable file aborts discovery.
pub fn discover(
    content_root: &Path,
    extensions: &[String],
    router: &Router,
    renderer: &dyn ContentRenderer,
) -> BoxResult<SiteSnapshot> {
    let mut snapshot = SiteSnapshot::default();

    for source in collect_content_files(content_root, extensions)? {
        let relative_path = source
            .strip_prefix(content_root)
            .map(Path::to_path_buf)
            .map_err(|_| format!("{} is outside the content root", source.display()))?;

        let document = load_document(&source)?;
        let content = renderer.render(&document.body);
        let route = router.route(&relative_path);
        let page = assemble_page(source, relative_path, document, content, route);

        debug!("Discovered {} -> {}", page.source.display(), page.url);
        snapshot.sections.push(&page.section, snapshot.pages.len());
        snapshot.pages.push(page);
    }

    Ok(snapshot)
}
