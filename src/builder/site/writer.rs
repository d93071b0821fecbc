use log::info;

use crate::builder::snapshot::SiteSnapshot;
use crate::builder::synthetic::SyntheticIndex;
use crate::layout::{PageContext, TemplateEngine};
use crate::utils::error::BoxResult;
use crate::utils::fs::write_file;

/// Render and write every discovered page. Stops at the first failure.
pub fn write_pages(
    snapshot: &SiteSnapshot,
    engine: &dyn TemplateEngine,
    output_file: &str,
) -> BoxResult<usize> {
    for page in &snapshot.pages {
        let html = engine.render(&PageContext {
            title: &page.title,
            description: &page.description,
            content: &page.content,
        })?;

        write_file(page.output_path(output_file), &html)?;
        info!("Built {}", page.url);
    }

    Ok(snapshot.pages.len())
}

/// Render and write the planned synthetic section indexes
pub fn write_synthetic_indexes(
    indexes: &[SyntheticIndex],
    engine: &dyn TemplateEngine,
    output_file: &str,
) -> BoxResult<usize> {
    for index in indexes {
        let html = engine.render(&PageContext {
            title: &index.heading,
            description: &index.description,
            content: &index.content,
        })?;

        write_file(index.output_dir.join(output_file), &html)?;
        info!("Generated synthetic index for {}", index.url);
    }

    Ok(indexes.len())
}
