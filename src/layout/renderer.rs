use std::path::{Path, PathBuf};
use liquid::Template;
use log::debug;

use crate::utils::error::{BoxResult, SiteError};
use crate::utils::fs;

/// Values substituted into the layout for one page
#[derive(Debug, Clone, PartialEq)]
pub struct PageContext<'p> {
    pub title: &'p str,
    pub description: &'p str,
    /// Already rendered, trusted HTML
    pub content: &'p str,
}

/// Renders a full HTML document from a page context
pub trait TemplateEngine {
    fn render(&self, ctx: &PageContext<'_>) -> BoxResult<String>;
}

/// Liquid layout resolved once from the template directory
pub struct LayoutRenderer {
    name: String,
    template: Template,
}

impl LayoutRenderer {
    /// Resolve and parse the named layout.
    ///
    /// A missing or unparsable layout is fatal; callers do this once at
    /// startup, before any output is touched.
    pub fn load(templates_dir: &Path, name: &str) -> BoxResult<Self> {
        let layout_path = find_layout(templates_dir, name)?;
        debug!("Using layout: {}", layout_path.display());

        let source = fs::read_file(&layout_path)?;
        Self::from_source(name, &source)
    }

    /// Parse a layout from its source text
    pub fn from_source(name: &str, source: &str) -> BoxResult<Self> {
        let parser = liquid::ParserBuilder::with_stdlib()
            .build()
            .map_err(|e| SiteError::Template(format!("Failed to create Liquid parser: {}", e)))?;

        let template = parser.parse(source)
            .map_err(|e| SiteError::Template(format!(
                "Failed to parse layout {}: {}", name, e
            )))?;

        Ok(LayoutRenderer {
            name: name.to_string(),
            template,
        })
    }
}

impl TemplateEngine for LayoutRenderer {
    fn render(&self, ctx: &PageContext<'_>) -> BoxResult<String> {
        // Liquid has no autoescape, so plain-text fields are escaped here.
        let title = html_escape::encode_quoted_attribute(ctx.title).into_owned();
        let description = html_escape::encode_quoted_attribute(ctx.description).into_owned();
        let globals = liquid::object!({
            "title": title,
            "description": description,
            "content": ctx.content,
        });

        let rendered = self.template.render(&globals)
            .map_err(|e| SiteError::Template(format!(
                "Failed to render layout {}: {}", self.name, e
            )))?;

        Ok(rendered)
    }
}

/// Find a layout file by name, trying common extensions for bare names
fn find_layout(templates_dir: &Path, name: &str) -> BoxResult<PathBuf> {
    let layout_path = templates_dir.join(name);

    if layout_path.is_file() {
        return Ok(layout_path);
    }

    if layout_path.extension().is_none() {
        for ext in &["html", "liquid"] {
            let with_ext = templates_dir.join(format!("{}.{}", name, ext));
            if with_ext.is_file() {
                return Ok(with_ext);
            }
        }
    }

    Err(SiteError::Template(format!(
        "Layout not found: {} (in {})", name, templates_dir.display()
    )).into())
}
