use comrak::Options;
use crate::markdown::engine::{create_comrak_options, render_markdown};

/// Converts raw body text into a markup fragment.
///
/// Implementations must behave as pure functions of their input.
pub trait ContentRenderer {
    fn render(&self, body: &str) -> String;
}

/// Markdown renderer backed by comrak
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
}

impl<'a> MarkdownRenderer<'a> {
    pub fn new() -> Self {
        MarkdownRenderer {
            options: create_comrak_options(),
        }
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ContentRenderer for MarkdownRenderer<'a> {
    fn render(&self, body: &str) -> String {
        render_markdown(body, &self.options)
    }
}
