pub mod engine;
pub mod renderer;

pub use renderer::{ContentRenderer, MarkdownRenderer};
