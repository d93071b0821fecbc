mod renderer;

pub use renderer::{LayoutRenderer, PageContext, TemplateEngine};
