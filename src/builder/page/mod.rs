mod model;
mod loader;
mod assembler;
mod collector;

pub use model::Page;
pub use loader::{load_document, Document};
pub use assembler::assemble_page;
pub use collector::collect_content_files;
