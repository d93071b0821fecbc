pub mod types;
pub mod parser;

// Re-export the most common items for convenience
pub use types::FrontMatter;
pub use parser::{split_front_matter, parse_front_matter};
