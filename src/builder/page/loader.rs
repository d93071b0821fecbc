use std::path::Path;

use crate::front_matter::{parse_front_matter, split_front_matter, FrontMatter};
use crate::utils::error::BoxResult;
use crate::utils::fs;

/// One content document split into metadata and body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub front_matter: FrontMatter,
    pub body: String,
}

impl Document {
    /// Split raw text; malformed metadata yields empty front matter
    pub fn parse(raw: &str) -> Self {
        let (meta, body) = split_front_matter(raw);
        let front_matter = meta.map(parse_front_matter).unwrap_or_default();

        Document {
            front_matter,
            body: body.to_string(),
        }
    }
}

/// Read one content file. A read failure is returned to the caller.
pub fn load_document(path: &Path) -> BoxResult<Document> {
    let raw = fs::read_file(path)?;
    Ok(Document::parse(&raw))
}
