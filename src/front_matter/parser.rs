use log::warn;
use crate::front_matter::types::FrontMatter;

/// Marker opening and closing a front matter block
pub const DELIMITER: &str = "---";

/// Split raw document text into (metadata text, body text).
///
/// The block must open at the very start of the left-trimmed text and be
/// closed by a second delimiter. Otherwise there is no metadata and the
/// whole original text is the body.
pub fn split_front_matter(raw: &str) -> (Option<&str>, &str) {
    let trimmed = raw.trim_start();
    if !trimmed.starts_with(DELIMITER) {
        return (None, raw);
    }

    let mut parts = trimmed.splitn(3, DELIMITER);
    let _leading = parts.next();
    match (parts.next(), parts.next()) {
        (Some(meta), Some(body)) => (Some(meta), body),
        _ => (None, raw),
    }
}

/// Parse metadata text as a YAML mapping.
///
/// Malformed YAML never fails the build; it degrades to empty front matter.
pub fn parse_front_matter(meta: &str) -> FrontMatter {
    if meta.trim().is_empty() {
        return FrontMatter::default();
    }

    match serde_yaml::from_str::<serde_yaml::Value>(meta) {
        Ok(value) => FrontMatter::from_yaml(value),
        Err(e) => {
            warn!("Error parsing front matter: {}", e);
            FrontMatter::default()
        }
    }
}
