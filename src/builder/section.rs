use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Pages grouped by the directory that immediately contains them.
///
/// Entries hold indices into the owning page list, in discovery order.
/// Sections iterate in the order they were first seen. A page belongs to
/// exactly one section; nothing is inherited across nesting levels.
#[derive(Debug, Default, Clone)]
pub struct SectionIndex {
    order: Vec<PathBuf>,
    members: HashMap<PathBuf, Vec<usize>>,
}

impl SectionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that page `page_idx` lives in `section`
    pub fn push(&mut self, section: &Path, page_idx: usize) {
        match self.members.get_mut(section) {
            Some(pages) => pages.push(page_idx),
            None => {
                self.order.push(section.to_path_buf());
                self.members.insert(section.to_path_buf(), vec![page_idx]);
            }
        }
    }

    /// Page indices of one section, empty if the section is unknown
    pub fn pages(&self, section: &Path) -> &[usize] {
        self.members
            .get(section)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Sections with their page indices, in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&Path, &[usize])> {
        self.order
            .iter()
            .map(move |section| (section.as_path(), self.pages(section)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// True for the distinguished root section
pub fn is_root_section(section: &Path) -> bool {
    section.as_os_str().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_in_insertion_order() {
        let mut index = SectionIndex::new();
        index.push(Path::new("blog"), 0);
        index.push(Path::new(""), 1);
        index.push(Path::new("blog"), 2);
        index.push(Path::new("docs"), 3);

        let sections: Vec<_> = index.iter().map(|(s, _)| s.to_path_buf()).collect();
        assert_eq!(sections, vec![PathBuf::from("blog"), PathBuf::new(), PathBuf::from("docs")]);
        assert_eq!(index.pages(Path::new("blog")), &[0, 2]);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_nested_sections_are_separate() {
        let mut index = SectionIndex::new();
        index.push(Path::new("docs"), 0);
        index.push(Path::new("docs/guides"), 1);

        assert_eq!(index.pages(Path::new("docs")), &[0]);
        assert_eq!(index.pages(Path::new("docs/guides")), &[1]);
    }

    #[test]
    fn test_unknown_section_is_empty() {
        let index = SectionIndex::new();
        assert!(index.pages(Path::new("missing")).is_empty());
        assert!(index.is_empty());
    }

    #[test]
    fn test_root_section() {
        assert!(is_root_section(Path::new("")));
        assert!(!is_root_section(Path::new("blog")));
    }
}
