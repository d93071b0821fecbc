use std::path::PathBuf;

pub fn default_site_root() -> PathBuf {
    PathBuf::from(".")
}

pub fn default_content_dir() -> PathBuf {
    PathBuf::from("content")
}

pub fn default_templates_dir() -> PathBuf {
    PathBuf::from("templates")
}

pub fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

pub fn default_destination() -> PathBuf {
    PathBuf::from("dist")
}

pub fn default_template() -> String {
    "default.html".to_string()
}

pub fn default_markdown_ext() -> Vec<String> {
    vec!["md".to_string()]
}

/// Reserved file name marking a directory's own index document
pub fn default_index_file() -> String {
    "_index.md".to_string()
}

/// File written inside every page's output directory
pub fn default_output_file() -> String {
    "index.html".to_string()
}
