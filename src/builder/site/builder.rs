use std::time::{Duration, Instant};
use log::info;

use super::writer::{write_pages, write_synthetic_indexes};
use crate::builder::snapshot::discover;
use crate::builder::synthetic::plan_synthetic_indexes;
use crate::config::{validate_config, BuildConfig};
use crate::directory::{copy_static_files, prepare_output};
use crate::layout::LayoutRenderer;
use crate::markdown::MarkdownRenderer;
use crate::router::Router;
use crate::utils::error::BoxResult;

/// Build statistics
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BuildStats {
    /// Number of content pages written
    pub pages_count: usize,
    /// Number of synthetic section indexes written
    pub synthetic_count: usize,
    /// Number of static files copied
    pub static_files_count: usize,
    /// Build duration
    pub duration: Duration,
}

/// Build the site described by `config`.
///
/// Phases run strictly in order: resolve the layout, discover every page,
/// clear the output root, copy static assets, write real pages, then write
/// synthetic section indexes. Any failure aborts the remaining phases.
pub fn build_site(config: &BuildConfig) -> BoxResult<BuildStats> {
    let start_time = Instant::now();
    let mut stats = BuildStats::default();

    validate_config(config)?;

    let content_root = config.content_root();
    info!("Using content directory: {}", content_root.display());
    info!("Output will be generated in: {}", config.destination.display());

    // Resolved before anything is written; a missing layout is fatal.
    let layout = LayoutRenderer::load(&config.templates_root(), &config.template)?;
    let markdown_renderer = MarkdownRenderer::new();
    let router = Router::new(&config.destination, &config.index_file);

    info!("Loading content...");
    let snapshot = discover(&content_root, &config.markdown_ext, &router, &markdown_renderer)?;
    info!(
        "Discovered {} pages in {} sections",
        snapshot.pages.len(),
        snapshot.sections.len()
    );

    prepare_output(config)?;

    stats.static_files_count = copy_static_files(&config.static_root(), &config.destination)?;
    info!("Copied {} static files", stats.static_files_count);

    stats.pages_count = write_pages(&snapshot, &layout, &config.output_file)?;

    let synthetic = plan_synthetic_indexes(&snapshot, &content_root, &router);
    stats.synthetic_count = write_synthetic_indexes(&synthetic, &layout, &config.output_file)?;

    stats.duration = start_time.elapsed();
    info!("Site built in {:.2?}", stats.duration);
    info!(
        "Pages: {}, Synthetic indexes: {}, Static files: {}",
        stats.pages_count, stats.synthetic_count, stats.static_files_count
    );

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::fs;
    use std::path::PathBuf;
    use walkdir::WalkDir;

    const LAYOUT: &str = "<!doctype html>\n<title>{{ title }}</title>\n<meta name=\"description\" content=\"{{ description }}\">\n<body>{{ content }}</body>\n";

    struct Site {
        _dir: tempfile::TempDir,
        config: BuildConfig,
    }

    impl Site {
        fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            fs::create_dir_all(dir.path().join("content")).unwrap();
            fs::create_dir_all(dir.path().join("templates")).unwrap();
            fs::write(dir.path().join("templates/default.html"), LAYOUT).unwrap();

            let mut config = BuildConfig::for_site(dir.path());
            config.destination = dir.path().join("dist");
            Site { _dir: dir, config }
        }

        fn content(&self, rel: &str, text: &str) -> &Self {
            let path = self.config.content_root().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, text).unwrap();
            self
        }

        fn asset(&self, rel: &str, text: &str) -> &Self {
            let path = self.config.static_root().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, text).unwrap();
            self
        }

        fn out(&self, rel: &str) -> PathBuf {
            self.config.destination.join(rel)
        }

        fn read(&self, rel: &str) -> String {
            fs::read_to_string(self.out(rel)).unwrap()
        }

        /// Relative path -> bytes for every file in the output tree
        fn snapshot_output(&self) -> BTreeMap<PathBuf, Vec<u8>> {
            WalkDir::new(&self.config.destination)
                .into_iter()
                .map(|e| e.unwrap())
                .filter(|e| e.file_type().is_file())
                .map(|e| {
                    let rel = e.path().strip_prefix(&self.config.destination).unwrap().to_path_buf();
                    (rel, fs::read(e.path()).unwrap())
                })
                .collect()
        }
    }

    #[test]
    fn test_root_index_and_synthesized_section() {
        let site = Site::new();
        site.content("_index.md", "---\ntitle: Home\n---\nWelcome")
            .content("blog/post-one.md", "Hello from the blog");

        let stats = build_site(&site.config).unwrap();

        assert_eq!(stats.pages_count, 2);
        assert_eq!(stats.synthetic_count, 1);

        let home = site.read("index.html");
        assert!(home.contains("<title>Home</title>"));
        assert!(home.contains("<p>Welcome</p>"));

        let post = site.read("blog/post-one/index.html");
        assert!(post.contains("<title>Post One</title>"));
        assert!(post.contains("content=\"\""));

        let listing = site.read("blog/index.html");
        assert!(listing.contains("<title>Blog</title>"));
        assert!(listing.contains("content=\"Index of Blog\""));
        assert!(listing.contains("<h1>Blog</h1>"));
        assert_eq!(listing.matches("<li>").count(), 1);
        assert!(listing.contains("<li><a href=\"/blog/post-one/\">Post One</a></li>"));
    }

    #[test]
    fn test_real_section_index_wins() {
        let site = Site::new();
        site.content("_index.md", "home")
            .content("blog/_index.md", "---\ntitle: The Blog\n---\nHand written listing")
            .content("blog/post-one.md", "post");

        let stats = build_site(&site.config).unwrap();
        assert_eq!(stats.synthetic_count, 0);

        let listing = site.read("blog/index.html");
        assert!(listing.contains("<title>The Blog</title>"));
        assert!(listing.contains("<p>Hand written listing</p>"));
        assert!(!listing.contains("<ul>"));
    }

    #[test]
    fn test_index_only_section_gets_no_listing() {
        let site = Site::new();
        site.content("_index.md", "home")
            .content("docs/_index.md", "Docs home");

        let stats = build_site(&site.config).unwrap();

        assert_eq!(stats.pages_count, 2);
        assert_eq!(stats.synthetic_count, 0);
        assert!(site.read("docs/index.html").contains("<p>Docs home</p>"));
    }

    #[test]
    fn test_missing_root_index_is_not_synthesized() {
        let site = Site::new();
        site.content("about.md", "about");

        build_site(&site.config).unwrap();

        assert!(site.out("about/index.html").is_file());
        assert!(!site.out("index.html").exists());
    }

    #[test]
    fn test_listing_is_sorted_by_title() {
        let site = Site::new();
        site.content("_index.md", "home")
            .content("guides/zeta.md", "---\ntitle: Advanced\n---\n")
            .content("guides/alpha.md", "---\ntitle: Tuning\n---\n")
            .content("guides/beta.md", "");

        build_site(&site.config).unwrap();

        let listing = site.read("guides/index.html");
        let advanced = listing.find(">Advanced<").unwrap();
        let beta = listing.find(">Beta<").unwrap();
        let tuning = listing.find(">Tuning<").unwrap();
        assert!(advanced < beta && beta < tuning);
    }

    #[test]
    fn test_nested_sections_are_independent() {
        let site = Site::new();
        site.content("_index.md", "home")
            .content("docs/intro.md", "intro")
            .content("docs/api/client.md", "client");

        let stats = build_site(&site.config).unwrap();
        assert_eq!(stats.synthetic_count, 2);

        let docs = site.read("docs/index.html");
        assert!(docs.contains("/docs/intro/"));
        assert!(!docs.contains("/docs/api/client/"));

        let api = site.read("docs/api/index.html");
        assert!(api.contains("<h1>Api</h1>"));
        assert!(api.contains("/docs/api/client/"));
    }

    #[test]
    fn test_malformed_front_matter_does_not_abort() {
        let site = Site::new();
        site.content("_index.md", "home")
            .content("notes/broken-meta.md", "---\ntitle: [oops\n---\nStill rendered");

        build_site(&site.config).unwrap();

        let page = site.read("notes/broken-meta/index.html");
        assert!(page.contains("<title>Broken Meta</title>"));
        assert!(page.contains("<p>Still rendered</p>"));
    }

    #[test]
    fn test_build_is_idempotent() {
        let site = Site::new();
        site.content("_index.md", "home")
            .content("blog/b.md", "---\ntitle: Same\n---\nb")
            .content("blog/a.md", "---\ntitle: Same\n---\na")
            .content("docs/x/y.md", "| a | b |\n|---|---|\n| 1 | 2 |\n")
            .asset("css/site.css", "body{}");

        build_site(&site.config).unwrap();
        let first = site.snapshot_output();
        build_site(&site.config).unwrap();
        let second = site.snapshot_output();

        assert_eq!(first, second);
    }

    #[test]
    fn test_stale_output_is_removed() {
        let site = Site::new();
        site.content("_index.md", "home");
        fs::create_dir_all(site.out("old")).unwrap();
        fs::write(site.out("old/index.html"), "stale").unwrap();

        build_site(&site.config).unwrap();

        assert!(!site.out("old").exists());
        assert!(site.out("index.html").is_file());
    }

    #[test]
    fn test_static_assets_copied_and_pages_win_collisions() {
        let site = Site::new();
        site.content("_index.md", "home")
            .content("about.md", "about page")
            .asset("css/site.css", "body{}")
            .asset("about/index.html", "from static");

        let stats = build_site(&site.config).unwrap();

        assert_eq!(stats.static_files_count, 2);
        assert_eq!(site.read("css/site.css"), "body{}");
        assert!(site.read("about/index.html").contains("<p>about page</p>"));
    }

    #[test]
    fn test_missing_template_writes_nothing() {
        let site = Site::new();
        site.content("_index.md", "home");
        fs::create_dir_all(site.out("")).unwrap();
        fs::write(site.out("keep.txt"), "previous build").unwrap();
        fs::remove_file(site.config.templates_root().join("default.html")).unwrap();

        let err = build_site(&site.config).unwrap_err();

        assert!(err.to_string().contains("Layout not found"));
        assert_eq!(site.read("keep.txt"), "previous build");
    }

    #[test]
    fn test_unreadable_content_keeps_previous_output() {
        let site = Site::new();
        site.content("_index.md", "home");
        let bad = site.config.content_root().join("bad.md");
        fs::write(&bad, [0xff, 0xfe, 0xfd]).unwrap();
        fs::create_dir_all(site.out("")).unwrap();
        fs::write(site.out("keep.txt"), "previous build").unwrap();

        assert!(build_site(&site.config).is_err());
        assert_eq!(site.read("keep.txt"), "previous build");
    }

    #[test]
    fn test_page_write_failure_is_an_error() {
        let site = Site::new();
        site.content("about.md", "# About");
        // The copied asset leaves a directory where about/index.html belongs
        site.asset("about/index.html/nested.txt", "x");

        assert!(build_site(&site.config).is_err());
        assert!(site.out("about/index.html").is_dir());
    }

    #[test]
    fn test_unsafe_output_root_is_refused() {
        let mut site = Site::new();
        site.content("_index.md", "home");
        site.config.destination = site.config.site_root.clone();

        assert!(build_site(&site.config).is_err());
        assert!(site.config.content_root().join("_index.md").is_file());
    }

    #[test]
    fn test_only_markdown_is_content() {
        let site = Site::new();
        site.content("_index.md", "home")
            .content("blog/notes.txt", "not content");

        let stats = build_site(&site.config).unwrap();

        assert_eq!(stats.pages_count, 1);
        assert_eq!(stats.synthetic_count, 0);
        assert!(!site.out("blog").exists());
    }
}
