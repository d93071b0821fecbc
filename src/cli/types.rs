use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments. There are no subcommands: every run is a full build.
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Build a static site from a tree of markdown documents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Site root containing content/, templates/ and static/ (defaults to ./)
    #[arg(long, value_name = "DIR", env = "FOLIO_SITE_ROOT")]
    pub site_root: Option<PathBuf>,

    /// Output directory, cleared on every build (defaults to ./dist)
    #[arg(short, long, value_name = "DIR", env = "FOLIO_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Configuration file (defaults to _config.yml or _config.toml in the site root)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Layout template name inside the templates directory
    #[arg(short, long, value_name = "NAME")]
    pub template: Option<String>,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,

    /// Only report errors
    #[arg(short, long, default_value_t = false, conflicts_with = "debug")]
    pub quiet: bool,
}
