// Module declarations
mod builder;
mod config;
mod markdown;
mod directory;
mod front_matter;
mod cli;
mod utils;
mod layout;
mod router;

fn main() {
    std::process::exit(cli::run());
}
