mod builder;
mod writer;

pub use builder::build_site;
