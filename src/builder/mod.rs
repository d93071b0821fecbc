pub mod page;
pub mod section;
pub mod snapshot;
pub mod synthetic;
pub mod site;

pub use site::build_site;
