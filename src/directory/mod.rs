mod cleaning;
mod static_files;

pub use cleaning::prepare_output;
pub use static_files::copy_static_files;
