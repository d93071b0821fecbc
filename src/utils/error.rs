use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for folio operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for folio operations
#[derive(Debug)]
pub enum SiteError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Template lookup or rendering error
    Template(String),
    /// Output root refused or unusable
    Output(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteError::Io(err) => write!(f, "IO error: {}", err),
            SiteError::Config(msg) => write!(f, "Configuration error: {}", msg),
            SiteError::Template(msg) => write!(f, "Template error: {}", msg),
            SiteError::Output(msg) => write!(f, "Output error: {}", msg),
            SiteError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for SiteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SiteError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for SiteError {
    fn from(err: io::Error) -> Self {
        SiteError::Io(err)
    }
}

impl From<String> for SiteError {
    fn from(msg: String) -> Self {
        SiteError::Generic(msg)
    }
}

impl From<&str> for SiteError {
    fn from(msg: &str) -> Self {
        SiteError::Generic(msg.to_string())
    }
}
