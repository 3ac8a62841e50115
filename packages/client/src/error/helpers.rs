use std::fmt;

/// A marker type to indicate that a URL parsed without a hostname.
#[derive(Debug)]
pub struct MissingHost;

impl fmt::Display for MissingHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("URL has no hostname")
    }
}

impl std::error::Error for MissingHost {}

/// Reasons a target URL is rejected.
#[derive(Debug, thiserror::Error)]
pub enum InvalidTarget {
    #[error("URL parse failed: {0}")]
    Parse(#[from] url::ParseError),
    #[error("target has no hostname")]
    MissingHost(#[from] MissingHost),
}
