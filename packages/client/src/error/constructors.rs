use super::BoxError;
use super::types::{Error, Kind};

/// Creates an `Error` for a target URL that cannot be parsed.
pub fn malformed_url<E: Into<BoxError>>(e: E, url: &str) -> Error {
    Error::new(Kind::MalformedUrl).with(e.into()).with_url(url)
}

/// Creates an `Error` for a TLS configuration failure.
pub fn tls<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Tls).with(e.into())
}

/// Creates an `Error` for a proxy URL that does not parse as a URI.
///
/// `redacted` must already have its credentials stripped.
pub fn proxy_uri<E: Into<BoxError>>(e: E, redacted: &str) -> Error {
    Error::new(Kind::ProxyUri).with(e.into()).with_url(redacted)
}
