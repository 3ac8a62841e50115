//! Parsed destination of an outgoing request

use std::fmt;

use url::Url;

use crate::error::{self, InvalidTarget, MissingHost};

/// URL scheme of the destination, as far as transport selection cares
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetScheme {
    Http,
    Https,
    /// Any other scheme. Never proxied, always a plain direct handle.
    Other(String),
}

impl TargetScheme {
    fn from_scheme(scheme: &str) -> Self {
        match scheme {
            "http" => TargetScheme::Http,
            "https" => TargetScheme::Https,
            other => TargetScheme::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            TargetScheme::Http => "http",
            TargetScheme::Https => "https",
            TargetScheme::Other(scheme) => scheme,
        }
    }

    #[must_use]
    pub fn is_https(&self) -> bool {
        matches!(self, TargetScheme::Https)
    }
}

impl fmt::Display for TargetScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The URL a caller wants to reach, split into the parts resolution reads.
#[derive(Debug, Clone)]
pub struct TargetRequest {
    url: Url,
    scheme: TargetScheme,
    host: String,
}

impl TargetRequest {
    /// Parse a target URL string.
    ///
    /// # Errors
    /// Returns a `MalformedUrl` error when the input does not parse or has no hostname.
    pub fn parse(input: &str) -> crate::Result<Self> {
        let url = Url::parse(input)
            .map_err(|e| error::malformed_url(InvalidTarget::from(e), input))?;
        Self::from_url(url)
    }

    /// Wrap an already parsed URL.
    ///
    /// # Errors
    /// Returns a `MalformedUrl` error when the URL has no hostname.
    pub fn from_url(url: Url) -> crate::Result<Self> {
        let host = match url.host_str() {
            Some(host) if !host.is_empty() => host.to_string(),
            _ => {
                return Err(error::malformed_url(
                    InvalidTarget::from(MissingHost),
                    url.as_str(),
                ));
            }
        };

        Ok(Self {
            scheme: TargetScheme::from_scheme(url.scheme()),
            host,
            url,
        })
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub fn scheme(&self) -> &TargetScheme {
        &self.scheme
    }

    /// Hostname as written in the URL. IPv6 literals keep their brackets.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Explicit port, or the scheme's well-known default.
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.url.port_or_known_default()
    }
}
