use std::error::Error as StdError;

use super::helpers::MissingHost;
use super::types::{Error, Kind};

impl Error {
    /// Returns true if the target URL could not be parsed.
    #[must_use]
    pub fn is_malformed_url(&self) -> bool {
        matches!(self.kind(), Kind::MalformedUrl)
    }

    /// Returns true if the TLS client configuration could not be built.
    #[must_use]
    pub fn is_tls(&self) -> bool {
        matches!(self.kind(), Kind::Tls)
    }

    /// Returns true if a stored proxy URL could not be turned into a URI.
    #[must_use]
    pub fn is_proxy_uri(&self) -> bool {
        matches!(self.kind(), Kind::ProxyUri)
    }

    /// Returns true if the target URL parsed but carried no hostname.
    #[must_use]
    pub fn is_missing_host(&self) -> bool {
        let mut source = self.source();

        while let Some(err) = source {
            if err.is::<MissingHost>() {
                return true;
            }
            source = err.source();
        }

        false
    }
}
