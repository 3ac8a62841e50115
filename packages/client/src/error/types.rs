use std::error::Error as StdError;
use std::fmt;

/// A Result alias where the Err case is `hopwire_client::Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents errors that can occur while resolving a transport.
pub struct Error {
    inner: Box<Inner>,
}

struct Inner {
    kind: Kind,
    source: Option<Box<dyn StdError + Send + Sync>>,
    url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// The target URL could not be parsed into a scheme and hostname
    MalformedUrl,
    /// The TLS client configuration could not be built
    Tls,
    /// A stored proxy URL is not a usable URI
    ProxyUri,
}

impl Error {
    pub fn new(kind: Kind) -> Error {
        Error {
            inner: Box::new(Inner {
                kind,
                source: None,
                url: None,
            }),
        }
    }

    #[must_use = "Error builder methods return a new Error and should be used"]
    pub fn with<E: Into<Box<dyn StdError + Send + Sync>>>(mut self, source: E) -> Error {
        self.inner.source = Some(source.into());
        self
    }

    /// Attach the offending URL text. Callers pass redacted text for proxy URLs.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Error {
        self.inner.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.inner.kind
    }

    /// Get the URL text associated with this error, if any
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.inner.url.as_deref()
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_struct("hopwire::Error");

        f.field("kind", &self.inner.kind);

        if let Some(ref source) = self.inner.source {
            f.field("source", source);
        }

        if let Some(ref url) = self.inner.url {
            f.field("url", url);
        }

        f.finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.kind {
            Kind::MalformedUrl => f.write_str("malformed target URL")?,
            Kind::Tls => f.write_str("TLS configuration error")?,
            Kind::ProxyUri => f.write_str("invalid proxy URI")?,
        }

        if let Some(ref url) = self.inner.url {
            write!(f, " ({url})")?;
        }

        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner
            .source
            .as_ref()
            .map(|err| &**err as &(dyn StdError + 'static))
    }
}
