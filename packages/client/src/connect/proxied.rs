//! Transport through a forward proxy

use std::fmt;
use std::sync::Arc;

use http::Uri;
use http::header::HeaderValue;
use hyper_util::client::legacy::connect::HttpConnector;
use rustls::ClientConfig;
use url::Url;

use super::settings::ProxySettings;
use crate::error;
use crate::proxy::url_handling::{proxy_authorization, redact};

/// A connection handler bound to a proxy endpoint.
///
/// The proxy URL is stored as given. It is only parsed when the caller asks
/// for [`Self::proxy_uri`] or [`Self::proxy_authorization`].
#[derive(Clone)]
pub struct ProxiedTransport {
    proxy_url: String,
    settings: ProxySettings,
    tls: Arc<ClientConfig>,
}

impl ProxiedTransport {
    #[must_use]
    pub fn new(proxy_url: impl Into<String>, settings: ProxySettings, tls: Arc<ClientConfig>) -> Self {
        Self {
            proxy_url: proxy_url.into(),
            settings,
            tls,
        }
    }

    /// The proxy URL exactly as resolved
    #[must_use]
    pub fn proxy_url(&self) -> &str {
        &self.proxy_url
    }

    #[must_use]
    pub fn settings(&self) -> &ProxySettings {
        &self.settings
    }

    /// TLS configuration for the tunnelled connection to the target, and for
    /// the hop to the proxy when the proxy speaks https.
    #[must_use]
    pub fn tls_config(&self) -> &Arc<ClientConfig> {
        &self.tls
    }

    /// Proxy endpoint as an `http::Uri`, credentials stripped.
    ///
    /// # Errors
    /// Returns a `ProxyUri` error if the stored URL does not parse.
    pub fn proxy_uri(&self) -> crate::Result<Uri> {
        let mut url = self.parsed()?;
        // Credentials travel in Proxy-Authorization, not in the URI
        let _ = url.set_username("");
        let _ = url.set_password(None);
        url.as_str()
            .parse::<Uri>()
            .map_err(|e| error::proxy_uri(e, &redact(&self.proxy_url)))
    }

    /// Whether the hop to the proxy itself is TLS
    #[must_use]
    pub fn proxy_is_tls(&self) -> bool {
        self.parsed().is_ok_and(|url| url.scheme() == "https")
    }

    /// Basic `Proxy-Authorization` value from credentials in the proxy URL
    #[must_use]
    pub fn proxy_authorization(&self) -> Option<HeaderValue> {
        self.parsed().ok().as_ref().and_then(proxy_authorization)
    }

    /// TCP connector for reaching the proxy
    #[must_use]
    pub fn http_connector(&self) -> HttpConnector {
        let mut http = HttpConnector::new();
        http.set_nodelay(true);
        http.enforce_http(false);
        http
    }

    fn parsed(&self) -> crate::Result<Url> {
        Url::parse(&self.proxy_url).map_err(|e| error::proxy_uri(e, &redact(&self.proxy_url)))
    }
}

impl fmt::Debug for ProxiedTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxiedTransport")
            .field("proxy_url", &redact(&self.proxy_url))
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
