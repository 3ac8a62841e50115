//! Transport straight to the target

use std::sync::Arc;

use hyper_util::client::legacy::connect::HttpConnector;
use rustls::ClientConfig;
use rustls::pki_types::ServerName;

use super::settings::DirectSettings;
use crate::error;

/// A direct connection handler, plain or TLS-capable.
#[derive(Debug, Clone)]
pub struct DirectTransport {
    settings: DirectSettings,
    tls: Option<Arc<ClientConfig>>,
}

impl DirectTransport {
    /// Plain TCP transport
    #[must_use]
    pub fn plain(settings: DirectSettings) -> Self {
        Self {
            settings,
            tls: None,
        }
    }

    /// TLS-capable transport
    #[must_use]
    pub fn tls(settings: DirectSettings, config: Arc<ClientConfig>) -> Self {
        Self {
            settings,
            tls: Some(config),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &DirectSettings {
        &self.settings
    }

    #[must_use]
    pub fn is_tls(&self) -> bool {
        self.tls.is_some()
    }

    #[must_use]
    pub fn tls_config(&self) -> Option<&Arc<ClientConfig>> {
        self.tls.as_ref()
    }

    /// Name to present in the TLS handshake: the override if set, else the target host.
    #[must_use]
    pub fn tls_server_name<'a>(&'a self, target_host: &'a str) -> &'a str {
        self.settings.sni_override().unwrap_or(target_host)
    }

    /// [`Self::tls_server_name`] as a rustls `ServerName`.
    ///
    /// # Errors
    /// Returns a `Tls` error if the name is neither a DNS name nor an IP address.
    pub fn server_name(&self, target_host: &str) -> crate::Result<ServerName<'static>> {
        let name = self.tls_server_name(target_host);
        let name = name
            .strip_prefix('[')
            .and_then(|n| n.strip_suffix(']'))
            .unwrap_or(name);
        ServerName::try_from(name.to_string()).map_err(error::tls)
    }

    /// TCP connector for this transport
    #[must_use]
    pub fn http_connector(&self) -> HttpConnector {
        let mut http = HttpConnector::new();
        http.set_nodelay(true);
        http.enforce_http(!self.is_tls());
        http
    }
}
