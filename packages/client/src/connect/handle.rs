//! The transport handle handed back to the caller

use std::sync::Arc;

use hyper_util::client::legacy::connect::HttpConnector;
use rustls::ClientConfig;

use super::direct::DirectTransport;
use super::proxied::ProxiedTransport;

/// Connection-establishment strategy for the requests a caller routes through it.
///
/// Owned by the caller. Nothing is cached or shared between resolutions.
#[derive(Debug, Clone)]
pub enum TransportHandle {
    Direct(DirectTransport),
    Proxied(ProxiedTransport),
}

impl TransportHandle {
    #[must_use]
    pub fn is_proxied(&self) -> bool {
        matches!(self, TransportHandle::Proxied(_))
    }

    /// Proxy URL for proxied handles
    #[must_use]
    pub fn proxy_url(&self) -> Option<&str> {
        match self {
            TransportHandle::Direct(_) => None,
            TransportHandle::Proxied(proxied) => Some(proxied.proxy_url()),
        }
    }

    /// SNI override. Always `None` for proxied handles.
    #[must_use]
    pub fn server_name(&self) -> Option<&str> {
        match self {
            TransportHandle::Direct(direct) => direct.settings().sni_override(),
            TransportHandle::Proxied(_) => None,
        }
    }

    #[must_use]
    pub fn verify_certificate(&self) -> bool {
        match self {
            TransportHandle::Direct(direct) => direct.settings().verify_certificate(),
            TransportHandle::Proxied(proxied) => proxied.settings().verify_certificate(),
        }
    }

    /// Whether this handle can speak TLS
    #[must_use]
    pub fn is_tls(&self) -> bool {
        match self {
            TransportHandle::Direct(direct) => direct.is_tls(),
            TransportHandle::Proxied(_) => true,
        }
    }

    #[must_use]
    pub fn tls_config(&self) -> Option<&Arc<ClientConfig>> {
        match self {
            TransportHandle::Direct(direct) => direct.tls_config(),
            TransportHandle::Proxied(proxied) => Some(proxied.tls_config()),
        }
    }

    #[must_use]
    pub fn http_connector(&self) -> HttpConnector {
        match self {
            TransportHandle::Direct(direct) => direct.http_connector(),
            TransportHandle::Proxied(proxied) => proxied.http_connector(),
        }
    }

    #[must_use]
    pub fn as_direct(&self) -> Option<&DirectTransport> {
        match self {
            TransportHandle::Direct(direct) => Some(direct),
            TransportHandle::Proxied(_) => None,
        }
    }

    #[must_use]
    pub fn as_proxied(&self) -> Option<&ProxiedTransport> {
        match self {
            TransportHandle::Direct(_) => None,
            TransportHandle::Proxied(proxied) => Some(proxied),
        }
    }
}

impl From<DirectTransport> for TransportHandle {
    fn from(direct: DirectTransport) -> Self {
        TransportHandle::Direct(direct)
    }
}

impl From<ProxiedTransport> for TransportHandle {
    fn from(proxied: ProxiedTransport) -> Self {
        TransportHandle::Proxied(proxied)
    }
}
