//! Transport construction
//!
//! Turns a proxy decision plus agent options into a [`TransportHandle`].
//! Construction is in-memory only: no sockets are opened here.

pub mod direct;
pub mod handle;
pub mod proxied;
pub mod settings;

pub use direct::DirectTransport;
pub use handle::TransportHandle;
pub use proxied::ProxiedTransport;
pub use settings::{BaseSettings, DirectSettings, ProxySettings};

use crate::config::AgentOptions;
use crate::proxy::ResolvedProxyDecision;
use crate::proxy::url_handling::redact;
use crate::target::{TargetRequest, TargetScheme};
use crate::tls;

/// Build the transport for `target` from a finished proxy decision.
///
/// # Errors
/// Returns a `Tls` error if the TLS client configuration cannot be built.
pub fn build(
    decision: &ResolvedProxyDecision,
    options: &AgentOptions,
    target: &TargetRequest,
) -> crate::Result<TransportHandle> {
    let base = BaseSettings::from_options(options);

    if let Some(proxy_url) = decision.effective_proxy() {
        if options.server_name.is_some() {
            tracing::debug!(
                target: "hopwire::transport",
                "server name override ignored for proxied connection"
            );
        }

        let tls = tls::client_config(base.verify_certificate())?;
        tracing::debug!(
            target: "hopwire::transport",
            host = target.host(),
            proxy = %redact(proxy_url),
            verify_certificate = base.verify_certificate(),
            "constructed proxied transport"
        );
        return Ok(ProxiedTransport::new(proxy_url, base.proxied(), tls).into());
    }

    let mut settings = base.direct();
    if let Some(name) = options.server_name.as_deref() {
        settings = settings.server_name(name);
    }

    let direct = match target.scheme() {
        TargetScheme::Https => {
            DirectTransport::tls(settings, tls::client_config(base.verify_certificate())?)
        }
        TargetScheme::Http | TargetScheme::Other(_) => DirectTransport::plain(settings),
    };

    tracing::debug!(
        target: "hopwire::transport",
        host = target.host(),
        scheme = %target.scheme(),
        tls = direct.is_tls(),
        sni = direct.settings().sni_override(),
        "constructed direct transport"
    );

    Ok(direct.into())
}
