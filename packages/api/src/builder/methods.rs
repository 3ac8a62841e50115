//! Terminal methods: resolve a target into a transport

use hopwire_client::proxy::{self, ResolvedProxyDecision};
use hopwire_client::{TargetRequest, TransportHandle, resolve_target};
use url::Url;

use super::core::Agent;

impl Agent {
    /// Construct the transport for `target`.
    ///
    /// # Errors
    /// Returns a `MalformedUrl` error when `target` cannot be parsed, or a
    /// `Tls` error when the TLS client configuration cannot be built.
    pub fn transport_for(&self, target: &str) -> hopwire_client::Result<TransportHandle> {
        let target = TargetRequest::parse(target)?;
        self.resolve(&target)
    }

    /// [`Agent::transport_for`] with an already parsed URL
    ///
    /// # Errors
    /// Same as [`Agent::transport_for`].
    pub fn transport_for_url(&self, target: &Url) -> hopwire_client::Result<TransportHandle> {
        let target = TargetRequest::from_url(target.clone())?;
        self.resolve(&target)
    }

    /// Only the proxy decision, without building a transport
    ///
    /// # Errors
    /// Returns a `MalformedUrl` error when `target` cannot be parsed.
    pub fn decide(&self, target: &str) -> hopwire_client::Result<ResolvedProxyDecision> {
        proxy::decide(target, self.proxy.as_ref(), &self.env.snapshot())
    }

    fn resolve(&self, target: &TargetRequest) -> hopwire_client::Result<TransportHandle> {
        let env = self.env.snapshot();
        let handle = resolve_target(target, &self.options, self.proxy.as_ref(), &env)?;
        tracing::trace!(
            target: "hopwire::agent",
            host = target.host(),
            proxied = handle.is_proxied(),
            "agent resolved transport"
        );
        Ok(handle)
    }
}
