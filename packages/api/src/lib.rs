//! Hopwire public API
//!
//! Chooses a direct or proxied transport for outgoing HTTP/HTTPS requests.
//! Explicit proxy configuration beats `HTTP_PROXY`/`HTTPS_PROXY`, and `NO_PROXY`
//! can switch either off for a host.

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

pub use builder::{Agent, EnvSource};

// Re-export the types callers handle directly
pub use hopwire_client::{
    AgentOptions, DirectTransport, Error as HopwireError, ExplicitProxyConfig, NoProxy,
    ProxiedTransport, ProxyAuth, ProxyDescriptor, ProxyEnv, ProxyProtocol, ResolvedProxyDecision,
    Result, TransportHandle,
};
