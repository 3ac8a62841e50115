//! # Hopwire client
//!
//! Picks the transport for an outgoing HTTP/HTTPS request: straight to the
//! target, or through a forward proxy.
//!
//! Resolution runs three stages in order:
//!
//! - **Proxy source selection**: explicit configuration first, then
//!   `HTTP_PROXY`/`HTTPS_PROXY` (and their lowercase forms), then nothing
//! - **Exclusion check**: `NO_PROXY` entries can switch the proxy off for a host
//! - **Transport construction**: a [`TransportHandle`] carrying the TLS
//!   verification flag, plus the SNI override for direct connections
//!
//! Resolution performs no I/O. The environment is passed in as a
//! [`ProxyEnv`] snapshot so it can be tested without touching the process.
//!
//! ```rust
//! use hopwire_client::{AgentOptions, ProxyEnv, resolve};
//!
//! let env = ProxyEnv::builder()
//!     .https_proxy("http://proxy:3128")
//!     .no_proxy(".example.com")
//!     .build();
//!
//! let handle = resolve("https://api.example.com", &AgentOptions::default(), None, &env)?;
//! assert!(!handle.is_proxied());
//! # Ok::<(), hopwire_client::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod config;
pub mod connect;
pub mod error;
pub mod proxy;
pub mod resolver;
pub mod target;
pub mod tls;

pub use config::AgentOptions;
pub use connect::{DirectTransport, ProxiedTransport, TransportHandle};
pub use error::{Error, Result};
pub use proxy::{
    ExplicitProxyConfig, NoProxy, ProxyAuth, ProxyDescriptor, ProxyEnv, ProxyProtocol,
    ResolvedProxyDecision,
};
pub use resolver::{resolve, resolve_from_env, resolve_target};
pub use target::{TargetRequest, TargetScheme};
