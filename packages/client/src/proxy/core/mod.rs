//! Core proxy types: explicit configuration and exclusion lists

pub mod no_proxy;
pub mod types;

pub use no_proxy::NoProxy;
pub use types::{ExplicitProxyConfig, ProxyAuth, ProxyDescriptor, ProxyProtocol};
