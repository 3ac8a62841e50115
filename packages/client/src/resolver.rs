//! Resolution entry points
//!
//! `resolve` is the pure core: every input, including the environment, is a
//! parameter. `resolve_from_env` is the thin adapter that snapshots the real
//! process environment first.

use crate::config::AgentOptions;
use crate::connect::{self, TransportHandle};
use crate::proxy::{self, ExplicitProxyConfig, ProxyEnv};
use crate::target::TargetRequest;

/// Select and construct the transport for `target`.
///
/// # Errors
/// * `MalformedUrl` when `target` cannot be parsed into a scheme and hostname
/// * `Tls` when the TLS client configuration cannot be built
pub fn resolve(
    target: &str,
    options: &AgentOptions,
    explicit: Option<&ExplicitProxyConfig>,
    env: &ProxyEnv,
) -> crate::Result<TransportHandle> {
    let target = TargetRequest::parse(target)?;
    resolve_target(&target, options, explicit, env)
}

/// [`resolve`] for an already parsed target
///
/// # Errors
/// Returns a `Tls` error when the TLS client configuration cannot be built.
pub fn resolve_target(
    target: &TargetRequest,
    options: &AgentOptions,
    explicit: Option<&ExplicitProxyConfig>,
    env: &ProxyEnv,
) -> crate::Result<TransportHandle> {
    let decision = proxy::decide_for(target, explicit, env);
    connect::build(&decision, options, target)
}

/// [`resolve`] against the current process environment, read at call time.
///
/// # Errors
/// Same as [`resolve`].
pub fn resolve_from_env(
    target: &str,
    options: &AgentOptions,
    explicit: Option<&ExplicitProxyConfig>,
) -> crate::Result<TransportHandle> {
    resolve(target, options, explicit, &ProxyEnv::from_process())
}
