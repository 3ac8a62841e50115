//! Proxy selection and exclusion
//!
//! Runs the first two stages of resolution: choose a candidate proxy URL
//! (explicit configuration, then environment) and apply the `NO_PROXY`
//! exclusion list to it.

pub mod core;
pub mod decision;
pub mod env;
pub mod source;
pub mod url_handling;

pub use self::core::{ExplicitProxyConfig, NoProxy, ProxyAuth, ProxyDescriptor, ProxyProtocol};
pub use decision::ResolvedProxyDecision;
pub use env::{ProxyEnv, ProxyEnvBuilder};
pub use source::{Candidate, ProxyOrigin};

use crate::target::TargetRequest;

/// Decide whether `target` goes through a proxy, and which one.
///
/// # Errors
/// Returns a `MalformedUrl` error when `target` cannot be parsed.
pub fn decide(
    target: &str,
    explicit: Option<&ExplicitProxyConfig>,
    env: &ProxyEnv,
) -> crate::Result<ResolvedProxyDecision> {
    let target = TargetRequest::parse(target)?;
    Ok(decide_for(&target, explicit, env))
}

/// [`decide`] for an already parsed target
#[must_use]
pub fn decide_for(
    target: &TargetRequest,
    explicit: Option<&ExplicitProxyConfig>,
    env: &ProxyEnv,
) -> ResolvedProxyDecision {
    let candidate = source::select(target, explicit, env);
    let no_proxy = env.no_proxy();
    ResolvedProxyDecision::evaluate(candidate, target.host(), no_proxy.as_ref())
}
