//! Proxy source selection
//!
//! Precedence: explicit configuration, then the environment, then nothing.

use super::core::ExplicitProxyConfig;
use super::env::ProxyEnv;
use crate::target::{TargetRequest, TargetScheme};

/// Where a candidate proxy URL came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyOrigin {
    Explicit,
    Environment,
}

/// A proxy URL picked for a target, before the exclusion list is applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub url: String,
    pub origin: ProxyOrigin,
}

/// Pick the candidate proxy URL for `target`.
///
/// An explicit descriptor lacking host or port is ignored and the environment
/// is consulted instead.
#[must_use]
pub fn select(
    target: &TargetRequest,
    explicit: Option<&ExplicitProxyConfig>,
    env: &ProxyEnv,
) -> Option<Candidate> {
    if let Some(url) = explicit.and_then(|config| config.proxy_url(target.scheme())) {
        return Some(Candidate {
            url,
            origin: ProxyOrigin::Explicit,
        });
    }

    if explicit.is_some() {
        tracing::debug!(
            target: "hopwire::proxy",
            "explicit proxy descriptor is incomplete, falling back to environment"
        );
    }

    from_env(target.scheme(), env).map(|url| Candidate {
        url: url.to_string(),
        origin: ProxyOrigin::Environment,
    })
}

/// `https` reads `HTTPS_PROXY`; `http` reads `HTTP_PROXY` and falls back to
/// `HTTPS_PROXY` only when `HTTP_PROXY` is unset.
fn from_env<'a>(scheme: &TargetScheme, env: &'a ProxyEnv) -> Option<&'a str> {
    match scheme {
        TargetScheme::Https => env.https_proxy(),
        TargetScheme::Http => env.http_proxy().or_else(|| env.https_proxy()),
        TargetScheme::Other(_) => None,
    }
}
