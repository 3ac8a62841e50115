//! Exclusion check and the resulting proxy decision

use super::core::NoProxy;
use super::source::{Candidate, ProxyOrigin};
use super::url_handling::redact;

/// Outcome of proxy selection plus the exclusion check for one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProxyDecision {
    pub proxy_url: Option<String>,
    pub use_proxy: bool,
    pub origin: Option<ProxyOrigin>,
}

impl ResolvedProxyDecision {
    /// No proxy candidate at all
    #[must_use]
    pub fn direct() -> Self {
        Self {
            proxy_url: None,
            use_proxy: false,
            origin: None,
        }
    }

    /// Apply the exclusion list to a candidate.
    ///
    /// An empty candidate URL never proxies. Without an exclusion list any
    /// nonempty candidate is used.
    #[must_use]
    pub fn evaluate(candidate: Option<Candidate>, host: &str, no_proxy: Option<&NoProxy>) -> Self {
        let Some(Candidate { url, origin }) = candidate else {
            return Self::direct();
        };

        let use_proxy = !url.is_empty() && !no_proxy.is_some_and(|list| list.matches(host));

        tracing::debug!(
            target: "hopwire::proxy",
            host,
            proxy = %redact(&url),
            ?origin,
            use_proxy,
            "proxy decision"
        );

        Self {
            proxy_url: Some(url),
            use_proxy,
            origin: Some(origin),
        }
    }

    /// The proxy URL to connect through, only when the proxy is in use
    #[must_use]
    pub fn effective_proxy(&self) -> Option<&str> {
        if self.use_proxy {
            self.proxy_url.as_deref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_candidate(url: &str) -> Option<Candidate> {
        Some(Candidate {
            url: url.to_string(),
            origin: ProxyOrigin::Environment,
        })
    }

    #[test]
    fn no_candidate_is_direct() {
        let decision = ResolvedProxyDecision::evaluate(None, "example.com", None);
        assert_eq!(decision, ResolvedProxyDecision::direct());
    }

    #[test]
    fn candidate_without_exclusions_is_used() {
        let decision =
            ResolvedProxyDecision::evaluate(env_candidate("http://proxy:3128"), "example.com", None);
        assert!(decision.use_proxy);
        assert_eq!(decision.effective_proxy(), Some("http://proxy:3128"));
    }

    #[test]
    fn matching_exclusion_disables_proxy() {
        let no_proxy = NoProxy::from_string(".example.com");
        let decision = ResolvedProxyDecision::evaluate(
            env_candidate("http://proxy:3128"),
            "api.example.com",
            Some(&no_proxy),
        );
        assert!(!decision.use_proxy);
        assert_eq!(decision.effective_proxy(), None);
        assert_eq!(decision.proxy_url.as_deref(), Some("http://proxy:3128"));
    }

    #[test]
    fn empty_candidate_never_proxies() {
        let decision = ResolvedProxyDecision::evaluate(env_candidate(""), "example.com", None);
        assert!(!decision.use_proxy);
    }
}
