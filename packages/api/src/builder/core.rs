//! Core `Agent` structure
//!
//! An `Agent` bundles the inputs of one resolution: agent options, an optional
//! explicit proxy, and where the proxy environment comes from.

use hopwire_client::{AgentOptions, ExplicitProxyConfig, ProxyEnv};

/// Source of the proxy environment snapshot
#[derive(Debug, Clone, Default)]
pub enum EnvSource {
    /// Read the process environment on every resolution
    #[default]
    Process,
    /// Use a fixed snapshot
    Snapshot(ProxyEnv),
}

impl EnvSource {
    pub(crate) fn snapshot(&self) -> ProxyEnv {
        match self {
            EnvSource::Process => ProxyEnv::from_process(),
            EnvSource::Snapshot(env) => env.clone(),
        }
    }
}

/// Fluent builder for transport handles.
///
/// ```rust
/// use hopwire::{Agent, ProxyEnv};
///
/// let handle = Agent::new()
///     .server_name("origin.internal")
///     .proxy_env(ProxyEnv::empty())
///     .transport_for("https://10.0.0.5")?;
///
/// assert_eq!(handle.server_name(), Some("origin.internal"));
/// # Ok::<(), hopwire::HopwireError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Agent {
    pub(crate) options: AgentOptions,
    pub(crate) proxy: Option<ExplicitProxyConfig>,
    pub(crate) env: EnvSource,
}

impl Agent {
    /// Agent with default options, no explicit proxy, reading the process environment
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing options, for example ones loaded by a config layer
    #[must_use]
    pub fn with_options(options: AgentOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Disable peer certificate verification
    #[must_use]
    pub fn skip_certificate_validation(mut self, skip: bool) -> Self {
        self.options.skip_certificate_validation = skip;
        self
    }

    /// SNI override for direct connections. Ignored when a proxy is used.
    #[must_use]
    pub fn server_name(mut self, name: impl Into<String>) -> Self {
        self.options.server_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn options(&self) -> &AgentOptions {
        &self.options
    }
}
