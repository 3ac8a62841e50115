//! Proxy configuration methods for `Agent`

use hopwire_client::{ExplicitProxyConfig, ProxyAuth, ProxyDescriptor, ProxyEnv, ProxyProtocol};

use super::core::{Agent, EnvSource};

impl Agent {
    /// Route through an explicit proxy, given as a URL or a descriptor.
    ///
    /// ```rust
    /// use hopwire::{Agent, ProxyDescriptor};
    ///
    /// let by_url = Agent::new().proxy("http://proxy:3128");
    /// let by_parts = Agent::new().proxy(ProxyDescriptor::new("proxy.local", 8080));
    /// ```
    #[must_use]
    pub fn proxy(mut self, proxy: impl Into<ExplicitProxyConfig>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Shorthand for a descriptor proxy with optional protocol and credentials
    #[must_use]
    pub fn proxy_host(
        self,
        host: impl Into<String>,
        port: u16,
        protocol: Option<ProxyProtocol>,
        auth: Option<(&str, &str)>,
    ) -> Self {
        let mut descriptor = ProxyDescriptor::new(host, port);
        descriptor.protocol = protocol;
        descriptor.auth = auth.map(|(username, password)| ProxyAuth::new(username, password));
        self.proxy(descriptor)
    }

    /// Drop any explicit proxy and rely on the environment
    #[must_use]
    pub fn no_explicit_proxy(mut self) -> Self {
        self.proxy = None;
        self
    }

    /// Use a fixed environment snapshot instead of the process environment
    #[must_use]
    pub fn proxy_env(mut self, env: ProxyEnv) -> Self {
        self.env = EnvSource::Snapshot(env);
        self
    }

    /// Read the process environment at resolution time (the default)
    #[must_use]
    pub fn process_env(mut self) -> Self {
        self.env = EnvSource::Process;
        self
    }

    #[must_use]
    pub fn explicit_proxy(&self) -> Option<&ExplicitProxyConfig> {
        self.proxy.as_ref()
    }
}
