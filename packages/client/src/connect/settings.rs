//! Transport settings builders
//!
//! Direct and proxied connections get separate settings types. Only
//! [`DirectSettings`] can carry an SNI override.

use crate::config::AgentOptions;

/// Settings shared by every transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseSettings {
    verify_certificate: bool,
}

impl BaseSettings {
    #[must_use]
    pub fn new(verify_certificate: bool) -> Self {
        Self { verify_certificate }
    }

    #[must_use]
    pub fn from_options(options: &AgentOptions) -> Self {
        Self::new(options.verify_certificate())
    }

    #[must_use]
    pub fn verify_certificate(&self) -> bool {
        self.verify_certificate
    }

    /// Settings for a direct connection, without SNI override
    #[must_use]
    pub fn direct(self) -> DirectSettings {
        DirectSettings {
            base: self,
            server_name: None,
        }
    }

    /// Settings for a connection through a proxy
    #[must_use]
    pub fn proxied(self) -> ProxySettings {
        ProxySettings { base: self }
    }
}

/// Settings for a connection straight to the target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectSettings {
    base: BaseSettings,
    server_name: Option<String>,
}

impl DirectSettings {
    /// Override the server name sent in the TLS handshake
    #[must_use]
    pub fn server_name(mut self, name: impl Into<String>) -> Self {
        self.server_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn verify_certificate(&self) -> bool {
        self.base.verify_certificate
    }

    #[must_use]
    pub fn sni_override(&self) -> Option<&str> {
        self.server_name.as_deref()
    }
}

/// Settings for a connection through a proxy. Never carries SNI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxySettings {
    base: BaseSettings,
}

impl ProxySettings {
    #[must_use]
    pub fn verify_certificate(&self) -> bool {
        self.base.verify_certificate
    }
}
