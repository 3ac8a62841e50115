//! Caller-supplied agent options

use serde::{Deserialize, Serialize};

/// Options the caller attaches to every transport it asks for.
///
/// `server_name` only reaches direct connections. A proxied transport never
/// carries an SNI override, whatever is set here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AgentOptions {
    pub skip_certificate_validation: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_name: Option<String>,
}

impl AgentOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable peer certificate verification on the constructed transport
    #[must_use]
    pub fn skip_certificate_validation(mut self, skip: bool) -> Self {
        self.skip_certificate_validation = skip;
        self
    }

    /// Override the TLS server name for direct connections
    #[must_use]
    pub fn server_name(mut self, name: impl Into<String>) -> Self {
        self.server_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn verify_certificate(&self) -> bool {
        !self.skip_certificate_validation
    }
}
