//! rustls client configuration for transport handles

use std::sync::Arc;

use rustls::{ClientConfig, RootCertStore};

use super::verifier::AcceptAnyCertificate;
use crate::error;

/// Build a client configuration.
///
/// With `verify_certificate` the webpki root set is trusted; without it any
/// certificate is accepted.
///
/// # Errors
/// Returns a `Tls` error if the ring provider rejects the default protocol versions.
pub fn client_config(verify_certificate: bool) -> crate::Result<Arc<ClientConfig>> {
    let provider = Arc::new(rustls::crypto::ring::default_provider());

    let builder = ClientConfig::builder_with_provider(provider.clone())
        .with_safe_default_protocol_versions()
        .map_err(error::tls)?;

    let config = if verify_certificate {
        let mut roots = RootCertStore::empty();
        roots.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
        builder.with_root_certificates(roots).with_no_client_auth()
    } else {
        tracing::warn!(
            target: "hopwire::tls",
            "certificate verification disabled for this transport"
        );
        builder
            .dangerous()
            .with_custom_certificate_verifier(Arc::new(AcceptAnyCertificate::new(provider)))
            .with_no_client_auth()
    };

    Ok(Arc::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_and_without_verification() {
        assert!(client_config(true).is_ok());
        assert!(client_config(false).is_ok());
    }
}
