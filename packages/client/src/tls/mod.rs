//! TLS configuration for constructed transports
//!
//! rustls with the ring provider. Only the verification flag is configurable here.

pub mod config;
pub mod verifier;

pub use config::client_config;
pub use verifier::AcceptAnyCertificate;
