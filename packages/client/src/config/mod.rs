//! Configuration inputs handed in by the caller
//!
//! Everything here derives `serde` so an outer config layer can load it.
//! Proxy configuration lives in [`crate::proxy`].

pub mod agent;

pub use agent::AgentOptions;
