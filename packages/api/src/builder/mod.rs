//! Agent builder API modules
//!
//! Fluent configuration of agent options and proxy sources, ending in
//! [`Agent::transport_for`].

pub mod core;
pub mod methods;
pub mod proxy;

pub use self::core::{Agent, EnvSource};
