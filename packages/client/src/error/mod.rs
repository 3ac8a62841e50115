pub mod classification;
pub mod constructors;
pub mod helpers;
pub mod types;

pub use constructors::*;
pub use helpers::{InvalidTarget, MissingHost};
pub use types::{Error, Kind, Result};

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;
