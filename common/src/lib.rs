pub mod config;
pub mod error;
pub mod games;
pub mod identifiers;
pub mod logger;
pub mod progress;

pub use error::EngineError;
pub use identifiers::*;
