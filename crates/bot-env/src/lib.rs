//! Environment variable source for bot configuration
//!
//! Provides the `EnvSource` seam over the process environment and typed
//! lookup with declared defaults.

pub mod error;
pub mod source;

pub use error::{Error, Result};
pub use source::{EnvSource, FakeEnv, ProcessEnv, lookup};
