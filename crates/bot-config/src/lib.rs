//! Runtime configuration resolver for bot services
//!
//! Resolves named configuration properties from two sources: explicit
//! environment-variable overrides and metadata derived from the surrounding
//! git repository. Properties are computed on demand and never cached, so
//! every read reflects the repository state at call time.

pub mod error;
pub mod identity;
pub mod resolver;
pub mod value;

pub use error::{Error, Result};
pub use resolver::Resolver;
pub use value::Value;
