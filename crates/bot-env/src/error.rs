//! Error types for bot-env

/// Result type for bot-env operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in bot-env operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A variable was set but its value could not be parsed as the
    /// requested type
    #[error("Cannot cast {name}={value:?} to {ty}")]
    Cast {
        name: String,
        value: String,
        ty: &'static str,
    },

    /// A variable was requested with no default and is not set
    #[error("Environment variable '{name}' is not set")]
    NotSet { name: String },
}
