//! Error types for bot-config

/// Result type for bot-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during configuration resolution
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A path property needs the repository root and git could not
    /// provide one
    #[error("Repository root is unavailable")]
    RepoRootUnavailable,

    /// The user database has no usable entry for the process owner
    #[error("Identity lookup failed for uid {uid}: {message}")]
    Identity { uid: u32, message: String },

    // Transparent wrappers for underlying crate errors
    /// Environment error from bot-env
    #[error(transparent)]
    Env(#[from] bot_env::Error),

    /// Git parse error from bot-git
    #[error(transparent)]
    Git(#[from] bot_git::Error),
}
