//! Error types for bot-git

/// Result type for bot-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in bot-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The remote URL is not an ssh/https GitHub URL
    #[error("Remote URL {url:?} is not a GitHub ssh/https URL")]
    RemoteUrl { url: String },

    /// An ls-remote line did not split into (revision, refname)
    #[error("Malformed ls-remote line: {line:?}")]
    MalformedRefLine { line: String },
}
