/// Error type shared by the persistence layer and the store operations
///
/// Storage failures (disk gone, permissions, quota) propagate up unchanged;
/// nothing in the core retries. The front end decides how to report them.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HubError {
    /// The underlying SQLite store failed.
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// A wishlist could not be re-encoded for persistence.
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),

    /// A file attachment could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
