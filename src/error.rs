//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Errors returned by the mutating cache operations.
///
/// Both variants carry the offending key. Presence is decided by map
/// membership alone, so an expired entry still counts as present.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// `set` was called for a key that is already stored
    #[error("Item {0} already exists")]
    AlreadyExists(String),

    /// `replace` or `del` was called for a key that is not stored
    #[error("Item {0} doesn't exist")]
    NotFound(String),
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
