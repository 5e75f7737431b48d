//! Error types for trie operations.
//!
//! Every failure is recoverable and reported by value; no operation
//! panics on user input. A missed lookup is not an error at all, it is
//! an absent [`Option`] — see [`crate::trie::Trie::lookup`].

use thiserror::Error;

/// Result type alias for trie operations.
pub type Result<T> = std::result::Result<T, TrieError>;

/// Errors reported by the mutating trie operations.
///
/// Invalid keys are rejected at the public operation boundary, before
/// any node is touched, so a failed operation never leaves a partial
/// mutation behind.
#[derive(Error, Clone, Copy, Debug, Eq, PartialEq)]
pub enum TrieError {
    #[error("the key already has a value assigned")]
    DuplicateKey,

    #[error("no value exists for the key")]
    NoSuchValue,

    #[error("invalid key character {0:?}: keys must contain lowercase letters only")]
    InvalidLetter(char),

    #[error("the key must not be empty")]
    EmptyKey,
}
