//! Provides a Trie over the 26 lowercase letters, mapping string keys
//! to integer scores.
//!
//! Unlike a general map, storing into an occupied key is an error;
//! updates go through the explicit [`crate::trie::Trie::change`]
//! operation and removals prune every node that is left without a
//! value and without children. The tree can be rendered as a compact
//! structural string via [`crate::trie::Trie::render`], which the
//! interactive shell demo uses to print the tree.
//!
//! All failures are reported as values of [`crate::error::TrieError`];
//! nothing in this crate panics on user input.
//!
//! Examples:
//! * trie : [`crate::trie`]
//! * iterator : [`crate::iterator`]
//! * interactive shell : `demos/shell.rs`
//!
//! Typical usages for this data structure:
//!  - Scoreboards keyed by short alphabetic names
//!  - Storing large numbers of keys with significant amounts of
//!    sub-key duplication
//!  - Prefix matching keys
//!  - ...

#[cfg(feature = "serde")]
extern crate serde_crate;

pub mod error;

pub mod iterator;

pub mod trie;
