//! Provides a Trie over the lowercase alphabet, mapping string keys to
//! integer scores.
//!
//! Keys are `&str` slices restricted to the letters `'a'..='z'`. Each
//! node carries a fixed array of 26 child slots, so child access is
//! O(1) and children always enumerate in letter order. A key may hold
//! at most one value; storing into an occupied key is an error rather
//! than an overwrite, and updates go through the separate
//! [`Trie::change`] operation.
//!
//! Removing a value collapses the suffix chain it leaves behind: a
//! non-root node with no value and no children never survives an
//! operation, so the tree retains only structurally necessary nodes.
//!
//! Example 1
//! ```
//! use scoretrie::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.add("pear", 5).expect("fresh key");
//! assert_eq!(trie.lookup("pear"), Some(5));
//!
//! // A second add for the same key fails and changes nothing.
//! assert!(trie.add("pear", 9).is_err());
//! assert_eq!(trie.lookup("pear"), Some(5));
//!
//! // Updates use change, removal prunes the dead branch.
//! trie.change("pear", 11).expect("existing key");
//! trie.remove("pear").expect("existing key");
//! assert!(trie.is_empty());
//! ```
//!
//! Example 2
//! ```
//! use scoretrie::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.add("to", 7).expect("fresh key");
//! trie.add("tea", 3).expect("fresh key");
//!
//! // The rendered form lists each node's letter, its value in
//! // brackets and its children in parentheses, in letter order.
//! assert_eq!(trie.render(), "+(t(e(a[3])o[7]))");
//! ```
//!
//! Typical usages for this data structure:
//!  - Scoreboards keyed by short alphabetic names
//!  - Storing large numbers of keys with significant amounts of
//!    sub-key duplication
//!  - Prefix matching keys
//!  - ...

use std::fmt;

use crate::error::{Result, TrieError};
use crate::iterator::TrieIterator;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Number of supported key letters, `'a'..='z'`.
pub const ALPHABET_LEN: usize = 26;

/// The character the root node renders as. Never a valid key letter.
pub const ROOT_LETTER: char = '+';

/// Maps a key character to its child-slot index, rejecting anything
/// outside the supported alphabet. All public operations validate
/// through here before touching the tree, so node-level indexing can
/// never go out of bounds.
fn index_of(letter: char) -> Result<usize> {
    if letter.is_ascii_lowercase() {
        Ok(letter as usize - 'a' as usize)
    } else {
        Err(TrieError::InvalidLetter(letter))
    }
}

fn letter_at(index: usize) -> char {
    char::from(b'a' + index as u8)
}

fn indices(key: &str) -> Result<Vec<usize>> {
    if key.is_empty() {
        return Err(TrieError::EmptyKey);
    }
    key.chars().map(index_of).collect()
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub(crate) struct Node {
    pub(crate) letter: char,
    pub(crate) value: Option<i32>,
    pub(crate) children: [Option<Box<Node>>; ALPHABET_LEN],
}

/// Stores integer values under lowercase string keys.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Trie {
    pub(crate) root: Node,
    count: usize,
}

impl Node {
    fn new(letter: char) -> Self {
        Self {
            letter,
            value: None,
            children: std::array::from_fn(|_| None),
        }
    }

    fn root() -> Self {
        Self::new(ROOT_LETTER)
    }

    fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }

    // A non-root node with no value and no children must not survive;
    // prune() removes exactly these.
    fn is_redundant(&self) -> bool {
        self.value.is_none() && !self.has_children()
    }

    /// Walks down along `suffix`, stopping at the first missing edge.
    fn descend(&self, suffix: &[usize]) -> Option<&Node> {
        let mut node = self;
        for &index in suffix {
            node = node.children[index].as_deref()?;
        }
        Some(node)
    }

    fn descend_mut(&mut self, suffix: &[usize]) -> Option<&mut Node> {
        let mut node = self;
        for &index in suffix {
            node = node.children[index].as_deref_mut()?;
        }
        Some(node)
    }

    /// Clears the value at the end of `suffix` and prunes the chain of
    /// nodes this leaves redundant while the recursion unwinds. The
    /// ascent stops at the first node that still carries a value or
    /// another child, or at the root.
    fn remove_value(&mut self, suffix: &[usize]) -> Result<()> {
        match suffix.split_first() {
            None => {
                if self.value.is_none() {
                    return Err(TrieError::NoSuchValue);
                }
                self.value = None;
                Ok(())
            }
            Some((&index, rest)) => {
                let child = self.children[index]
                    .as_deref_mut()
                    .ok_or(TrieError::NoSuchValue)?;
                child.remove_value(rest)?;
                self.prune(index);
                Ok(())
            }
        }
    }

    /// Detaches the child at `index` if it has become redundant.
    fn prune(&mut self, index: usize) {
        if self.children[index]
            .as_deref()
            .map_or(false, Node::is_redundant)
        {
            self.children[index] = None;
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter)?;
        if let Some(value) = self.value {
            write!(f, "[{value}]")?;
        }
        if self.has_children() {
            f.write_str("(")?;
            for child in self.children.iter().flatten() {
                write!(f, "{child}")?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl Trie {
    /// Create a new Trie.
    pub fn new() -> Self {
        Self {
            root: Node::root(),
            count: 0,
        }
    }

    /// Clear the Trie.
    pub fn clear(&mut self) {
        self.root = Node::root();
        self.count = 0;
    }

    /// Store `value` under a previously unused `key`.
    ///
    /// Creates missing nodes along the path. Fails with
    /// [`TrieError::DuplicateKey`] if the key already holds a value,
    /// leaving all data unchanged.
    pub fn add(&mut self, key: &str, value: i32) -> Result<()> {
        let indices = indices(key)?;
        let mut node = &mut self.root;
        for &index in &indices {
            node = node.children[index]
                .get_or_insert_with(|| Box::new(Node::new(letter_at(index))));
        }
        if node.value.is_some() {
            // The full path pre-existed in this case, so nothing was
            // created on the way down.
            return Err(TrieError::DuplicateKey);
        }
        node.value = Some(value);
        self.count += 1;
        Ok(())
    }

    /// Overwrite the value stored under an existing `key`.
    ///
    /// Fails with [`TrieError::NoSuchValue`] if the key holds no
    /// value. Never creates or removes nodes.
    pub fn change(&mut self, key: &str, value: i32) -> Result<()> {
        let indices = indices(key)?;
        let node = self
            .root
            .descend_mut(&indices)
            .filter(|n| n.value.is_some())
            .ok_or(TrieError::NoSuchValue)?;
        node.value = Some(value);
        Ok(())
    }

    /// Remove the value stored under `key` and prune any suffix chain
    /// of nodes left without values or children.
    ///
    /// Fails with [`TrieError::NoSuchValue`] if the key holds no
    /// value. A node that still has children survives with its value
    /// cleared; its descendants are untouched.
    pub fn remove(&mut self, key: &str) -> Result<()> {
        let indices = indices(key)?;
        self.root.remove_value(&indices)?;
        self.count -= 1;
        Ok(())
    }

    /// Get the value stored under `key`, or `None` if the key holds no
    /// value. Keys with characters outside `'a'..='z'` can never hold
    /// a value and answer `None`.
    pub fn lookup(&self, key: &str) -> Option<i32> {
        let indices = indices(key).ok()?;
        self.root.descend(&indices)?.value
    }

    /// Does the Trie hold a value for the supplied key?
    pub fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Does the Trie contain any key starting with the supplied prefix?
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        match indices(prefix) {
            Ok(indices) => self.root.descend(&indices).is_some(),
            Err(_) => false,
        }
    }

    /// How many values does the Trie hold?
    #[inline(always)]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Is the Trie empty?
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Create an iterator over the Trie, yielding entries in
    /// lexicographic key order.
    pub fn iter(&self) -> TrieIterator<'_> {
        self.into_iter()
    }

    /// Render the tree structure as a single string, without a
    /// trailing newline. The empty Trie renders as `"+"`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}
