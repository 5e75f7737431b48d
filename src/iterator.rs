//! Provides Trie iterators.
//!
//! Iteration is depth-first over the fixed child array, so entries
//! come out in lexicographic key order without any extra sorting.
//! A shorter key always precedes its extensions ("ab" before "abc").

use crate::trie::{Node, Trie};

/// Iterator Item
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeyValue {
    pub key: String,
    pub value: i32,
}

/// Iterator over the entries of a Trie.
#[derive(Debug)]
pub struct TrieIterator<'a> {
    stack: Vec<(&'a Node, String)>,
}

impl<'a> IntoIterator for &'a Trie {
    type Item = KeyValue;
    type IntoIter = TrieIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        TrieIterator {
            stack: vec![(&self.root, String::new())],
        }
    }
}

impl<'a> Iterator for TrieIterator<'a> {
    type Item = KeyValue;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, key)) = self.stack.pop() {
            // Children are pushed in reverse letter order so that the
            // smallest letter is popped first.
            for slot in node.children.iter().rev() {
                if let Some(child) = slot.as_deref() {
                    let mut child_key = key.clone();
                    child_key.push(child.letter);
                    self.stack.push((child, child_key));
                }
            }
            if let Some(value) = node.value {
                return Some(KeyValue { key, value });
            }
        }
        None
    }
}
