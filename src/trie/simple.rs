//! The naive arena trie: simple to build, memory-hungry to keep.

use smallvec::SmallVec;

use super::char_map::CharMap;
use super::{Builder, TrieError, TrieNode};

/// A single trie node in the arena.
///
/// `children[i]` holds the arena id of the subtrie reached on symbol
/// `i + 1`, if any. Nodes are mutated only during insertion; after
/// [`SimpleBuilder::build`] (and in particular after compression) they
/// are immutable and may be shared by several parents.
pub(crate) struct Node {
    pub(crate) is_word: bool,
    pub(crate) children: Box<[Option<u32>]>,
}

impl Node {
    fn new(width: usize) -> Self {
        Node {
            is_word: false,
            children: vec![None; width].into_boxed_slice(),
        }
    }
}

/// A trie stored as an arena of nodes addressed by integer handles.
///
/// This is the output of [`SimpleBuilder`] and (after in-place
/// suffix compression) of
/// [`SuffixCompressedBuilder`](super::SuffixCompressedBuilder). Once
/// built it is immutable, so any number of cursors may traverse it
/// concurrently.
pub struct SimpleTrie {
    pub(crate) char_map: CharMap,
    pub(crate) nodes: Vec<Node>,
    pub(crate) root: u32,
}

impl SimpleTrie {
    fn new(char_map: CharMap) -> Self {
        let width = char_map.max_symbol();
        SimpleTrie {
            char_map,
            nodes: vec![Node::new(width)],
            root: 0,
        }
    }

    fn alloc_node(&mut self) -> u32 {
        let id = self.nodes.len() as u32;
        self.nodes.push(Node::new(self.char_map.max_symbol()));
        id
    }

    /// Returns a cursor positioned at the root of the trie.
    #[inline]
    pub fn root(&self) -> SimpleNode<'_> {
        SimpleNode {
            trie: self,
            node: Some(self.root),
        }
    }

    /// Returns the number of nodes allocated in the arena.
    ///
    /// After compression this includes nodes that became unreachable
    /// when their subtree was merged with a shared twin.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the alphabet this trie was built with.
    pub fn char_map(&self) -> &CharMap {
        &self.char_map
    }
}

/// A cursor into a [`SimpleTrie`].
///
/// The cursor is a cheap `Copy` value; following a byte with no
/// transition (or one the alphabet rejects) yields a sentinel cursor for
/// which [`is_prefix`](TrieNode::is_prefix) is false.
#[derive(Clone, Copy)]
pub struct SimpleNode<'t> {
    trie: &'t SimpleTrie,
    node: Option<u32>,
}

impl<'t> TrieNode for SimpleNode<'t> {
    #[inline]
    fn is_prefix(&self) -> bool {
        self.node.is_some()
    }

    #[inline]
    fn is_word(&self) -> bool {
        self.node
            .is_some_and(|id| self.trie.nodes[id as usize].is_word)
    }

    fn follow(&self, c: u8) -> Self {
        let next = self.node.and_then(|id| {
            let sym = self.trie.char_map.symbol_of(c);
            if sym == 0 {
                return None;
            }
            self.trie.nodes[id as usize].children[sym as usize - 1]
        });
        SimpleNode {
            trie: self.trie,
            node: next,
        }
    }

    #[inline]
    fn char_map(&self) -> &CharMap {
        &self.trie.char_map
    }
}

/// Builds a [`SimpleTrie`] by inserting words one at a time.
///
/// Words may be added in any order, and adding the same word twice is a
/// no-op. This is the construction path shared by all three encodings;
/// the denser builders wrap it and post-process the result.
pub struct SimpleBuilder {
    trie: SimpleTrie,
}

impl SimpleBuilder {
    /// Creates a builder over the given alphabet.
    pub fn new(char_map: CharMap) -> Self {
        SimpleBuilder {
            trie: SimpleTrie::new(char_map),
        }
    }

    /// Adds a word to the trie.
    ///
    /// Insertion is atomic: every byte is translated before any node is
    /// created, so a rejected word leaves the trie exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::InvalidCharacter`] if the word contains a
    /// byte the alphabet rejects.
    pub fn add_word(&mut self, word: &str) -> Result<(), TrieError> {
        let bytes = word.as_bytes();
        let symbols: SmallVec<[u8; 32]> = bytes
            .iter()
            .map(|&b| self.trie.char_map.symbol_of(b))
            .collect();
        if let Some(pos) = symbols.iter().position(|&s| s == 0) {
            return Err(TrieError::InvalidCharacter {
                word: word.to_string(),
                byte: bytes[pos],
            });
        }
        let mut cur = self.trie.root;
        for &sym in &symbols {
            let slot = sym as usize - 1;
            cur = match self.trie.nodes[cur as usize].children[slot] {
                Some(next) => next,
                None => {
                    let id = self.trie.alloc_node();
                    self.trie.nodes[cur as usize].children[slot] = Some(id);
                    id
                }
            };
        }
        self.trie.nodes[cur as usize].is_word = true;
        Ok(())
    }

    /// Finalizes construction and returns the trie.
    pub fn build(self) -> SimpleTrie {
        self.trie
    }

    /// Consumes the builder, yielding the raw trie for post-processing.
    pub(crate) fn into_trie(self) -> SimpleTrie {
        self.trie
    }
}

impl Builder for SimpleBuilder {
    fn add_word(&mut self, word: &str) -> Result<(), TrieError> {
        SimpleBuilder::add_word(self, word)
    }
}
