//! A stateful cursor for walking a trie with backtracking and word
//! enumeration.

use smallvec::SmallVec;

use super::TrieNode;

/// A `Navigator` walks a trie while keeping previous state (the current
/// prefix and the nodes back up the trie), so traversals can backtrack.
///
/// It works over any encoding through the [`TrieNode`] contract. The
/// navigator only mutates its own stack and prefix buffer, never the
/// trie, so independent navigators over one trie are freely concurrent.
#[derive(Clone)]
pub struct Navigator<N: TrieNode> {
    /// Visited nodes, root first. Never empty.
    nodes: Vec<N>,
    /// The bytes pushed so far, including any that led off the trie.
    prefix: Vec<u8>,
}

impl<N: TrieNode> Navigator<N> {
    /// Creates a navigator positioned at the given trie node.
    pub fn new(root: N) -> Self {
        let mut nodes = Vec::with_capacity(20);
        nodes.push(root);
        Navigator {
            nodes,
            prefix: Vec::with_capacity(20),
        }
    }

    #[inline]
    fn last_node(&self) -> &N {
        self.nodes
            .last()
            .expect("Navigator always holds at least the root node")
    }

    /// Reports whether the current prefix can be extended to a word.
    #[inline]
    pub fn is_prefix(&self) -> bool {
        self.last_node().is_prefix()
    }

    /// Reports whether the current prefix is itself a word.
    #[inline]
    pub fn is_word(&self) -> bool {
        self.last_node().is_word()
    }

    /// Returns the current prefix.
    pub fn word(&self) -> String {
        String::from_utf8_lossy(&self.prefix).into_owned()
    }

    /// Descends the trie along the given byte.
    ///
    /// The byte is recorded even if it leads off the trie, so
    /// [`word`](Self::word) keeps reflecting the attempted prefix; the
    /// position just stops being a valid prefix.
    pub fn push(&mut self, c: u8) {
        self.prefix.push(c);
        let next = self.last_node().follow(c);
        self.nodes.push(next);
    }

    /// Descends the trie along each byte of the given string.
    pub fn push_str(&mut self, s: &str) {
        for c in s.bytes() {
            self.push(c);
        }
    }

    /// Removes the last byte of the prefix, backing up the trie.
    ///
    /// # Panics
    ///
    /// Panics if the navigator is at the root. Popping past the root is
    /// a programming error, not a recoverable condition.
    pub fn pop(&mut self) {
        assert!(
            self.nodes.len() > 1,
            "Navigator::pop called at the root"
        );
        self.prefix.pop();
        self.nodes.pop();
    }

    /// Returns to the root of the trie, clearing the prefix.
    pub fn reset(&mut self) {
        self.prefix.clear();
        self.nodes.truncate(1);
    }

    /// Returns a lazy iterator over every word starting with the
    /// current prefix, in alphabet order.
    ///
    /// The iterator walks a private copy of the cursor state, so each
    /// call is independent, the navigator itself is untouched, and the
    /// iterator can be dropped early without consequence. If the
    /// current position is not a valid prefix the iterator is empty; if
    /// it is itself a word, that word comes first.
    pub fn words(&self) -> Words<N> {
        let syms: SmallVec<[u8; 32]> = self.last_node().char_map().symbols().into();
        Words {
            nav: self.clone(),
            frames: Vec::new(),
            syms,
            started: false,
        }
    }

    /// Returns all words starting with the current prefix.
    pub fn all(&self) -> Vec<String> {
        self.words().collect()
    }

    /// Counts the words starting with the current prefix.
    pub fn count(&self) -> usize {
        self.words().count()
    }
}

/// Lazy iterator over the words reachable from a navigator position.
///
/// Created by [`Navigator::words`]. Performs a depth-first walk,
/// descending one representative byte per alphabet symbol in ascending
/// symbol order and backtracking after each subtree.
pub struct Words<N: TrieNode> {
    nav: Navigator<N>,
    /// Per-depth index of the next symbol to try. One frame per node on
    /// the walk below (and including) the starting position.
    frames: Vec<usize>,
    syms: SmallVec<[u8; 32]>,
    started: bool,
}

impl<N: TrieNode> Iterator for Words<N> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if !self.started {
            self.started = true;
            if !self.nav.is_prefix() {
                return None;
            }
            self.frames.push(0);
            if self.nav.is_word() {
                return Some(self.nav.word());
            }
        }
        loop {
            let frame = self.frames.last_mut()?;
            let idx = *frame;
            if idx < self.syms.len() {
                *frame += 1;
                self.nav.push(self.syms[idx]);
                if self.nav.is_prefix() {
                    self.frames.push(0);
                    if self.nav.is_word() {
                        return Some(self.nav.word());
                    }
                } else {
                    self.nav.pop();
                }
            } else {
                self.frames.pop();
                if !self.frames.is_empty() {
                    self.nav.pop();
                }
            }
        }
    }
}
