//! Suffix compression: merging structurally identical subtrees.
//!
//! Two nodes are equivalent if they have the same terminal flag and, for
//! every symbol, either both lack the transition or the two children are
//! (recursively) equivalent. Compression rewires every parent of an
//! equivalent pair to a single canonical node, turning the tree into a
//! DAG. Candidates are found with a cheap structural hash; equality is
//! always confirmed with the full recursive check, so hash collisions
//! cost time but never correctness.

use hashbrown::HashMap;

use super::char_map::CharMap;
use super::simple::{Node, SimpleBuilder, SimpleTrie};
use super::{Builder, TrieError};

// Hash mixing constants. ABSENT keeps an empty slot distinct from any
// child hash; a computed hash of 0 is remapped because 0 marks an
// uncached entry in the memo table.
const SLOT_MIX: u32 = 167;
const ABSENT: u32 = 99;
const WORD_MIX: u32 = 7;
const ZERO_REMAP: u32 = 42;

/// Statistics gathered while compressing a trie.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompressStats {
    /// Canonical nodes remaining after compression.
    pub nodes: usize,
    /// Nodes that were merged into an existing canonical node.
    pub duplicates: usize,
    /// Distinct nodes that landed in an already occupied hash bucket.
    pub collisions: usize,
}

struct CompressTable {
    /// Structural hash per node id; 0 means not yet computed.
    hashes: Vec<u32>,
    /// Hash value to the canonical node ids sharing it.
    buckets: HashMap<u32, Vec<u32>>,
    stats: CompressStats,
}

impl CompressTable {
    fn new(node_count: usize) -> Self {
        CompressTable {
            hashes: vec![0; node_count],
            buckets: HashMap::new(),
            stats: CompressStats::default(),
        }
    }

    /// Computes (and memoizes) the structural hash of a node whose
    /// children are already canonical.
    fn hash(&mut self, nodes: &[Node], id: u32) -> u32 {
        if self.hashes[id as usize] != 0 {
            return self.hashes[id as usize];
        }
        let mut result = 0u32;
        for i in 0..nodes[id as usize].children.len() {
            result = result.wrapping_mul(SLOT_MIX);
            match nodes[id as usize].children[i] {
                Some(child) => {
                    let ch = self.hash(nodes, child);
                    result = result.wrapping_add((i as u32 + 1).wrapping_mul(ch));
                }
                None => {
                    result = result.wrapping_add((i as u32 + 1).wrapping_mul(ABSENT));
                }
            }
        }
        if nodes[id as usize].is_word {
            result = result.wrapping_mul(WORD_MIX).wrapping_add(1);
        }
        if result == 0 {
            result = ZERO_REMAP;
        }
        self.hashes[id as usize] = result;
        result
    }

    /// Returns the canonical node for `id`, registering `id` itself if
    /// no structurally equal node has been seen before.
    fn insert_node(&mut self, nodes: &[Node], id: u32) -> u32 {
        let h = self.hash(nodes, id);
        if let Some(bucket) = self.buckets.get(&h) {
            if let Some(&twin) = bucket.iter().find(|&&s| nodes_equal(nodes, s, id)) {
                self.stats.duplicates += 1;
                return twin;
            }
            self.stats.collisions += 1;
        }
        self.buckets.entry(h).or_default().push(id);
        self.stats.nodes += 1;
        id
    }

    /// Canonicalizes the subtree rooted at `id`, bottom-up, so every
    /// equality check compares already canonical children.
    fn compress_node(&mut self, nodes: &mut [Node], id: u32) -> u32 {
        for i in 0..nodes[id as usize].children.len() {
            if let Some(child) = nodes[id as usize].children[i] {
                let canonical = self.compress_node(nodes, child);
                nodes[id as usize].children[i] = Some(canonical);
            }
        }
        self.insert_node(nodes, id)
    }
}

/// Structural equality. Expensive: recurses through both subtrees, but
/// shared canonical children short-circuit on the identity test.
fn nodes_equal(nodes: &[Node], s: u32, t: u32) -> bool {
    if s == t {
        return true;
    }
    let (sn, tn) = (&nodes[s as usize], &nodes[t as usize]);
    if sn.is_word != tn.is_word {
        return false;
    }
    for i in 0..sn.children.len() {
        if sn.children[i].is_some() != tn.children[i].is_some() {
            return false;
        }
    }
    for i in 0..sn.children.len() {
        if let (Some(sc), Some(tc)) = (sn.children[i], tn.children[i]) {
            if !nodes_equal(nodes, sc, tc) {
                return false;
            }
        }
    }
    true
}

/// Compresses a trie in place, merging equivalent subtrees into shared
/// nodes and replacing the root with its canonical representative.
///
/// Nodes that lose all parents stay allocated in the arena but become
/// unreachable; the table of hashes and buckets is discarded on return.
pub(crate) fn compress(trie: &mut SimpleTrie) -> CompressStats {
    let mut table = CompressTable::new(trie.nodes.len());
    trie.root = table.compress_node(&mut trie.nodes, trie.root);
    table.stats
}

/// Builds a suffix-compressed trie: a [`SimpleTrie`] whose equivalent
/// subtrees have been merged into shared nodes.
pub struct SuffixCompressedBuilder {
    inner: SimpleBuilder,
}

impl SuffixCompressedBuilder {
    /// Creates a builder over the given alphabet.
    pub fn new(char_map: CharMap) -> Self {
        SuffixCompressedBuilder {
            inner: SimpleBuilder::new(char_map),
        }
    }

    /// Adds a word to the trie.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::InvalidCharacter`] if the word contains a
    /// byte the alphabet rejects.
    pub fn add_word(&mut self, word: &str) -> Result<(), TrieError> {
        self.inner.add_word(word)
    }

    /// Finalizes construction, compresses, and returns the trie.
    pub fn build(self) -> SimpleTrie {
        self.build_with_stats().0
    }

    /// Like [`build`](Self::build), but also reports compression
    /// statistics.
    pub fn build_with_stats(self) -> (SimpleTrie, CompressStats) {
        let mut trie = self.inner.into_trie();
        let stats = compress(&mut trie);
        (trie, stats)
    }
}

impl Builder for SuffixCompressedBuilder {
    fn add_word(&mut self, word: &str) -> Result<(), TrieError> {
        SuffixCompressedBuilder::add_word(self, word)
    }
}
