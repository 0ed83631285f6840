//! The packed trie: every node's sparse transition table overlaid into
//! one flat array of cells.
//!
//! Each 32-bit cell splits into a low 8-bit key and a high 24-bit value.
//! Key `0` is a gap, key `1` marks "the node based here is a word", and
//! key `k + 1` marks "the node based here has a transition on symbol
//! `k`", with the child's base offset in the value. A node occupies the
//! cells `base .. base + max_symbol`, but only its *live* cells (the
//! terminal flag and present children) carry its keys; the rest may be
//! used by other nodes whose tables happen to interleave. A transition
//! lookup therefore checks that the key at `base + k` is exactly
//! `k + 1`, which cannot be faked by an overlaid neighbor.
//!
//! Packing follows the PhD thesis of F. M. Liang, as used for the
//! hyphenation dictionary of TeX. See <https://www.webcitation.org/5pqOfzlIA>.

use super::char_map::CharMap;
use super::compress::compress;
use super::simple::{SimpleBuilder, SimpleTrie};
use super::{Builder, TrieError, TrieNode};

const KEY_MASK: u32 = 0xff;
const VALUE_SHIFT: u32 = 8;

/// A trie packed into a single cell array.
///
/// Produced by [`PackedBuilder`]; immutable and cheap to share once
/// built. The cell array is a self-contained binary format: together
/// with the alphabet and the root offset it fully describes the trie.
pub struct PackedTrie {
    cells: Vec<u32>,
    char_map: CharMap,
    root: usize,
}

impl PackedTrie {
    #[inline]
    fn key(&self, idx: usize) -> u8 {
        (self.cells[idx] & KEY_MASK) as u8
    }

    #[inline]
    fn value(&self, idx: usize) -> u32 {
        self.cells[idx] >> VALUE_SHIFT
    }

    /// Looks up the transition table based at `idx` for offset `c`
    /// (0 = terminal flag, otherwise a symbol id). Returns the cell's
    /// value only if the cell's key proves the slot belongs to this
    /// node's table.
    fn index_at(&self, idx: usize, c: usize) -> Option<usize> {
        let k = idx + c;
        if k >= self.cells.len() || self.key(k) != (c + 1) as u8 {
            return None;
        }
        Some(self.value(k) as usize)
    }

    /// Returns a cursor positioned at the root of the trie.
    #[inline]
    pub fn root(&self) -> PackedNode<'_> {
        PackedNode {
            tbl: self,
            idx: Some(self.root),
        }
    }

    /// Returns the number of cells in the packed array.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns the number of gap cells (key `0`) left by packing.
    pub fn gap_count(&self) -> usize {
        (0..self.cells.len()).filter(|&i| self.key(i) == 0).count()
    }

    /// Returns the raw cell array, for callers that persist the trie.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Returns the base offset of the root node within the cell array.
    pub fn root_offset(&self) -> usize {
        self.root
    }

    /// Returns the alphabet this trie was built with.
    pub fn char_map(&self) -> &CharMap {
        &self.char_map
    }
}

/// A cursor into a [`PackedTrie`].
///
/// `idx` is the base offset of the current node, or `None` for the
/// sentinel produced by following a dead path.
#[derive(Clone, Copy)]
pub struct PackedNode<'t> {
    tbl: &'t PackedTrie,
    idx: Option<usize>,
}

impl<'t> TrieNode for PackedNode<'t> {
    #[inline]
    fn is_prefix(&self) -> bool {
        self.idx.is_some()
    }

    #[inline]
    fn is_word(&self) -> bool {
        self.idx.is_some_and(|idx| self.tbl.index_at(idx, 0).is_some())
    }

    fn follow(&self, c: u8) -> Self {
        let next = self.idx.and_then(|idx| {
            let sym = self.tbl.char_map.symbol_of(c);
            if sym == 0 {
                return None;
            }
            self.tbl.index_at(idx, sym as usize)
        });
        PackedNode {
            tbl: self.tbl,
            idx: next,
        }
    }

    #[inline]
    fn char_map(&self) -> &CharMap {
        &self.tbl.char_map
    }
}

/// One-shot serializer from a (compressed) arena trie to the cell array.
struct Packer<'t> {
    trie: &'t SimpleTrie,
    cells: Vec<u32>,
    /// Node id to assigned base offset plus one; 0 means not yet placed.
    /// Keyed on node identity, so a node shared by many parents after
    /// compression is packed exactly once.
    offsets: Vec<usize>,
}

impl<'t> Packer<'t> {
    fn set_key(&mut self, idx: usize, k: u8) {
        self.cells[idx] = (self.cells[idx] & !KEY_MASK) | k as u32;
    }

    fn set_value(&mut self, idx: usize, v: u32) {
        self.cells[idx] = (self.cells[idx] & KEY_MASK) | (v << VALUE_SHIFT);
    }

    fn key(&self, idx: usize) -> u8 {
        (self.cells[idx] & KEY_MASK) as u8
    }

    /// Grows the array so cells `i .. i + n` exist, and returns `i`.
    fn ensure_index(&mut self, i: usize, n: usize) -> usize {
        if self.cells.len() < i + n {
            self.cells.resize(i + n, 0);
        }
        i
    }

    /// Returns the index of the first gap strictly after `i`, or the
    /// array length if there is none.
    fn next_gap(&self, i: isize) -> isize {
        let mut j = i + 1;
        while (j as usize) < self.cells.len() && self.cells[j as usize] != 0 {
            j += 1;
        }
        j
    }

    /// Finds a base offset where the node can legally be placed, growing
    /// the array if no in-bounds position works.
    ///
    /// First-fit linear scan. Candidates are aligned so the node's first
    /// live slot lands on a gap (a valid base must put at least one live
    /// slot on an empty cell). A candidate is rejected if any cell in
    /// its table range already carries the key this node would be read
    /// with there (a coincidental match would make lookups ambiguous),
    /// or carries any foreign key where this node needs a live slot.
    /// Running past the current end of the array accepts immediately,
    /// which guarantees termination.
    fn find_index(&mut self, id: u32) -> usize {
        // TODO: keep a free-list of gaps instead of rescanning from the
        // front; packing a large dictionary spends most of its time here.
        let trie = self.trie;
        let node = &trie.nodes[id as usize];
        let n = node.children.len();
        let offset = if node.is_word {
            0
        } else {
            node.children
                .iter()
                .position(|c| c.is_some())
                .map(|i| i + 1)
                .unwrap_or(n + 1)
        } as isize;

        let mut i = self.next_gap(-1) - offset;
        while i < self.cells.len() as isize {
            if i >= 0 {
                let base = i as usize;
                let mut ok = true;
                for j in 0..=n {
                    if base + j >= self.cells.len() {
                        return self.ensure_index(base, n + 1);
                    }
                    let k = self.key(base + j);
                    if k == (j + 1) as u8 {
                        ok = false;
                        break;
                    }
                    if k == 0 {
                        continue;
                    }
                    if j == 0 && node.is_word {
                        ok = false;
                        break;
                    }
                    if j > 0 && node.children[j - 1].is_some() {
                        ok = false;
                        break;
                    }
                }
                if ok {
                    return self.ensure_index(base, n + 1);
                }
            }
            i = self.next_gap(i + offset) - offset;
        }
        let end = self.cells.len();
        self.ensure_index(end, n + 1)
    }

    /// Places a node (once) and recursively places its children,
    /// recording their base offsets in the transition cells' values.
    ///
    /// All of the node's own keys are written before any child is
    /// placed, so a child's scan can never claim a cell this node has
    /// already spoken for.
    fn insert_node(&mut self, id: u32) -> usize {
        if self.offsets[id as usize] != 0 {
            return self.offsets[id as usize] - 1;
        }
        let idx = self.find_index(id);
        self.offsets[id as usize] = idx + 1;

        let trie = self.trie;
        let node = &trie.nodes[id as usize];
        if node.is_word {
            self.set_key(idx, 1);
        }
        for (i, child) in node.children.iter().enumerate() {
            if child.is_some() {
                self.set_key(idx + i + 1, (i + 2) as u8);
            }
        }
        for (i, child) in node.children.iter().enumerate() {
            if let Some(child) = *child {
                let ci = self.insert_node(child);
                self.set_value(idx + i + 1, ci as u32);
            }
        }
        idx
    }
}

pub(crate) fn from_simple(trie: &SimpleTrie) -> PackedTrie {
    let mut packer = Packer {
        trie,
        cells: Vec::with_capacity(10240),
        offsets: vec![0; trie.node_count()],
    };
    let root = packer.insert_node(trie.root);
    PackedTrie {
        cells: packer.cells,
        char_map: trie.char_map.clone(),
        root,
    }
}

/// Builds a packed, suffix-compressed trie.
///
/// This is the densest encoding: words are inserted into an arena trie,
/// equivalent subtrees are merged, and the resulting DAG is serialized
/// into one cell array.
pub struct PackedBuilder {
    inner: SimpleBuilder,
}

impl PackedBuilder {
    /// Creates a builder over the given alphabet.
    pub fn new(char_map: CharMap) -> Self {
        PackedBuilder {
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

    /// Finalizes construction: compresses the trie and packs it.
    pub fn build(self) -> PackedTrie {
        let mut trie = self.inner.into_trie();
        compress(&mut trie);
        from_simple(&trie)
    }
}

impl Builder for PackedBuilder {
    fn add_word(&mut self, word: &str) -> Result<(), TrieError> {
        PackedBuilder::add_word(self, word)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::trie::compress::SuffixCompressedBuilder;

    fn build(words: &[&str]) -> PackedTrie {
        let mut b = PackedBuilder::new(CharMap::alpha());
        for w in words {
            b.add_word(w).unwrap();
        }
        b.build()
    }

    fn is_word(trie: &PackedTrie, word: &str) -> bool {
        word.bytes()
            .fold(trie.root(), |n, c| n.follow(c))
            .is_word()
    }

    #[test]
    fn packing_preserves_the_word_set() {
        let words = ["CAT", "CAB", "DOG", "CABBAGE", "CRIBBAGE"];
        let trie = build(&words);
        for w in words {
            assert!(is_word(&trie, w), "{w}");
        }
        for w in ["C", "CA", "CATS", "ABBAGE", "DOGS", "X"] {
            assert!(!is_word(&trie, w), "{w}");
        }
    }

    #[test]
    fn single_word_trie() {
        let trie = build(&["A"]);
        assert!(is_word(&trie, "A"));
        assert!(!is_word(&trie, "AA"));
        assert!(!trie.root().follow(b'B').is_prefix());
    }

    #[test]
    fn packed_is_smaller_than_one_table_per_node() {
        let words = ["BAKE", "BAKER", "CAKE", "CAKES", "FAKE", "LAKE"];
        let trie = build(&words);
        let width = trie.char_map().max_symbol() + 1;
        // Interleaving must beat giving each of the (compressed) nodes
        // its own full-width table.
        let mut b = SuffixCompressedBuilder::new(CharMap::alpha());
        for w in words {
            b.add_word(w).unwrap();
        }
        let (_, stats) = b.build_with_stats();
        assert!(trie.cell_count() < stats.nodes * width);
    }

    #[test]
    fn follow_rejects_unmapped_bytes() {
        let trie = build(&["CAT"]);
        let n = trie.root().follow(b'C').follow(b'7');
        assert!(!n.is_prefix());
        assert!(!n.is_word());
    }

    #[test]
    fn live_keys_are_never_overwritten() {
        // A word list with lots of small overlapping tables; walking
        // every inserted word afterwards proves no placement clobbered
        // an earlier node's live cells.
        let words = [
            "A", "AB", "ABE", "AE", "B", "BE", "BED", "CAB", "CABBED", "DAB",
            "EBB", "ED", "DEB", "BAD", "BADE", "ABED",
        ];
        let trie = build(&words);
        for w in words {
            assert!(is_word(&trie, w), "{w}");
        }
        assert!(!is_word(&trie, "E"));
        assert!(!is_word(&trie, "CABB"));
    }

    #[test]
    fn tables_overlap_in_the_cell_array() {
        let words = ["CAT", "CAB", "DOG", "CABBAGE", "CRIBBAGE"];
        let trie = build(&words);
        let width = trie.char_map().max_symbol() + 1;
        let mut b = SuffixCompressedBuilder::new(CharMap::alpha());
        for w in words {
            b.add_word(w).unwrap();
        }
        let (_, stats) = b.build_with_stats();
        // Strictly fewer cells than nodes times table width shows that
        // the sparse tables really interleave.
        assert!(trie.cell_count() < stats.nodes * width);
        assert!(trie.gap_count() < trie.cell_count());
    }

    #[test]
    fn cells_round_trip_through_the_documented_layout() {
        let trie = build(&["HI", "HO"]);
        let cells = trie.cells();
        let root = trie.root_offset();
        // Root is not a word: key at the base must not be 1.
        assert_ne!(cells[root] & 0xff, 1);
        // Symbol H = 8: key at base + 8 is 9, value is the child base.
        let h = root + 8;
        assert_eq!(cells[h] & 0xff, 9);
        let child = (cells[h] >> 8) as usize;
        // The child has transitions on I (9) and O (15), both words.
        for sym in [9usize, 15] {
            assert_eq!(cells[child + sym] & 0xff, (sym + 1) as u32);
            let leaf = (cells[child + sym] >> 8) as usize;
            assert_eq!(cells[leaf] & 0xff, 1, "leaf must carry the terminal key");
        }
    }
}
