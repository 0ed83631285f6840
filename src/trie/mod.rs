//! Trie data structures over a byte alphabet.
//!
//! The [`TrieNode`] trait is the capability every encoding provides;
//! the [`Builder`] trait is what [`read_words`] needs to fill any of
//! them from a word list.

/// Alphabet mapping from input bytes to symbol ids.
pub mod char_map;
/// Suffix compression of an arena trie into a DAG.
pub mod compress;
/// The encoding-agnostic traversal cursor.
pub mod navigator;
/// The packed single-array encoding.
pub mod packed;
/// The arena trie and its builder.
pub mod simple;

#[cfg(test)]
mod proptests;

pub use char_map::CharMap;
pub use compress::{CompressStats, SuffixCompressedBuilder};
pub use navigator::{Navigator, Words};
pub use packed::{PackedBuilder, PackedNode, PackedTrie};
pub use simple::{SimpleBuilder, SimpleNode, SimpleTrie};

use std::error::Error;
use std::fmt;
use std::io::{self, BufRead};

/// Information about the set of words reachable after a particular
/// (implicit) prefix.
///
/// Implemented by the cursor type of each encoding. Cursors are cheap
/// `Copy` values borrowing an immutable trie; following a byte with no
/// continuation yields a sentinel cursor, on which further calls are
/// valid but always report a dead position.
pub trait TrieNode: Copy {
    /// Reports whether any word continues from the current position.
    fn is_prefix(&self) -> bool;
    /// Reports whether the current position marks the end of a word.
    fn is_word(&self) -> bool;
    /// Appends `c` to the implicit prefix, descending the trie.
    fn follow(&self, c: u8) -> Self;
    /// Returns the alphabet the trie was built with.
    fn char_map(&self) -> &CharMap;
}

/// The word-insertion half of trie construction, shared by all three
/// builders so word sources don't care which encoding they fill.
pub trait Builder {
    /// Adds the given word to the trie under construction.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::InvalidCharacter`] if the word contains a
    /// byte the alphabet rejects. A failed insertion leaves the trie
    /// unchanged.
    fn add_word(&mut self, word: &str) -> Result<(), TrieError>;
}

/// Errors that can occur while building a trie.
#[derive(Debug, PartialEq, Eq)]
pub enum TrieError {
    /// The word contains a byte the alphabet rejects. The word was not
    /// inserted, not even partially.
    InvalidCharacter {
        /// The offending word.
        word: String,
        /// The first rejected byte within it.
        byte: u8,
    },
}

impl fmt::Display for TrieError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrieError::InvalidCharacter { word, byte } => {
                write!(
                    f,
                    "word {word:?} contains unsupported byte {:#04x}",
                    byte
                )
            }
        }
    }
}

impl Error for TrieError {}

/// The outcome of [`read_words`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReadSummary {
    /// Words successfully added to the builder.
    pub added: usize,
    /// Words the alphabet rejected and that were skipped.
    pub rejected: usize,
}

/// Reads a word list (one word per line), adding every word to the
/// given builder.
///
/// Leading and trailing whitespace is trimmed; empty lines and lines
/// starting with `#` are skipped. Words the builder rejects are counted
/// and skipped rather than aborting the read, so one bad line doesn't
/// ruin a dictionary.
///
/// # Errors
///
/// Returns any I/O error from the underlying reader.
pub fn read_words<B: Builder, R: BufRead>(
    builder: &mut B,
    mut reader: R,
) -> io::Result<ReadSummary> {
    let mut summary = ReadSummary::default();
    // Call read_line repeatedly instead of using lines() so the same
    // buffer is reused instead of allocating a string per line.
    let mut buf = String::with_capacity(80);
    loop {
        if reader.read_line(&mut buf)? == 0 {
            break;
        }
        let word = buf.trim();
        if !word.is_empty() && !is_comment(word) {
            match builder.add_word(word) {
                Ok(()) => summary.added += 1,
                Err(TrieError::InvalidCharacter { .. }) => summary.rejected += 1,
            }
        }
        buf.clear();
    }
    Ok(summary)
}

/// Returns true if this line is a comment.
fn is_comment(line: &str) -> bool {
    line.starts_with('#')
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    const INPUT: &str = "\nCAT\nCAB\nDOG\nCABBAGE\nCRIBBAGE\n";

    fn fill<B: Builder>(b: &mut B) -> ReadSummary {
        read_words(b, INPUT.as_bytes()).unwrap()
    }

    /// The shared scenario, run once per encoding below, so the
    /// navigator is demonstrably encoding-agnostic.
    fn scenario<N: TrieNode>(nav: &mut Navigator<N>) {
        // Following CAT letter by letter stays a prefix and ends a word.
        nav.push(b'C');
        assert!(nav.is_prefix());
        nav.push(b'A');
        assert!(nav.is_prefix());

        // Enumeration from "CA" sees exactly CAB, CABBAGE, CAT.
        let words = nav.all();
        assert_eq!(words, ["CAB", "CABBAGE", "CAT"]);
        assert_eq!(nav.count(), 3);
        assert_eq!(nav.count(), 3, "enumeration must be repeatable");

        nav.push(b'T');
        assert!(nav.is_prefix());
        assert!(nav.is_word());

        // Backing up one letter and taking the B branch lands on CAB.
        nav.pop();
        nav.push(b'B');
        assert!(nav.is_word());
        assert_eq!(nav.word(), "CAB");

        // A garbage tail keeps the prefix text but kills the position.
        nav.reset();
        nav.push_str("CAZYXW");
        assert_eq!(nav.word(), "CAZYXW");
        assert!(!nav.is_word());
        assert!(!nav.is_prefix());

        // Reset restores the root.
        nav.reset();
        assert_eq!(nav.word(), "");
        nav.push_str("DOG");
        assert!(nav.is_word());

        // All five words, 24 letters total, from the root.
        nav.reset();
        let all = nav.all();
        assert_eq!(all.len(), 5);
        assert_eq!(all.iter().map(|w| w.len()).sum::<usize>(), 24);
        assert_eq!(
            all,
            all.iter().cloned().sorted().collect::<Vec<_>>(),
            "enumeration is in alphabet order"
        );
    }

    #[test]
    fn simple_scenario() {
        let mut b = SimpleBuilder::new(CharMap::alpha());
        assert_eq!(fill(&mut b), ReadSummary { added: 5, rejected: 0 });
        let trie = b.build();
        scenario(&mut Navigator::new(trie.root()));
    }

    #[test]
    fn suffix_compressed_scenario() {
        let mut b = SuffixCompressedBuilder::new(CharMap::alpha());
        fill(&mut b);
        let trie = b.build();
        scenario(&mut Navigator::new(trie.root()));
    }

    #[test]
    fn packed_scenario() {
        let mut b = PackedBuilder::new(CharMap::alpha());
        fill(&mut b);
        let trie = b.build();
        scenario(&mut Navigator::new(trie.root()));
    }

    #[test]
    fn read_words_skips_bad_lines() {
        let input = "CAT\n  DOG  \n# comment\n\nR2D2\nM1X\nEWE\n";
        let mut b = PackedBuilder::new(CharMap::alpha());
        let summary = read_words(&mut b, input.as_bytes()).unwrap();
        assert_eq!(summary, ReadSummary { added: 3, rejected: 2 });
        let trie = b.build();
        let nav = Navigator::new(trie.root());
        assert_eq!(nav.all(), ["CAT", "DOG", "EWE"]);
    }

    #[test]
    fn read_words_handles_missing_final_newline() {
        let mut b = SimpleBuilder::new(CharMap::alpha());
        let summary = read_words(&mut b, "CAT\nDOG".as_bytes()).unwrap();
        assert_eq!(summary.added, 2);
    }

    #[test]
    fn invalid_character_does_not_change_the_word_set() {
        let mut b = PackedBuilder::new(CharMap::alpha());
        b.add_word("CAT").unwrap();
        let err = b.add_word("C4T").unwrap_err();
        assert_eq!(
            err,
            TrieError::InvalidCharacter {
                word: "C4T".to_string(),
                byte: b'4',
            }
        );
        assert_eq!(
            err.to_string(),
            "word \"C4T\" contains unsupported byte 0x34"
        );
        let trie = b.build();
        assert_eq!(Navigator::new(trie.root()).all(), ["CAT"]);
    }

    #[test]
    fn hyphens_and_apostrophes_are_words_too() {
        let mut b = PackedBuilder::new(CharMap::alpha());
        b.add_word("O'CLOCK").unwrap();
        b.add_word("X-RAY").unwrap();
        let trie = b.build();
        let mut nav = Navigator::new(trie.root());
        nav.push_str("O'CLOCK");
        assert!(nav.is_word());
        nav.reset();
        nav.push_str("X-RAY");
        assert!(nav.is_word());
    }
}
