//! # packtrie
//!
//! A library for storing sets of words in compact [trie](https://en.wikipedia.org/wiki/Trie)
//! structures, with methods to interrogate those sets.
//!
//! Three encodings of the same word set are provided, in increasing order of
//! density:
//!
//! - a plain arena trie ([`SimpleBuilder`](trie::SimpleBuilder)), where each
//!   node owns a child slot per alphabet symbol;
//! - a suffix-compressed trie ([`SuffixCompressedBuilder`](trie::SuffixCompressedBuilder)),
//!   which merges structurally identical subtrees into shared nodes, turning
//!   the tree into a DAG. For English word lists this is very effective: a
//!   69k-word dictionary shrinks from roughly 170k nodes to 32k;
//! - a packed trie ([`PackedBuilder`](trie::PackedBuilder)), which interleaves
//!   every node's sparse transition table into one flat array of cells, as
//!   described in Franklin Liang's PhD thesis (the technique behind TeX's
//!   hyphenation dictionaries). Construction is slower and lookups slightly
//!   less direct, but the same dictionary fits in about 300KB.
//!
//! All three encodings expose the same node interface
//! ([`TrieNode`](trie::TrieNode)), so traversal code — including the stateful
//! [`Navigator`](trie::Navigator) cursor — is encoding-agnostic.
//!
//! ## Quick start
//!
//! ```
//! use packtrie::trie::{CharMap, PackedBuilder, TrieNode};
//!
//! let mut builder = PackedBuilder::new(CharMap::alpha());
//! for word in ["CAT", "CAB", "DOG"] {
//!     builder.add_word(word).unwrap();
//! }
//! let trie = builder.build();
//!
//! let node = trie.root().follow(b'C').follow(b'A').follow(b'T');
//! assert!(node.is_word());
//! assert!(!trie.root().follow(b'C').follow(b'A').is_word());
//! assert!(trie.root().follow(b'C').follow(b'A').is_prefix());
//! ```
//!
//! ## Navigating and enumerating
//!
//! A [`Navigator`](trie::Navigator) keeps track of the current prefix and
//! supports backtracking and word enumeration:
//!
//! ```
//! use packtrie::trie::{CharMap, Navigator, PackedBuilder};
//!
//! let mut builder = PackedBuilder::new(CharMap::alpha());
//! for word in ["CAT", "CAB", "CABBAGE", "DOG"] {
//!     builder.add_word(word).unwrap();
//! }
//! let trie = builder.build();
//!
//! let mut nav = Navigator::new(trie.root());
//! nav.push_str("CA");
//! assert!(nav.is_prefix());
//! assert_eq!(nav.count(), 3);
//! assert_eq!(nav.all(), ["CAB", "CABBAGE", "CAT"]);
//!
//! nav.push(b'T');
//! assert!(nav.is_word());
//! assert_eq!(nav.word(), "CAT");
//! ```
//!
//! ## Reading word lists
//!
//! [`read_words`](trie::read_words) fills any builder from a line-oriented
//! reader, skipping blank lines, `#` comments, and words the alphabet
//! rejects:
//!
//! ```
//! use packtrie::trie::{CharMap, SuffixCompressedBuilder, read_words};
//!
//! let list = "CAT\nCAB\n# a comment\nR2D2\nDOG\n";
//! let mut builder = SuffixCompressedBuilder::new(CharMap::alpha());
//! let summary = read_words(&mut builder, list.as_bytes()).unwrap();
//! assert_eq!(summary.added, 3);
//! assert_eq!(summary.rejected, 1);
//! ```

#![warn(missing_docs)]

/// Core trie data structures: the alphabet map, the three trie encodings,
/// and the navigator.
pub mod trie;
