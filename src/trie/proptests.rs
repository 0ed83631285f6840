//! Property tests across the three encodings.
//!
//! These concentrate on the invariants that are easy to break silently:
//! compression and packing must not change the recognized language, and
//! the packed placement scan must stay correct when many small tables
//! fight over the same cells.

use proptest::prelude::*;
use std::collections::BTreeSet;

use super::*;

fn build_all(words: &[String]) -> (SimpleTrie, SimpleTrie, PackedTrie) {
    let mut simple = SimpleBuilder::new(CharMap::alpha());
    let mut sc = SuffixCompressedBuilder::new(CharMap::alpha());
    let mut packed = PackedBuilder::new(CharMap::alpha());
    for w in words {
        simple.add_word(w).unwrap();
        sc.add_word(w).unwrap();
        packed.add_word(w).unwrap();
    }
    (simple.build(), sc.build(), packed.build())
}

fn is_word<N: TrieNode>(root: N, word: &str) -> bool {
    word.bytes().fold(root, |n, c| n.follow(c)).is_word()
}

/// Probes: every inserted word, plus mutations that are usually absent.
fn probes(words: &[String]) -> Vec<String> {
    let mut probes: Vec<String> = words.to_vec();
    for w in words {
        probes.push(format!("{w}Q"));
        probes.push(format!("Q{w}"));
        if w.len() > 1 {
            probes.push(w[..w.len() - 1].to_string());
        }
    }
    probes
}

// Short words over a small alphabet collide hard, both in trie paths
// and in packed-table placement.
fn word_sets() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-E]{1,8}", 1..60)
}

proptest! {
    #[test]
    fn all_encodings_recognize_the_same_language(words in word_sets()) {
        let (simple, sc, packed) = build_all(&words);
        let expected: BTreeSet<&str> = words.iter().map(|w| w.as_str()).collect();
        for probe in probes(&words) {
            let want = expected.contains(probe.as_str());
            prop_assert_eq!(is_word(simple.root(), &probe), want, "simple: {}", probe);
            prop_assert_eq!(is_word(sc.root(), &probe), want, "compressed: {}", probe);
            prop_assert_eq!(is_word(packed.root(), &probe), want, "packed: {}", probe);
        }
    }

    #[test]
    fn enumeration_yields_exactly_the_inserted_set(words in word_sets()) {
        let (_, _, packed) = build_all(&words);
        let expected: BTreeSet<String> = words.iter().cloned().collect();
        let nav = Navigator::new(packed.root());
        let enumerated: Vec<String> = nav.words().collect();
        let as_set: BTreeSet<String> = enumerated.iter().cloned().collect();
        prop_assert_eq!(&as_set, &expected);
        // No duplicates, and depth-first over ascending symbols is
        // exactly lexicographic order.
        let in_order: Vec<String> = expected.into_iter().collect();
        prop_assert_eq!(enumerated, in_order);
    }

    #[test]
    fn enumeration_is_repeatable_and_stateless(words in word_sets(), prefix in "[A-E]{0,3}") {
        let (_, _, packed) = build_all(&words);
        let mut nav = Navigator::new(packed.root());
        nav.push_str(&prefix);
        let first: Vec<String> = nav.words().collect();
        let second: Vec<String> = nav.words().collect();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(nav.count(), first.len());
        prop_assert_eq!(nav.word(), prefix);
    }

    #[test]
    fn push_pop_is_exact(words in word_sets(), walk in "[A-F]{1,6}") {
        let (_, _, packed) = build_all(&words);
        let mut nav = Navigator::new(packed.root());
        for c in walk.bytes() {
            let word = nav.word();
            let state = (nav.is_prefix(), nav.is_word());
            nav.push(c);
            nav.pop();
            prop_assert_eq!(nav.word(), word);
            prop_assert_eq!((nav.is_prefix(), nav.is_word()), state);
            nav.push(c);
        }
    }

    /// Wide-fanout nodes share hash buckets and need many live slots,
    /// which stresses both the collision-resolving equality check and
    /// the placement-rejection rule of the packed scan.
    #[test]
    fn wide_fanout_nodes_pack_correctly(
        firsts in prop::collection::btree_set("[A-Z]", 1..20),
        seconds in prop::collection::btree_set("[A-Z]", 1..20),
    ) {
        let words: Vec<String> = firsts
            .iter()
            .flat_map(|a| seconds.iter().map(move |b| format!("{a}{b}")))
            .collect();
        let (_, _, packed) = build_all(&words);
        for w in &words {
            prop_assert!(is_word(packed.root(), w), "{}", w);
        }
        prop_assert_eq!(Navigator::new(packed.root()).count(), words.len());
    }
}
