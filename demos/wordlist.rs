//! Example: word lookup, prefix checks, and enumeration over a packed trie.
//!
//! Run with: cargo run --example wordlist

use packtrie::trie::{CharMap, Navigator, PackedBuilder, TrieNode};

fn main() {
    let words = ["BAKE", "BAKED", "BAKER", "CAKE", "CAKED", "FAKE", "LAKE"];
    let mut builder = PackedBuilder::new(CharMap::alpha());
    for word in words {
        builder.add_word(word).unwrap();
    }
    let trie = builder.build();

    let is_word = |w: &str| w.bytes().fold(trie.root(), |n, c| n.follow(c)).is_word();
    let has_prefix = |p: &str| p.bytes().fold(trie.root(), |n, c| n.follow(c)).is_prefix();

    // Word lookup
    println!("Word lookup:");
    for word in ["BAKE", "BAKER", "BAKES", "CAKE", "LAKE", "MAKE"] {
        println!("  {word}: {}", if is_word(word) { "yes" } else { "no" });
    }

    // Prefix checking
    println!("\nPrefix checking:");
    for prefix in ["BA", "CAK", "MA", "FAK"] {
        println!("  {prefix}*: {}", if has_prefix(prefix) { "yes" } else { "no" });
    }

    // List all words via a navigator
    let nav = Navigator::new(trie.root());
    println!("\nAll {} words: {:?}", nav.count(), nav.all());
    println!(
        "Packed into {} cells ({} gaps)",
        trie.cell_count(),
        trie.gap_count()
    );
}
