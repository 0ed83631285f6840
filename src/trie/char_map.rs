//! Alphabet mapping from raw input bytes to small symbol ids.

/// A `CharMap` describes the bytes a trie accepts.
///
/// Each of the 256 possible input bytes maps to a symbol id. Id `0` means
/// the byte is rejected: a word containing it cannot be stored. Distinct
/// bytes mapping to the same nonzero id are identified within the trie,
/// which is how case folding works.
///
/// The largest id present ([`max_symbol`](CharMap::max_symbol)) fixes the
/// child-array width of trie nodes, so maps should use a dense range of
/// small ids.
#[derive(Clone, Debug)]
pub struct CharMap {
    table: [u8; 256],
    max: u8,
    /// One representative byte per symbol id, in ascending id order.
    /// The representative is the smallest byte mapping to the id.
    symbols: Vec<u8>,
}

impl CharMap {
    /// Creates a `CharMap` from an explicit byte-to-id table.
    ///
    /// # Examples
    ///
    /// A two-symbol alphabet accepting only `0` and `1`:
    ///
    /// ```
    /// use packtrie::trie::CharMap;
    ///
    /// let mut table = [0u8; 256];
    /// table[b'0' as usize] = 1;
    /// table[b'1' as usize] = 2;
    /// let cm = CharMap::new(table);
    /// assert_eq!(cm.max_symbol(), 2);
    /// assert_eq!(cm.symbol_of(b'1'), 2);
    /// assert_eq!(cm.symbol_of(b'2'), 0);
    /// ```
    pub fn new(table: [u8; 256]) -> Self {
        let max = table.iter().copied().max().unwrap_or(0);
        let mut symbols = Vec::with_capacity(max as usize);
        for id in 1..=max {
            if let Some(b) = (0..=255u8).find(|&b| table[b as usize] == id) {
                symbols.push(b);
            }
        }
        CharMap {
            table,
            max,
            symbols,
        }
    }

    /// Creates the default `CharMap`, suitable for English word lists.
    ///
    /// `A`-`Z` and `a`-`z` are case-folded to ids 1-26, hyphen is 27 and
    /// apostrophe is 28. All other bytes are rejected.
    pub fn alpha() -> Self {
        let mut table = [0u8; 256];
        for c in b'A'..=b'Z' {
            table[c as usize] = c - b'A' + 1;
        }
        for c in b'a'..=b'z' {
            table[c as usize] = c - b'a' + 1;
        }
        table[b'-' as usize] = 27;
        table[b'\'' as usize] = 28;
        CharMap::new(table)
    }

    /// Returns the symbol id for a byte, or `0` if the byte is rejected.
    #[inline]
    pub fn symbol_of(&self, c: u8) -> u8 {
        self.table[c as usize]
    }

    /// Returns the largest symbol id this map produces.
    #[inline]
    pub fn max_symbol(&self) -> usize {
        self.max as usize
    }

    /// Returns one representative byte per symbol, in ascending id order.
    ///
    /// Used to enumerate a node's possible continuations without trying
    /// all 256 bytes (and without visiting case-folded duplicates twice).
    #[inline]
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }
}
