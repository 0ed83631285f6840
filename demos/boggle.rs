//! Example: find all dictionary words in a 4x4 boggle grid.
//!
//! Usage: cargo run --example boggle -- <dictionary.txt> [GRID]
//!
//! The grid is four rows of four upper-case letters separated by
//! slashes, e.g. ABCD/TNSE/HARP/ELLO. Words are formed by moving to any
//! of the eight neighboring squares, using each square at most once.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::process::ExitCode;

use packtrie::trie::{read_words, CharMap, PackedBuilder, PackedTrie, TrieNode};

const SIZE: usize = 4;

fn load_dict(path: &str) -> std::io::Result<PackedTrie> {
    let file = File::open(path)?;
    let mut builder = PackedBuilder::new(CharMap::alpha());
    let summary = read_words(&mut builder, BufReader::new(file))?;
    eprintln!("{} words loaded, {} rejected", summary.added, summary.rejected);
    Ok(builder.build())
}

fn parse_grid(s: &str) -> Option<[[u8; SIZE]; SIZE]> {
    let mut grid = [[0u8; SIZE]; SIZE];
    let rows: Vec<&str> = s.split('/').collect();
    if rows.len() != SIZE {
        return None;
    }
    for (i, row) in rows.iter().enumerate() {
        if row.len() != SIZE || !row.bytes().all(|c| c.is_ascii_uppercase()) {
            return None;
        }
        grid[i].copy_from_slice(row.as_bytes());
    }
    Some(grid)
}

fn solve<N: TrieNode>(
    grid: &mut [[u8; SIZE]; SIZE],
    i: isize,
    j: isize,
    node: N,
    current: &mut Vec<u8>,
    found: &mut BTreeSet<String>,
) {
    if i < 0 || i >= SIZE as isize || j < 0 || j >= SIZE as isize {
        return;
    }
    let c = grid[i as usize][j as usize];
    if c == 0 {
        return;
    }
    let node = node.follow(c);
    if !node.is_prefix() {
        return;
    }
    current.push(c);
    // Zap the square so this path can't reuse it.
    grid[i as usize][j as usize] = 0;
    if current.len() >= 2 && node.is_word() {
        found.insert(String::from_utf8_lossy(current).into_owned());
    }
    for dij in 0..9 {
        solve(grid, i + dij % 3 - 1, j + dij / 3 - 1, node, current, found);
    }
    // Restore the zapped square and pop it from the current word, so the
    // grid and word are exactly as they were on entry.
    grid[i as usize][j as usize] = c;
    current.pop();
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let (dict_path, grid_arg) = match args.len() {
        2 => (args[1].as_str(), "ABCD/TNSE/HARP/ELLO"),
        3 => (args[1].as_str(), args[2].as_str()),
        _ => {
            eprintln!("usage: boggle <dictionary.txt> [AAAA/BBBB/CCCC/DDDD]");
            return ExitCode::FAILURE;
        }
    };
    let Some(mut grid) = parse_grid(grid_arg) else {
        eprintln!("bad grid {grid_arg:?}: want four slash-separated rows of four letters");
        return ExitCode::FAILURE;
    };
    let dict = match load_dict(dict_path) {
        Ok(dict) => dict,
        Err(err) => {
            eprintln!("failed to load dictionary {dict_path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut found = BTreeSet::new();
    let mut current = Vec::new();
    for i in 0..SIZE as isize {
        for j in 0..SIZE as isize {
            solve(&mut grid, i, j, dict.root(), &mut current, &mut found);
        }
    }
    println!("{}", found.iter().cloned().collect::<Vec<_>>().join(", "));
    println!("\nFound {} words", found.len());
    ExitCode::SUCCESS
}
