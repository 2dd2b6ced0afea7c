//! Corpus loading.
//!
//! The default corpus is embedded at build time; an alternative list can be
//! supplied as a file. Input is newline-delimited, tolerating single-column
//! CSV exports (surrounding quotes, trailing comma). Lines that are not
//! exactly five ASCII letters are dropped.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

fn normalize(line: &str) -> Option<String> {
    let word = line
        .trim()
        .trim_end_matches(',')
        .trim_matches('"')
        .to_ascii_lowercase();
    if word.len() == 5 && word.bytes().all(|b| b.is_ascii_lowercase()) {
        Some(word)
    } else {
        None
    }
}

pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines().filter_map(normalize).collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalize(&line?) {
            words.push(word);
        }
    }
    Ok(words)
}
