//! Word list loading utilities

use crate::core::Word;
use log::{debug, warn};
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// See [`parse_words`] for how lines are interpreted.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_sage::wordlists::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_words(&content);
    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse a newline-separated word list
///
/// Lines are trimmed and lower-cased. Blank lines are ignored, lines that are
/// not five ASCII letters are skipped, and repeated words keep their first
/// position.
///
/// # Examples
/// ```
/// use wordle_sage::wordlists::parse_words;
///
/// let words = parse_words("Crane\n\nslate\ntoolong\ncrane\n");
/// let texts: Vec<_> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["crane", "slate"]);
/// ```
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    let mut skipped = 0usize;

    let words = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(_) => {
                skipped += 1;
                None
            }
        })
        .filter(|word| seen.insert(*word))
        .collect();

    if skipped > 0 {
        warn!("skipped {skipped} malformed lines in word list");
    }
    words
}
