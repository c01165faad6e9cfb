//! Word lists for Wordle solving
//!
//! Guess and answer lists are plain text files, one word per line.

pub mod loader;

pub use loader::{load_from_file, parse_words};
