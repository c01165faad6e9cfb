//! Formatting utilities for terminal output

use crate::core::{Pattern, Symbol, Word};
use colored::{ColoredString, Colorize};

/// Render a guess as colored letter tiles
#[must_use]
pub fn colored_guess(word: &Word, pattern: Pattern) -> String {
    word.chars()
        .iter()
        .zip(pattern.symbols())
        .map(|(&c, symbol)| tile(char::from(c).to_ascii_uppercase(), symbol).to_string())
        .collect()
}

fn tile(letter: char, symbol: Symbol) -> ColoredString {
    let text = format!(" {letter} ");
    match symbol {
        Symbol::Correct => text.black().on_green().bold(),
        Symbol::Present => text.black().on_yellow().bold(),
        Symbol::Absent => text.white().on_bright_black(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max).clamp(0.0, 1.0) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled against the best possible split
#[must_use]
pub fn entropy_bar(entropy: f64, candidates: usize, width: usize) -> String {
    // A guess can split candidates into at most 243 patterns
    let max_entropy = (candidates.clamp(1, 243) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}

/// Join words as upper-case text, eliding past `limit`
#[must_use]
pub fn word_list(words: &[Word], limit: usize) -> String {
    let mut shown: Vec<String> = words
        .iter()
        .take(limit)
        .map(|w| w.text().to_uppercase())
        .collect();
    if words.len() > limit {
        shown.push(format!("… (+{})", words.len() - limit));
    }
    shown.join(" ")
}
