//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (gray, letter not in word)
//! - 1 = Present (yellow, letter in word, wrong position)
//! - 2 = Correct (green, letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::{WORD_LENGTH, Word};
use std::fmt;
use thiserror::Error;

/// Feedback for a single position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Symbol {
    /// Gray: the letter is not (or no longer) available in the answer
    Absent = 0,
    /// Yellow: the letter is in the answer at another position
    Present = 1,
    /// Green: the letter is at this exact position
    Correct = 2,
}

impl Symbol {
    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Emoji used by the official game for this symbol
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Error type for unparseable pattern strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid pattern string: {0:?} (expected 5 of G/Y/- or 🟩🟨⬜)")]
pub struct PatternError(pub String);

/// Feedback pattern for a Wordle guess
///
/// Represents the colored feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Build a pattern from one symbol per position
    #[must_use]
    pub fn from_symbols(symbols: [Symbol; WORD_LENGTH]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for symbol in symbols {
            pattern += symbol as u8 * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self(pattern)
    }

    /// Decode the symbol at a position (0-4)
    #[must_use]
    pub const fn symbol_at(self, position: usize) -> Symbol {
        let mut val = self.0;
        let mut i = 0;
        while i < position {
            val /= 3;
            i += 1;
        }
        Symbol::from_digit(val % 3)
    }

    /// Decode all five symbols in position order
    #[must_use]
    pub fn symbols(self) -> [Symbol; WORD_LENGTH] {
        std::array::from_fn(|i| self.symbol_at(i))
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters: the greens and yellows awarded to a letter never
    /// exceed how often it occurs in the answer.
    ///
    /// # Algorithm
    /// 1. First pass: mark all exact matches (greens) and consume those answer letters
    /// 2. Second pass: for each remaining position, consume the first unconsumed
    ///    occurrence of the guessed letter and mark it yellow
    ///
    /// # Examples
    /// ```
    /// use wordle_sage::core::{Pattern, Symbol, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// // C(gray) R(gray) A(green) N(gray) E(green)
    /// assert_eq!(pattern.value(), 180);
    /// assert_eq!(pattern.symbol_at(4), Symbol::Correct);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut result = [Symbol::Absent; WORD_LENGTH];
        let mut remaining: [Option<u8>; WORD_LENGTH] = (*answer.chars()).map(Some);

        for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if g == a {
                result[i] = Symbol::Correct;
                remaining[i] = None;
            }
        }

        for (i, &g) in guess.chars().iter().enumerate() {
            if result[i] != Symbol::Absent {
                continue;
            }
            if let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(g)) {
                result[i] = Symbol::Present;
                *slot = None;
            }
        }

        Self::from_symbols(result)
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_correct(self) -> usize {
        self.symbols()
            .iter()
            .filter(|&&s| s == Symbol::Correct)
            .count()
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_present(self) -> usize {
        self.symbols()
            .iter()
            .filter(|&&s| s == Symbol::Present)
            .count()
    }

    /// Convert pattern to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.symbols().iter().map(|s| s.emoji()).collect()
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternError;

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts 'G'/'g'/🟩 for green, 'Y'/'y'/🟨 for yellow, and
    /// '-'/'_'/'.'/⬜/⬛ for gray.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || PatternError(s.to_string());
        let chars: Vec<char> = s.trim().chars().collect();

        if chars.len() != WORD_LENGTH {
            return Err(err());
        }

        let mut symbols = [Symbol::Absent; WORD_LENGTH];
        for (slot, ch) in symbols.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => Symbol::Correct,
                'Y' | 'y' | '🟨' => Symbol::Present,
                '-' | '_' | '.' | '⬜' | '⬛' => Symbol::Absent,
                _ => return Err(err()),
            };
        }

        Ok(Self::from_symbols(symbols))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    /// Number of green + yellow marks a pattern awards to `letter`
    fn marks_for(guess: &Word, pattern: Pattern, letter: u8) -> usize {
        guess
            .chars()
            .iter()
            .zip(pattern.symbols())
            .filter(|&(&g, s)| g == letter && s != Symbol::Absent)
            .count()
    }

    #[test]
    fn pattern_perfect_constant() {
        assert_eq!(Pattern::PERFECT.value(), 242);
        assert!(Pattern::PERFECT.is_perfect());
        assert_eq!(Pattern::PERFECT.count_correct(), 5);
        assert_eq!(Pattern::PERFECT.count_present(), 0);
        assert_eq!(Pattern::PERFECT.symbols(), [Symbol::Correct; 5]);
    }

    #[test]
    fn pattern_all_gray() {
        let pattern = Pattern::calculate(&word("abcde"), &word("fghij"));

        assert_eq!(pattern.value(), 0);
        assert_eq!(pattern.symbols(), [Symbol::Absent; 5]);
    }

    #[test]
    fn pattern_duplicate_letters_not_double_counted() {
        // SPEED vs ERASE
        // S(yellow) P(gray) E(yellow) E(yellow) D(gray)
        // ERASE has two E's, so both guessed E's earn a yellow, no more
        let guess = word("speed");
        let answer = word("erase");
        let pattern = Pattern::calculate(&guess, &answer);

        assert_eq!(
            pattern.symbols(),
            [
                Symbol::Present,
                Symbol::Absent,
                Symbol::Present,
                Symbol::Present,
                Symbol::Absent
            ]
        );
        assert_eq!(pattern.value(), 37);
        assert_eq!(marks_for(&guess, pattern, b'e'), 2);
    }

    #[test]
    fn pattern_duplicate_guess_letter_single_in_answer() {
        // Only one E in ABIDE: the green E takes it, the other E is gray
        let pattern = Pattern::calculate(&word("eerie"), &word("abide"));
        assert_eq!(
            pattern.symbols(),
            [
                Symbol::Absent,
                Symbol::Absent,
                Symbol::Absent,
                Symbol::Present,
                Symbol::Correct
            ]
        );
    }

    #[test]
    fn pattern_green_consumes_before_yellow() {
        // ROBOT vs FLOOR
        // R(yellow) O(yellow) B(gray) O(green) T(gray)
        let pattern = Pattern::calculate(&word("robot"), &word("floor"));

        assert_eq!(pattern.value(), 58);
        assert_eq!(pattern.count_correct(), 1);
        assert_eq!(pattern.count_present(), 2);
    }

    #[test]
    fn marks_never_exceed_answer_multiplicity() {
        let words = [
            "speed", "erase", "eerie", "abide", "robot", "floor", "llama", "hello", "level",
            "geese", "sassy", "mummy", "crane", "slate",
        ];
        for g in words {
            for a in words {
                let guess = word(g);
                let answer = word(a);
                let pattern = Pattern::calculate(&guess, &answer);
                for letter in guess.letters().iter() {
                    assert!(
                        marks_for(&guess, pattern, letter) <= answer.count_of(letter),
                        "{g} vs {a} over-marks {}",
                        letter as char
                    );
                }
            }
        }
    }

    #[test]
    fn pattern_symmetry() {
        // Pattern of word vs itself is always perfect
        for text in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            let w = word(text);
            assert_eq!(Pattern::calculate(&w, &w), Pattern::PERFECT);
        }
    }

    #[test]
    fn pattern_real_wordle_example() {
        // CRANE vs SLATE: trailing A and E are green, nothing else matches
        let pattern = Pattern::calculate(&word("crane"), &word("slate"));

        assert_eq!(
            pattern.symbols(),
            [
                Symbol::Absent,
                Symbol::Absent,
                Symbol::Correct,
                Symbol::Absent,
                Symbol::Correct
            ]
        );
        assert_eq!(pattern.value(), 180);
    }

    #[test]
    fn pattern_symbols_roundtrip_through_value() {
        let symbols = [
            Symbol::Present,
            Symbol::Correct,
            Symbol::Correct,
            Symbol::Present,
            Symbol::Present,
        ];
        let pattern = Pattern::from_symbols(symbols);
        // 1 + 2×3 + 2×9 + 1×27 + 1×81 = 133
        assert_eq!(pattern, Pattern::new(133));
        assert_eq!(pattern.symbols(), symbols);
    }

    #[test]
    fn pattern_from_str_valid() {
        let p1: Pattern = "GYG--".parse().unwrap();
        let p2: Pattern = "🟩🟨🟩⬜⬜".parse().unwrap();
        let p3: Pattern = "gyg__".parse().unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.value(), 23);
    }

    #[test]
    fn pattern_from_str_invalid() {
        assert!("GYGGYX".parse::<Pattern>().is_err());
        assert!("GYG".parse::<Pattern>().is_err());
        assert!("GXGGY".parse::<Pattern>().is_err());
        assert!("".parse::<Pattern>().is_err());
    }

    #[test]
    fn pattern_display_is_emoji() {
        let pattern: Pattern = "GY-GY".parse().unwrap();
        assert_eq!(pattern.to_string(), "🟩🟨⬜🟩🟨");
    }
}
