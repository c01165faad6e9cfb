//! Accumulated knowledge from guess feedback
//!
//! Folding a (guess, pattern) pair only ever adds constraints, so a word
//! rejected once stays rejected for the rest of the game.

use crate::core::{LetterSet, Pattern, Symbol, WORD_LENGTH, Word};

/// Logical constraints implied by every guess seen so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    fixed_positions: [Option<u8>; WORD_LENGTH],
    required_letters: LetterSet,
    position_exclusions: [LetterSet; WORD_LENGTH],
    excluded_letters: LetterSet,
}

impl Constraints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold the feedback for one guess into the constraints
    ///
    /// Greens and yellows are recorded first so that every letter the pattern
    /// proves present is known before any gray is turned into an exclusion.
    /// A gray letter is excluded only if no guess so far (this one included)
    /// has shown it in the answer; otherwise it is ruled out at its position.
    pub fn fold(&mut self, guess: &Word, pattern: Pattern) {
        let symbols = pattern.symbols();

        for (i, (&letter, symbol)) in guess.chars().iter().zip(symbols).enumerate() {
            match symbol {
                Symbol::Correct => {
                    self.fixed_positions[i] = Some(letter);
                    self.required_letters.insert(letter);
                }
                Symbol::Present => {
                    self.required_letters.insert(letter);
                    self.position_exclusions[i].insert(letter);
                }
                Symbol::Absent => {}
            }
        }

        for (i, (&letter, symbol)) in guess.chars().iter().zip(symbols).enumerate() {
            if symbol != Symbol::Absent {
                continue;
            }
            if self.required_letters.contains(letter) {
                // The answer holds some other letter at this position
                self.position_exclusions[i].insert(letter);
            } else {
                self.excluded_letters.insert(letter);
            }
        }
    }

    /// Check whether `word` could still be the answer
    #[must_use]
    pub fn is_consistent(&self, word: &Word) -> bool {
        let fixed_ok = self
            .fixed_positions
            .iter()
            .zip(word.chars())
            .all(|(fixed, &ch)| fixed.is_none_or(|letter| letter == ch));
        if !fixed_ok {
            return false;
        }

        if !self.required_letters.is_subset(word.letters()) {
            return false;
        }

        let position_ok = self
            .position_exclusions
            .iter()
            .zip(word.chars())
            .all(|(excluded, &ch)| !excluded.contains(ch));
        if !position_ok {
            return false;
        }

        !self.excluded_letters.intersects(word.letters())
    }

    /// True if no guess has been folded in yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Letter required at each position, if known
    #[must_use]
    pub const fn fixed_positions(&self) -> &[Option<u8>; WORD_LENGTH] {
        &self.fixed_positions
    }

    /// Letters known to appear somewhere in the answer
    #[must_use]
    pub const fn required_letters(&self) -> LetterSet {
        self.required_letters
    }

    /// Letters known not to occupy each position
    #[must_use]
    pub const fn position_exclusions(&self) -> &[LetterSet; WORD_LENGTH] {
        &self.position_exclusions
    }

    /// Letters known to be absent from the answer
    #[must_use]
    pub const fn excluded_letters(&self) -> LetterSet {
        self.excluded_letters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn folded(guess: &str, answer: &str) -> Constraints {
        let guess = word(guess);
        let mut constraints = Constraints::new();
        constraints.fold(&guess, Pattern::calculate(&guess, &word(answer)));
        constraints
    }

    #[test]
    fn empty_constraints_accept_everything() {
        let constraints = Constraints::new();
        assert!(constraints.is_empty());
        for text in ["crane", "zzzzz", "speed"] {
            assert!(constraints.is_consistent(&word(text)));
        }
    }

    #[test]
    fn fold_records_each_symbol_kind() {
        // CRANE vs TRACE: C yellow, R green, A green, N gray, E green
        let constraints = folded("crane", "trace");

        assert_eq!(
            constraints.fixed_positions(),
            &[None, Some(b'r'), Some(b'a'), None, Some(b'e')]
        );
        assert!(constraints.required_letters().contains(b'c'));
        assert!(constraints.position_exclusions()[0].contains(b'c'));
        assert!(constraints.excluded_letters().contains(b'n'));
        assert_eq!(constraints.excluded_letters().len(), 1);
    }

    #[test]
    fn each_check_rejects_independently() {
        let constraints = folded("crane", "trace");

        assert!(constraints.is_consistent(&word("trace")));
        // R not at position 1
        assert!(!constraints.is_consistent(&word("tbace")));
        // missing required C
        assert!(!constraints.is_consistent(&word("trade")));
        // C at an excluded position
        assert!(!constraints.is_consistent(&word("crace")));
        // contains excluded N
        assert!(!constraints.is_consistent(&word("nrace")));
    }

    #[test]
    fn gray_duplicate_does_not_exclude_present_letter() {
        // SPEED vs ABIDE: ABIDE has a single E, so of the two guessed E's
        // the first is yellow and the second gray
        let constraints = folded("speed", "abide");

        assert!(constraints.required_letters().contains(b'e'));
        assert!(!constraints.excluded_letters().contains(b'e'));
        assert!(constraints.is_consistent(&word("abide")));
    }

    #[test]
    fn gray_duplicate_excludes_its_own_position() {
        // SPEED vs ABIDE: the gray E sits at position 3
        let constraints = folded("speed", "abide");

        assert!(constraints.position_exclusions()[3].contains(b'e'));
        assert!(!constraints.is_consistent(&word("dabez")));
        assert!(constraints.is_consistent(&word("deabz")));
    }

    #[test]
    fn gray_before_yellow_in_same_guess_is_resolved() {
        // EERIE vs ABIDE: the E at position 0 is gray while the E at position 4
        // is green, so E must stay required
        let constraints = folded("eerie", "abide");

        assert!(!constraints.excluded_letters().contains(b'e'));
        assert!(constraints.is_consistent(&word("abide")));
    }

    #[test]
    fn answer_always_remains_consistent() {
        let words = [
            "speed", "erase", "eerie", "abide", "abode", "abuse", "robot", "floor", "llama",
            "level", "geese", "crane", "slate", "trace",
        ];
        for answer in words {
            let mut constraints = Constraints::new();
            for guess in words {
                let g = word(guess);
                constraints.fold(&g, Pattern::calculate(&g, &word(answer)));
                assert!(
                    constraints.is_consistent(&word(answer)),
                    "{answer} rejected after guessing {guess}"
                );
            }
        }
    }

    #[test]
    fn constraints_only_grow() {
        let mut constraints = Constraints::new();
        let answer = word("abide");
        let mut previous = constraints.clone();

        for guess in ["crane", "speed", "abode"] {
            let g = word(guess);
            constraints.fold(&g, Pattern::calculate(&g, &answer));

            assert!(previous.required_letters().is_subset(constraints.required_letters()));
            assert!(previous.excluded_letters().is_subset(constraints.excluded_letters()));
            for (before, after) in previous
                .position_exclusions()
                .iter()
                .zip(constraints.position_exclusions())
            {
                assert!(before.is_subset(*after));
            }
            previous = constraints.clone();
        }
    }
}
