//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with zero external dependencies
//! beyond error derivation. All types here are pure, testable, and cheap to copy.

mod letters;
mod pattern;
mod word;

pub use letters::LetterSet;
pub use pattern::{Pattern, PatternError, Symbol};
pub use word::{Word, WordError};

/// Number of letters in every word the solver handles
pub const WORD_LENGTH: usize = 5;
