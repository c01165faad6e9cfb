//! Wordle Sage
//!
//! An information-theoretic Wordle assistant: it narrows the candidate answers
//! from guess feedback and suggests the guess with the highest expected
//! information.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_sage::core::{Pattern, Word};
//! use wordle_sage::solver::SolverSession;
//!
//! let words = ["crane", "slate", "irate", "trace", "abide"];
//! let mut session = SolverSession::new(&words, None);
//!
//! let guess = session.suggest().unwrap().unwrap().word;
//! let answer = Word::new("slate").unwrap();
//! let remaining = session
//!     .apply_guess(guess, Pattern::calculate(&guess, &answer))
//!     .unwrap();
//! assert!(remaining.contains(&answer));
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Word list loading
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
