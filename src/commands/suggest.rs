//! Suggestion command
//!
//! Replays observed feedback and reports the remaining candidates and the
//! best next guess.

use crate::core::{Pattern, PatternError, Word, WordError};
use crate::solver::entropy::Suggestion;
use crate::solver::{GuessRecord, SessionState, SolverSession};
use anyhow::{Context, Result};
use std::str::FromStr;
use thiserror::Error;

/// One observed guess and its coloring, written `GUESS:PATTERN`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub guess: Word,
    pub pattern: Pattern,
}

#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("expected GUESS:PATTERN, got '{0}'")]
    MissingSeparator(String),
    #[error(transparent)]
    Word(#[from] WordError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

impl FromStr for Feedback {
    type Err = FeedbackError;

    /// Parse `crane:--Y-G` or `crane:⬜⬜🟨⬜🟩`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (guess, pattern) = s
            .split_once(':')
            .ok_or_else(|| FeedbackError::MissingSeparator(s.to_string()))?;
        Ok(Self {
            guess: guess.parse()?,
            pattern: pattern.parse()?,
        })
    }
}

/// State after replaying feedback
#[derive(Debug, Clone)]
pub struct SuggestResult {
    pub history: Vec<GuessRecord>,
    pub candidates: Vec<Word>,
    pub state: SessionState,
    /// `None` once solved, exhausted, or out of candidates
    pub next: Option<Suggestion>,
}

/// Reset the session, apply each feedback entry in order, then suggest
///
/// # Errors
///
/// Returns an error if feedback continues after the game is already solved or
/// exhausted.
pub fn suggest_next(session: &mut SolverSession, feedback: &[Feedback]) -> Result<SuggestResult> {
    session.reset();

    for (turn, entry) in feedback.iter().enumerate() {
        session
            .apply_guess(entry.guess, entry.pattern)
            .with_context(|| format!("cannot apply guess {} ({})", turn + 1, entry.guess))?;
    }

    let next = if session.state().is_active() {
        session.suggest()?
    } else {
        None
    };

    Ok(SuggestResult {
        history: session.history().to_vec(),
        candidates: session.candidates().to_vec(),
        state: session.state(),
        next,
    })
}
