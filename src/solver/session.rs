//! Solver session
//!
//! Owns the mutable game state (candidates, constraints, history) and runs the
//! suggest → feedback → filter loop.

use super::config::SolverConfig;
use super::constraints::Constraints;
use super::entropy::Suggestion;
use super::selector::GuessSelector;
use crate::core::{Pattern, Word};
use log::{debug, warn};
use std::fmt;
use thiserror::Error;

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No guesses applied yet
    Fresh,
    /// At least one guess applied, not solved
    InProgress,
    /// The last applied pattern was all green
    Solved,
    /// The configured attempt limit was reached without solving
    Exhausted,
}

impl SessionState {
    /// True if guesses may still be suggested or applied
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Fresh | Self::InProgress)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fresh => "fresh",
            Self::InProgress => "in progress",
            Self::Solved => "solved",
            Self::Exhausted => "exhausted",
        };
        f.write_str(name)
    }
}

/// Errors raised by session operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error("malformed word: {0}")]
    MalformedWord(#[from] crate::core::WordError),
    #[error("session is {0}; reset before playing again")]
    SessionFinished(SessionState),
}

/// One applied guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessRecord {
    pub word: Word,
    pub pattern: Pattern,
    /// 1-based turn number
    pub index: usize,
}

/// A single game against a fixed guess space and answer universe
///
/// # Examples
/// ```
/// use wordle_sage::core::{Pattern, Word};
/// use wordle_sage::solver::{SessionState, SolverSession};
///
/// let mut session = SolverSession::new(&["crane", "slate"], None);
/// let answer = Word::new("slate").unwrap();
///
/// let guess = session.suggest().unwrap().unwrap().word;
/// session.apply_guess(guess, Pattern::calculate(&guess, &answer)).unwrap();
///
/// if session.state() != SessionState::Solved {
///     session.apply_guess(answer, Pattern::PERFECT).unwrap();
/// }
/// assert_eq!(session.state(), SessionState::Solved);
/// assert_eq!(session.candidates(), &[answer]);
/// ```
#[derive(Debug, Clone)]
pub struct SolverSession {
    guess_space: Vec<Word>,
    answers: Vec<Word>,
    candidates: Vec<Word>,
    constraints: Constraints,
    history: Vec<GuessRecord>,
    state: SessionState,
    selector: GuessSelector,
    config: SolverConfig,
}

impl SolverSession {
    /// Create a session with the default configuration
    ///
    /// `answers` defaults to `words`. Entries that are not five ASCII letters
    /// are dropped; the rest are lower-cased.
    #[must_use]
    pub fn new<S: AsRef<str>>(words: &[S], answers: Option<&[S]>) -> Self {
        Self::with_config(words, answers, SolverConfig::default())
    }

    /// Create a session with an explicit configuration
    #[must_use]
    pub fn with_config<S: AsRef<str>>(
        words: &[S],
        answers: Option<&[S]>,
        config: SolverConfig,
    ) -> Self {
        let guess_space = normalize(words, "guess");
        let answers = answers.map_or_else(|| guess_space.clone(), |a| normalize(a, "answer"));
        Self::from_words(guess_space, answers, config)
    }

    /// Create a session from already validated words
    #[must_use]
    pub fn from_words(guess_space: Vec<Word>, answers: Vec<Word>, config: SolverConfig) -> Self {
        debug!(
            "new session: {} guesses, {} answers",
            guess_space.len(),
            answers.len()
        );
        Self {
            candidates: answers.clone(),
            guess_space,
            answers,
            constraints: Constraints::new(),
            history: Vec::new(),
            state: SessionState::Fresh,
            selector: GuessSelector::from_config(&config),
            config,
        }
    }

    /// Best next guess for the current candidates
    ///
    /// Returns `Ok(None)` when no candidates remain.
    ///
    /// # Errors
    /// `SessionFinished` if the session is solved or exhausted.
    pub fn suggest(&self) -> Result<Option<Suggestion>, SolverError> {
        self.ensure_active()?;
        Ok(self
            .selector
            .select_best(&self.candidates, &self.guess_space, self.config.hard_mode))
    }

    /// The `top_n` best guesses for the current candidates, best first
    ///
    /// # Errors
    /// `SessionFinished` if the session is solved or exhausted.
    pub fn top_guesses(&self, top_n: usize) -> Result<Vec<Suggestion>, SolverError> {
        self.ensure_active()?;
        Ok(self.selector.top_guesses(
            &self.candidates,
            &self.guess_space,
            self.config.hard_mode,
            top_n,
        ))
    }

    /// Apply the feedback for a guess and return the surviving candidates
    ///
    /// # Errors
    /// `SessionFinished` if the session is solved or exhausted.
    pub fn apply_guess(&mut self, guess: Word, pattern: Pattern) -> Result<&[Word], SolverError> {
        self.ensure_active()?;

        self.constraints.fold(&guess, pattern);
        let before = self.candidates.len();
        let constraints = &self.constraints;
        self.candidates.retain(|word| constraints.is_consistent(word));

        self.history.push(GuessRecord {
            word: guess,
            pattern,
            index: self.history.len() + 1,
        });

        self.state = if pattern.is_perfect() {
            SessionState::Solved
        } else if self
            .config
            .max_attempts
            .is_some_and(|limit| self.history.len() >= limit)
        {
            SessionState::Exhausted
        } else {
            SessionState::InProgress
        };

        debug!(
            "applied {guess} {pattern}: {before} -> {} candidates ({})",
            self.candidates.len(),
            self.state
        );
        Ok(&self.candidates)
    }

    /// Return to the fresh state
    pub fn reset(&mut self) {
        self.candidates.clone_from(&self.answers);
        self.constraints = Constraints::new();
        self.history.clear();
        self.state = SessionState::Fresh;
    }

    /// Play a full game against a known answer
    ///
    /// Resets first, then applies suggested guesses until solved, out of
    /// candidates, or `max_guesses` is reached (which marks the session
    /// exhausted). Returns the guesses played.
    ///
    /// # Errors
    /// Only propagates session state errors, which a fresh session cannot raise.
    pub fn solve(
        &mut self,
        answer: &Word,
        max_guesses: usize,
    ) -> Result<Vec<GuessRecord>, SolverError> {
        self.solve_with(answer, max_guesses, |_, _| {})
    }

    /// Like [`solve`](Self::solve), calling `observe` with the candidates and
    /// the chosen suggestion before each guess is applied
    ///
    /// # Errors
    /// Only propagates session state errors, which a fresh session cannot raise.
    pub fn solve_with<F>(
        &mut self,
        answer: &Word,
        max_guesses: usize,
        mut observe: F,
    ) -> Result<Vec<GuessRecord>, SolverError>
    where
        F: FnMut(&[Word], &Suggestion),
    {
        self.reset();

        while self.history.len() < max_guesses && self.state.is_active() {
            let Some(suggestion) = self.suggest()? else {
                warn!("no candidates remain for answer {answer}");
                break;
            };
            observe(&self.candidates, &suggestion);
            let pattern = Pattern::calculate(&suggestion.word, answer);
            self.apply_guess(suggestion.word, pattern)?;
        }

        if self.state == SessionState::InProgress {
            self.state = SessionState::Exhausted;
        }
        Ok(self.history.clone())
    }

    fn ensure_active(&self) -> Result<(), SolverError> {
        if self.state.is_active() {
            Ok(())
        } else {
            Err(SolverError::SessionFinished(self.state))
        }
    }

    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub const fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    #[must_use]
    pub fn guess_space(&self) -> &[Word] {
        &self.guess_space
    }

    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }
}

fn normalize<S: AsRef<str>>(raw: &[S], kind: &str) -> Vec<Word> {
    let words: Vec<Word> = raw.iter().filter_map(|s| Word::new(s).ok()).collect();
    let dropped = raw.len() - words.len();
    if dropped > 0 {
        warn!("dropped {dropped} malformed {kind} words");
    }
    words
}
