//! Word and game analysis commands
//!
//! Analyzes the entropy of a single word, or replays a played game turn by turn
//! against the solver's own choices.

use crate::core::{Pattern, Word};
use crate::solver::entropy::{GuessMetrics, Suggestion, calculate_metrics, expected_information};
use crate::solver::{GuessRecord, SessionState, SolverSession};
use anyhow::{Context, Result, bail};

/// Better guesses listed per turn of a game analysis
pub const GAME_ALTERNATIVES: usize = 3;

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: Word,
    pub metrics: GuessMetrics,
    pub total_candidates: usize,
    /// The word could itself be the answer
    pub is_candidate: bool,
    /// Best guesses for the same candidates, best first
    pub alternatives: Vec<Suggestion>,
}

impl AnalysisResult {
    /// Expected shrink factor of the candidate set, 2^entropy
    #[must_use]
    pub fn expected_reduction(&self) -> f64 {
        self.metrics.entropy.exp2()
    }
}

/// Analyze a word against the session's current candidates
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters or contains non-ASCII)
/// - The word is not in the session's guess list
/// - The session is already finished
pub fn analyze_word(session: &SolverSession, word: &str, top_n: usize) -> Result<AnalysisResult> {
    let word = Word::new(word).with_context(|| format!("invalid word '{word}'"))?;
    if !session.guess_space().contains(&word) {
        bail!("word '{word}' not in word list");
    }

    let candidates = session.candidates();
    Ok(AnalysisResult {
        word,
        metrics: calculate_metrics(&word, candidates),
        total_candidates: candidates.len(),
        is_candidate: candidates.contains(&word),
        alternatives: session.top_guesses(top_n)?,
    })
}

/// One turn of a played game
#[derive(Debug, Clone)]
pub struct TurnAnalysis {
    pub record: GuessRecord,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Expected information of the guess actually played
    pub actual_entropy: f64,
    /// What the solver would have played here
    pub best: Option<Suggestion>,
    /// Guesses strictly more informative than the one played, best first
    pub alternatives: Vec<Suggestion>,
}

impl TurnAnalysis {
    /// Bits given up against the solver's pick
    #[must_use]
    pub fn entropy_shortfall(&self) -> f64 {
        self.best
            .map_or(0.0, |best| (best.entropy - self.actual_entropy).max(0.0))
    }
}

/// A played game next to the solver's game for the same answer
#[derive(Debug, Clone)]
pub struct GameAnalysis {
    pub answer: Word,
    pub turns: Vec<TurnAnalysis>,
    pub solved: bool,
    pub solver_game: Vec<GuessRecord>,
    pub solver_solved: bool,
}

impl GameAnalysis {
    /// Player guesses minus solver guesses; negative when the player was faster
    #[must_use]
    pub fn guess_difference(&self) -> isize {
        self.turns.len() as isize - self.solver_game.len() as isize
    }
}

/// Replay a played game and compare it with the solver's game
///
/// The session is reset for the replay, then used to play the solver's own
/// game, and is left in that game's final state.
///
/// # Errors
///
/// Returns an error if:
/// - The answer or any guess is invalid, or the answer is not in the answer list
/// - A guess is not in the guess list
/// - Guesses continue after the game was solved or exhausted
pub fn analyze_game<S: AsRef<str>>(
    session: &mut SolverSession,
    answer: &str,
    guesses: &[S],
    max_guesses: usize,
) -> Result<GameAnalysis> {
    let answer = Word::new(answer).with_context(|| format!("invalid answer '{answer}'"))?;
    if !session.answers().contains(&answer) {
        bail!("'{answer}' is not in the answer list");
    }

    session.reset();
    let mut turns = Vec::with_capacity(guesses.len());

    for (turn, text) in guesses.iter().enumerate() {
        let text = text.as_ref();
        let guess = Word::new(text).with_context(|| format!("invalid guess '{text}'"))?;
        if !session.guess_space().contains(&guess) {
            bail!("guess '{guess}' not in word list");
        }
        if !session.state().is_active() {
            bail!("guess {} ({guess}) comes after the game ended", turn + 1);
        }

        let candidates_before = session.candidates().len();
        let actual_entropy = expected_information(&guess, session.candidates());
        let best = session.suggest()?;
        let alternatives = better_alternatives(session, &guess, actual_entropy)?;

        let pattern = Pattern::calculate(&guess, &answer);
        let candidates_after = session.apply_guess(guess, pattern)?.len();
        let record = session
            .history()
            .last()
            .copied()
            .context("applied guess missing from history")?;

        turns.push(TurnAnalysis {
            record,
            candidates_before,
            candidates_after,
            actual_entropy,
            best,
            alternatives,
        });
    }
    let solved = session.state() == SessionState::Solved;

    let solver_game = session.solve(&answer, max_guesses)?;
    Ok(GameAnalysis {
        answer,
        turns,
        solved,
        solver_game,
        solver_solved: session.state() == SessionState::Solved,
    })
}

fn better_alternatives(
    session: &SolverSession,
    guess: &Word,
    actual_entropy: f64,
) -> Result<Vec<Suggestion>> {
    // Nothing beats guessing a candidate outright at this size
    if session.candidates().len() <= 2 {
        return Ok(Vec::new());
    }

    Ok(session
        .top_guesses(GAME_ALTERNATIVES + 1)?
        .into_iter()
        .filter(|alt| alt.word != *guess && alt.entropy > actual_entropy)
        .take(GAME_ALTERNATIVES)
        .collect())
}
