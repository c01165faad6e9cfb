//! Word solving command
//!
//! Solves a specific target word and returns the solution path.

use crate::core::Word;
use crate::solver::entropy::{GuessMetrics, calculate_metrics};
use crate::solver::{GuessRecord, SessionState, SolverSession};
use anyhow::{Context, Result, bail};

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: Word,
    pub success: bool,
    pub steps: Vec<GuessStep>,
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub record: GuessRecord,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Absent when the guess was forced (one candidate left)
    pub metrics: Option<GuessMetrics>,
}

/// Solve a specific word with the session's configuration
///
/// The session is reset first and left in its final state.
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 letters or contains non-ASCII)
/// - The target is not in the session's answer list
pub fn solve_word(
    session: &mut SolverSession,
    target: &str,
    max_guesses: usize,
) -> Result<SolveResult> {
    let target = Word::new(target).with_context(|| format!("invalid target word '{target}'"))?;
    if !session.answers().contains(&target) {
        bail!("'{target}' is not in the answer list");
    }

    // Candidate count and metrics captured before each guess is applied
    let mut observed: Vec<(usize, Option<GuessMetrics>)> = Vec::new();
    let history = session.solve_with(&target, max_guesses, |candidates, suggestion| {
        let metrics =
            (candidates.len() > 1).then(|| calculate_metrics(&suggestion.word, candidates));
        observed.push((candidates.len(), metrics));
    })?;

    let final_count = session.candidates().len();
    let steps = history
        .into_iter()
        .zip(&observed)
        .enumerate()
        .map(|(i, (record, &(candidates_before, metrics)))| GuessStep {
            record,
            candidates_before,
            candidates_after: observed.get(i + 1).map_or(final_count, |next| next.0),
            metrics,
        })
        .collect();

    Ok(SolveResult {
        target,
        success: session.state() == SessionState::Solved,
        steps,
    })
}
