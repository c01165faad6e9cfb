//! Display functions for command results

use super::formatters::{colored_guess, entropy_bar, word_list};
use crate::commands::{
    AnalysisResult, BenchmarkResult, GameAnalysis, SolveResult, SuggestResult, TurnAnalysis,
};
use crate::solver::SessionState;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for step in &result.steps {
        println!(
            "\nTurn {}: {} {}",
            step.record.index,
            colored_guess(&step.record.word, step.record.pattern),
            step.record.pattern
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let Some(metrics) = step.metrics {
                println!("  Entropy:    {:.3} bits", metrics.entropy);
                println!("  Expected:   {:.1} candidates", metrics.expected_remaining);

                // Information actually gained (reduction in uncertainty)
                if step.candidates_after > 0 {
                    let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                    println!(
                        "  Info gained: {:.3} bits ({ratio:.1}x reduction)",
                        ratio.log2()
                    );
                }
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.metrics.entropy, result.total_candidates, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.metrics.entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction()
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.metrics.expected_remaining
    );
    println!(
        "   Worst case:  {} candidates remain",
        result.metrics.max_partition
    );
    if result.is_candidate {
        println!("   {}", "Could be the answer".green());
    }

    if !result.alternatives.is_empty() {
        println!("\n🏆 {}", "Top alternatives:".bright_cyan().bold());
        for (rank, alt) in result.alternatives.iter().enumerate() {
            let marker = if alt.word == result.word { " ◀" } else { "" };
            println!(
                "   {:2}. {}  {:.3} bits{marker}",
                rank + 1,
                alt.word.text().to_uppercase(),
                alt.entropy
            );
        }
    }
}

/// Print a turn-by-turn review of a played game and the solver's game
pub fn print_game_analysis(result: &GameAnalysis) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GAME ANALYSIS - Answer:".bright_cyan().bold(),
        result.answer.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    for turn in &result.turns {
        print_turn(turn);
    }

    println!("\n{}", "─".repeat(60).cyan());
    println!("{}", "Solver's game:".bright_cyan().bold());
    for record in &result.solver_game {
        println!(
            "  {}. {} {}",
            record.index,
            colored_guess(&record.word, record.pattern),
            record.pattern
        );
    }

    println!();
    let outcome = |solved: bool, n: usize| {
        if solved {
            format!("solved in {n}")
        } else {
            format!("unsolved after {n}")
        }
    };
    println!(
        "You: {}, solver: {}",
        outcome(result.solved, result.turns.len()),
        outcome(result.solver_solved, result.solver_game.len())
    );

    match result.guess_difference() {
        0 => println!("{}", "🎉 You matched the solver's guess count!".green().bold()),
        diff if diff > 0 => println!(
            "{}",
            format!("📊 You used {diff} more guess(es) than the solver").yellow()
        ),
        diff => println!(
            "{}",
            format!("🎊 You beat the solver by {} guess(es)!", -diff)
                .green()
                .bold()
        ),
    }
}

fn print_turn(turn: &TurnAnalysis) {
    let record = &turn.record;
    println!(
        "\nTurn {}: {} {}  ({} green, {} yellow)",
        record.index,
        colored_guess(&record.word, record.pattern),
        record.pattern,
        record.pattern.count_correct(),
        record.pattern.count_present()
    );
    println!(
        "  Candidates: {} → {}",
        turn.candidates_before, turn.candidates_after
    );
    println!("  Entropy:    {:.3} bits", turn.actual_entropy);

    if let Some(best) = turn.best {
        if best.word == record.word {
            println!("  {}", "Solver agrees with this guess".green());
        } else {
            println!(
                "  Solver:     {} ({:.3} bits, {:.3} more)",
                best.word.text().to_uppercase().bright_green(),
                best.entropy,
                turn.entropy_shortfall()
            );
        }
    }

    for alt in &turn.alternatives {
        println!(
            "    · {} {:.3} bits",
            alt.word.text().to_uppercase(),
            alt.entropy
        );
    }
}

/// Print the state after replaying feedback
pub fn print_suggest_result(result: &SuggestResult) {
    for record in &result.history {
        println!(
            "Turn {}: {} {}",
            record.index,
            colored_guess(&record.word, record.pattern),
            record.pattern
        );
    }

    println!(
        "\n{} candidates remain: {}",
        result.candidates.len().to_string().bright_yellow().bold(),
        word_list(&result.candidates, 20)
    );

    match (result.state, result.next) {
        (SessionState::Solved, _) => println!("{}", "✅ Solved!".green().bold()),
        (SessionState::Exhausted, _) => {
            println!("{}", "❌ Out of attempts".red().bold());
        }
        (_, Some(next)) => println!(
            "\n💡 Next guess: {}  ({:.3} bits)",
            next.word.text().to_uppercase().bright_green().bold(),
            next.entropy
        ),
        (_, None) => println!(
            "{}",
            "❌ No candidates remain! The feedback may be incorrect."
                .red()
                .bold()
        ),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {} ({:.1}%)",
        result.solved,
        result.success_rate() * 100.0
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guess_count, &count) in &result.distribution {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
    }

    if !result.failures.is_empty() {
        println!(
            "\n❌ {} {}",
            "Failed:".red().bold(),
            word_list(&result.failures, 20)
        );
    }
}
