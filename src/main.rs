//! Wordle Sage - CLI
//!
//! Suggests entropy-maximizing Wordle guesses, replays feedback, and benchmarks
//! the solver against an answer list.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use wordle_sage::{
    commands::{
        Feedback, analyze_game, analyze_word, run_benchmark, sample_answers, solve_word,
        suggest_next,
    },
    core::Word,
    output::{
        print_analysis_result, print_benchmark_result, print_game_analysis, print_solve_result,
        print_suggest_result,
    },
    solver::{SamplerConfig, SolverConfig, SolverSession},
    wordlists::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordle_sage",
    about = "Wordle assistant that suggests guesses by expected information",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Allowed guesses, one word per line
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Possible answers, one word per line (default: the guess list)
    #[arg(short = 'a', long, global = true)]
    answers: Option<PathBuf>,

    /// Only guess words that could still be the answer
    #[arg(long, global = true)]
    hard: bool,

    /// Guess list size above which the scored pool is sampled
    #[arg(long, global = true, default_value_t = wordle_sage::solver::config::DEFAULT_POOL_CAP)]
    pool_cap: usize,

    /// Score bonus for guesses that could be the answer
    #[arg(long, global = true, default_value_t = wordle_sage::solver::config::DEFAULT_CANDIDATE_BONUS)]
    candidate_bonus: f64,

    /// Guesses allowed per game
    #[arg(short = 'm', long, global = true, default_value_t = 6)]
    max_guesses: usize,

    /// Seed for benchmark sampling
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze the entropy of a specific word
    Analyze {
        /// Word to analyze
        word: String,

        /// Number of alternatives to list
        #[arg(short, long, default_value_t = 10)]
        top: usize,
    },

    /// Review a played game turn by turn against the solver
    Game {
        /// The game's answer
        answer: String,

        /// The guesses played, in order
        #[arg(required = true)]
        guesses: Vec<String>,
    },

    /// Replay feedback and suggest the next guess
    Suggest {
        /// Observed feedback as GUESS:PATTERN, e.g. crane:--Y-G
        feedback: Vec<Feedback>,
    },

    /// Benchmark solver performance on random answers
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value_t = 50)]
        count: usize,
    },
}

fn load_words(path: &Path) -> Result<Vec<Word>> {
    load_from_file(path).with_context(|| format!("failed to read word list {}", path.display()))
}

fn build_session(cli: &Cli) -> Result<SolverSession> {
    let words_path = cli.words.as_deref().context("--words is required")?;
    let guess_space = load_words(words_path)?;
    let answers = match &cli.answers {
        Some(path) => load_words(path)?,
        None => guess_space.clone(),
    };

    let config = SolverConfig::default()
        .with_hard_mode(cli.hard)
        .with_candidate_bonus(cli.candidate_bonus)
        .with_max_attempts(Some(cli.max_guesses))
        .with_sampler(SamplerConfig::default().with_cap(cli.pool_cap));

    Ok(SolverSession::from_words(guess_space, answers, config))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut session = build_session(&cli)?;

    match cli.command {
        Commands::Solve { word, verbose } => {
            let result = solve_word(&mut session, &word, cli.max_guesses)?;
            print_solve_result(&result, verbose);
        }
        Commands::Analyze { word, top } => {
            let result = analyze_word(&session, &word, top)?;
            print_analysis_result(&result);
        }
        Commands::Game { answer, guesses } => {
            let result = analyze_game(&mut session, &answer, &guesses, cli.max_guesses)?;
            print_game_analysis(&result);
        }
        Commands::Suggest { feedback } => {
            let result = suggest_next(&mut session, &feedback)?;
            print_suggest_result(&result);
        }
        Commands::Benchmark { count } => {
            let targets = sample_answers(session.answers(), count, cli.seed);
            println!("Running benchmark on {} random words...", targets.len());
            let result = run_benchmark(&mut session, &targets, cli.max_guesses, true)?;
            print_benchmark_result(&result);
        }
    }

    Ok(())
}
