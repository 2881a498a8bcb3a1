//! Wordle Solver - CLI
//!
//! Interactive helper, self-play solver, analysis and benchmarking.

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use wordly_solver::{
    commands::{
        BenchmarkConfig, SolveConfig, analyze_word, make_rng, parse_history, pick_answers,
        run_benchmark, run_play, solve_word, suggest_next,
    },
    core::Word,
    output::{
        print_analysis_result, print_benchmark_result, print_solve_result, print_strategies,
        print_suggestion,
    },
    solver::{SessionConfig, StrategyType},
    wordlists::{embedded_words, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordly_solver",
    about = "Wordle solver with frequency, hill-climbing, annealing and beam strategies",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: systematic (default), hill-climbing, simulated-annealing, random, beam
    #[arg(short, long, global = true, default_value = "systematic")]
    strategy: String,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for the randomized strategies and answer picking
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Attempts per game (1-10)
    #[arg(short = 'm', long, global = true, default_value_t = 6)]
    max_attempts: usize,

    /// Log more (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: enter the colors you see (default)
    Play,

    /// Solve a target word by self-play
    Solve {
        /// The target word; a random word from the list when omitted
        word: Option<String>,

        /// Show candidate counts per turn
        #[arg(short, long)]
        details: bool,
    },

    /// Suggest the next guess for a game in progress
    Suggest {
        /// Previous guesses as WORD:FEEDBACK, e.g. arose:01020 or slate:--G-Y
        history: Vec<String>,

        /// Ranked alternatives to list (1-5)
        #[arg(short, long, default_value_t = 3)]
        top: usize,
    },

    /// Score a word against the remaining candidates
    Analyze {
        /// Word to analyze
        word: String,

        /// Previous guesses as WORD:FEEDBACK
        #[arg(long, num_args = 1..)]
        history: Vec<String>,
    },

    /// Benchmark the strategy over many self-play games
    Benchmark {
        /// Number of answers to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },

    /// List available strategies
    Strategies,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Load the word pool selected by the -w flag
fn load_wordlist(wordlist: &str) -> Result<Vec<Word>> {
    let words = match wordlist {
        "embedded" => embedded_words(),
        path => load_from_file(path).with_context(|| format!("failed to read word list {path}"))?,
    };
    if words.is_empty() {
        bail!("word list '{wordlist}' contains no valid five-letter words");
    }
    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let pool = load_wordlist(&cli.wordlist)?;
    let strategy = StrategyType::from_name(&cli.strategy);
    let config = SessionConfig::new(cli.max_attempts)?;
    let mut rng = make_rng(cli.seed);
    log::debug!("{} words loaded, strategy {strategy}", pool.len());

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            run_play(&pool, strategy, config, &mut rng)?;
        }
        Commands::Solve { word, details } => {
            let solve = SolveConfig {
                target: word,
                max_attempts: config.max_attempts,
            };
            let result = solve_word(&solve, &pool, strategy, &mut rng)?;
            print_solve_result(&result, details);
        }
        Commands::Suggest { history, top } => {
            let history = parse_history(&history)?;
            let result = suggest_next(&pool, strategy, &history, top, &mut rng)?;
            print_suggestion(&result);
        }
        Commands::Analyze { word, history } => {
            let history = parse_history(&history)?;
            let result = analyze_word(&word, &pool, &history)?;
            print_analysis_result(&result);
        }
        Commands::Benchmark { count } => {
            let bench = BenchmarkConfig {
                count,
                max_attempts: config.max_attempts,
                seed: cli.seed.unwrap_or_default(),
                show_progress: true,
            };
            let answers = pick_answers(&pool, bench.count, bench.seed);
            println!(
                "Running {} on {} words...",
                strategy.name(),
                answers.len()
            );
            let result = run_benchmark(&pool, strategy, &answers, &bench)?;
            print_benchmark_result(&result, config.max_attempts);
        }
        Commands::Strategies => print_strategies(),
    }

    Ok(())
}
