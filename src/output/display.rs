//! Display functions for command results

use super::formatters::{colored_tiles, entropy_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult, SuggestResult};
use crate::solver::{SessionStatus, StrategyType};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} with {}",
        result.answer.text().bright_yellow().bold(),
        result.strategy.bright_cyan()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colored_tiles(&step.word, &step.feedback),
            step.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if step.candidates_after > 0 {
                let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({ratio:.1}x reduction)",
                    ratio.log2()
                );
            }
        }
    }

    println!();
    let guesses = result.steps.len();
    match result.session.status {
        SessionStatus::Solved => println!(
            "{}",
            format!("✅ Solved in {guesses} guesses!").green().bold()
        ),
        SessionStatus::Aborted => println!(
            "{}",
            format!("❌ No valid words remain after {guesses} guesses").red().bold()
        ),
        _ => println!(
            "{}",
            format!("❌ Failed to solve in {guesses} guesses").red().bold()
        ),
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD ANALYSIS:".bright_cyan().bold(),
        result.word.text().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if !result.in_pool {
        println!("\n{}", "Note: word is not in the word list".yellow());
    }

    let bar = entropy_bar(result.metrics.entropy, 30);

    println!("\n📊 Against {} remaining candidates:", result.total_candidates);
    println!("   Frequency:   {}", result.frequency.to_string().bright_yellow());
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.metrics.entropy).bright_yellow()
    );
    println!("   Sampled:     {:.3} bits", result.sampled_entropy);
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
}

/// Print a next-guess suggestion
pub fn print_suggestion(result: &SuggestResult) {
    println!(
        "\n📊 Suggested guess: {}",
        result.guess.text().bright_yellow().bold()
    );
    println!("   Candidates:  {}", result.remaining);
    println!("   Confidence:  {:.1}%", result.confidence * 100.0);
    println!("   {}", result.reasoning.bright_black());

    if !result.ranked.is_empty() {
        println!("\n🏆 Top guesses:");
        for (rank, (word, score)) in result.ranked.iter().enumerate() {
            println!("  {}. {} {score:.3}", rank + 1, word.text().bright_yellow());
        }
    }

    if !result.preview.is_empty() {
        println!("\nRemaining candidates:");
        for word in &result.preview {
            println!("  • {word}");
        }
        if result.remaining > result.preview.len() {
            println!("  … and {} more", result.remaining - result.preview.len());
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult, max_attempts: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "BENCHMARK RESULTS:".bright_cyan().bold(),
        result.strategy.bright_yellow()
    );
    println!("{}", "═".repeat(60).cyan());

    let pct = |n: usize| {
        if result.total_words == 0 {
            0.0
        } else {
            n as f64 / result.total_words as f64 * 100.0
        }
    };

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {} {}",
        result.solved,
        format!("({:.1}%)", pct(result.solved)).green()
    );
    if result.failed > 0 {
        println!(
            "   Failed:           {} {}",
            result.failed,
            format!("({:.1}%)", pct(result.failed)).red()
        );
    }
    if result.aborted > 0 {
        println!("   Aborted:          {}", result.aborted);
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        result.min_guesses.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_guesses.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(0);
    for guesses in 1..=max_attempts {
        let count = result.distribution.get(&guesses).copied().unwrap_or(0);
        let bar_len = if max_count > 0 {
            (count * 40 / max_count).max(usize::from(count > 0))
        } else {
            0
        };
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("   {guesses}: {bar} {count:4} ({:5.1}%)", pct(count));
    }

    if !result.misses.is_empty() {
        println!("\n😰 {}", "Missed answers".yellow().bold());
        for word in result.misses.iter().take(10) {
            println!("   {}", word.text().yellow());
        }
    }
}

/// Print every strategy with its description
pub fn print_strategies() {
    println!("\n{}", "Strategies".bright_cyan().bold());
    for name in StrategyType::NAMES {
        let strategy = StrategyType::from_name(name);
        println!(
            "  {:<20} {}",
            strategy.name().bright_yellow(),
            strategy.description()
        );
    }
}
