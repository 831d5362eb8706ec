//! Display functions for command results

use super::formatters::{create_progress_bar, percent};
use crate::commands::{AnalysisResult, BenchmarkResult};
use crate::game::ScrambleMode;
use colored::Colorize;

/// Print the result of a dictionary analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DICTIONARY ANALYSIS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📚 Words loaded: {}", result.total_words);
    if let (Some(shortest), Some(longest)) = (&result.shortest, &result.longest) {
        println!("   Shortest:     {shortest}");
        println!("   Longest:      {longest}");
    }

    println!("\n🎚  {}", "Difficulty bands:".bright_cyan().bold());
    let total = result.total_words.max(1) as f64;
    for (band, count) in &result.bands {
        let bar = create_progress_bar(*count as f64, total, 30);
        println!(
            "   {:<7} {:<12} {} {count:4}",
            band.name(),
            format!("({})", band.length_label()),
            bar.green()
        );
    }
    if result.unclassified > 0 {
        println!(
            "   {}",
            format!(
                "{} words are shorter than 3 letters and never played",
                result.unclassified
            )
            .yellow()
        );
    }

    println!("\n📏 {}", "Lengths:".bright_cyan().bold());
    let max_count = result
        .lengths
        .iter()
        .map(|(_, count)| *count)
        .max()
        .unwrap_or(1) as f64;
    for (len, count) in &result.lengths {
        let bar = create_progress_bar(*count as f64, max_count, 30);
        println!("   {len:3}: {} {count:4}", bar.blue());
    }
}

/// Print the result of a scramble benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SCRAMBLE BENCHMARK".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Run:".bright_cyan().bold());
    println!("   Playable words:   {}", result.total_words);
    println!("   Trials per word:  {}", result.trials_per_word);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!(
        "\n🔀 {}",
        "Scrambles identical to the word:".bright_cyan().bold()
    );
    println!(
        "   {:<8} {:>6}  {:>9}  {:>9}",
        "Band",
        "Words",
        ScrambleMode::Classic.name(),
        ScrambleMode::Uniform.name()
    );
    for (band, classic, uniform) in &result.bands {
        if classic.words == 0 {
            println!("   {:<8} {:>6}  {:>9}  {:>9}", band.name(), 0, "-", "-");
            continue;
        }
        println!(
            "   {:<8} {:>6}  {:>9}  {:>9}",
            band.name(),
            classic.words,
            percent(classic.unchanged_rate()).bright_yellow(),
            percent(uniform.unchanged_rate())
        );
    }
}
