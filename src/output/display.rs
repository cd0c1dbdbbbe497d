//! Display functions for command results

use super::formatters::{create_progress_bar, format_ladder, highlight_change};
use crate::commands::{
    BenchmarkResult, CheckResult, DistanceResult, LadderOutcome, LadderResult, NeighborsResult,
};
use colored::Colorize;

/// Print the result of a ladder query
pub fn print_ladder_result(result: &LadderResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Ladder: {} → {}",
        result.start.to_uppercase().bright_yellow().bold(),
        result.end.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    match &result.outcome {
        LadderOutcome::Found | LadderOutcome::Identity => {
            for (i, word) in result.ladder.iter().enumerate() {
                let rung = if i == 0 {
                    word.clone()
                } else {
                    highlight_change(&result.ladder[i - 1], word)
                };
                println!("  {:>2}. {}", i + 1, rung.bright_white().bold());
            }

            println!();
            println!(
                "{}",
                format!(
                    "✅ {} ({} step{})",
                    format_ladder(&result.ladder),
                    result.steps(),
                    if result.steps() == 1 { "" } else { "s" }
                )
                .green()
                .bold()
            );
        }
        LadderOutcome::LengthMismatch => {
            println!(
                "{}",
                "❌ No ladder: the words have different lengths".red().bold()
            );
        }
        LadderOutcome::NotAWord(word) => {
            println!(
                "{}",
                format!("❌ No ladder: '{word}' is not in the dictionary")
                    .red()
                    .bold()
            );
        }
        LadderOutcome::Unreachable => {
            println!(
                "{}",
                "❌ No ladder: no chain of words connects them".red().bold()
            );
        }
    }

    if verbose {
        println!("\n  Nodes expanded: {}", result.stats.expanded);
        println!("  Words visited:  {}", result.stats.visited);
        println!("  Search time:    {:.3}ms", result.duration.as_secs_f64() * 1000.0);
    }
}

/// Print the neighbors of a word
pub fn print_neighbors_result(result: &NeighborsResult) {
    let membership = if result.is_word {
        "in dictionary".green()
    } else {
        "not in dictionary".yellow()
    };

    println!(
        "\n{} ({membership})",
        result.word.to_uppercase().bright_yellow().bold()
    );

    if result.neighbors.is_empty() {
        println!("  No neighbors");
        return;
    }

    println!(
        "  {} neighbor{}:",
        result.neighbors.len(),
        if result.neighbors.len() == 1 { "" } else { "s" }
    );
    for neighbor in &result.neighbors {
        println!("  • {}", highlight_change(&result.word, neighbor));
    }
}

/// Print the distance between two words
pub fn print_distance_result(result: &DistanceResult) {
    println!(
        "\n{} vs {}",
        result.first.to_uppercase().bright_yellow(),
        result.second.to_uppercase().bright_yellow()
    );

    match result.distance {
        Some(distance) => {
            let positions: Vec<String> = result
                .differing_positions
                .iter()
                .map(|p| (p + 1).to_string())
                .collect();
            println!("  Distance:  {}", distance.to_string().bright_cyan().bold());
            if !positions.is_empty() {
                println!("  Positions: {}", positions.join(", "));
            }
        }
        None => println!(
            "  Distance:  {} (different lengths)",
            "-1".red().bold()
        ),
    }
}

/// Print the verdict on a user-supplied ladder
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", format_ladder(&result.words).bright_white());
    match &result.verdict {
        Ok(()) => println!("{}", "✅ Valid word ladder".green().bold()),
        Err(violation) => println!("{} {violation}", "❌ Not a ladder:".red().bold()),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Searches:         {}", result.total_searches);
    println!("   Ladders found:    {}", format!("{}", result.found).green());
    println!(
        "   Unreachable:      {}",
        format!("{}", result.unreachable).yellow()
    );
    println!(
        "   Average length:   {}",
        format!("{:.2} words", result.average_length)
            .bright_yellow()
            .bold()
    );
    if let Some((start, end, length)) = &result.longest {
        println!(
            "   Longest:          {} → {} ({length} words)",
            start.to_uppercase(),
            end.to_uppercase()
        );
    }
    println!("   Nodes expanded:   {}", result.nodes_expanded);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Searches/second:  {:.1}", result.searches_per_second);

    if result.total_searches == 0 {
        return;
    }

    println!("\n📈 {}", "Ladder lengths:".bright_cyan().bold());
    for (&length, &count) in &result.distribution {
        let pct = (count as f64 / result.total_searches as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        let label = if length == 0 {
            "none".to_string()
        } else {
            format!("{length:>4}")
        };
        println!("   {label}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
