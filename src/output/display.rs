//! Display functions for command results

use super::formatters::{letter_list, word_sample};
use crate::commands::{SolveReport, SweepResult};
use crate::solver::Solution;
use colored::Colorize;
use std::collections::BTreeSet;

const SAMPLE_SIZE: usize = 3;

/// Print the result of solving a prefix
pub fn print_solve_report(report: &SolveReport, show_words: bool) {
    let solution = &report.solution;
    let query = solution.query();

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Prefix: {}  ({} players, words of {}+ letters)",
        display_prefix(&query.prefix).bright_yellow().bold(),
        query.num_players,
        query.min_word_length
    );
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\n✅ {} {}",
        "Certain wins: ".green().bold(),
        letter_list(solution.certain_win_letters()).green()
    );
    print_letter_examples(
        solution,
        solution.certain_win_words(),
        solution.certain_win_letters(),
    );

    println!(
        "\n🤞 {} {}",
        "Possible wins:".yellow().bold(),
        letter_list(solution.possible_win_letters()).yellow()
    );
    print_letter_examples(
        solution,
        solution.possible_win_words(),
        solution.possible_win_letters(),
    );

    println!(
        "\n❌ {} {}",
        "Losing:       ".red().bold(),
        letter_list(solution.losing_letters()).red()
    );

    println!(
        "\n📊 {} reachable words, {} completed on another player's turn ({:.1}ms)",
        report.reachable_words,
        solution.losing_words().len(),
        report.duration.as_secs_f64() * 1000.0
    );

    if show_words {
        print_word_set("Certain-win words", solution.certain_win_words());
        print_word_set("Possible-win words", solution.possible_win_words());
        print_word_set("Losing words", solution.losing_words());
    }
}

/// Print a player-count sweep as a table
pub fn print_sweep_result(result: &SweepResult) {
    println!("\n{}", "═".repeat(70).cyan());
    println!(
        " {} {} ",
        "PLAYER SWEEP:".bright_cyan().bold(),
        display_prefix(&result.prefix).bright_yellow().bold()
    );
    println!("{}", "═".repeat(70).cyan());

    println!("\n  {:>7}  {:<28}  {:<28}", "players", "certain", "possible");
    for row in &result.rows {
        println!(
            "  {:>7}  {:<28}  {:<28}",
            row.num_players,
            letter_list(row.solution.certain_win_letters()).green(),
            letter_list(row.solution.possible_win_letters()).yellow()
        );
    }

    println!(
        "\n  Solved {} player counts in {:.2}s",
        result.rows.len(),
        result.duration.as_secs_f64()
    );
}

/// Print words reachable from a prefix
pub fn print_words(prefix: &str, words: &[String]) {
    println!(
        "\n{} words below {}:",
        words.len().to_string().bright_cyan().bold(),
        display_prefix(prefix).bright_yellow()
    );
    for word in words {
        println!("  • {word}");
    }
}

fn print_letter_examples(solution: &Solution, words: &BTreeSet<String>, letters: &[char]) {
    for &letter in letters {
        let sample = word_sample(solution.words_for_letter(words, letter), SAMPLE_SIZE);
        println!("   {} → {}", letter.to_string().bold(), sample.bright_black());
    }
}

fn print_word_set(title: &str, words: &BTreeSet<String>) {
    println!("\n{} ({}):", title.bright_cyan().bold(), words.len());
    if words.is_empty() {
        println!("  -");
    }
    for word in words {
        println!("  • {word}");
    }
}

fn display_prefix(prefix: &str) -> String {
    if prefix.is_empty() {
        "(empty)".to_string()
    } else {
        prefix.to_uppercase()
    }
}
