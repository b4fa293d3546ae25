//! Display functions for command results

use super::formatters::depth_bar;
use crate::commands::{CompareResult, SweepRow, TreeReport};
use crate::core::{Board, Node, QuestionTree};
use colored::Colorize;

/// Print the board's name tables and matrix
pub fn print_board(board: &Board) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} characters × {} attributes ",
        "BOARD:".bright_cyan().bold(),
        board.character_count(),
        board.attribute_count()
    );
    println!("{}", "═".repeat(60).cyan());

    let name_width = board
        .characters()
        .iter()
        .map(String::len)
        .max()
        .unwrap_or(4)
        .max(4);

    println!(
        "\n{:name_width$}  {}",
        "",
        board
            .attributes()
            .iter()
            .map(|a| a.as_str())
            .collect::<Vec<_>>()
            .join("  ")
    );
    for (c, name) in board.characters().iter().enumerate() {
        print!("{name:name_width$}  ");
        for (a, label) in board.attributes().iter().enumerate() {
            let cell = if board.value(c, a) {
                "1".green()
            } else {
                "0".bright_black()
            };
            // Pad by hand: format widths would count the color escape codes
            print!("{}{cell}  ", " ".repeat(label.len().saturating_sub(1)));
        }
        println!();
    }
    println!();
}

/// Print the question tree, yes-branch first
pub fn print_tree(tree: &QuestionTree, board: &Board) {
    print_node(tree.root(), board, "", "");
}

fn print_node(node: &Node, board: &Board, prefix: &str, answer: &str) {
    match node {
        Node::Question { attribute, yes, no } => {
            let label = board.attribute_name(*attribute).unwrap_or("?");
            println!("{prefix}{answer}{}", format!("{label}?").bright_yellow());
            let child_prefix = format!("{prefix}    ");
            print_node(yes, board, &child_prefix, "yes → ");
            print_node(no, board, &child_prefix, "no  → ");
        }
        Node::Leaf(character) => {
            let name = board.character_name(*character).unwrap_or("<unknown>");
            println!("{prefix}{answer}{}", name.bright_green().bold());
        }
        Node::Empty => {
            println!("{prefix}{answer}{}", "(nobody)".bright_black());
        }
    }
}

/// Print a tree report with the rendered tree below it
pub fn print_tree_report(report: &TreeReport, board: &Board) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} builder ",
        "QUESTION TREE:".bright_cyan().bold(),
        report.strategy.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    for group in &report.degenerate_groups {
        println!(
            "\n{} {}",
            "⚠ Indistinguishable:".yellow().bold(),
            group.join(", ").yellow()
        );
    }

    println!("\n📊 Built:  {} questions, {} leaves, mean depth {}",
        report.question_count,
        report.leaf_count,
        format!("{:.3}", report.mean_depth).bright_yellow()
    );
    println!(
        "   Pruned: {} questions, mean depth {}",
        report.pruned_question_count,
        format!("{:.3}", report.pruned_mean_depth).bright_yellow()
    );

    println!();
    print_tree(&report.tree, board);
    println!();
}

/// Print the baseline/balanced comparison for one board
pub fn print_compare_result(result: &CompareResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BUILDER COMPARISON".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!(
        "\nBoard: {} characters × {} attributes\n",
        result.characters, result.attributes
    );

    let worst = result.attributes as f64;
    for (name, stats) in [
        ("baseline", &result.baseline),
        ("balanced", &result.balanced),
    ] {
        println!("  {}", name.bright_yellow().bold());
        println!(
            "    mean depth:   [{}] {:.3} ({:.3} unpruned)",
            depth_bar(stats.pruned_mean_depth, worst, 30).green(),
            stats.pruned_mean_depth,
            stats.mean_depth
        );
        println!(
            "    questions:    {} ({} unpruned)",
            stats.pruned_question_count, stats.question_count
        );
    }

    let saved = result.baseline.pruned_mean_depth - result.balanced.pruned_mean_depth;
    if saved > 1e-9 {
        println!(
            "\n  {} {:.3} fewer questions per game on average",
            "Balanced saves".bright_green().bold(),
            saved
        );
    } else {
        println!("\n  Both builders reach the same mean depth here.");
    }
}

/// Print the random-board sweep table
pub fn print_sweep(rows: &[SweepRow]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "RANDOM BOARD SWEEP".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!("\n  {:>10}  {:>10}  {:>10}", "characters", "baseline", "balanced");

    for row in rows {
        println!(
            "  {:>10}  {:>10.3}  {:>10.3}",
            row.characters, row.baseline_depth, row.balanced_depth
        );
    }
    println!();
}
