//! Interactive game loop
//!
//! Text-based play mode: the program asks yes/no questions until it can name
//! the character. Guessed characters can be knocked off the board, which
//! rebuilds the tree from the shrunken board.

use crate::core::Board;
use crate::output::formatters::answer_word;
use crate::solver::{GameSession, SessionState, StrategyType, build_tree, prune};
use colored::Colorize;
use std::io::{self, Write};

/// What the player chose to do once a round ended
enum RoundAction {
    Quit,
    PlayAgain,
    Remove(String),
}

/// Run the interactive play mode
///
/// Rebuilds the question tree before every round so character removals take
/// effect; unless `keep_redundant` is set, redundant questions are pruned
/// first.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_play(
    board: &mut Board,
    strategy: &StrategyType,
    keep_redundant: bool,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Guess Who - Interactive Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Think of a character on the board and answer my questions.");
    println!("Answers: 'y'/'n'. Commands: 'candidates', 'restart', 'quit'.\n");

    loop {
        if board.character_count() == 0 {
            println!("The board is empty. Nothing left to guess!\n");
            return Ok(());
        }

        let outcome = build_tree(board, strategy);
        if outcome.is_degenerate() {
            for group in &outcome.degenerate_groups {
                let names: Vec<&str> = group
                    .iter()
                    .filter_map(|&c| board.character_name(c))
                    .collect();
                println!(
                    "{} {}",
                    "⚠ Indistinguishable characters:".yellow().bold(),
                    names.join(", ").yellow()
                );
            }
            println!("{}\n", "I can only guess one of each group.".yellow());
        }

        let tree = if keep_redundant {
            outcome.tree
        } else {
            prune(outcome.tree)
        };

        match play_round(board, tree)? {
            RoundAction::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            RoundAction::PlayAgain => {}
            RoundAction::Remove(name) => match board.remove_character(&name) {
                Ok(()) => println!(
                    "\n{} {} knocked off the board.\n",
                    "✓".green(),
                    name.bold()
                ),
                Err(err) => println!("\n{err}\n"),
            },
        }
    }
}

/// Play a single round to resolution
fn play_round(board: &Board, tree: crate::core::QuestionTree) -> Result<RoundAction, String> {
    let mut session = GameSession::new(board, tree);
    let mut turn = 1;

    loop {
        match session.state() {
            SessionState::AtQuestion { attribute } => {
                let candidates = session.remaining_candidates();
                println!("────────────────────────────────────────────────────────────");
                println!("Turn {turn}: {} candidates remaining", candidates.len());
                if candidates.len() <= 6 {
                    for name in &candidates {
                        println!("  • {name}");
                    }
                }

                let label = board
                    .attribute_name(attribute)
                    .unwrap_or("this attribute");
                let input =
                    get_user_input(&format!("Does your character have: {label}? (y/n)"))?
                        .to_lowercase();

                match input.as_str() {
                    "y" | "yes" => {
                        if session.answer(true).is_ok() {
                            turn += 1;
                        } else {
                            println!("\n❌ No character on the board matches that answer!\n");
                        }
                    }
                    "n" | "no" => {
                        if session.answer(false).is_ok() {
                            turn += 1;
                        } else {
                            println!("\n❌ No character on the board matches that answer!\n");
                        }
                    }
                    "candidates" | "c" => {
                        println!("\nStill in play:");
                        for name in &session.remaining_candidates() {
                            println!("  • {name}");
                        }
                        println!();
                    }
                    "restart" | "r" => {
                        session.restart();
                        turn = 1;
                        println!("\n🔄 Back to the first question!\n");
                    }
                    "quit" | "q" | "exit" => return Ok(RoundAction::Quit),
                    _ => println!("❌ Please answer 'y' or 'n' (or 'candidates'/'restart'/'quit')\n"),
                }
            }
            SessionState::Resolved { character } => {
                let name = board
                    .character_name(character)
                    .unwrap_or("<unknown>")
                    .to_string();

                println!("\n{}", "═".repeat(60).bright_cyan());
                println!(
                    "{}",
                    format!("  🎯 Your character is {name}!").bright_green().bold()
                );
                println!("{}", "═".repeat(60).bright_cyan());

                if session.answers().is_empty() {
                    println!("\n  No questions needed: only one candidate remained.");
                } else {
                    println!("\n  Questions asked:");
                    for (i, &(attribute, answer)) in session.answers().iter().enumerate() {
                        println!(
                            "    {}. {} → {}",
                            (i + 1).to_string().bright_black(),
                            board.attribute_name(attribute).unwrap_or("?"),
                            answer_word(answer).bold()
                        );
                    }
                }
                println!();

                let input = get_user_input("Play again, remove this character, or quit? (again/remove/quit)")?
                    .to_lowercase();
                return Ok(match input.as_str() {
                    "remove" | "rm" => RoundAction::Remove(name),
                    "quit" | "q" | "exit" | "no" => RoundAction::Quit,
                    _ => RoundAction::PlayAgain,
                });
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
