//! Guess Who Solver - CLI
//!
//! Builds question trees over a character board and plays the guessing game.

use anyhow::Result;
use clap::{Parser, Subcommand};
use guesswho::{
    boards::{default_board, loader::load_from_file},
    commands::{compare_builders, report_tree, run_play, run_sweep},
    core::Board,
    output::{print_board, print_compare_result, print_sweep, print_tree_report},
    solver::StrategyType,
};

#[derive(Parser)]
#[command(
    name = "guesswho",
    about = "Guess Who solver using balanced question trees",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Builder: balanced (default) or baseline
    #[arg(short = 's', long, global = true, default_value = "balanced")]
    builder: String,

    /// Board file (TSV); defaults to the embedded board
    #[arg(short = 'f', long, global = true)]
    board: Option<String>,

    /// Keep redundant questions (skip the pruning pass)
    #[arg(long, global = true)]
    keep_redundant: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default): answer yes/no until your character is found
    Play,

    /// Print the board and the question tree with its depth metrics
    Show,

    /// Compare the baseline and balanced builders
    Compare {
        /// Also sweep random boards of 2..=N characters
        #[arg(short = 'r', long)]
        random: Option<usize>,

        /// Seed for the random-board sweep
        #[arg(long, default_value = "17")]
        seed: u64,
    },
}

/// Load the board selected by the -f flag, or the embedded default
fn load_board(path: Option<&str>) -> Result<Board> {
    match path {
        Some(path) => Ok(load_from_file(path)?),
        None => Ok(default_board()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut board = load_board(cli.board.as_deref())?;
    let strategy = StrategyType::from_name(&cli.builder);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            run_play(&mut board, &strategy, cli.keep_redundant).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Show => {
            print_board(&board);
            let report = report_tree(&board, &strategy);
            print_tree_report(&report, &board);
            Ok(())
        }
        Commands::Compare { random, seed } => {
            let result = compare_builders(&board);
            print_compare_result(&result);

            if let Some(max_characters) = random {
                let rows = run_sweep(max_characters, seed);
                print_sweep(&rows);
            }
            Ok(())
        }
    }
}
