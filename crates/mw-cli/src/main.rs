//! CLI frontend for the Mistward session companion.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "mw",
    about = "Mistward — a table companion for Mist-engine games",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a template character sheet
    Init {
        /// Character name
        name: String,

        /// Output file (default: derived from the character name)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the themes and tags on a character sheet
    Show {
        /// Path to the character sheet JSON
        sheet: PathBuf,
    },

    /// Run an interactive session for a character
    Play {
        /// Path to the character sheet JSON
        sheet: PathBuf,

        /// RNG seed for reproducible dice
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Consume only the temporary story tags selected for the roll
        #[arg(long)]
        consume_selected: bool,

        /// Allow rolling without selecting a move first
        #[arg(long)]
        no_move_gate: bool,

        /// Restore registry state from an earlier save
        #[arg(short, long)]
        resume: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { name, output } => commands::init::run(&name, output.as_deref()),
        Commands::Show { sheet } => commands::show::run(&sheet),
        Commands::Play {
            sheet,
            seed,
            consume_selected,
            no_move_gate,
            resume,
        } => commands::play::run(&sheet, seed, consume_selected, no_move_gate, resume.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
