//! Levelsmith CLI - create and inspect `.level` files.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Levelsmith - a level editor for tile-based dynamite-platformer levels
#[derive(Parser, Debug)]
#[command(name = "levelsmith")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactively create a level and save it as <name>.level
    Create {
        /// Output directory (default: levels/ next to the executable)
        #[arg(short, long)]
        output_dir: Option<std::path::PathBuf>,
    },

    /// Decode a .level file and show its contents
    Inspect {
        /// Level file (.level)
        #[arg(required = true)]
        file: std::path::PathBuf,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::InspectFormat,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Create { output_dir } => cli::create::execute(output_dir),

        Commands::Inspect { file, format } => cli::inspect::execute(&file, format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
