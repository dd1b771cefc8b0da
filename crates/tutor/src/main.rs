//! Tutor CLI - lesson renderer.
//!
//! Provides commands for:
//! - `render`: Render a lesson to an HTML page
//! - `sections`: Dump the parsed code/explanation sections as JSON
//! - `preview`: Print the live preview document for a code snippet
//! - `quiz`: Take a lesson's quiz in the terminal
//! - `check`: Report authoring problems in a lesson

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, PreviewArgs, QuizArgs, RenderArgs, SectionsArgs};
use output::Output;

/// Tutor - lesson renderer.
#[derive(Parser)]
#[command(name = "tutor", version, about)]
struct Cli {
    /// Enable verbose output (show parsing and timing logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a lesson JSON file to HTML.
    Render(RenderArgs),
    /// Print the parsed sections of a lesson as JSON.
    Sections(SectionsArgs),
    /// Print the live preview document for a code snippet.
    Preview(PreviewArgs),
    /// Take a lesson's quiz interactively.
    Quiz(QuizArgs),
    /// Check a lesson for authoring problems.
    Check(CheckArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Sections(args) => args.execute(),
        Commands::Preview(args) => args.execute(),
        Commands::Quiz(args) => args.execute(),
        Commands::Check(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
