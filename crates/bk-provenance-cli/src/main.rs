//! bk-provenance CLI: SLSA provenance for Buildkite build artifacts.
//!
//! Hash build artifacts and write an in-toto provenance statement naming
//! the repository, commit, command, and agent that produced them.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

/// bk-provenance: SLSA provenance for Buildkite build artifacts.
#[derive(Parser)]
#[command(name = "bk-provenance", version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (repeat for more detail: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output logs as JSON (for machine consumption).
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Hash artifacts and write an unsigned provenance statement.
    Generate(commands::generate::GenerateArgs),
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // stdout carries the provenance echo
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if cli.json_logs {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    match cli.command {
        Commands::Generate(args) => commands::generate::execute(args),
    }
}
