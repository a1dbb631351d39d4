use anyhow::Result;
use clap::Parser;
use tracing::Level;

mod commands;
mod utils;

use commands::Operation;

#[derive(Parser)]
#[command(name = "seqkit-cmd")]
#[command(about = "Command-line utility applying sequence operations to JSON documents")]
#[command(version)]
struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Input JSON file (defaults to stdin)
    #[arg(short, long, global = true)]
    input: Option<String>,

    /// Output file for the result (defaults to stdout)
    #[arg(short, long, global = true)]
    output: Option<String>,

    #[command(subcommand)]
    command: Operation,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    commands::run(&cli.command, cli.input.as_deref(), cli.output.as_deref())
}
