use std::io;

use clap::{ArgAction, Parser};
use tracing::Level;

/// Prints a diagonal line of backslashes.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Number of rows; zero or less prints a blank line
    #[arg(allow_negative_numbers = true)]
    count: i64,

    /// Log to stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    diagonal_line::print(cli.count)
}
