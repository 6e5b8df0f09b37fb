use clap::{Parser, Subcommand};
use std::process;
use tracing_subscriber::EnvFilter;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Detect the delimiter, quote and escape convention of delimited files.
    Sniff(cmd::sniff::SniffArgs),
    /// Parse a file under a detected or user-supplied dialect and re-emit
    /// it as normalized CSV.
    Parse(cmd::parse::ParseArgs),
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.debug {
        "sniffcsv=debug"
    } else {
        "sniffcsv=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let outcome = match cli.command {
        Commands::Sniff(args) => cmd::sniff::run(args),
        Commands::Parse(args) => cmd::parse::run(args),
    };

    if let Err(e) = outcome {
        eprintln!("{}", e);
        process::exit(1);
    }
}
