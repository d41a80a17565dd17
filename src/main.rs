//! Keymorph - keyboard-layout substitution encoder
//!
//! Applies flips and shifts to a 4x10 key grid and streams text through the
//! resulting substitution, writing the encoded bytes to standard output.

use clap::Parser;
use keymorph::cli::EncodeArgs;
use keymorph::constants::APP_BINARY_NAME;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Keymorph - encode text by flipping and shifting a keyboard grid
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    encode: EncodeArgs,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries encoded output only
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = cli.encode.execute() {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
