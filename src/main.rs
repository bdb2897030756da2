//! prosefmt - check and fix trailing whitespace and trailing newlines
//!
//! prosefmt provides:
//! - Recursive scanning with text/binary classification
//! - Two rules: TL010 (trailing whitespace) and TL001 (one trailing newline)
//! - Reports in compact, TAP and JSON formats
//! - Atomic in-place fixing

use clap::error::ErrorKind;
use clap::Parser;

mod backends;
mod cli;
mod core;
mod flows;
mod rules;

fn main() {
    init_tracing();

    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // Usage errors share exit status 1 with every other failure
            let _ = e.print();
            std::process::exit(1);
        }
    };

    match cli::run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(1);
        }
    }
}

/// Developer diagnostics on stderr, controlled by RUST_LOG (default: warn)
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
