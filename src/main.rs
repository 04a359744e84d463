use bm25_deck::deck::{self, DeckConfig};
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let config = DeckConfig::default();

    println!("Generating PowerPoint presentation...");
    let slide_count = match deck::save_deck(&config) {
        Ok(count) => count,
        Err(e) => {
            error!(path = %config.output.display(), error = %e, "failed to save presentation");
            return ExitCode::FAILURE;
        },
    };

    println!("✓ Presentation saved as: {}", config.output.display());
    println!();
    println!("Presentation contains {} slides:", slide_count);
    for line in deck::outline_lines() {
        println!("{}", line);
    }
    ExitCode::SUCCESS
}
