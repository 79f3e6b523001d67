use clap::Parser;
use habitlog::application::SessionService;
use habitlog::cli::Cli;
use habitlog::error::HabitError;
use habitlog::infrastructure::{logging, Config};
use std::io;

fn main() {
    let _cli = Cli::parse();

    let result = run();

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run() -> Result<(), HabitError> {
    let config = Config::resolve()?;

    // Diagnostics are optional; the session runs without them
    if let Err(e) = logging::init(&config) {
        eprintln!("Warning: diagnostics disabled: {:#}", e);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    SessionService::new(stdin.lock(), stdout.lock(), config.storage_path()).run()?;

    Ok(())
}
