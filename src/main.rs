mod app;
mod chain;
mod graph;
mod wordlist;

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = app::Cli::parse();
    match app::run_app(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            match e.kind() {
                app::ErrorKind::InvalidArgument => ExitCode::from(2),
                app::ErrorKind::ResourceUnavailable | app::ErrorKind::InvariantViolation => {
                    ExitCode::FAILURE
                }
            }
        }
    }
}
