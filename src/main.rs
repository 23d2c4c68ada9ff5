//! Verificar CLI
//!
//! Regression-guard entry point for the verificar library.
//!
//! # Usage
//!
//! ```bash
//! # Run the checks with the default layout
//! verificar check
//!
//! # Run the checks against an explicit guard spec
//! verificar check guard.yaml
//!
//! # Show the spec, dataset, and artifact summary
//! verificar info guard.yaml
//! ```

use clap::Parser;
use std::process::ExitCode;
use verificar::cli::{run_command, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
