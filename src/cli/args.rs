//! CLI argument types

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Verificar: Model Regression Guard
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "verificar")]
#[command(version)]
#[command(about = "Gate a candidate classifier against a frozen baseline on accuracy and latency")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Run the regression checks (fail-fast)
    Check(CheckArgs),

    /// Display the guard spec and dataset summary without running checks
    Info(InfoArgs),
}

/// Arguments for the check command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct CheckArgs {
    /// Path to a YAML guard spec; defaults apply when omitted
    #[arg(value_name = "SPEC")]
    pub spec: Option<PathBuf>,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to a YAML guard spec; defaults apply when omitted
    #[arg(value_name = "SPEC")]
    pub spec: Option<PathBuf>,
}
