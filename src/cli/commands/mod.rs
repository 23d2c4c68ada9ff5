//! CLI command implementations

mod check;
mod info;

use crate::cli::{Cli, Command, LogLevel};
use crate::config::{load_spec, GuardSpec};
use std::path::PathBuf;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = LogLevel::from_flags(cli.verbose, cli.quiet);

    match cli.command {
        Command::Check(args) => check::run_check(args, log_level),
        Command::Info(args) => info::run_info(args, log_level),
    }
}

/// Resolve a spec argument: load the YAML file when given, defaults otherwise
pub(crate) fn resolve_spec(path: Option<PathBuf>) -> Result<GuardSpec, String> {
    match path {
        Some(path) => load_spec(&path).map_err(|e| e.to_string()),
        None => Ok(GuardSpec::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_resolve_spec_defaults() {
        let spec = resolve_spec(None).unwrap();
        assert_eq!(spec.split.seed, 42);
    }

    #[test]
    fn test_resolve_spec_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "split:\n  seed: 7").unwrap();
        let spec = resolve_spec(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(spec.split.seed, 7);
    }

    #[test]
    fn test_resolve_spec_missing_file() {
        let result = resolve_spec(Some(PathBuf::from("/nonexistent/guard.yaml")));
        assert!(result.is_err());
    }
}
