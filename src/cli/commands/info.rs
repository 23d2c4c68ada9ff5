//! Info command implementation

use super::resolve_spec;
use crate::cli::logging::log;
use crate::cli::{InfoArgs, LogLevel};
use crate::config::GuardSpec;
use crate::data::DataFrame;
use crate::io::{artifact_fingerprint, load_artifact};

/// Format the configured paths as a string
pub fn format_spec_info(spec: &GuardSpec) -> String {
    format!(
        "  Dataset: {} (label: {})\n  Current: {}\n  Baseline: {}\n  Split: {:.0}% test, seed {}",
        spec.data.path.display(),
        spec.data.label_column,
        spec.models.current.display(),
        spec.models.baseline.display(),
        spec.split.test_ratio * 100.0,
        spec.split.seed
    )
}

/// Format a dataset summary, or the reason it cannot be read
pub fn format_dataset_info(spec: &GuardSpec) -> String {
    match DataFrame::from_csv(&spec.data.path) {
        Ok(frame) => {
            let test_rows = ((frame.n_rows() as f64) * spec.split.test_ratio).round() as usize;
            format!(
                "  Rows: {}\n  Columns: {}\n  Test partition: {} rows",
                frame.n_rows(),
                frame.columns().len(),
                test_rows
            )
        }
        Err(e) => format!("  Unavailable: {e}"),
    }
}

/// Format one artifact's metadata and fingerprint, or the load failure
pub fn format_artifact_info(label: &str, path: &std::path::Path) -> String {
    match load_artifact(path) {
        Ok(artifact) => {
            let fingerprint = artifact_fingerprint(path)
                .map_or_else(|e| e.to_string(), |f| f[..12].to_string());
            format!(
                "  {label}: {} ({}), trained {}, sha256 {fingerprint}",
                artifact.metadata.name,
                artifact.classifier.name(),
                artifact.metadata.trained_at.format("%Y-%m-%d %H:%M:%S UTC")
            )
        }
        Err(e) => format!("  {label}: {e}"),
    }
}

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let spec = resolve_spec(args.spec)?;

    log(level, LogLevel::Normal, "Guard spec:");
    log(level, LogLevel::Normal, &format_spec_info(&spec));
    log(level, LogLevel::Normal, "");
    log(level, LogLevel::Normal, "Dataset:");
    log(level, LogLevel::Normal, &format_dataset_info(&spec));
    log(level, LogLevel::Normal, "");
    log(level, LogLevel::Normal, "Artifacts:");
    log(
        level,
        LogLevel::Normal,
        &format_artifact_info("current", &spec.models.current),
    );
    log(
        level,
        LogLevel::Normal,
        &format_artifact_info("baseline", &spec.models.baseline),
    );

    Ok(())
}
