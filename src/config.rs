//! YAML schema for the guard specification
//!
//! A guard spec names the dataset, the two artifact paths, and the split
//! policy. Every field has a default matching the reference harness layout,
//! so an empty spec (or no spec file at all) checks
//! `models/titanic_model.json` against `models/titanic_model_baseline.json`
//! over `data/Titanic.csv`.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Complete guard specification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardSpec {
    /// Dataset configuration
    #[serde(default)]
    pub data: DataSpec,

    /// Artifact paths
    #[serde(default)]
    pub models: ModelPaths,

    /// Train/test split policy
    #[serde(default)]
    pub split: SplitSpec,
}

impl Default for GuardSpec {
    fn default() -> Self {
        Self {
            data: DataSpec::default(),
            models: ModelPaths::default(),
            split: SplitSpec::default(),
        }
    }
}

/// Dataset path and label column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSpec {
    /// CSV dataset path
    #[serde(default = "default_dataset")]
    pub path: PathBuf,

    /// Name of the binary label column
    #[serde(default = "default_label")]
    pub label_column: String,
}

impl Default for DataSpec {
    fn default() -> Self {
        Self {
            path: default_dataset(),
            label_column: default_label(),
        }
    }
}

/// Paths to the candidate and baseline artifacts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelPaths {
    /// Candidate artifact produced by the latest training run
    #[serde(default = "default_current")]
    pub current: PathBuf,

    /// Frozen reference artifact
    #[serde(default = "default_baseline")]
    pub baseline: PathBuf,
}

impl Default for ModelPaths {
    fn default() -> Self {
        Self {
            current: default_current(),
            baseline: default_baseline(),
        }
    }
}

/// Deterministic split policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitSpec {
    /// Fraction of rows held out as the test partition
    #[serde(default = "default_test_ratio")]
    pub test_ratio: f64,

    /// Shuffle seed; fixed so partition membership is reproducible
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for SplitSpec {
    fn default() -> Self {
        Self {
            test_ratio: default_test_ratio(),
            seed: default_seed(),
        }
    }
}

fn default_dataset() -> PathBuf {
    PathBuf::from("data/Titanic.csv")
}

fn default_label() -> String {
    "Survived".to_string()
}

fn default_current() -> PathBuf {
    PathBuf::from("models/titanic_model.json")
}

fn default_baseline() -> PathBuf {
    PathBuf::from("models/titanic_model_baseline.json")
}

fn default_test_ratio() -> f64 {
    0.2
}

fn default_seed() -> u64 {
    42
}

/// Load a guard spec from a YAML file
pub fn load_spec(path: impl AsRef<Path>) -> Result<GuardSpec> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
    let spec: GuardSpec = serde_yaml::from_str(&content)
        .map_err(|e| Error::Config(format!("cannot parse {}: {e}", path.display())))?;
    validate_spec(&spec)?;
    Ok(spec)
}

/// Validate a guard spec without touching the filesystem
pub fn validate_spec(spec: &GuardSpec) -> Result<()> {
    if !(spec.split.test_ratio > 0.0 && spec.split.test_ratio < 1.0) {
        return Err(Error::Config(format!(
            "test_ratio must be in (0, 1), got {}",
            spec.split.test_ratio
        )));
    }
    if spec.data.label_column.is_empty() {
        return Err(Error::Config("label_column must not be empty".to_string()));
    }
    if spec.models.current == spec.models.baseline {
        return Err(Error::Config(
            "current and baseline must be distinct paths".to_string(),
        ));
    }
    Ok(())
}
