//! Artifact loading

use super::model::ModelArtifact;
use crate::error::{Error, Result};
use sha2::{Digest, Sha256};
use std::path::Path;

/// Load a model artifact from a JSON file.
///
/// A missing file is a `MissingArtifact` error carrying the expected path;
/// a present-but-unparseable file is a `Serialization` error. The caller
/// never needs to second-guess which setup step failed.
pub fn load_artifact(path: impl AsRef<Path>) -> Result<ModelArtifact> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::MissingArtifact(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| {
        Error::Serialization(format!(
            "artifact {} is corrupt or incompatible: {e}",
            path.display()
        ))
    })
}

/// SHA-256 fingerprint of an artifact file's raw bytes.
///
/// Byte-identical artifacts share a fingerprint, which makes "current and
/// baseline are the same model" visible in diagnostics.
pub fn artifact_fingerprint(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::MissingArtifact(path.to_path_buf()));
    }

    let bytes = std::fs::read(path)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(format!("{:x}", hasher.finalize()))
}
