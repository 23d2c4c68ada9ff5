//! Artifact saving

use super::model::ModelArtifact;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save a model artifact as pretty-printed JSON.
///
/// The guard itself never writes artifacts; this exists for the training
/// collaborator and for test fixtures.
pub fn save_artifact(artifact: &ModelArtifact, path: impl AsRef<Path>) -> Result<()> {
    let data = serde_json::to_string_pretty(artifact)
        .map_err(|e| Error::Serialization(format!("JSON serialization failed: {e}")))?;

    let mut file = File::create(path.as_ref())?;
    file.write_all(data.as_bytes())?;

    Ok(())
}
