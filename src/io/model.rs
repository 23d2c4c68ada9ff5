//! Artifact structure for serialization

use crate::model::Classifier;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata describing a serialized classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    /// Model name/identifier
    pub name: String,

    /// Artifact format version
    pub version: String,

    /// When the model was trained
    pub trained_at: DateTime<Utc>,
}

impl ArtifactMetadata {
    /// Create metadata stamped with the current time
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: "0.1.0".to_string(),
            trained_at: Utc::now(),
        }
    }
}

/// A serialized classifier plus its metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Artifact metadata
    pub metadata: ArtifactMetadata,

    /// The classifier state
    pub classifier: Classifier,
}

impl ModelArtifact {
    /// Create a new artifact
    pub fn new(metadata: ArtifactMetadata, classifier: Classifier) -> Self {
        Self {
            metadata,
            classifier,
        }
    }
}
