//! Dataset loading and deterministic splitting
//!
//! The guard evaluates both models over the identical test partition, so the
//! whole pipeline here is deterministic: CSV parsing, feature encoding, and
//! the seeded shuffle all produce bit-for-bit identical output for identical
//! input.

mod frame;
mod split;

pub use frame::DataFrame;
pub use split::{TestPartition, TrainTestSplit};

use crate::config::GuardSpec;
use crate::error::Result;

/// Load the held-out test partition described by a guard spec.
///
/// Reads the CSV dataset, separates features from the label column, and
/// returns only the test side of the split. The training side is discarded;
/// training happens elsewhere.
pub fn load_test_partition(spec: &GuardSpec) -> Result<TestPartition> {
    let frame = DataFrame::from_csv(&spec.data.path)?;
    let (features, labels) = frame.split_label(&spec.data.label_column)?;

    let splitter = TrainTestSplit::new(spec.split.test_ratio).with_seed(spec.split.seed);
    let (_train_idx, test_idx) = splitter.split(labels.len());

    let test_features: Vec<Vec<f64>> = test_idx.iter().map(|&i| features[i].clone()).collect();
    let test_labels: Vec<u8> = test_idx.iter().map(|&i| labels[i]).collect();

    Ok(TestPartition {
        features: test_features,
        labels: test_labels,
        indices: test_idx,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GuardSpec;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_dataset(dir: &TempDir, rows: usize) -> std::path::PathBuf {
        let path = dir.path().join("dataset.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "Pclass,Sex,Age,Survived").unwrap();
        for i in 0..rows {
            let sex = if i % 2 == 0 { "female" } else { "male" };
            let survived = u8::from(i % 2 == 0);
            writeln!(file, "{},{sex},{}.0,{survived}", 1 + i % 3, 20 + i).unwrap();
        }
        path
    }

    fn spec_for(path: std::path::PathBuf) -> GuardSpec {
        let mut spec = GuardSpec::default();
        spec.data.path = path;
        spec
    }

    #[test]
    fn test_partition_size_is_rounded_ratio() {
        let dir = TempDir::new().unwrap();
        let spec = spec_for(write_dataset(&dir, 25));
        let partition = load_test_partition(&spec).unwrap();
        // round(0.2 * 25) = 5
        assert_eq!(partition.len(), 5);
        assert_eq!(partition.features.len(), partition.labels.len());
    }

    #[test]
    fn test_partition_is_deterministic() {
        let dir = TempDir::new().unwrap();
        let spec = spec_for(write_dataset(&dir, 40));
        let first = load_test_partition(&spec).unwrap();
        let second = load_test_partition(&spec).unwrap();
        assert_eq!(first.indices, second.indices);
        assert_eq!(first.labels, second.labels);
        assert_eq!(first.features, second.features);
    }

    #[test]
    fn test_partition_changes_with_seed() {
        let dir = TempDir::new().unwrap();
        let path = write_dataset(&dir, 40);
        let spec_a = spec_for(path.clone());
        let mut spec_b = spec_for(path);
        spec_b.split.seed = 99;
        let a = load_test_partition(&spec_a).unwrap();
        let b = load_test_partition(&spec_b).unwrap();
        assert_ne!(a.indices, b.indices);
    }

    #[test]
    fn test_missing_dataset_is_io_error() {
        let mut spec = GuardSpec::default();
        spec.data.path = std::path::PathBuf::from("/nonexistent/dataset.csv");
        let result = load_test_partition(&spec);
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn test_missing_label_column_is_fatal() {
        let dir = TempDir::new().unwrap();
        let mut spec = spec_for(write_dataset(&dir, 10));
        spec.data.label_column = "Outcome".to_string();
        let result = load_test_partition(&spec);
        assert!(matches!(
            result,
            Err(crate::error::Error::ColumnNotFound(_))
        ));
    }
}
