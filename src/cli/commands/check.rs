//! Check command implementation

use super::resolve_spec;
use crate::cli::logging::log;
use crate::cli::{CheckArgs, LogLevel};
use crate::eval::RegressionGuard;

pub fn run_check(args: CheckArgs, level: LogLevel) -> Result<(), String> {
    let spec = resolve_spec(args.spec)?;

    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Checking {} against {}",
            spec.models.current.display(),
            spec.models.baseline.display()
        ),
    );

    let guard = RegressionGuard::new(spec);
    let verdict = guard.run().map_err(|e| e.to_string())?;

    log(level, LogLevel::Normal, &format!("{verdict}"));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GuardSpec;
    use crate::data::load_test_partition;
    use crate::io::{save_artifact, ArtifactMetadata, ModelArtifact};
    use crate::model::Classifier;
    use std::io::Write;
    use tempfile::TempDir;

    fn fixture_spec(dir: &TempDir) -> GuardSpec {
        let data_path = dir.path().join("dataset.csv");
        let mut file = std::fs::File::create(&data_path).unwrap();
        writeln!(file, "Feature,Survived").unwrap();
        for i in 0..20 {
            writeln!(file, "{}.0,{}", i, u8::from(i < 10)).unwrap();
        }

        let mut spec = GuardSpec::default();
        spec.data.path = data_path;
        spec.models.current = dir.path().join("current.json");
        spec.models.baseline = dir.path().join("baseline.json");
        spec
    }

    fn accurate_classifier() -> Classifier {
        // Rows 0..10 are labeled 1: predict 1 when the feature is below 9.5
        Classifier::Logistic {
            coefficients: vec![-4.0],
            intercept: 38.0,
        }
    }

    fn heavy_classifier(spec: &GuardSpec) -> Classifier {
        let partition = load_test_partition(spec).unwrap();
        let mut references = Vec::new();
        let mut labels = Vec::new();
        for _ in 0..2000 {
            references.extend(partition.features.iter().cloned());
            labels.extend(partition.labels.iter().copied());
        }
        Classifier::NearestNeighbor {
            references,
            labels,
            k: 1,
        }
    }

    #[test]
    fn test_run_check_passes_with_faster_equal_candidate() {
        let dir = TempDir::new().unwrap();
        let spec = fixture_spec(&dir);

        save_artifact(
            &ModelArtifact::new(ArtifactMetadata::new("current"), accurate_classifier()),
            &spec.models.current,
        )
        .unwrap();
        save_artifact(
            &ModelArtifact::new(ArtifactMetadata::new("baseline"), heavy_classifier(&spec)),
            &spec.models.baseline,
        )
        .unwrap();

        let yaml = serde_yaml::to_string(&spec).unwrap();
        let spec_path = dir.path().join("guard.yaml");
        std::fs::write(&spec_path, yaml).unwrap();

        let args = CheckArgs {
            spec: Some(spec_path),
        };
        assert!(run_check(args, LogLevel::Quiet).is_ok());
    }

    #[test]
    fn test_run_check_fails_without_baseline() {
        let dir = TempDir::new().unwrap();
        let spec = fixture_spec(&dir);

        save_artifact(
            &ModelArtifact::new(ArtifactMetadata::new("current"), accurate_classifier()),
            &spec.models.current,
        )
        .unwrap();

        let yaml = serde_yaml::to_string(&spec).unwrap();
        let spec_path = dir.path().join("guard.yaml");
        std::fs::write(&spec_path, yaml).unwrap();

        let args = CheckArgs {
            spec: Some(spec_path),
        };
        let err = run_check(args, LogLevel::Quiet).unwrap_err();
        assert!(err.contains("Missing artifact"));
    }
}
