//! The regression guard: existence, accuracy, and latency checks

use super::metrics::accuracy;
use crate::config::GuardSpec;
use crate::data::{self, TestPartition};
use crate::error::{Error, Result};
use crate::io::load_artifact;
use crate::model::Classifier;
use std::time::{Duration, Instant};

/// Outcome of the accuracy comparison
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AccuracyCheck {
    /// Candidate accuracy over the test partition
    pub current: f64,
    /// Baseline accuracy over the same partition
    pub baseline: f64,
}

impl AccuracyCheck {
    /// Ties pass: only a strictly lower candidate accuracy is a regression
    pub fn passed(&self) -> bool {
        self.current >= self.baseline
    }
}

/// Outcome of the latency comparison
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LatencyCheck {
    /// Candidate wall-clock time for one pass over the test partition
    pub current: Duration,
    /// Baseline wall-clock time for the same pass
    pub baseline: Duration,
}

impl LatencyCheck {
    /// Ties pass: only a strictly slower candidate is a regression
    pub fn passed(&self) -> bool {
        self.current <= self.baseline
    }

    /// Candidate time in milliseconds
    pub fn current_ms(&self) -> f64 {
        self.current.as_secs_f64() * 1000.0
    }

    /// Baseline time in milliseconds
    pub fn baseline_ms(&self) -> f64 {
        self.baseline.as_secs_f64() * 1000.0
    }
}

/// Combined outcome of both metric checks
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Verdict {
    /// Accuracy comparison
    pub accuracy: AccuracyCheck,
    /// Latency comparison
    pub latency: LatencyCheck,
}

impl Verdict {
    /// True when neither metric regressed
    pub fn passed(&self) -> bool {
        self.accuracy.passed() && self.latency.passed()
    }
}

/// Compares a candidate artifact against a frozen baseline
pub struct RegressionGuard {
    spec: GuardSpec,
}

impl RegressionGuard {
    /// Create a guard for the given spec
    pub fn new(spec: GuardSpec) -> Self {
        Self { spec }
    }

    /// The spec this guard runs against
    pub fn spec(&self) -> &GuardSpec {
        &self.spec
    }

    /// Confirm the baseline artifact is present.
    ///
    /// Without a baseline there is no reference point, so this runs before
    /// any comparison and fails without touching the artifact contents.
    pub fn check_baseline_exists(&self) -> Result<()> {
        let path = &self.spec.models.baseline;
        if !path.exists() {
            return Err(Error::MissingArtifact(path.clone()));
        }
        Ok(())
    }

    /// Compare accuracies of the candidate and baseline over the test split.
    ///
    /// Both artifacts are deserialized fresh here; nothing is shared with
    /// the latency check.
    pub fn check_accuracy(&self) -> Result<AccuracyCheck> {
        let partition = data::load_test_partition(&self.spec)?;
        let current = load_artifact(&self.spec.models.current)?;
        let baseline = load_artifact(&self.spec.models.baseline)?;

        let current_pred = current.classifier.predict(&partition.features)?;
        let baseline_pred = baseline.classifier.predict(&partition.features)?;

        Ok(AccuracyCheck {
            current: accuracy(&current_pred, &partition.labels),
            baseline: accuracy(&baseline_pred, &partition.labels),
        })
    }

    /// Compare wall-clock inference times over the full test split.
    ///
    /// One measured pass per model, candidate first, no warm-up and no
    /// averaging. A single measurement is taken as ground truth.
    pub fn check_latency(&self) -> Result<LatencyCheck> {
        let partition = data::load_test_partition(&self.spec)?;
        let current = load_artifact(&self.spec.models.current)?;
        let baseline = load_artifact(&self.spec.models.baseline)?;

        let current_elapsed = timed_prediction(&current.classifier, &partition)?;
        let baseline_elapsed = timed_prediction(&baseline.classifier, &partition)?;

        Ok(LatencyCheck {
            current: current_elapsed,
            baseline: baseline_elapsed,
        })
    }

    /// Run the full suite fail-fast: existence, then accuracy, then latency.
    ///
    /// The first failing check halts the run; metric regressions surface as
    /// `AccuracyRegression`/`LatencyRegression` errors carrying both values.
    /// Returns the verdict only when every check passed.
    pub fn run(&self) -> Result<Verdict> {
        self.check_baseline_exists()?;

        let accuracy = self.check_accuracy()?;
        if !accuracy.passed() {
            return Err(Error::AccuracyRegression {
                current: accuracy.current,
                baseline: accuracy.baseline,
            });
        }

        let latency = self.check_latency()?;
        if !latency.passed() {
            return Err(Error::LatencyRegression {
                current_ms: latency.current_ms(),
                baseline_ms: latency.baseline_ms(),
            });
        }

        Ok(Verdict { accuracy, latency })
    }

    /// Run both metric checks regardless of outcome and return the full
    /// verdict. Setup errors (missing or corrupt artifacts) still propagate.
    pub fn evaluate(&self) -> Result<Verdict> {
        self.check_baseline_exists()?;
        let accuracy = self.check_accuracy()?;
        let latency = self.check_latency()?;
        Ok(Verdict { accuracy, latency })
    }
}

fn timed_prediction(classifier: &Classifier, partition: &TestPartition) -> Result<Duration> {
    let start = Instant::now();
    let predictions = classifier.predict(&partition.features)?;
    let elapsed = start.elapsed();
    debug_assert_eq!(predictions.len(), partition.len());
    Ok(elapsed)
}
