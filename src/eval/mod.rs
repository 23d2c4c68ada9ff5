//! Regression evaluation
//!
//! The three checks a candidate must survive before it may replace the
//! baseline:
//!
//! - `check_baseline_exists`: the reference artifact is present
//! - `check_accuracy`: the candidate is at least as accurate
//! - `check_latency`: the candidate is at least as fast
//!
//! Checks are self-contained: each loads its artifacts fresh and never
//! shares state with the others, so a failure in one measurement cannot
//! skew another.

mod guard;
mod metrics;
mod report;

pub use guard::{AccuracyCheck, LatencyCheck, RegressionGuard, Verdict};
pub use metrics::{accuracy, BinaryCounts};
