//! Verificar: Model Regression Guard
//!
//! Gates a candidate classifier artifact against a frozen baseline artifact.
//! Both models are evaluated over the identical deterministic test split of a
//! CSV dataset; the guard fails when the candidate is less accurate or slower
//! than the baseline.
//!
//! ## Architecture
//!
//! - `config`: YAML guard spec (dataset, artifact paths, split policy)
//! - `data`: CSV loading, feature encoding, deterministic train/test split
//! - `model`: serializable classifier architectures with `predict`
//! - `io`: artifact save/load and content fingerprinting
//! - `eval`: accuracy metric, the regression checks, verdict reporting
//! - `cli`: `check` and `info` commands
//!
//! ## Example
//!
//! ```ignore
//! use verificar::{GuardSpec, RegressionGuard};
//!
//! let guard = RegressionGuard::new(GuardSpec::default());
//! let verdict = guard.run()?;
//! println!("{verdict}");
//! ```

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod eval;
pub mod io;
pub mod model;

pub use config::{load_spec, validate_spec, GuardSpec};
pub use error::{Error, Result};
pub use eval::{AccuracyCheck, LatencyCheck, RegressionGuard, Verdict};
pub use model::Classifier;
