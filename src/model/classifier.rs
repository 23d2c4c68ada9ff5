//! Binary classifier variants with a uniform `predict` surface

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A serializable binary classifier
///
/// Architectures are deliberately compact: everything a variant needs to
/// predict is stored inline, so an artifact file is self-contained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "architecture", rename_all = "snake_case")]
pub enum Classifier {
    /// Logistic regression: sigmoid(w.x + b) >= 0.5 predicts 1
    Logistic {
        /// Per-feature coefficients
        coefficients: Vec<f64>,
        /// Bias term
        intercept: f64,
    },

    /// k-nearest-neighbor majority vote over stored reference rows
    NearestNeighbor {
        /// Reference feature rows
        references: Vec<Vec<f64>>,
        /// 0/1 label per reference row
        labels: Vec<u8>,
        /// Number of neighbors consulted per prediction
        k: usize,
    },
}

impl Classifier {
    /// Architecture name as stored in the artifact
    pub fn name(&self) -> &'static str {
        match self {
            Classifier::Logistic { .. } => "logistic",
            Classifier::NearestNeighbor { .. } => "nearest_neighbor",
        }
    }

    /// Expected feature-row width
    pub fn n_features(&self) -> usize {
        match self {
            Classifier::Logistic { coefficients, .. } => coefficients.len(),
            Classifier::NearestNeighbor { references, .. } => {
                references.first().map_or(0, Vec::len)
            }
        }
    }

    /// Predict a 0/1 label for every feature row
    pub fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<u8>> {
        self.validate()?;
        let expected = self.n_features();
        features
            .iter()
            .map(|row| {
                if row.len() != expected {
                    return Err(Error::DimensionMismatch {
                        expected,
                        actual: row.len(),
                    });
                }
                Ok(self.predict_row(row))
            })
            .collect()
    }

    fn predict_row(&self, row: &[f64]) -> u8 {
        match self {
            Classifier::Logistic {
                coefficients,
                intercept,
            } => {
                let z: f64 = coefficients
                    .iter()
                    .zip(row)
                    .map(|(w, x)| w * x)
                    .sum::<f64>()
                    + intercept;
                let p = 1.0 / (1.0 + (-z).exp());
                u8::from(p >= 0.5)
            }
            Classifier::NearestNeighbor {
                references,
                labels,
                k,
            } => {
                let mut neighbors: Vec<(f64, u8)> = references
                    .iter()
                    .zip(labels)
                    .map(|(r, &label)| (squared_distance(r, row), label))
                    .collect();
                neighbors
                    .sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

                let k = (*k).min(neighbors.len());
                let ones = neighbors[..k].iter().filter(|(_, l)| *l == 1).count();
                u8::from(2 * ones > k)
            }
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            Classifier::Logistic { coefficients, .. } => {
                if coefficients.is_empty() {
                    return Err(Error::InvalidParameter(
                        "logistic classifier has no coefficients".to_string(),
                    ));
                }
            }
            Classifier::NearestNeighbor {
                references,
                labels,
                k,
            } => {
                if references.is_empty() {
                    return Err(Error::InvalidParameter(
                        "nearest-neighbor classifier has no references".to_string(),
                    ));
                }
                if references.len() != labels.len() {
                    return Err(Error::InvalidParameter(format!(
                        "{} references but {} labels",
                        references.len(),
                        labels.len()
                    )));
                }
                if *k == 0 {
                    return Err(Error::InvalidParameter("k must be >= 1".to_string()));
                }
            }
        }
        Ok(())
    }
}

fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}
