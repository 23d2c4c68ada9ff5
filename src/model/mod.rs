//! Classifier architectures
//!
//! A model artifact's behavior lives here: a serializable classifier that
//! maps encoded feature rows to 0/1 labels. The guard never trains or
//! mutates a classifier; it only runs `predict`.

mod classifier;

pub use classifier::Classifier;
