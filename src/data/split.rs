//! Deterministic train/test splitting

/// The held-out test side of a split
#[derive(Debug, Clone, PartialEq)]
pub struct TestPartition {
    /// Encoded feature matrix, one row per held-out sample
    pub features: Vec<Vec<f64>>,
    /// 0/1 labels, aligned with `features`
    pub labels: Vec<u8>,
    /// Original row indices of the held-out samples
    pub indices: Vec<usize>,
}

impl TestPartition {
    /// Number of held-out samples
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the partition is empty
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Seeded train/test splitter
///
/// Shuffles row indices with an LCG-driven Fisher-Yates pass so that the same
/// (seed, ratio, n) always yields the same partition membership, then takes
/// `round(ratio * n)` indices as the test side.
#[derive(Clone, Debug)]
pub struct TrainTestSplit {
    test_ratio: f64,
    seed: u64,
}

impl TrainTestSplit {
    /// Create a splitter with the given held-out fraction
    pub fn new(test_ratio: f64) -> Self {
        Self {
            test_ratio,
            seed: 42,
        }
    }

    /// Set the shuffle seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generate `(train_indices, test_indices)` for `n_samples` rows
    pub fn split(&self, n_samples: usize) -> (Vec<usize>, Vec<usize>) {
        let mut indices: Vec<usize> = (0..n_samples).collect();

        let mut rng_state = self.seed;
        for i in (1..n_samples).rev() {
            rng_state = rng_state.wrapping_mul(6364136223846793005).wrapping_add(1);
            let j = (rng_state >> 33) as usize % (i + 1);
            indices.swap(i, j);
        }

        let test_count = ((n_samples as f64) * self.test_ratio).round() as usize;
        let test_count = test_count.min(n_samples);

        let test = indices[..test_count].to_vec();
        let train = indices[test_count..].to_vec();
        (train, test)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sizes() {
        let (train, test) = TrainTestSplit::new(0.2).split(25);
        assert_eq!(test.len(), 5);
        assert_eq!(train.len(), 20);
    }

    #[test]
    fn test_split_size_rounds() {
        // round(0.2 * 27) = 5
        let (_, test) = TrainTestSplit::new(0.2).split(27);
        assert_eq!(test.len(), 5);
        // round(0.2 * 28) = 6
        let (_, test) = TrainTestSplit::new(0.2).split(28);
        assert_eq!(test.len(), 6);
    }

    #[test]
    fn test_partitions_are_disjoint_and_cover() {
        let (train, test) = TrainTestSplit::new(0.3).split(50);
        let mut all: Vec<usize> = train.iter().chain(test.iter()).copied().collect();
        all.sort_unstable();
        assert_eq!(all, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_same_seed_same_partition() {
        let a = TrainTestSplit::new(0.2).with_seed(42).split(100);
        let b = TrainTestSplit::new(0.2).with_seed(42).split(100);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_different_partition() {
        let a = TrainTestSplit::new(0.2).with_seed(42).split(100);
        let b = TrainTestSplit::new(0.2).with_seed(99).split(100);
        assert_ne!(a.1, b.1);
    }

    #[test]
    fn test_shuffle_actually_permutes() {
        let (_, test) = TrainTestSplit::new(0.5).split(100);
        // A shuffled prefix should not be the identity prefix
        assert_ne!(test, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_zero_samples() {
        let (train, test) = TrainTestSplit::new(0.2).split(0);
        assert!(train.is_empty());
        assert!(test.is_empty());
    }

    #[test]
    fn test_single_sample() {
        let (train, test) = TrainTestSplit::new(0.2).split(1);
        // round(0.2) = 0: the lone row stays in the train side
        assert_eq!(train.len(), 1);
        assert!(test.is_empty());
    }

    #[test]
    fn test_partition_len_helpers() {
        let partition = TestPartition {
            features: vec![vec![1.0], vec![2.0]],
            labels: vec![0, 1],
            indices: vec![3, 7],
        };
        assert_eq!(partition.len(), 2);
        assert!(!partition.is_empty());
    }
}
