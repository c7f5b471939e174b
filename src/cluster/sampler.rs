//! Random index sources for centroid initialization.

use super::traits::IndexSampler;
use rand::prelude::*;
use rand::rngs::ThreadRng;

/// How initial centers are drawn from the dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Sampling {
    /// Each index is drawn independently; the same point may seed several clusters.
    ///
    /// Repeated seeds collapse into one cluster on the first update and surface
    /// as [`Error::DegenerateCluster`](crate::Error::DegenerateCluster).
    #[default]
    WithReplacement,
    /// Indices are distinct.
    WithoutReplacement,
}

/// [`IndexSampler`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomSampler<R> {
    rng: R,
    sampling: Sampling,
}

impl<R: Rng> RandomSampler<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R, sampling: Sampling) -> Self {
        Self { rng, sampling }
    }
}

impl RandomSampler<StdRng> {
    /// Deterministic sampler: the same seed always yields the same indices.
    pub fn seeded(seed: u64, sampling: Sampling) -> Self {
        Self::new(StdRng::seed_from_u64(seed), sampling)
    }
}

impl RandomSampler<ThreadRng> {
    /// Sampler over the thread-local, OS-seeded generator.
    pub fn from_os(sampling: Sampling) -> Self {
        Self::new(rand::rng(), sampling)
    }
}

impl<R: Rng> IndexSampler for RandomSampler<R> {
    fn sample_indices(&mut self, n_items: usize, k: usize) -> Vec<usize> {
        if n_items == 0 {
            return Vec::new();
        }
        match self.sampling {
            Sampling::WithReplacement => (0..k)
                .map(|_| self.rng.random_range(0..n_items))
                .collect(),
            Sampling::WithoutReplacement => {
                rand::seq::index::sample(&mut self.rng, n_items, k.min(n_items)).into_vec()
            }
        }
    }
}
