use crate::error::Result;

/// Common interface for hard clustering algorithms (one label per point).
pub trait Clustering {
    /// Fit the model and return one cluster label per input point.
    fn fit_predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>>;

    /// The configured number of clusters.
    fn n_clusters(&self) -> usize;
}

/// Source of random point indices for centroid initialization.
///
/// Initialization is the only step of Lloyd's algorithm that consumes randomness,
/// so this is the only seam a test needs to replace to make a run reproducible.
pub trait IndexSampler {
    /// Draw `k` indices from `0..n_items`.
    ///
    /// Whether indices may repeat is up to the implementation.
    fn sample_indices(&mut self, n_items: usize, k: usize) -> Vec<usize>;
}
