use thiserror::Error;

/// Errors returned by the k-means optimizer.
#[derive(Debug, Error)]
pub enum Error {
    /// Input slice is empty.
    #[error("empty input")]
    EmptyInput,

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Requested cluster count is incompatible with the dataset.
    #[error("invalid cluster count: requested {requested}, but dataset has {n_items} items")]
    InvalidClusterCount {
        /// Requested number of clusters.
        requested: usize,
        /// Number of items in the dataset.
        n_items: usize,
    },

    /// Points (or centers) have inconsistent dimensionality.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },

    /// A centroid update left one or more clusters without members.
    ///
    /// The run stops here rather than continuing with fewer centers. Callers
    /// either retry with a different seed or accept the reduced result carried
    /// in `centers` and `labels`.
    #[error(
        "degenerate clustering at iteration {iteration}: {realized} of {requested} clusters non-empty (empty: {empty:?})"
    )]
    DegenerateCluster {
        /// Iteration (1-based) whose update step found the empty clusters.
        iteration: usize,
        /// Configured number of clusters.
        requested: usize,
        /// Number of clusters that still had members.
        realized: usize,
        /// Indices of the clusters that had no members.
        empty: Vec<usize>,
        /// Means of the non-empty clusters, `realized` rows.
        centers: Vec<Vec<f32>>,
        /// Label of each input point against `centers`.
        labels: Vec<usize>,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
