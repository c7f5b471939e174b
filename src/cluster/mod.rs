//! K-means clustering for dense vectors.
//!
//! ## K-means
//!
//! Assign each point to the nearest centroid, then move each centroid to the
//! mean of its points. Repeat until the centroids stop moving.
//!
//! **Objective**: Minimize within-cluster sum of squares:
//!
//! ```text
//! J = Σ_k Σ_{x ∈ C_k} ||x - μ_k||²
//! ```
//!
//! **Assumptions**:
//! - Clusters are roughly spherical
//! - Clusters have similar sizes
//! - You know k in advance
//!
//! The result is a local minimum of `J`. Different initial centers can give
//! different partitions, so seed the run (or inject an [`IndexSampler`]) when
//! you need to reproduce it.
//!
//! ## Usage
//!
//! ```rust
//! use lloyd::cluster::{Clustering, Kmeans, Sampling};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.1, 10.1],
//! ];
//!
//! let kmeans = Kmeans::new(2)
//!     .with_seed(42)
//!     .with_sampling(Sampling::WithoutReplacement);
//! let labels = kmeans.fit_predict(&data).unwrap();
//! assert_eq!(labels[0], labels[1]);  // First two together
//! assert_ne!(labels[0], labels[2]);  // Separate from last two
//! ```
//!
//! Driving the iterations by hand:
//!
//! ```rust
//! use lloyd::cluster::{assign, recompute_centers, Recomputed};
//!
//! let data = vec![vec![0.0, 0.0], vec![0.0, 2.0], vec![10.0, 0.0], vec![10.0, 2.0]];
//! let labels = assign(&data, &[data[0].clone(), data[2].clone()]).unwrap();
//! let next = recompute_centers(&data, &labels, 2).unwrap();
//! assert_eq!(next, Recomputed::Complete(vec![vec![0.0, 1.0], vec![10.0, 1.0]]));
//! ```

mod kmeans;
mod sampler;
mod traits;
mod util;

pub use kmeans::{
    assign, centroid_shift, inertia, initialize, recompute_centers, Kmeans, KmeansFit, Recomputed,
};
pub use sampler::{RandomSampler, Sampling};
pub use traits::{Clustering, IndexSampler};
