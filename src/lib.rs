//! Lloyd's k-means for dense vectors.
//!
//! `lloyd` partitions a set of fixed-dimension `f32` points into `k` clusters by
//! alternating nearest-center assignment with centroid recomputation.
//!
//! The primary public API is under [`cluster`], which provides:
//! - [`Kmeans`], the configured optimizer, and [`KmeansFit`], its result
//! - the individual Lloyd steps ([`cluster::initialize`], [`cluster::assign`],
//!   [`cluster::recompute_centers`]) for callers that drive iterations themselves
//! - [`IndexSampler`], the seam through which initialization draws randomness

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;

pub use cluster::{
    Clustering, IndexSampler, Kmeans, KmeansFit, RandomSampler, Recomputed, Sampling,
};
pub use error::{Error, Result};
