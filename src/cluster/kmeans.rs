//! K-means clustering with Lloyd iterations.
//!
//! # The Objective
//!
//! K-means looks for a partition of the data into `k` clusters that minimizes the
//! within-cluster sum of squares (WCSS, also called inertia):
//!
//! ```text
//! WCSS = Σₖ Σᵢ∈Cₖ ||xᵢ - μₖ||²
//! ```
//!
//! # Lloyd's Algorithm
//!
//! 1. **Initialize**: draw `k` dataset points as the starting centers
//! 2. **Assign**: each point goes to its nearest center (lowest index on ties)
//! 3. **Update**: each center moves to the mean of its assigned points
//! 4. Repeat 2-3 until the centers move by at most `tol`, or `max_iter` updates
//!
//! The centroid shift is the Euclidean norm of the difference between the old and
//! new center sets, treated as one flattened vector.
//!
//! Neither step can increase WCSS, so the loop settles in a local minimum. Which
//! minimum depends on the initial centers.
//!
//! # Empty Clusters
//!
//! If an update leaves a cluster with no members, its mean is undefined. The run
//! stops with [`Error::DegenerateCluster`] instead of quietly shrinking `k` or
//! re-seeding the center. The error carries the surviving centers and the labels
//! against them, so a caller can keep the smaller clustering. Drawing initial centers
//! [`Sampling::WithoutReplacement`] avoids the most common cause (the same point
//! drawn twice), but a cluster can still empty out mid-run.

use super::sampler::{RandomSampler, Sampling};
use super::traits::{Clustering, IndexSampler};
use super::util;
use crate::error::{Error, Result};
use log::{debug, trace, warn};

/// K-means clustering algorithm.
#[derive(Debug, Clone)]
pub struct Kmeans {
    /// Number of clusters.
    k: usize,
    /// Maximum number of update steps.
    max_iter: usize,
    /// Convergence tolerance on the centroid shift.
    tol: f64,
    /// Random seed for initialization.
    seed: Option<u64>,
    /// How initial centers are drawn.
    sampling: Sampling,
}

/// Result of a k-means run.
#[derive(Debug, Clone, PartialEq)]
pub struct KmeansFit {
    /// Final centers, `k` rows of the input dimension.
    pub centroids: Vec<Vec<f32>>,
    /// Label of each input point, computed from `centroids`.
    pub labels: Vec<usize>,
    /// Number of update steps performed.
    pub n_iter: usize,
    /// Whether the last update moved the centers by at most `tol`.
    ///
    /// `false` means the run stopped at `max_iter`.
    pub converged: bool,
    /// Within-cluster sum of squared distances for `labels`.
    pub inertia: f64,
}

/// Outcome of a centroid update.
#[derive(Debug, Clone, PartialEq)]
pub enum Recomputed {
    /// Every cluster had members; one center per cluster index.
    Complete(Vec<Vec<f32>>),
    /// Some clusters were empty.
    Degenerate {
        /// Means of the non-empty clusters, in cluster-index order.
        centers: Vec<Vec<f32>>,
        /// Indices of the empty clusters.
        empty: Vec<usize>,
    },
}

impl Recomputed {
    /// Centers of the non-empty clusters.
    pub fn centers(&self) -> &[Vec<f32>] {
        match self {
            Recomputed::Complete(centers) | Recomputed::Degenerate { centers, .. } => centers,
        }
    }

    /// Whether every cluster index received at least one point.
    pub fn is_complete(&self) -> bool {
        matches!(self, Recomputed::Complete(_))
    }
}

impl Kmeans {
    /// Create a new K-means clusterer.
    ///
    /// Defaults: `max_iter = 10_000`, `tol = 1e-3`, no seed, sampling with replacement.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iter: 10_000,
            tol: 1e-3,
            seed: None,
            sampling: Sampling::WithReplacement,
        }
    }

    /// Set maximum iterations.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set convergence tolerance.
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Set random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set how initial centers are drawn.
    pub fn with_sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// Run k-means using a sampler built from the configured seed and sampling mode.
    pub fn fit(&self, data: &[Vec<f32>]) -> Result<KmeansFit> {
        match self.seed {
            Some(seed) => self.fit_with(data, &mut RandomSampler::seeded(seed, self.sampling)),
            None => self.fit_with(data, &mut RandomSampler::from_os(self.sampling)),
        }
    }

    /// Run k-means, drawing the initial centers from `sampler`.
    ///
    /// The configured seed and sampling mode are ignored.
    pub fn fit_with<S>(&self, data: &[Vec<f32>], sampler: &mut S) -> Result<KmeansFit>
    where
        S: IndexSampler + ?Sized,
    {
        let d = util::validate_points(data)?;
        self.validate(data.len())?;

        debug!(
            "k-means: n={}, d={}, k={}, max_iter={}, tol={}",
            data.len(),
            d,
            self.k,
            self.max_iter,
            self.tol
        );

        let mut centers = draw_centers(data, self.k, sampler)?;
        let mut n_iter = 0;
        let mut converged = false;

        while n_iter < self.max_iter {
            let labels = nearest_centers(data, &centers);
            n_iter += 1;

            let next = match means(data, &labels, self.k, d) {
                Recomputed::Complete(next) => next,
                Recomputed::Degenerate {
                    centers: kept,
                    empty,
                } => {
                    warn!(
                        "k-means: iteration {} left clusters {:?} empty",
                        n_iter, empty
                    );
                    let labels = nearest_centers(data, &kept);
                    return Err(Error::DegenerateCluster {
                        iteration: n_iter,
                        requested: self.k,
                        realized: kept.len(),
                        empty,
                        centers: kept,
                        labels,
                    });
                }
            };

            let shift = flat_shift(&centers, &next);
            trace!("k-means: iteration {} shift {:.6e}", n_iter, shift);
            centers = next;

            if shift <= self.tol {
                converged = true;
                break;
            }
        }

        if !converged {
            warn!(
                "k-means: stopped after max_iter={} without converging",
                self.max_iter
            );
        }

        let labels = nearest_centers(data, &centers);
        let inertia = within_cluster_ss(data, &centers, &labels);
        debug!(
            "k-means: finished after {} iterations (converged={}, inertia={:.6})",
            n_iter, converged, inertia
        );

        Ok(KmeansFit {
            centroids: centers,
            labels,
            n_iter,
            converged,
            inertia,
        })
    }

    fn validate(&self, n_items: usize) -> Result<()> {
        check_k(self.k, n_items)?;
        if self.max_iter == 0 {
            return Err(Error::InvalidParameter {
                name: "max_iter",
                message: "must be at least 1",
            });
        }
        if !(self.tol.is_finite() && self.tol > 0.0) {
            return Err(Error::InvalidParameter {
                name: "tol",
                message: "must be positive and finite",
            });
        }
        Ok(())
    }
}

impl Clustering for Kmeans {
    fn fit_predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>> {
        self.fit(data).map(|fit| fit.labels)
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}

impl KmeansFit {
    /// Assign new points to the fitted centers.
    pub fn predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>> {
        assign(data, &self.centroids)
    }

    /// Number of fitted centers.
    pub fn n_clusters(&self) -> usize {
        self.centroids.len()
    }
}

/// Draw `k` initial centers from `data`.
///
/// Each center is a copy of the dataset row at an index supplied by `sampler`.
pub fn initialize<S>(data: &[Vec<f32>], k: usize, sampler: &mut S) -> Result<Vec<Vec<f32>>>
where
    S: IndexSampler + ?Sized,
{
    util::validate_points(data)?;
    check_k(k, data.len())?;
    draw_centers(data, k, sampler)
}

/// Label each point with the index of its nearest center.
///
/// Ties go to the lowest center index.
pub fn assign(data: &[Vec<f32>], centers: &[Vec<f32>]) -> Result<Vec<usize>> {
    let d = util::validate_points(data)?;
    check_centers(centers, d)?;
    Ok(nearest_centers(data, centers))
}

/// Compute the mean of each cluster in `0..k`.
///
/// Returns [`Recomputed::Degenerate`] when some cluster index has no points.
pub fn recompute_centers(data: &[Vec<f32>], assignment: &[usize], k: usize) -> Result<Recomputed> {
    let d = util::validate_points(data)?;
    if k == 0 {
        return Err(Error::InvalidParameter {
            name: "k",
            message: "must be at least 1",
        });
    }
    check_labels(data, assignment, k)?;
    Ok(means(data, assignment, k, d))
}

/// Euclidean norm of `new - old`, both flattened.
pub fn centroid_shift(old: &[Vec<f32>], new: &[Vec<f32>]) -> Result<f64> {
    if old.len() != new.len() {
        return Err(Error::InvalidParameter {
            name: "centers",
            message: "center sets differ in size",
        });
    }
    for (a, b) in old.iter().zip(new) {
        if a.len() != b.len() {
            return Err(Error::DimensionMismatch {
                expected: a.len(),
                found: b.len(),
            });
        }
    }
    Ok(flat_shift(old, new))
}

/// Within-cluster sum of squared distances.
pub fn inertia(data: &[Vec<f32>], centers: &[Vec<f32>], assignment: &[usize]) -> Result<f64> {
    let d = util::validate_points(data)?;
    check_centers(centers, d)?;
    check_labels(data, assignment, centers.len())?;
    Ok(within_cluster_ss(data, centers, assignment))
}

fn check_k(k: usize, n_items: usize) -> Result<()> {
    if k == 0 || k > n_items {
        return Err(Error::InvalidClusterCount {
            requested: k,
            n_items,
        });
    }
    Ok(())
}

fn check_centers(centers: &[Vec<f32>], d: usize) -> Result<()> {
    if centers.is_empty() {
        return Err(Error::InvalidParameter {
            name: "centers",
            message: "must contain at least one center",
        });
    }
    util::check_dimension(centers, d)
}

fn check_labels(data: &[Vec<f32>], assignment: &[usize], k: usize) -> Result<()> {
    if assignment.len() != data.len() {
        return Err(Error::InvalidParameter {
            name: "assignment",
            message: "length must match the number of points",
        });
    }
    if assignment.iter().any(|&label| label >= k) {
        return Err(Error::InvalidParameter {
            name: "assignment",
            message: "label out of range",
        });
    }
    Ok(())
}

fn draw_centers<S>(data: &[Vec<f32>], k: usize, sampler: &mut S) -> Result<Vec<Vec<f32>>>
where
    S: IndexSampler + ?Sized,
{
    let indices = sampler.sample_indices(data.len(), k);
    if indices.len() != k {
        return Err(Error::InvalidParameter {
            name: "sampler",
            message: "returned the wrong number of indices",
        });
    }
    indices
        .into_iter()
        .map(|i| {
            data.get(i).cloned().ok_or(Error::InvalidParameter {
                name: "sampler",
                message: "returned an out-of-range index",
            })
        })
        .collect()
}

fn nearest_centers(data: &[Vec<f32>], centers: &[Vec<f32>]) -> Vec<usize> {
    data.iter()
        .map(|point| {
            let mut best_cluster = 0;
            let mut best_dist = f64::INFINITY;
            for (j, center) in centers.iter().enumerate() {
                let dist = util::squared_euclidean(point, center);
                // Strict comparison keeps the lowest index on ties.
                if dist < best_dist {
                    best_dist = dist;
                    best_cluster = j;
                }
            }
            best_cluster
        })
        .collect()
}

fn means(data: &[Vec<f32>], assignment: &[usize], k: usize, d: usize) -> Recomputed {
    let mut sums = vec![vec![0.0f64; d]; k];
    let mut counts = vec![0usize; k];

    for (point, &label) in data.iter().zip(assignment) {
        counts[label] += 1;
        for (s, &x) in sums[label].iter_mut().zip(point) {
            *s += f64::from(x);
        }
    }

    let mut centers = Vec::with_capacity(k);
    let mut empty = Vec::new();
    for (j, (sum, count)) in sums.into_iter().zip(counts).enumerate() {
        if count == 0 {
            empty.push(j);
            continue;
        }
        let count = count as f64;
        centers.push(sum.into_iter().map(|s| (s / count) as f32).collect());
    }

    if empty.is_empty() {
        Recomputed::Complete(centers)
    } else {
        Recomputed::Degenerate { centers, empty }
    }
}

fn flat_shift(old: &[Vec<f32>], new: &[Vec<f32>]) -> f64 {
    old.iter()
        .zip(new)
        .map(|(a, b)| util::squared_euclidean(a, b))
        .sum::<f64>()
        .sqrt()
}

fn within_cluster_ss(data: &[Vec<f32>], centers: &[Vec<f32>], assignment: &[usize]) -> f64 {
    data.iter()
        .zip(assignment)
        .map(|(point, &label)| util::squared_euclidean(point, &centers[label]))
        .sum()
}
