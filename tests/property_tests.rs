use lloyd::cluster::{assign, initialize, recompute_centers, Clustering, Kmeans, RandomSampler, Sampling};
use lloyd::Error;
use proptest::prelude::*;

fn sq_dist(a: &[f32], b: &[f32]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = f64::from(*x) - f64::from(*y);
            d * d
        })
        .sum()
}

fn points(max_len: usize) -> impl Strategy<Value = Vec<Vec<f32>>> {
    prop::collection::vec(prop::collection::vec(-10.0f32..10.0, 2), 1..max_len)
}

proptest! {
    #[test]
    fn prop_kmeans_all_assigned(
        data in points(20),
        k in 1usize..5
    ) {
        // Skip if k > n
        if k <= data.len() {
            let model = Kmeans::new(k).with_seed(42);
            match model.fit_predict(&data) {
                Ok(labels) => {
                    prop_assert_eq!(labels.len(), data.len());
                    for &l in &labels {
                        prop_assert!(l < k);
                    }
                }
                Err(Error::DegenerateCluster { requested, realized, centers, labels, .. }) => {
                    prop_assert_eq!(requested, k);
                    prop_assert!(realized < k);
                    prop_assert_eq!(centers.len(), realized);
                    prop_assert_eq!(&labels, &assign(&data, &centers).unwrap());
                }
                Err(e) => prop_assert!(false, "unexpected error: {}", e),
            }
        }
    }

    #[test]
    fn prop_initialize_copies_rows(
        data in points(30),
        k in 1usize..8,
        seed in any::<u64>(),
        distinct in any::<bool>()
    ) {
        if k <= data.len() {
            let sampling = if distinct { Sampling::WithoutReplacement } else { Sampling::WithReplacement };
            let mut sampler = RandomSampler::seeded(seed, sampling);
            let centers = initialize(&data, k, &mut sampler).unwrap();

            prop_assert_eq!(centers.len(), k);
            for c in &centers {
                prop_assert!(data.contains(c));
            }
        } else {
            let mut sampler = RandomSampler::seeded(seed, Sampling::WithReplacement);
            let is_invalid_count = matches!(
                initialize(&data, k, &mut sampler),
                Err(Error::InvalidClusterCount { .. })
            );
            prop_assert!(is_invalid_count);
        }
    }

    #[test]
    fn prop_assign_is_nearest_center(
        data in points(30),
        centers in prop::collection::vec(prop::collection::vec(-10.0f32..10.0, 2), 1..6)
    ) {
        let labels = assign(&data, &centers).unwrap();
        prop_assert_eq!(labels.len(), data.len());

        for (point, &label) in data.iter().zip(&labels) {
            prop_assert!(label < centers.len());
            let best = sq_dist(point, &centers[label]);
            for (j, c) in centers.iter().enumerate() {
                let d = sq_dist(point, c);
                if j < label {
                    // Lower indices must be strictly farther.
                    prop_assert!(d > best);
                } else {
                    prop_assert!(d >= best);
                }
            }
        }
    }

    #[test]
    fn prop_recompute_is_cluster_mean(
        data in points(30),
        k in 1usize..4,
        seed in any::<u64>()
    ) {
        let mut sampler = RandomSampler::seeded(seed, Sampling::WithReplacement);
        let k = k.min(data.len());
        let centers = initialize(&data, k, &mut sampler).unwrap();
        let labels = assign(&data, &centers).unwrap();
        let result = recompute_centers(&data, &labels, k).unwrap();

        let populated: Vec<usize> = (0..k).filter(|j| labels.contains(j)).collect();
        prop_assert_eq!(result.centers().len(), populated.len());
        prop_assert_eq!(result.is_complete(), populated.len() == k);

        for (center, &j) in result.centers().iter().zip(&populated) {
            let members: Vec<&Vec<f32>> = data
                .iter()
                .zip(&labels)
                .filter(|(_, &l)| l == j)
                .map(|(p, _)| p)
                .collect();
            for dim in 0..2 {
                let mean = members.iter().map(|p| f64::from(p[dim])).sum::<f64>()
                    / members.len() as f64;
                prop_assert!((f64::from(center[dim]) - mean).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn prop_iterations_bounded(
        data in points(40),
        max_iter in 1usize..6,
        seed in any::<u64>()
    ) {
        let k = 2.min(data.len());
        let model = Kmeans::new(k)
            .with_seed(seed)
            .with_max_iter(max_iter)
            .with_tol(1e-9);
        if let Ok(fit) = model.fit(&data) {
            prop_assert!(fit.n_iter >= 1);
            prop_assert!(fit.n_iter <= max_iter);
            if !fit.converged {
                prop_assert_eq!(fit.n_iter, max_iter);
            }
            prop_assert_eq!(&fit.labels, &assign(&data, &fit.centroids).unwrap());
        }
    }
}
