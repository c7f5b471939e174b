//! K-means on a simple 2D dataset, with and without a fixed seed.

use lloyd::{Error, Kmeans, Sampling};

fn main() {
    // Three well-separated clusters in 2D.
    let data: Vec<Vec<f32>> = vec![
        // Cluster A (near origin)
        vec![0.0, 0.0],
        vec![0.1, 0.2],
        vec![0.2, 0.1],
        vec![-0.1, 0.1],
        // Cluster B (near (5, 5))
        vec![5.0, 5.0],
        vec![5.1, 4.9],
        vec![4.9, 5.1],
        vec![5.2, 5.2],
        // Cluster C (near (10, 0))
        vec![10.0, 0.0],
        vec![10.1, 0.1],
        vec![9.9, -0.1],
        vec![10.2, 0.2],
    ];

    // --- Seeded, distinct initial centers ---
    let kmeans = Kmeans::new(3)
        .with_seed(42)
        .with_sampling(Sampling::WithoutReplacement);
    match kmeans.fit(&data) {
        Ok(fit) => {
            println!(
                "=== K-means (k=3, seed=42): {} iterations, converged={}, inertia={:.4} ===",
                fit.n_iter, fit.converged, fit.inertia
            );
            for (i, label) in fit.labels.iter().enumerate() {
                println!("  point {:2} ({:5.1}, {:5.1}) => cluster {}", i, data[i][0], data[i][1], label);
            }
            for (j, c) in fit.centroids.iter().enumerate() {
                println!("  center {} = ({:.3}, {:.3})", j, c[0], c[1]);
            }
        }
        Err(e) => eprintln!("k-means failed: {e}"),
    }

    // --- Unseeded, sampling with replacement: restart on empty clusters ---
    println!("\n=== K-means (k=3, unseeded, with replacement) ===");
    for attempt in 1..=10 {
        match Kmeans::new(3).fit(&data) {
            Ok(fit) => {
                println!("  attempt {}: labels {:?}", attempt, fit.labels);
                break;
            }
            Err(Error::DegenerateCluster { empty, .. }) => {
                println!("  attempt {}: clusters {:?} emptied, restarting", attempt, empty);
            }
            Err(e) => {
                eprintln!("k-means failed: {e}");
                break;
            }
        }
    }
}
