use crate::error::{Error, Result};

#[inline]
pub(crate) fn squared_euclidean(a: &[f32], b: &[f32]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = f64::from(*x) - f64::from(*y);
            d * d
        })
        .sum()
}

/// Check that `points` is non-empty and uniformly shaped; returns the dimension.
pub(crate) fn validate_points(points: &[Vec<f32>]) -> Result<usize> {
    let first = points.first().ok_or(Error::EmptyInput)?;
    let d = first.len();
    if d == 0 {
        return Err(Error::InvalidParameter {
            name: "dimension",
            message: "must be at least 1",
        });
    }
    check_dimension(&points[1..], d)?;
    if points.iter().flatten().any(|x| !x.is_finite()) {
        return Err(Error::InvalidParameter {
            name: "data",
            message: "must be finite",
        });
    }
    Ok(d)
}

pub(crate) fn check_dimension(points: &[Vec<f32>], d: usize) -> Result<()> {
    match points.iter().find(|p| p.len() != d) {
        Some(p) => Err(Error::DimensionMismatch {
            expected: d,
            found: p.len(),
        }),
        None => Ok(()),
    }
}
