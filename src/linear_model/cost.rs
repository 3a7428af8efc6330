use super::{check_shapes, predict};
use crate::{Matrix, ShapeError, Vector};

/// Mean squared error cost `(1/2m) * Σ (f_wb_i - y_i)²`, computed with a
/// single matrix-vector product.
///
/// With `verbose` set, the prediction vector `f_wb` is printed to stdout.
/// The returned cost is the same either way.
pub fn compute_cost_matrix(
    x: &Matrix,
    y: &Vector,
    w: &Vector,
    b: f64,
    verbose: bool,
) -> Result<f64, ShapeError> {
    let m = check_shapes(x, y, w)?;

    let f_wb = predict(x, w, b)?;
    let residuals = &f_wb - y;
    let total_cost = residuals.mapv(|r| r * r).sum() / (2.0 * m as f64);

    if verbose {
        println!("f_wb:");
        println!("{}", f_wb);
    }

    log::trace!("compute_cost_matrix: m={}, cost={}", m, total_cost);
    Ok(total_cost)
}

/// Mean squared error cost, accumulated one example at a time.
pub fn compute_cost(x: &Matrix, y: &Vector, w: &Vector, b: f64) -> Result<f64, ShapeError> {
    let m = check_shapes(x, y, w)?;

    let mut cost = 0.0;
    for (row, &target) in x.rows().into_iter().zip(y.iter()) {
        let f_wb_i = row.dot(w) + b;
        cost += (f_wb_i - target).powi(2);
    }
    let cost = cost / (2.0 * m as f64);

    log::trace!("compute_cost: m={}, cost={}", m, cost);
    Ok(cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    fn lab_data() -> (Matrix, Vector) {
        let x = array![[1.0, 1.0], [1.0, 2.0], [2.0, 2.0], [2.0, 3.0]];
        let y = array![6.0, 8.0, 9.0, 11.0];
        (x, y)
    }

    #[test]
    fn test_cost_lab_data() {
        let (x, y) = lab_data();
        let w = array![1.0, 1.0];

        // residuals -4, -5, -5, -6
        let expected = (16.0 + 25.0 + 25.0 + 36.0) / 8.0;
        assert_relative_eq!(compute_cost_matrix(&x, &y, &w, 0.0, false).unwrap(), expected);
        assert_relative_eq!(compute_cost(&x, &y, &w, 0.0).unwrap(), expected);
    }

    #[test]
    fn test_cost_zero_on_exact_fit() {
        let (x, _) = lab_data();
        let w = array![1.0, 2.0];
        let y = array![6.0, 8.0, 9.0, 11.0];

        assert_eq!(compute_cost_matrix(&x, &y, &w, 3.0, false).unwrap(), 0.0);
        assert_eq!(compute_cost(&x, &y, &w, 3.0).unwrap(), 0.0);
    }

    #[test]
    fn test_cost_single_example() {
        let x = array![[2.0, 3.0]];
        let y = array![10.0];
        let w = array![1.0, 2.0];

        // f_wb = 9, residual = -1
        let cost = compute_cost(&x, &y, &w, 1.0).unwrap();
        assert!(cost.is_finite());
        assert_relative_eq!(cost, 0.5);
        assert_relative_eq!(compute_cost_matrix(&x, &y, &w, 1.0, false).unwrap(), 0.5);
    }

    #[test]
    fn test_verbose_does_not_change_cost() {
        let (x, y) = lab_data();
        let w = array![0.5, 1.5];

        let quiet = compute_cost_matrix(&x, &y, &w, 2.0, false).unwrap();
        let loud = compute_cost_matrix(&x, &y, &w, 2.0, true).unwrap();
        assert_eq!(quiet, loud);
    }

    #[test]
    fn test_cost_feature_mismatch() {
        let x = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let y = array![1.0, 2.0];
        let w = array![1.0, 1.0];

        let expected = ShapeError::FeatureMismatch { columns: 3, weights: 2 };
        assert_eq!(compute_cost_matrix(&x, &y, &w, 0.0, false), Err(expected));
        assert_eq!(compute_cost(&x, &y, &w, 0.0), Err(expected));
    }

    #[test]
    fn test_cost_sample_mismatch() {
        let x = array![[1.0], [2.0]];
        let y = array![1.0, 2.0, 3.0];
        let w = array![1.0];

        assert!(compute_cost_matrix(&x, &y, &w, 0.0, false).is_err());
        assert!(compute_cost(&x, &y, &w, 0.0).is_err());
    }

    #[test]
    fn test_cost_empty_dataset() {
        let x = Matrix::zeros((0, 2));
        let y = Vector::zeros(0);
        let w = array![1.0, 1.0];

        assert_eq!(compute_cost(&x, &y, &w, 0.0), Err(ShapeError::Empty));
        assert_eq!(compute_cost_matrix(&x, &y, &w, 0.0, false), Err(ShapeError::Empty));
    }

    #[test]
    fn test_nan_propagates() {
        let x = array![[1.0], [f64::NAN]];
        let y = array![1.0, 2.0];
        let w = array![1.0];

        assert!(compute_cost_matrix(&x, &y, &w, 0.0, false).unwrap().is_nan());
        assert!(compute_cost(&x, &y, &w, 0.0).unwrap().is_nan());
    }
}
