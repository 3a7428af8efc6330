//! Cost and gradient functions for linear regression.
//!
//! Every operation comes in two flavours:
//! - a vectorized one (`*_matrix`) built from `ndarray` products
//! - a loop-based one that walks the examples one at a time
//!
//! Both compute the same quantities and are kept side by side so the naive
//! form can be checked against the optimized form.
//!
//! # Examples
//!
//! ```rust
//! use linreg_lab::{compute_cost_matrix, compute_gradient_matrix};
//! use ndarray::array;
//!
//! let x = array![[1.0, 1.0], [1.0, 2.0], [2.0, 2.0], [2.0, 3.0]];
//! let y = array![6.0, 8.0, 9.0, 11.0];
//! let w = array![1.0, 1.0];
//!
//! let cost = compute_cost_matrix(&x, &y, &w, 0.0, false).unwrap();
//! assert!((cost - 12.75).abs() < 1e-12);
//!
//! let (dj_db, dj_dw) = compute_gradient_matrix(&x, &y, &w, 0.0).unwrap();
//! assert!((dj_db + 5.0).abs() < 1e-12);
//! assert_eq!(dj_dw.len(), 2);
//! ```

mod cost;
mod gradient;

pub use cost::{compute_cost, compute_cost_matrix};
pub use gradient::{compute_gradient, compute_gradient_matrix};

use crate::{Matrix, ShapeError, Vector};

/// Model output `f_wb = X·w + b` for every example.
pub fn predict(x: &Matrix, w: &Vector, b: f64) -> Result<Vector, ShapeError> {
    if x.ncols() != w.len() {
        log::debug!("rejecting weights: X has {} columns, w has {}", x.ncols(), w.len());
        return Err(ShapeError::FeatureMismatch {
            columns: x.ncols(),
            weights: w.len(),
        });
    }

    Ok(x.dot(w) + b)
}

/// Checks `X`, `y` and `w` line up and returns the number of examples.
pub(crate) fn check_shapes(x: &Matrix, y: &Vector, w: &Vector) -> Result<usize, ShapeError> {
    let err = if x.nrows() != y.len() {
        ShapeError::SampleMismatch {
            rows: x.nrows(),
            targets: y.len(),
        }
    } else if x.ncols() != w.len() {
        ShapeError::FeatureMismatch {
            columns: x.ncols(),
            weights: w.len(),
        }
    } else if x.nrows() == 0 {
        ShapeError::Empty
    } else {
        return Ok(x.nrows());
    };

    log::debug!("rejecting inputs: {}", err);
    Err(err)
}
