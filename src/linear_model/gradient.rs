use super::{check_shapes, predict};
use crate::{Matrix, ShapeError, Vector};

/// Gradient of the cost, returned as `(dj_db, dj_dw)`.
///
/// `dj_dw = (1/m) * Xᵀ·e` and `dj_db = (1/m) * Σ e_i`, with `e = X·w + b - y`.
pub fn compute_gradient_matrix(
    x: &Matrix,
    y: &Vector,
    w: &Vector,
    b: f64,
) -> Result<(f64, Vector), ShapeError> {
    let m = check_shapes(x, y, w)? as f64;

    let error = predict(x, w, b)? - y;
    let dj_dw = x.t().dot(&error) / m;
    let dj_db = error.sum() / m;

    log::trace!("compute_gradient_matrix: dj_db={}, dj_dw={}", dj_db, dj_dw);
    Ok((dj_db, dj_dw))
}

/// Gradient of the cost, accumulated example by example and feature by
/// feature. Same result as [`compute_gradient_matrix`].
pub fn compute_gradient(
    x: &Matrix,
    y: &Vector,
    w: &Vector,
    b: f64,
) -> Result<(f64, Vector), ShapeError> {
    let m = check_shapes(x, y, w)?;
    let n = x.ncols();

    let mut dj_dw = Vector::zeros(n);
    let mut dj_db = 0.0;

    for i in 0..m {
        let err = (x.row(i).dot(w) + b) - y[i];
        for j in 0..n {
            dj_dw[j] += err * x[(i, j)];
        }
        dj_db += err;
    }

    let m = m as f64;
    dj_dw /= m;
    let dj_db = dj_db / m;

    log::trace!("compute_gradient: dj_db={}, dj_dw={}", dj_db, dj_dw);
    Ok((dj_db, dj_dw))
}
