use crate::linear_model::{compute_cost_matrix, compute_gradient_matrix};
use crate::{Matrix, ShapeError, Vector};

/// Training examples `X` paired with their targets `y`.
#[derive(Clone, Debug)]
pub struct Dataset {
    pub features: Matrix,
    pub targets: Vector,
}

impl Dataset {
    pub fn new(features: Matrix, targets: Vector) -> Result<Self, ShapeError> {
        if features.nrows() != targets.len() {
            return Err(ShapeError::SampleMismatch {
                rows: features.nrows(),
                targets: targets.len(),
            });
        }

        if features.nrows() == 0 {
            return Err(ShapeError::Empty);
        }

        Ok(Self { features, targets })
    }

    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    pub fn cost(&self, w: &Vector, b: f64) -> Result<f64, ShapeError> {
        compute_cost_matrix(&self.features, &self.targets, w, b, false)
    }

    /// `(dj_db, dj_dw)` at the given parameters.
    pub fn gradient(&self, w: &Vector, b: f64) -> Result<(f64, Vector), ShapeError> {
        compute_gradient_matrix(&self.features, &self.targets, w, b)
    }
}
