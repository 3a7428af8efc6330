pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod dataset;
pub mod error;
pub mod linear_model;

pub use dataset::Dataset;
pub use error::ShapeError;
pub use linear_model::{
    compute_cost, compute_cost_matrix, compute_gradient, compute_gradient_matrix, predict,
};

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;
