/// Shape problems detected before any arithmetic runs.
///
/// Inputs are never broadcast: a dataset, target vector and weight vector
/// either line up exactly or the call fails with one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("dataset has no examples")]
    Empty,
    #[error("number of samples in X ({rows}) doesn't match length of y ({targets})")]
    SampleMismatch { rows: usize, targets: usize },
    #[error("number of features in X ({columns}) doesn't match length of w ({weights})")]
    FeatureMismatch { columns: usize, weights: usize },
}
