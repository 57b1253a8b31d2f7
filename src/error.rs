use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Precondition violations raised by the fitters and learners.
///
/// Degenerate splits and identical labels are not errors; they end in a leaf.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: String, actual: String },

    #[error("invalid hyperparameter `{param}` = {value}: {constraint}")]
    InvalidHyperparameter {
        param: &'static str,
        value: String,
        constraint: &'static str,
    },

    #[error("bootstrap index {index} in bag {bag} is out of range for {n_samples} samples")]
    BootstrapIndexOutOfRange {
        bag: usize,
        index: usize,
        n_samples: usize,
    },

    #[error("model has not been fitted")]
    NotFitted,
}

impl Error {
    pub(crate) fn rows_mismatch(n_features_rows: usize, n_labels: usize) -> Self {
        Error::DimensionMismatch {
            expected: format!("{n_features_rows} labels"),
            actual: format!("{n_labels} labels"),
        }
    }
}
