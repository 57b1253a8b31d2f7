pub mod bagging;
pub mod error;
pub mod learner;
#[doc(hidden)]
pub mod test_data;
pub mod tree;

use ndarray::{Array1, ArrayView1, ArrayView2};
use rand::Rng;

pub use bagging::{BaggedFitter, BaggedModel, BaggedParams, BaggedParamsBuilder, BootstrapStrategy};
pub use error::{Error, Result};
pub use learner::{BagLearner, Learner, TreeLearner};
pub use tree::{FittedTree, Node, RandomTreeFitter, TreeParams, TreeParamsBuilder};

#[derive(Debug, Clone, PartialEq)]
pub struct FitResult {
    pub err: f64,
    pub residuals: Array1<f64>,
    pub y_hat: Array1<f64>,
}

impl FitResult {
    pub fn from_predictions(y: ArrayView1<f64>, y_hat: Array1<f64>) -> Self {
        let residuals = &y - &y_hat;
        let err = residuals.pow2().mean().unwrap_or(f64::NAN);
        FitResult {
            err,
            residuals,
            y_hat,
        }
    }
}

pub trait FittedModel {
    /// Predicts one value per row of `x`.
    ///
    /// # Panics
    ///
    /// Panics if `x` has fewer columns than the model was trained on.
    /// [`Learner::predict`] checks the width and returns an error instead.
    fn predict(&self, x: ArrayView2<f64>) -> Array1<f64>;
}

/// A learning algorithm: validates its hyperparameters and fits a model,
/// drawing all of its randomness from the supplied generator.
pub trait ModelFitter {
    type Model: FittedModel + Send + Sync;
    type HyperParameters: Sync;

    fn validate(hyperparameters: &Self::HyperParameters) -> Result<()>;

    fn fit<R: Rng + ?Sized>(
        x: ArrayView2<f64>,
        y: ArrayView1<f64>,
        hyperparameters: &Self::HyperParameters,
        rng: &mut R,
    ) -> Result<(FitResult, Self::Model)>;
}

pub(crate) fn check_training_data(x: ArrayView2<f64>, y: ArrayView1<f64>) -> Result<()> {
    if x.nrows() == 0 {
        return Err(Error::EmptyInput("feature matrix has no rows"));
    }
    if x.nrows() != y.len() {
        return Err(Error::rows_mismatch(x.nrows(), y.len()));
    }
    Ok(())
}

pub(crate) fn check_query_width(n_features: usize, x: ArrayView2<f64>) -> Result<()> {
    if x.ncols() != n_features {
        return Err(Error::DimensionMismatch {
            expected: format!("{} feature columns", n_features),
            actual: format!("{} feature columns", x.ncols()),
        });
    }
    Ok(())
}
