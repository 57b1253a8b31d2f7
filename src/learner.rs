use std::fmt;

use ndarray::{Array1, ArrayView1, ArrayView2};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    bagging::BaggedFitter, check_query_width, tree::RandomTreeFitter, Error, FitResult,
    FittedModel, ModelFitter, Result,
};

pub type TreeLearner = Learner<RandomTreeFitter>;
pub type BagLearner<F = RandomTreeFitter> = Learner<BaggedFitter<F>>;

#[derive(Debug, Clone)]
struct Fitted<M> {
    model: M,
    n_features: usize,
    fit_result: FitResult,
}

/// Owns hyperparameters, a random source and the most recently fitted model.
///
/// Every call to [`Learner::fit`] replaces the previous model and advances the
/// random source, so refitting on the same data generally gives a new model.
pub struct Learner<F: ModelFitter, R = StdRng> {
    hyperparameters: F::HyperParameters,
    rng: R,
    fitted: Option<Fitted<F::Model>>,
}

impl<F: ModelFitter> Learner<F, StdRng> {
    pub fn new(hyperparameters: F::HyperParameters, seed: u64) -> Result<Self> {
        Self::with_rng(hyperparameters, StdRng::seed_from_u64(seed))
    }
}

impl<F: ModelFitter, R: Rng> Learner<F, R> {
    pub fn with_rng(hyperparameters: F::HyperParameters, rng: R) -> Result<Self> {
        F::validate(&hyperparameters)?;
        Ok(Self {
            hyperparameters,
            rng,
            fitted: None,
        })
    }

    pub fn fit(&mut self, x: ArrayView2<f64>, y: ArrayView1<f64>) -> Result<&FitResult> {
        let (fit_result, model) = F::fit(x, y, &self.hyperparameters, &mut self.rng)?;
        let fitted = self.fitted.insert(Fitted {
            model,
            n_features: x.ncols(),
            fit_result,
        });
        Ok(&fitted.fit_result)
    }

    pub fn predict(&self, x: ArrayView2<f64>) -> Result<Array1<f64>> {
        let fitted = self.fitted.as_ref().ok_or(Error::NotFitted)?;
        check_query_width(fitted.n_features, x)?;
        Ok(fitted.model.predict(x))
    }

    pub fn hyperparameters(&self) -> &F::HyperParameters {
        &self.hyperparameters
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    pub fn model(&self) -> Option<&F::Model> {
        self.fitted.as_ref().map(|fitted| &fitted.model)
    }

    pub fn fit_result(&self) -> Option<&FitResult> {
        self.fitted.as_ref().map(|fitted| &fitted.fit_result)
    }
}

impl<F: ModelFitter, R> fmt::Debug for Learner<F, R>
where
    F::HyperParameters: fmt::Debug,
    F::Model: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Learner")
            .field("hyperparameters", &self.hyperparameters)
            .field("model", &self.fitted.as_ref().map(|fitted| &fitted.model))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;
    use crate::{
        bagging::{BaggedParamsBuilder, BootstrapStrategy},
        test_data::{setup_data_hardcoded, setup_data_synthetic},
        tree::{TreeParams, TreeParamsBuilder},
    };

    #[test]
    fn test_predict_before_fit() {
        let learner = TreeLearner::new(TreeParams::default(), 42).unwrap();
        assert!(!learner.is_fitted());
        assert_eq!(
            learner.predict(array![[1.0]].view()).unwrap_err(),
            Error::NotFitted
        );
    }

    #[test]
    fn test_construction_validates_hyperparameters() {
        let err = TreeLearner::new(TreeParamsBuilder::new().leaf_size(0).build(), 42).unwrap_err();
        assert!(matches!(err, Error::InvalidHyperparameter { .. }));

        let params = BaggedParamsBuilder::new(TreeParams::default()).n_bags(0).build();
        let err = BagLearner::<RandomTreeFitter>::new(params, 42).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidHyperparameter { param: "n_bags", .. }
        ));

        let params = BaggedParamsBuilder::new(TreeParams::default())
            .n_bags(2)
            .bootstrap(BootstrapStrategy::Precomputed(vec![vec![0]]))
            .build();
        assert!(BagLearner::<RandomTreeFitter>::new(params, 42).is_err());
    }

    #[test]
    fn test_tree_learner_fit_predict() {
        let (x, y) = setup_data_hardcoded();
        let mut learner = TreeLearner::new(TreeParams::default(), 42).unwrap();

        let err = learner.fit(x.view(), y.view()).unwrap().err;
        assert_eq!(err, 0.0);
        assert_eq!(learner.predict(x.view()).unwrap(), y);
        assert_eq!(learner.fit_result().unwrap().y_hat, y);
    }

    #[test]
    fn test_predict_rejects_wrong_width() {
        let (x, y) = setup_data_hardcoded();
        let mut learner = TreeLearner::new(TreeParams::default(), 42).unwrap();
        learner.fit(x.view(), y.view()).unwrap();

        let err = learner.predict(array![[1.0, 2.0, 3.0]].view()).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { .. }));
        let err = learner.predict(array![[1.0]].view()).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { .. }));
    }

    #[test]
    fn test_refit_replaces_model() {
        let (x, y) = setup_data_synthetic(150, 21);
        let params = BaggedParamsBuilder::new(TreeParams::default()).n_bags(3).build();
        let mut learner = BagLearner::<RandomTreeFitter>::new(params, 42).unwrap();

        learner.fit(x.view(), y.view()).unwrap();
        let first = learner.model().unwrap().clone();
        learner.fit(x.view(), y.view()).unwrap();
        let second = learner.model().unwrap();

        assert_eq!(second.n_members(), 3);
        assert_ne!(&first, second);

        let x_narrow = x.slice(ndarray::s![.., ..2]);
        learner.fit(x_narrow, y.view()).unwrap();
        assert!(learner.predict(x_narrow).is_ok());
        assert!(learner.predict(x.view()).is_err());
    }

    #[test]
    fn test_same_seed_learners_agree() {
        let (x, y) = setup_data_synthetic(100, 2);
        let params = BaggedParamsBuilder::new(TreeParams::default())
            .leaf_size(5)
            .n_bags(15)
            .build();
        let mut learner1 = BagLearner::<RandomTreeFitter>::new(params.clone(), 7).unwrap();
        let mut learner2 = BagLearner::<RandomTreeFitter>::new(params, 7).unwrap();

        learner1.fit(x.view(), y.view()).unwrap();
        learner2.fit(x.view(), y.view()).unwrap();

        assert_eq!(
            learner1.predict(x.view()).unwrap(),
            learner2.predict(x.view()).unwrap()
        );
        assert_eq!(learner1.hyperparameters().n_bags, 15);
    }
}
