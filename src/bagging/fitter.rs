use std::marker::PhantomData;

use ndarray::{ArrayView1, ArrayView2, Axis};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

use crate::{check_training_data, FitResult, FittedModel, ModelFitter, Result};

use super::{params::BaggedParams, BaggedModel};

#[cfg(feature = "use-rayon")]
use rayon::prelude::*;

pub fn fit<F: ModelFitter, R: Rng + ?Sized>(
    x: ArrayView2<f64>,
    y: ArrayView1<f64>,
    hyperparameters: &BaggedParams<F::HyperParameters>,
    rng: &mut R,
) -> Result<(FitResult, BaggedModel<F::Model>)> {
    BaggedFitter::<F>::validate(hyperparameters)?;
    check_training_data(x, y)?;
    let BaggedParams {
        n_bags,
        member_params,
        bootstrap,
    } = hyperparameters;
    let n = x.nrows();
    bootstrap.check_indices(n)?;

    // Pre-generate seeds so members do not depend on scheduling order
    let seeds: Vec<u64> = (0..*n_bags).map(|_| rng.gen()).collect();

    let fit_member = |(b, seed): (usize, u64)| -> Result<F::Model> {
        let mut member_rng = StdRng::seed_from_u64(seed);
        let (fit_res, model) = match bootstrap.draw(n, b, &mut member_rng) {
            Some(sample_indices) => {
                let x_sample = x.select(Axis(0), &sample_indices);
                let y_sample = y.select(Axis(0), &sample_indices);
                F::fit(x_sample.view(), y_sample.view(), member_params, &mut member_rng)?
            }
            None => F::fit(x, y, member_params, &mut member_rng)?,
        };
        debug!(bag = b, err = fit_res.err, "fitted bag member");
        Ok(model)
    };

    #[cfg(not(feature = "use-rayon"))]
    let members: Vec<F::Model> = seeds
        .into_iter()
        .enumerate()
        .map(fit_member)
        .collect::<Result<_>>()?;

    #[cfg(feature = "use-rayon")]
    let members: Vec<F::Model> = seeds
        .into_par_iter()
        .enumerate()
        .map(fit_member)
        .collect::<Result<_>>()?;

    let model = BaggedModel::new(members);
    let y_hat = model.predict(x);
    let fit_result = FitResult::from_predictions(y, y_hat);
    debug!(n_bags, err = fit_result.err, "fitted bagged ensemble");

    Ok((fit_result, model))
}

/// Bagging over members produced by `F`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaggedFitter<F>(PhantomData<F>);

impl<F: ModelFitter> ModelFitter for BaggedFitter<F> {
    type Model = BaggedModel<F::Model>;
    type HyperParameters = BaggedParams<F::HyperParameters>;

    fn validate(hyperparameters: &Self::HyperParameters) -> Result<()> {
        hyperparameters.validate_own()?;
        F::validate(&hyperparameters.member_params)
    }

    fn fit<R: Rng + ?Sized>(
        x: ArrayView2<f64>,
        y: ArrayView1<f64>,
        hyperparameters: &Self::HyperParameters,
        rng: &mut R,
    ) -> Result<(FitResult, Self::Model)> {
        fit::<F, R>(x, y, hyperparameters, rng)
    }
}
