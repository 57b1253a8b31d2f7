use ndarray::{Array1, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::FittedModel;

pub mod bootstrap;
mod fitter;
pub mod params;

pub use bootstrap::{bootstrap_indices, BootstrapStrategy};
pub use fitter::{fit, BaggedFitter};
pub use params::{BaggedParams, BaggedParamsBuilder};

#[cfg(feature = "use-rayon")]
use rayon::prelude::*;


/// Bootstrap-aggregated ensemble; predicts the arithmetic mean of its members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaggedModel<M> {
    members: Vec<M>,
}

impl<M: FittedModel> BaggedModel<M> {
    pub fn new(members: Vec<M>) -> Self {
        debug_assert!(!members.is_empty(), "an ensemble has at least one member");
        Self { members }
    }

    pub fn members(&self) -> &[M] {
        &self.members
    }

    pub fn n_members(&self) -> usize {
        self.members.len()
    }
}

impl<M: FittedModel + Sync> FittedModel for BaggedModel<M> {
    fn predict(&self, x: ArrayView2<f64>) -> Array1<f64> {
        #[cfg(not(feature = "use-rayon"))]
        let result = self
            .members
            .iter()
            .fold(Array1::<f64>::zeros(x.nrows()), |acc, member| {
                acc + &member.predict(x)
            });

        #[cfg(feature = "use-rayon")]
        let result = self
            .members
            .par_iter()
            .map(|member| member.predict(x))
            .reduce(|| Array1::<f64>::zeros(x.nrows()), |acc, pred| acc + &pred);

        result / self.members.len() as f64
    }
}
