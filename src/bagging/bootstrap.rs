use std::borrow::Cow;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// `n_samples` row indices drawn uniformly from `0..n_samples` with replacement.
pub fn bootstrap_indices<R: Rng + ?Sized>(n_samples: usize, rng: &mut R) -> Vec<usize> {
    (0..n_samples).map(|_| rng.gen_range(0..n_samples)).collect()
}

/// How each ensemble member picks its training rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum BootstrapStrategy {
    #[default]
    WithReplacement,
    /// Every member trains on the original rows.
    Disabled,
    /// One explicit row index vector per member.
    Precomputed(Vec<Vec<usize>>),
}

impl BootstrapStrategy {
    pub(crate) fn validate(&self, n_bags: usize) -> Result<()> {
        if let BootstrapStrategy::Precomputed(samples) = self {
            if samples.len() != n_bags {
                return Err(Error::DimensionMismatch {
                    expected: format!("{n_bags} precomputed bootstrap samples"),
                    actual: format!("{} samples", samples.len()),
                });
            }
            if samples.iter().any(Vec::is_empty) {
                return Err(Error::EmptyInput("precomputed bootstrap sample is empty"));
            }
        }
        Ok(())
    }

    pub(crate) fn check_indices(&self, n_samples: usize) -> Result<()> {
        if let BootstrapStrategy::Precomputed(samples) = self {
            for (bag, sample) in samples.iter().enumerate() {
                if let Some(&index) = sample.iter().find(|&&index| index >= n_samples) {
                    return Err(Error::BootstrapIndexOutOfRange {
                        bag,
                        index,
                        n_samples,
                    });
                }
            }
        }
        Ok(())
    }

    /// Rows for member `bag`, or `None` when it trains on the data as given.
    pub fn draw<R: Rng + ?Sized>(
        &self,
        n_samples: usize,
        bag: usize,
        rng: &mut R,
    ) -> Option<Cow<'_, [usize]>> {
        match self {
            BootstrapStrategy::WithReplacement => {
                Some(Cow::Owned(bootstrap_indices(n_samples, rng)))
            }
            BootstrapStrategy::Disabled => None,
            BootstrapStrategy::Precomputed(samples) => Some(Cow::Borrowed(&samples[bag])),
        }
    }
}
