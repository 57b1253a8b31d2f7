use serde::{Deserialize, Serialize};

use crate::{tree::TreeParams, Error, Result};

use super::BootstrapStrategy;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaggedParams<P> {
    pub n_bags: usize,
    pub member_params: P,
    pub bootstrap: BootstrapStrategy,
}

impl<P> BaggedParams<P> {
    pub(crate) fn validate_own(&self) -> Result<()> {
        if self.n_bags == 0 {
            return Err(Error::InvalidHyperparameter {
                param: "n_bags",
                value: self.n_bags.to_string(),
                constraint: "must be at least 1",
            });
        }
        self.bootstrap.validate(self.n_bags)
    }
}

// Builder for BaggedParams
#[derive(Debug, Clone)]
pub struct BaggedParamsBuilder<P> {
    n_bags: usize,
    member_params: P,
    bootstrap: BootstrapStrategy,
}

impl<P> BaggedParamsBuilder<P> {
    pub fn new(member_params: P) -> Self {
        Self {
            n_bags: 10,
            member_params,
            bootstrap: BootstrapStrategy::WithReplacement,
        }
    }

    pub fn n_bags(mut self, n_bags: usize) -> Self {
        self.n_bags = n_bags;
        self
    }

    pub fn member_params(mut self, member_params: P) -> Self {
        self.member_params = member_params;
        self
    }

    pub fn bootstrap(mut self, bootstrap: BootstrapStrategy) -> Self {
        self.bootstrap = bootstrap;
        self
    }

    pub fn build(self) -> BaggedParams<P> {
        BaggedParams {
            n_bags: self.n_bags,
            member_params: self.member_params,
            bootstrap: self.bootstrap,
        }
    }
}

// Convenience methods for tree members
impl BaggedParamsBuilder<TreeParams> {
    pub fn leaf_size(mut self, leaf_size: usize) -> Self {
        self.member_params.leaf_size = leaf_size;
        self
    }
}

impl<P: Default> Default for BaggedParamsBuilder<P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}

impl<P: Default> Default for BaggedParams<P> {
    fn default() -> Self {
        BaggedParamsBuilder::default().build()
    }
}
