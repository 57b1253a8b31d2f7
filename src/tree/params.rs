use serde::{Deserialize, Serialize};

use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeParams {
    /// Nodes holding at most this many samples become leaves.
    pub leaf_size: usize,
}

impl TreeParams {
    pub fn validate(&self) -> Result<()> {
        if self.leaf_size == 0 {
            return Err(Error::InvalidHyperparameter {
                param: "leaf_size",
                value: self.leaf_size.to_string(),
                constraint: "must be at least 1",
            });
        }
        Ok(())
    }
}

// Builder for TreeParams
#[derive(Debug, Clone)]
pub struct TreeParamsBuilder {
    leaf_size: usize,
}

impl TreeParamsBuilder {
    pub fn new() -> Self {
        Self { leaf_size: 1 }
    }

    pub fn leaf_size(mut self, leaf_size: usize) -> Self {
        self.leaf_size = leaf_size;
        self
    }

    pub fn build(self) -> TreeParams {
        TreeParams {
            leaf_size: self.leaf_size,
        }
    }
}

impl Default for TreeParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for TreeParams {
    fn default() -> Self {
        TreeParamsBuilder::new().build()
    }
}
