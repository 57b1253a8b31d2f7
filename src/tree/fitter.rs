use itertools::Itertools;
use ndarray::{ArrayView1, ArrayView2};
use rand::Rng;
use tracing::{debug, trace};

use crate::{check_training_data, Error, FitResult, FittedModel, ModelFitter, Result};

use super::{FittedTree, Node, TreeParams};

pub fn fit<R: Rng + ?Sized>(
    x: ArrayView2<f64>,
    y: ArrayView1<f64>,
    hyperparameters: &TreeParams,
    rng: &mut R,
) -> Result<(FitResult, FittedTree)> {
    hyperparameters.validate()?;
    check_training_data(x, y)?;
    if x.ncols() == 0 {
        return Err(Error::EmptyInput("feature matrix has no columns"));
    }

    let mut fitter = RandomTreeBuilder {
        x,
        y,
        leaf_size: hyperparameters.leaf_size,
        nodes: Vec::new(),
        rng,
    };
    let rows: Vec<usize> = (0..x.nrows()).collect();
    fitter.grow(&rows);

    let tree = FittedTree::new(fitter.nodes, x.ncols());
    debug!(
        n_samples = x.nrows(),
        n_nodes = tree.n_nodes(),
        n_leaves = tree.n_leaves(),
        depth = tree.depth(),
        "fitted random tree"
    );

    let y_hat = tree.predict(x);
    Ok((FitResult::from_predictions(y, y_hat), tree))
}

/// Fitter for a single randomized regression tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTreeFitter;

impl ModelFitter for RandomTreeFitter {
    type Model = FittedTree;
    type HyperParameters = TreeParams;

    fn validate(hyperparameters: &TreeParams) -> Result<()> {
        hyperparameters.validate()
    }

    fn fit<R: Rng + ?Sized>(
        x: ArrayView2<f64>,
        y: ArrayView1<f64>,
        hyperparameters: &TreeParams,
        rng: &mut R,
    ) -> Result<(FitResult, FittedTree)> {
        fit(x, y, hyperparameters, rng)
    }
}

struct RandomTreeBuilder<'x, 'y, 'r, R: ?Sized> {
    x: ArrayView2<'x, f64>,
    y: ArrayView1<'y, f64>,
    leaf_size: usize,
    nodes: Vec<Node>,
    rng: &'r mut R,
}

impl<R: Rng + ?Sized> RandomTreeBuilder<'_, '_, '_, R> {
    /// Appends the subtree for `rows` to `nodes` in pre-order.
    fn grow(&mut self, rows: &[usize]) {
        if rows.len() <= self.leaf_size || rows.iter().map(|&i| self.y[i]).all_equal() {
            self.push_leaf(rows);
            return;
        }

        let feature = self.rng.gen_range(0..self.x.ncols());
        let mut column: Vec<f64> = rows.iter().map(|&i| self.x[[i, feature]]).collect();
        let threshold = median(&mut column);

        let (left, right): (Vec<usize>, Vec<usize>) = rows
            .iter()
            .copied()
            .partition(|&i| self.x[[i, feature]] <= threshold);

        // `right` is empty when the column is constant on these rows; `left`
        // can only be empty when the median is NaN.
        if left.is_empty() || right.is_empty() {
            trace!(feature, threshold, n_rows = rows.len(), "split does not separate rows");
            self.push_leaf(rows);
            return;
        }

        let at = self.nodes.len();
        self.nodes.push(Node::Split {
            feature,
            threshold,
            left: 1,
            right: 0,
        });
        self.grow(&left);
        let left_size = self.nodes.len() - at - 1;
        self.grow(&right);

        self.nodes[at] = Node::Split {
            feature,
            threshold,
            left: 1,
            right: 1 + left_size,
        };
    }

    fn push_leaf(&mut self, rows: &[usize]) {
        let value = rows.iter().map(|&i| self.y[i]).sum::<f64>() / rows.len() as f64;
        self.nodes.push(Node::Leaf { value });
    }
}

/// Median of `values`, averaging the two middle elements for even lengths.
/// Reorders `values`; must not be empty.
pub(crate) fn median(values: &mut [f64]) -> f64 {
    let len = values.len();
    let mid = len / 2;
    let (lower, upper, _) = values.select_nth_unstable_by(mid, f64::total_cmp);
    let upper = *upper;

    if len % 2 == 0 {
        let max_of_lower = lower.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        (max_of_lower + upper) / 2.0
    } else {
        upper
    }
}
