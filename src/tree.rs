use ndarray::{Array1, ArrayView1, ArrayView2, Axis};
use serde::{Deserialize, Serialize};

use crate::FittedModel;

mod fitter;
pub mod params;

pub use fitter::{fit, RandomTreeFitter};
pub use params::{TreeParams, TreeParamsBuilder};


/// One record of the flat tree encoding. Child positions are offsets relative
/// to the split's own index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

/// A regression tree stored as a pre-order node array: every split is
/// followed by its whole left subtree and then its right subtree, so the
/// left child always sits at offset 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittedTree {
    nodes: Vec<Node>,
    n_features: usize,
}

impl FittedTree {
    pub(crate) fn new(nodes: Vec<Node>, n_features: usize) -> Self {
        debug_assert!(!nodes.is_empty(), "a fitted tree has at least one node");
        Self { nodes, n_features }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn n_leaves(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_leaf()).count()
    }

    /// Number of feature columns the tree was trained on.
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Length of the longest root-to-leaf path, counted in edges.
    pub fn depth(&self) -> usize {
        self.depth_from(0)
    }

    fn depth_from(&self, index: usize) -> usize {
        match self.nodes[index] {
            Node::Leaf { .. } => 0,
            Node::Split { left, right, .. } => {
                1 + self
                    .depth_from(index + left)
                    .max(self.depth_from(index + right))
            }
        }
    }

    /// Index of the leaf node a single row lands in.
    #[inline]
    pub fn leaf_index(&self, row: ArrayView1<f64>) -> usize {
        let mut index = 0;
        loop {
            match self.nodes[index] {
                Node::Leaf { .. } => return index,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index += if row[feature] <= threshold { left } else { right };
                }
            }
        }
    }

    #[inline]
    pub fn predict_single(&self, row: ArrayView1<f64>) -> f64 {
        match self.nodes[self.leaf_index(row)] {
            Node::Leaf { value } => value,
            Node::Split { .. } => unreachable!("leaf_index always stops at a leaf"),
        }
    }

    /// Leaf node index for every row of `x`.
    pub fn apply(&self, x: ArrayView2<f64>) -> Vec<usize> {
        x.axis_iter(Axis(0)).map(|row| self.leaf_index(row)).collect()
    }
}

impl FittedModel for FittedTree {
    fn predict(&self, x: ArrayView2<f64>) -> Array1<f64> {
        assert!(
            x.ncols() >= self.n_features,
            "query has {} feature columns, tree was trained on {}",
            x.ncols(),
            self.n_features
        );
        x.axis_iter(Axis(0))
            .map(|row| self.predict_single(row))
            .collect()
    }
}
