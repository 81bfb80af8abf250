//! Defines the recursive construction of [`DecisionTree`].
use crate::constants::DEFAULT_PURITY_THRESHOLD;
use crate::dataset::Dataset;

use super::criterion::{best_split, majority_label};
use super::dtree::DecisionTree;
use super::node::Node;
use super::split::partition;


/// A struct that builds [`DecisionTree`].
/// `DecisionTreeBuilder` keeps the parameters for growing a tree.
///
/// # Example
///
/// ```no_run
/// use minitree::{read_dataset, DecisionTreeBuilder};
///
/// let train = read_dataset("train.bin").unwrap();
/// let tree = DecisionTreeBuilder::new()
///     .purity_threshold(0.95)
///     .build(&train);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DecisionTreeBuilder {
    purity_threshold: f64,
}


impl DecisionTreeBuilder {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    #[inline]
    pub fn new() -> Self {
        Self { purity_threshold: DEFAULT_PURITY_THRESHOLD }
    }


    /// Set the majority ratio at which a subset becomes a leaf.
    /// Default value is
    /// [`DEFAULT_PURITY_THRESHOLD`](crate::constants::DEFAULT_PURITY_THRESHOLD).
    #[inline]
    pub fn purity_threshold(mut self, threshold: f64) -> Self {
        assert!(
            threshold > 0.0 && threshold <= 1.0,
            "purity threshold must be in (0, 1]. got {threshold}.",
        );
        self.purity_threshold = threshold;
        self
    }


    /// Grow a [`DecisionTree`] over the whole dataset.
    pub fn build(&self, data: &Dataset) -> DecisionTree {
        assert!(!data.is_empty(), "cannot grow a tree over an empty dataset.");

        let indices = (0..data.len()).collect::<Vec<_>>();
        let root = grow(data, indices, self.purity_threshold);

        DecisionTree::from(root)
    }
}


impl Default for DecisionTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}


/// One recursive growing step over the subset `indices`.
///
/// Recursion terminates: a chosen split pixel has a non-NaN impurity,
/// so both children are non-empty and strictly smaller than their
/// parent, and a singleton subset always reaches the purity threshold.
fn grow(data: &Dataset, indices: Vec<usize>, threshold: f64) -> Node {
    let (label, freq) = majority_label(data, &indices);

    if freq as f64 / indices.len() as f64 >= threshold {
        return Node::leaf(label);
    }

    // If no pixel separates the subset (identical thresholded
    // intensities everywhere), the node cannot split further.
    let Some(pixel) = best_split(data, &indices) else {
        return Node::leaf(label);
    };

    let (lindices, rindices) = partition(data, &indices, pixel);

    // A selected pixel always has two non-empty sides; if the split
    // degenerates anyway, fall back to a majority leaf.
    if lindices.is_empty() || rindices.is_empty() {
        return Node::leaf(label);
    }

    let left = grow(data, lindices, threshold);
    let right = grow(data, rindices, threshold);

    Node::branch(pixel, left, right)
}
