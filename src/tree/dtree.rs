//! Defines the decision tree classifier.
use crate::dataset::{Dataset, Image};

use super::node::Node;


/// Decision tree classifier.
/// This struct is just a wrapper of [`Node`].
/// A tree is built once by
/// [`DecisionTreeBuilder`](super::builder::DecisionTreeBuilder)
/// and read-only thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionTree {
    root: Node,
}


impl From<Node> for DecisionTree {
    #[inline]
    fn from(root: Node) -> Self {
        Self { root }
    }
}


impl DecisionTree {
    /// Returns the predicted label for `image`.
    #[inline]
    pub fn classify(&self, image: &Image) -> u8 {
        self.root.classify(image)
    }


    /// Classify every example of `data` and
    /// return the number of correct predictions.
    #[inline]
    pub fn correct_count(&self, data: &Dataset) -> usize {
        data.iter()
            .filter(|&(image, label)| self.classify(image) == label)
            .count()
    }


    /// The root node of the tree.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Total number of nodes in the tree.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }


    /// Number of nodes on the longest root-to-leaf path.
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }
}
