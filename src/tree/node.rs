//! Defines the inner representation of the decision tree.
use crate::dataset::Image;

/// Enumeration of `BranchNode` and `LeafNode`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A node that has two children.
    Branch(BranchNode),

    /// A node that has no child.
    Leaf(LeafNode),
}


/// Represents the branch nodes of the decision tree.
/// Each `BranchNode` tests a single pixel and
/// has exactly two children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchNode {
    pub(super) pixel: usize,
    pub(super) left: Box<Node>,
    pub(super) right: Box<Node>,
}


impl BranchNode {
    /// Returns a `BranchNode` from the given components.
    #[inline]
    pub(super) fn from_raw(
        pixel: usize,
        left: Box<Node>,
        right: Box<Node>,
    ) -> Self
    {
        Self { pixel, left, right, }
    }


    /// The pixel this node tests.
    #[inline]
    pub fn pixel(&self) -> usize {
        self.pixel
    }


    /// The subtree for images whose tested pixel is `0`.
    #[inline]
    pub fn left(&self) -> &Node {
        &self.left
    }


    /// The subtree for images whose tested pixel is non-zero.
    #[inline]
    pub fn right(&self) -> &Node {
        &self.right
    }
}


/// Represents the leaf nodes of the decision tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    pub(super) label: u8,
}


impl LeafNode {
    /// Returns a `LeafNode` that predicts the given label.
    #[inline]
    pub(super) fn from_raw(label: u8) -> Self {
        Self { label }
    }


    /// The label this leaf predicts.
    #[inline]
    pub fn label(&self) -> u8 {
        self.label
    }
}


impl Node {
    /// Construct a leaf node predicting `label`.
    #[inline]
    pub(super) fn leaf(label: u8) -> Self {
        Node::Leaf(LeafNode::from_raw(label))
    }


    /// Construct a branch node testing `pixel`.
    #[inline]
    pub(super) fn branch(pixel: usize, left: Node, right: Node) -> Self {
        Node::Branch(
            BranchNode::from_raw(pixel, Box::new(left), Box::new(right))
        )
    }


    /// Walk the tree and return the predicted label for `image`.
    ///
    /// At a branch node, the walk descends left iff the intensity
    /// at the node's pixel is exactly `0`.
    /// Training splits on `< 128` instead; the two thresholds agree
    /// on binarized images, where every intensity is `0` or `255`.
    #[inline]
    pub fn classify(&self, image: &Image) -> u8 {
        match self {
            Node::Leaf(leaf) => leaf.label,
            Node::Branch(branch) => {
                if image.pixel(branch.pixel) == 0 {
                    branch.left.classify(image)
                } else {
                    branch.right.classify(image)
                }
            },
        }
    }


    /// Total number of nodes in this subtree.
    pub fn node_count(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Branch(branch) => {
                1 + branch.left.node_count() + branch.right.node_count()
            },
        }
    }


    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Branch(branch) => {
                1 + branch.left.depth().max(branch.right.depth())
            },
        }
    }
}
