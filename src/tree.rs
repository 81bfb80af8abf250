//! The decision tree: node representation, split criterion,
//! partitioning, and the recursive builder.
pub mod node;
pub mod criterion;
pub mod split;
pub mod builder;
pub mod dtree;

pub use node::Node;
pub use builder::DecisionTreeBuilder;
pub use dtree::DecisionTree;
