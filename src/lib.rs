#![warn(missing_docs)]

//!
//! A crate that trains a binary decision tree classifier
//! over small fixed-size grayscale images.
//!
//! The tree is grown by recursive greedy partitioning:
//! each node picks the pixel whose binary threshold split
//! minimizes the weighted Gini impurity of the resulting
//! two groups, and recursion stops once a subset is
//! sufficiently label-pure.
//!
//! ```no_run
//! use minitree::{read_dataset, DecisionTreeBuilder};
//!
//! let train = read_dataset("train.bin").unwrap();
//! let test = read_dataset("test.bin").unwrap();
//!
//! let tree = DecisionTreeBuilder::new()
//!     .purity_threshold(0.95)
//!     .build(&train);
//!
//! let n_correct = tree.correct_count(&test);
//! println!("{n_correct}");
//! ```

pub mod constants;
pub mod dataset;
pub mod data_reader;
pub mod tree;


// Export the function that reads the binary dataset format.
pub use data_reader::read_dataset;

pub use dataset::{Dataset, Image};

pub use tree::{DecisionTree, DecisionTreeBuilder, Node};
