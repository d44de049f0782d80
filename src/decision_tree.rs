//! A CART decision tree grown by Gini-impurity minimization.

/// Defines the decision tree classifier.
pub mod dtree;
/// Defines the tree-growing algorithm.
pub mod tree_builder;
/// Defines the nodes of a trained tree.
pub mod node;
/// Defines the observer of the tree-growing algorithm.
pub mod observer;

mod impurity;
mod split;


pub use dtree::DecisionTree;
pub use tree_builder::{
    TreeBuilder,
    DEFAULT_MAX_DEPTH,
    DEFAULT_MIN_SPLIT_SIZE,
};
pub use node::{Node, Splitter, LeftRight};
pub use observer::{TreeObserver, Silent, Verbose};
pub use impurity::{gini, most_common_label};
pub use split::Split;
