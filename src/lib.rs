#![warn(missing_docs)]

//!
//! A crate that provides a CART decision tree classifier.
//!
//! The tree is grown by recursive binary partitioning:
//! at each node, every `(feature, threshold)` pair whose threshold is
//! an observed feature value is scored by the weighted Gini impurity
//! of the two sides, and the best one becomes the splitting rule.
//! Growing stops at `max_depth`, at small or pure nodes,
//! and at nodes that cannot be split.
//!
//! ```
//! use minicart::prelude::*;
//!
//! let data = vec![
//!     vec![1.0, 0.5], vec![1.2, 0.4],
//!     vec![5.0, 2.0], vec![5.5, 2.2],
//! ];
//! let labels = vec![0, 0, 1, 1];
//!
//! let mut tree = DecisionTree::new();
//! tree.fit(&data, &labels, 2)?;
//!
//! let predictions = tree.predict_all(&data)?;
//! assert_eq!(accuracy(&labels, &predictions)?, 1.0);
//! # Ok::<(), minicart::TreeError>(())
//! ```
//!
//! Around the classifier, this crate also provides
//! a CSV reader ([`SampleReader`]), a seeded train/test split
//! ([`HoldOut`]), and [`accuracy`].

pub mod error;
pub mod classifier;
pub mod decision_tree;
pub mod sample;
pub mod research;
pub mod config;
pub mod prelude;


/// A class identifier.
pub type Label = usize;


pub use error::{TreeError, SampleError, Result};
pub use classifier::Classifier;

pub use decision_tree::{
    DecisionTree,
    TreeBuilder,
    Node,
    Splitter,
    LeftRight,
    Split,
    TreeObserver,
    Silent,
    Verbose,
    gini,
    most_common_label,
};

pub use sample::{Sample, SampleReader, IRIS_CLASSES};
pub use research::{HoldOut, train_test_split, accuracy};
pub use config::Config;
