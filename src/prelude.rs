//! Exports the decision tree and the tools around it.
//!
pub use crate::decision_tree::{
    DecisionTree,
    TreeBuilder,
    TreeObserver,
    Silent,
    Verbose,
};

pub use crate::classifier::Classifier;

pub use crate::sample::{
    Sample,
    SampleReader,
    IRIS_CLASSES,
};

pub use crate::research::{
    HoldOut,
    train_test_split,
    accuracy,
};

pub use crate::error::{TreeError, SampleError};
