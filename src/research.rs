//! This directory provides the evaluation tools around a classifier:
//! - Hold-out (train/test) split
//! - Accuracy

/// Provides a seeded train/test split.
pub mod holdout;

/// Defines evaluation metrics.
pub mod metrics;


pub use holdout::{HoldOut, train_test_split, DEFAULT_TRAIN_RATIO, DEFAULT_SEED};
pub use metrics::accuracy;
