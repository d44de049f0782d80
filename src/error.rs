//! Defines the error types of this crate.
use thiserror::Error;

use std::io;


/// Errors raised by [`DecisionTree`](crate::DecisionTree) and
/// [`TreeBuilder`](crate::TreeBuilder).
///
/// Every variant is a caller-input violation.
/// A subset that cannot be split any further is not an error;
/// the builder turns it into a leaf.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TreeError {
    /// No samples were supplied.
    #[error("the dataset is empty")]
    EmptyDataset,

    /// Two lengths that must agree do not.
    #[error("dimension mismatch on {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// What was measured (`"row length"`, `"label count"`, ...).
        what: &'static str,
        /// The length implied by the rest of the input.
        expected: usize,
        /// The length actually found.
        actual: usize,
    },

    /// `max_depth` was negative.
    #[error("max depth must be non-negative, got {0}")]
    InvalidDepth(isize),

    /// `predict` was called before a successful `fit`.
    #[error("the decision tree is not trained yet")]
    NotTrained,
}


/// Errors raised while reading a [`Sample`](crate::Sample) from a file.
#[derive(Debug, Error)]
pub enum SampleError {
    /// `SampleReader::read` was called without `SampleReader::file`.
    #[error("the file name is not set. Use `SampleReader::file`")]
    MissingFile,

    /// The underlying file could not be read.
    #[error("failed to read the sample file: {0}")]
    Io(#[from] io::Error),

    /// The file has no usable row.
    #[error("no valid row is found ({skipped} rows skipped)")]
    Empty {
        /// Number of malformed rows that were skipped.
        skipped: usize,
    },

    /// A hold-out split would leave the training sample empty.
    #[error("no training row is left: {n_sample} rows at ratio {ratio}")]
    EmptyTrain {
        /// Number of rows of the whole sample.
        n_sample: usize,
        /// The training ratio in use.
        ratio: f64,
    },

    /// The training ratio for a hold-out split is out of `(0, 1)`.
    #[error("training ratio should be in `(0, 1)`, got {0}")]
    InvalidRatio(f64),
}


/// Shorthand for results of this crate.
pub type Result<T, E = TreeError> = std::result::Result<T, E>;
