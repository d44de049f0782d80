use crate::{Classifier, Label, Result, TreeError};

use super::{
    node::Node,
    observer::*,
    tree_builder::*,
};

use std::fmt;


/// A CART decision tree classifier.
///
/// A fresh [`DecisionTree`] is untrained;
/// [`DecisionTree::fit`] grows a tree from the given sample and
/// keeps it until the next `fit`, which replaces it wholesale.
/// Training and prediction are deterministic.
///
/// The code follows the book:
/// [Classification and Regression Trees](https://www.amazon.com/Classification-Regression-Wadsworth-Statistics-Probability/dp/0412048418)
/// by Leo Breiman, Jerome H. Friedman, Richard A. Olshen, and Charles J. Stone.
///
/// # Example
/// ```
/// use minicart::{DecisionTree, TreeError};
///
/// let data = vec![
///     vec![ 0.0,  0.0,  0.0,  0.0],
///     vec![ 0.0,  0.0,  0.0,  0.0],
///     vec![10.0, 10.0, 10.0, 10.0],
///     vec![10.0, 10.0, 10.0, 10.0],
/// ];
/// let labels = vec![0, 0, 1, 1];
///
/// let mut tree = DecisionTree::new();
/// assert_eq!(tree.predict(&data[0]), Err(TreeError::NotTrained));
///
/// tree.fit(&data, &labels, 3)?;
/// assert_eq!(tree.predict(&[0.0, 0.0, 0.0, 0.0])?, 0);
/// assert_eq!(tree.predict(&[10.0, 10.0, 10.0, 10.0])?, 1);
/// # Ok::<(), TreeError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecisionTree {
    root: Option<Trained>,
    min_split_size: Option<usize>,
}


/// The state of a trained tree.
#[derive(Debug, Clone, PartialEq)]
struct Trained {
    root:       Node,
    n_features: usize,
}


impl DecisionTree {
    /// Construct an untrained [`DecisionTree`].
    #[inline]
    pub fn new() -> Self {
        Self { root: None, min_split_size: None, }
    }


    /// Set the smallest number of rows a node needs to be split.
    /// Default value is `3`, i.e., nodes over at most `2` rows are leaves.
    #[inline]
    pub fn min_split_size(mut self, size: usize) -> Self {
        self.min_split_size = Some(size);
        self
    }


    /// Grow a tree of depth at most `max_depth` from
    /// the rows `data` and their classes `labels`.
    ///
    /// # Errors
    /// - [`TreeError::EmptyDataset`] if `data` is empty.
    /// - [`TreeError::DimensionMismatch`] if rows differ in length
    ///   or `labels` is not as long as `data`.
    /// - [`TreeError::InvalidDepth`] if `max_depth < 0`.
    ///
    /// On error, the previously trained tree (if any) is kept.
    pub fn fit(&mut self, data: &[Vec<f64>], labels: &[Label], max_depth: isize)
        -> Result<()>
    {
        self.fit_with(data, labels, max_depth, &mut Silent)
    }


    /// Same as [`DecisionTree::fit`], reporting progress to `observer`.
    pub fn fit_with<O>(
        &mut self,
        data:      &[Vec<f64>],
        labels:    &[Label],
        max_depth: isize,
        observer:  &mut O,
    ) -> Result<()>
        where O: TreeObserver + ?Sized
    {
        let mut builder = TreeBuilder::new(max_depth)?;
        if let Some(size) = self.min_split_size {
            builder = builder.min_split_size(size);
        }
        let n_features = check_sample(data, labels)?;

        observer.on_fit_start(data.len(), n_features);
        let root = builder.build_with(data, labels, 0, observer)?;

        self.root = Some(Trained { root, n_features, });
        observer.on_fit_end(self);

        Ok(())
    }


    /// Predict the class of `sample`.
    ///
    /// # Errors
    /// - [`TreeError::NotTrained`] if `fit` has not succeeded yet.
    /// - [`TreeError::DimensionMismatch`] if `sample` does not have
    ///   as many values as the training rows.
    pub fn predict(&self, sample: &[f64]) -> Result<Label> {
        let trained = self.root.as_ref().ok_or(TreeError::NotTrained)?;

        if sample.len() != trained.n_features {
            return Err(TreeError::DimensionMismatch {
                what: "sample length",
                expected: trained.n_features,
                actual: sample.len(),
            });
        }

        Ok(trained.root.predict(sample))
    }


    /// Returns `true` if `fit` has succeeded at least once.
    #[inline]
    pub fn is_trained(&self) -> bool {
        self.root.is_some()
    }


    /// Returns the root node of the trained tree.
    #[inline]
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref().map(|t| &t.root)
    }


    /// Returns the number of features seen by `fit`.
    #[inline]
    pub fn n_features(&self) -> Option<usize> {
        self.root.as_ref().map(|t| t.n_features)
    }


    /// Returns the depth of the trained tree (`0` if untrained).
    pub fn depth(&self) -> usize {
        self.root().map_or(0, Node::depth)
    }


    /// Returns the number of leaves of the trained tree (`0` if untrained).
    pub fn n_leaves(&self) -> usize {
        self.root().map_or(0, Node::n_leaves)
    }
}


impl Classifier for DecisionTree {
    fn predict(&self, sample: &[f64]) -> Result<Label> {
        DecisionTree::predict(self, sample)
    }
}


impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(root) = self.root() else {
            return write!(f, "DecisionTree (untrained)");
        };

        writeln!(
            f,
            "DecisionTree (depth: {}, leaves: {})",
            root.depth(),
            root.n_leaves(),
        )?;

        let mut lines = Vec::new();
        root.to_rule_lines(0, &mut lines);
        for line in lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
