use crate::{Label, Result, TreeError};

use super::{
    impurity::*,
    node::*,
    observer::*,
    split::*,
};


/// The maximal depth set as default.
pub const DEFAULT_MAX_DEPTH: isize = 10;
/// A node over fewer rows than this becomes a leaf.
pub const DEFAULT_MIN_SPLIT_SIZE: usize = 3;


/// Grows a binary tree by greedy Gini-impurity minimization (CART).
///
/// A node becomes a leaf if
/// - its depth reached `max_depth`,
/// - it holds fewer than `min_split_size` rows (`<= 2` by default),
/// - all of its labels are identical, or
/// - every candidate split leaves one side empty.
///
/// A leaf predicts the most frequent label of its rows,
/// the smallest label on ties.
///
/// # Example
/// ```
/// use minicart::{TreeBuilder, Node};
///
/// let data = vec![
///     vec![0.0, 0.0], vec![0.0, 0.0],
///     vec![9.0, 9.0], vec![9.0, 9.0],
/// ];
/// let labels = vec![0, 0, 1, 1];
/// let root = TreeBuilder::new(3)?
///     .build(&data, &labels, 0)?;
///
/// assert_eq!(root.predict(&[0.0, 0.0]), 0);
/// assert_eq!(root.predict(&[9.0, 9.0]), 1);
/// # Ok::<(), minicart::TreeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeBuilder {
    max_depth: usize,
    min_split_size: usize,
}


impl TreeBuilder {
    /// Construct a new instance of [`TreeBuilder`].
    /// Fails with [`TreeError::InvalidDepth`] if `max_depth < 0`.
    pub fn new(max_depth: isize) -> Result<Self> {
        let max_depth = usize::try_from(max_depth)
            .map_err(|_| TreeError::InvalidDepth(max_depth))?;

        Ok(Self { max_depth, min_split_size: DEFAULT_MIN_SPLIT_SIZE, })
    }


    /// Set the smallest number of rows a node needs to be split.
    /// Default value is `3`.
    #[inline]
    pub fn min_split_size(mut self, size: usize) -> Self {
        self.min_split_size = size;
        self
    }


    /// Returns the maximal depth.
    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }


    /// Grow a tree whose root lies at depth `depth`.
    pub fn build(&self, data: &[Vec<f64>], labels: &[Label], depth: usize)
        -> Result<Node>
    {
        self.build_with(data, labels, depth, &mut Silent)
    }


    /// Same as [`TreeBuilder::build`], reporting progress to `observer`.
    pub fn build_with<O>(
        &self,
        data:     &[Vec<f64>],
        labels:   &[Label],
        depth:    usize,
        observer: &mut O,
    ) -> Result<Node>
        where O: TreeObserver + ?Sized
    {
        let n_features = check_sample(data, labels)?;
        let indices = (0..data.len()).collect::<Vec<_>>();

        self.grow(data, labels, indices, depth, n_features, observer)
    }


    /// Construct the subtree over the rows `indices`.
    fn grow<O>(
        &self,
        data:       &[Vec<f64>],
        labels:     &[Label],
        indices:    Vec<usize>,
        depth:      usize,
        n_features: usize,
        observer:   &mut O,
    ) -> Result<Node>
        where O: TreeObserver + ?Sized
    {
        let n_sample = indices.len();
        observer.on_node(depth, n_sample);

        let counts = count_labels(indices.iter().map(|&i| labels[i]));
        let label = majority(&counts).ok_or(TreeError::EmptyDataset)?;

        if depth >= self.max_depth
            || n_sample < self.min_split_size
            || counts.len() <= 1
        {
            observer.on_leaf(depth, n_sample, label);
            return Ok(Node::leaf(label));
        }

        // Every candidate is degenerate (e.g., all rows are identical).
        let Some(split) = best_split(data, labels, &indices, n_features) else {
            observer.on_leaf(depth, n_sample, label);
            return Ok(Node::leaf(label));
        };
        observer.on_split(depth, &split);

        let rule = Splitter::new(split.feature, split.threshold);
        let (lindices, rindices) = indices.into_iter()
            .partition::<Vec<_>, _>(|&i| {
                rule.split(&data[i]) == LeftRight::Left
            });

        let depth = depth + 1;
        let left  = self.grow(data, labels, lindices, depth, n_features, observer)?;
        let right = self.grow(data, labels, rindices, depth, n_features, observer)?;

        Ok(Node::branch(rule, Box::new(left), Box::new(right)))
    }
}


impl Default for TreeBuilder {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH.unsigned_abs(),
            min_split_size: DEFAULT_MIN_SPLIT_SIZE,
        }
    }
}


/// Check whether the training sample is valid or not.
/// Returns the number of features.
pub(crate) fn check_sample(data: &[Vec<f64>], labels: &[Label])
    -> Result<usize>
{
    let n_sample = data.len();
    if n_sample == 0 {
        return Err(TreeError::EmptyDataset);
    }

    if labels.len() != n_sample {
        return Err(TreeError::DimensionMismatch {
            what: "label count",
            expected: n_sample,
            actual: labels.len(),
        });
    }

    let n_features = data[0].len();
    if let Some(row) = data.iter().find(|row| row.len() != n_features) {
        return Err(TreeError::DimensionMismatch {
            what: "row length",
            expected: n_features,
            actual: row.len(),
        });
    }

    Ok(n_features)
}
