//! A node struct used in the decision tree algorithm.
use crate::Label;

use std::fmt;


/// The output of [`Splitter::split`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeftRight {
    /// `sample[feature] <= threshold`.
    Left,
    /// `sample[feature] > threshold`.
    Right,
}


/// A splitting rule `sample[feature] <= threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Splitter {
    /// Index of the feature to test.
    pub feature: usize,
    /// Samples whose feature value is at most `threshold` go left.
    pub threshold: f64,
}


impl Splitter {
    /// Construct a new splitting rule.
    #[inline]
    pub fn new(feature: usize, threshold: f64) -> Self {
        Self { feature, threshold, }
    }


    /// Decide which child the given sample goes to.
    /// `sample` must have more than `self.feature` values.
    #[inline]
    pub fn split(&self, sample: &[f64]) -> LeftRight {
        if sample[self.feature] <= self.threshold {
            LeftRight::Left
        } else {
            LeftRight::Right
        }
    }
}


/// A node of a trained decision tree.
/// Each `Branch` exclusively owns its two subtrees.
#[derive(Clone, PartialEq)]
pub enum Node {
    /// A node that has two children.
    Branch {
        /// Rule that routes a sample to `left` or `right`.
        splitter: Splitter,
        /// Subtree for `sample[feature] <= threshold`.
        left:     Box<Node>,
        /// Subtree for `sample[feature] > threshold`.
        right:    Box<Node>,
    },
    /// A node that has no child.
    Leaf {
        /// Class predicted for every sample routed here.
        label: Label,
    },
}


impl Node {
    /// Construct a branch node.
    pub fn branch(splitter: Splitter, left: Box<Node>, right: Box<Node>)
        -> Self
    {
        Self::Branch { splitter, left, right, }
    }


    /// Construct a leaf node.
    pub fn leaf(label: Label) -> Self {
        Self::Leaf { label, }
    }


    /// Returns `true` if this node has no child.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }


    /// Follow the splitting rules from this node down to a leaf
    /// and return the leaf label.
    /// `sample` must have as many values as the training rows.
    pub fn predict(&self, sample: &[f64]) -> Label {
        let mut node = self;
        loop {
            match node {
                Self::Branch { splitter, left, right, } => {
                    node = match splitter.split(sample) {
                        LeftRight::Left  => left,
                        LeftRight::Right => right,
                    };
                },
                Self::Leaf { label, } => {
                    return *label;
                },
            }
        }
    }


    /// Returns the depth of the subtree rooted at this node.
    /// A leaf has depth `0`.
    pub fn depth(&self) -> usize {
        match self {
            Self::Branch { left, right, .. } => {
                1 + left.depth().max(right.depth())
            },
            Self::Leaf { .. } => 0,
        }
    }


    /// Returns the number of leaves of the subtree rooted at this node.
    pub fn n_leaves(&self) -> usize {
        match self {
            Self::Branch { left, right, .. } => {
                left.n_leaves() + right.n_leaves()
            },
            Self::Leaf { .. } => 1,
        }
    }


    /// Render the subtree as indented rule lines.
    pub(crate) fn to_rule_lines(&self, indent: usize, lines: &mut Vec<String>) {
        let pad = "|   ".repeat(indent);
        match self {
            Self::Branch { splitter, left, right, } => {
                let feat = splitter.feature;
                let thr  = splitter.threshold;
                lines.push(format!("{pad}feature[{feat}] <= {thr}"));
                left.to_rule_lines(indent + 1, lines);
                lines.push(format!("{pad}feature[{feat}] >  {thr}"));
                right.to_rule_lines(indent + 1, lines);
            },
            Self::Leaf { label, } => {
                lines.push(format!("{pad}class: {label}"));
            },
        }
    }
}


impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Branch { splitter, left, right, } => {
                f.debug_struct("Branch")
                    .field("feature", &splitter.feature)
                    .field("threshold", &splitter.threshold)
                    .field("left", &left)
                    .field("right", &right)
                    .finish()
            },
            Self::Leaf { label, } => {
                f.debug_struct("Leaf")
                    .field("label", &label)
                    .finish()
            },
        }
    }
}
