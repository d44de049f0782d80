//! Label statistics used while growing a tree.
use crate::Label;

use std::collections::BTreeMap;


/// Number of occurrences of each observed label.
/// Ordered by label so that ties are resolved deterministically.
pub(crate) type LabelCounts = BTreeMap<Label, usize>;


/// Count the labels at the given positions.
#[inline]
pub(crate) fn count_labels<I>(labels: I) -> LabelCounts
    where I: IntoIterator<Item = Label>
{
    let mut counter = LabelCounts::new();
    for y in labels {
        *counter.entry(y).or_insert(0) += 1;
    }
    counter
}


/// Returns the Gini impurity `1 - Σ_c p_c²` of the given labels.
///
/// Only the classes observed in `labels` contribute,
/// so a subset that lacks some class is still scored correctly.
/// An empty or single-class input is pure and scores `0.0`.
///
/// ```
/// use minicart::gini;
///
/// assert_eq!(gini(&[]), 0.0);
/// assert_eq!(gini(&[2, 2, 2]), 0.0);
/// assert!((gini(&[0, 1]) - 0.5).abs() < 1e-12);
/// ```
pub fn gini(labels: &[Label]) -> f64 {
    gini_from_counts(&count_labels(labels.iter().copied()))
}


/// Returns the Gini impurity of the given label counts.
#[inline]
pub(crate) fn gini_from_counts(counts: &LabelCounts) -> f64 {
    let total = counts.values().sum::<usize>();
    if total == 0 || counts.len() <= 1 { return 0f64; }

    let total = total as f64;
    let correct = counts.values()
        .map(|&c| (c as f64 / total).powi(2))
        .sum::<f64>();

    (1f64 - correct).max(0f64)
}


/// Returns the most frequent label.
/// If several labels are equally frequent, the smallest one wins.
/// Returns `None` for an empty input.
///
/// ```
/// use minicart::most_common_label;
///
/// assert_eq!(most_common_label(&[1, 0, 1, 2]), Some(1));
/// assert_eq!(most_common_label(&[1, 0, 1, 0]), Some(0));
/// assert_eq!(most_common_label(&[]), None);
/// ```
pub fn most_common_label(labels: &[Label]) -> Option<Label> {
    majority(&count_labels(labels.iter().copied()))
}


#[inline]
pub(crate) fn majority(counts: &LabelCounts) -> Option<Label> {
    // `BTreeMap` iterates in ascending label order and
    // only a strictly larger count replaces the current best.
    let mut best: Option<(Label, usize)> = None;
    for (&y, &c) in counts {
        match best {
            Some((_, b)) if c <= b => {},
            _ => { best = Some((y, c)); },
        }
    }
    best.map(|(y, _)| y)
}
