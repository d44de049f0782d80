//! Best-split search under the Gini criterion.
use rayon::prelude::*;

use crate::Label;
use super::impurity::*;

use std::cmp::Ordering;


/// Weighted impurity of a candidate split.
/// This is just a wrapper for `f64`.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub(crate) struct Score(f64);


impl From<f64> for Score {
    #[inline(always)]
    fn from(score: f64) -> Self {
        Self(score)
    }
}


/// A winning candidate of the split search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Split {
    /// Index of the feature to test.
    pub feature: usize,
    /// Threshold taken from an observed feature value.
    pub threshold: f64,
    /// Weighted Gini impurity `(|L| g(L) + |R| g(R)) / n` of the split.
    pub impurity: f64,
}


/// Returns the best `(feature, threshold)` pair for the rows `indices`.
///
/// Candidates are every `(feature, row)` pair in feature-major,
/// row-minor order, with the row's feature value as the threshold.
/// A candidate that leaves one side empty is discarded.
/// Candidates are scored in parallel and collected in enumeration order;
/// the minimum is then taken sequentially with a strict comparison,
/// so ties go to the first candidate regardless of thread scheduling.
///
/// Returns `None` if every candidate is degenerate.
pub(crate) fn best_split(
    data:       &[Vec<f64>],
    labels:     &[Label],
    indices:    &[usize],
    n_features: usize,
) -> Option<Split>
{
    let n_sample = indices.len();

    let scores = (0..n_features * n_sample).into_par_iter()
        .map(|k| {
            let feature = k / n_sample;
            let threshold = data[indices[k % n_sample]][feature];
            score_candidate(data, labels, indices, feature, threshold)
                .map(|score| (feature, threshold, score))
        })
        .collect::<Vec<_>>();

    reduce_in_order(scores)
}


/// Pick the minimal score.
/// Earlier candidates win ties.
#[inline]
fn reduce_in_order<I>(scores: I) -> Option<Split>
    where I: IntoIterator<Item = Option<(usize, f64, Score)>>
{
    let mut best: Option<(usize, f64, Score)> = None;
    for (feature, threshold, score) in scores.into_iter().flatten() {
        let better = match best {
            None => true,
            Some((_, _, b)) => {
                score.partial_cmp(&b) == Some(Ordering::Less)
            },
        };
        if better {
            best = Some((feature, threshold, score));
        }
    }

    best.map(|(feature, threshold, score)| {
        Split { feature, threshold, impurity: score.0, }
    })
}


/// Returns the weighted Gini impurity of splitting `indices`
/// by `data[i][feature] <= threshold`,
/// or `None` if one side is empty.
#[inline]
fn score_candidate(
    data:      &[Vec<f64>],
    labels:    &[Label],
    indices:   &[usize],
    feature:   usize,
    threshold: f64,
) -> Option<Score>
{
    let mut left  = LabelCounts::new();
    let mut right = LabelCounts::new();
    let mut n_left  = 0_usize;
    let mut n_right = 0_usize;

    for &i in indices {
        if data[i][feature] <= threshold {
            *left.entry(labels[i]).or_insert(0) += 1;
            n_left += 1;
        } else {
            *right.entry(labels[i]).or_insert(0) += 1;
            n_right += 1;
        }
    }

    if n_left == 0 || n_right == 0 { return None; }

    let n = (n_left + n_right) as f64;
    let score = (n_left as f64 * gini_from_counts(&left)
        + n_right as f64 * gini_from_counts(&right))
        / n;
    Some(Score::from(score))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduction_keeps_first_of_equal_minima() {
        let scores = vec![
            None,
            Some((0, 3.0, Score::from(0.25))),
            Some((1, 1.0, Score::from(0.25))),
            Some((2, 5.0, Score::from(0.40))),
        ];
        let split = reduce_in_order(scores).unwrap();
        assert_eq!(split.feature, 0);
        assert_eq!(split.threshold, 3.0);
    }

    #[test]
    fn all_degenerate_candidates_give_no_split() {
        let data = vec![vec![1.0, 2.0]; 4];
        let labels = vec![0, 1, 0, 1];
        let indices = (0..4).collect::<Vec<_>>();
        assert_eq!(best_split(&data, &labels, &indices, 2), None);
    }

    #[test]
    fn largest_value_threshold_is_degenerate() {
        let data = vec![vec![1.0], vec![2.0]];
        let labels = vec![0, 1];
        let indices = vec![0, 1];
        assert!(score_candidate(&data, &labels, &indices, 0, 2.0).is_none());
        let score = score_candidate(&data, &labels, &indices, 0, 1.0);
        assert_eq!(score, Some(Score::from(0.0)));
    }

    #[test]
    fn parallel_search_matches_sequential_order() {
        // Features 0 and 1 both separate the classes perfectly;
        // feature 0 is enumerated first and must win.
        let data = vec![
            vec![0.0, 0.0, 9.0],
            vec![0.0, 0.0, 1.0],
            vec![5.0, 5.0, 9.0],
            vec![5.0, 5.0, 1.0],
        ];
        let labels = vec![0, 0, 1, 1];
        let indices = (0..4).collect::<Vec<_>>();
        for _ in 0..32 {
            let split = best_split(&data, &labels, &indices, 3).unwrap();
            assert_eq!(split.feature, 0);
            assert_eq!(split.threshold, 0.0);
            assert_eq!(split.impurity, 0.0);
        }
    }
}
