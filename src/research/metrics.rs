use crate::{Label, Result, TreeError};


/// Returns the fraction of `predicted` that equals `truth`.
///
/// ```
/// use minicart::accuracy;
///
/// let acc = accuracy(&[0, 1, 2, 2], &[0, 1, 1, 2])?;
/// assert_eq!(acc, 0.75);
/// # Ok::<(), minicart::TreeError>(())
/// ```
pub fn accuracy(truth: &[Label], predicted: &[Label]) -> Result<f64> {
    if truth.len() != predicted.len() {
        return Err(TreeError::DimensionMismatch {
            what: "prediction count",
            expected: truth.len(),
            actual: predicted.len(),
        });
    }
    if truth.is_empty() {
        return Err(TreeError::EmptyDataset);
    }

    let correct = truth.iter()
        .zip(predicted)
        .filter(|(y, p)| y == p)
        .count();

    Ok(correct as f64 / truth.len() as f64)
}
