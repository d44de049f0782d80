//! The prediction interface of trained models.
use crate::{Label, Result};


/// A trait that defines the prediction of a trained classifier.
pub trait Classifier {
    /// Predicts the label of the given example.
    fn predict(&self, sample: &[f64]) -> Result<Label>;


    /// Predicts the labels of the given examples.
    /// Stops at the first example that cannot be predicted.
    fn predict_all(&self, samples: &[Vec<f64>]) -> Result<Vec<Label>> {
        samples.iter()
            .map(|sample| self.predict(sample))
            .collect()
    }
}
