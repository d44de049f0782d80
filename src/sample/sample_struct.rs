use crate::{Label, Result};
use crate::decision_tree::tree_builder::check_sample;


/// Struct `Sample` holds the rows of a dataset and their class labels.
/// `labels()[i]` is the class of `data()[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub(super) data: Vec<Vec<f64>>,
    pub(super) labels: Vec<Label>,
    pub(super) class_names: Vec<String>,
    pub(super) skipped: usize,
}


impl Sample {
    /// Construct a [`Sample`] from a row matrix and its labels.
    /// Fails if `data` is empty or the lengths disagree.
    pub fn new(data: Vec<Vec<f64>>, labels: Vec<Label>) -> Result<Self> {
        check_sample(&data, &labels)?;

        Ok(Self { data, labels, class_names: Vec::new(), skipped: 0, })
    }


    /// Attach the class names; `names[y]` is the name of the label `y`.
    pub fn with_class_names<I, S>(mut self, names: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>,
    {
        self.class_names = names.into_iter().map(Into::into).collect();
        self
    }


    /// Returns the pair of the number of examples and
    /// the number of features
    pub fn shape(&self) -> (usize, usize) {
        let n_feature = self.data.first().map_or(0, Vec::len);
        (self.data.len(), n_feature)
    }


    /// Returns the rows.
    #[inline]
    pub fn data(&self) -> &[Vec<f64>] {
        &self.data[..]
    }


    /// Returns the class labels.
    #[inline]
    pub fn labels(&self) -> &[Label] {
        &self.labels[..]
    }


    /// Returns the class names, indexed by label.
    #[inline]
    pub fn class_names(&self) -> &[String] {
        &self.class_names[..]
    }


    /// Returns the name of the class `label`, if known.
    pub fn class_name(&self, label: Label) -> Option<&str> {
        self.class_names.get(label).map(String::as_str)
    }


    /// Returns the number of malformed rows skipped while reading.
    #[inline]
    pub fn skipped(&self) -> usize {
        self.skipped
    }


    /// Returns the `idx`-th instance `(x, y)`.
    pub fn at(&self, idx: usize) -> (&[f64], Label) {
        (&self.data[idx][..], self.labels[idx])
    }


    /// Split `self` into two samples.
    /// The rows `ix[start..end]` go to the second one
    /// and the remaining rows of `ix` go to the first one,
    /// both in the order of `ix`.
    pub(crate) fn split(&self, ix: &[usize], start: usize, end: usize)
        -> (Self, Self)
    {
        let outer = ix[..start].iter().chain(&ix[end..]);
        let inner = ix[start..end].iter();
        (self.select(outer), self.select(inner))
    }


    /// Collect the rows `rows` into a new sample.
    fn select<'a, I>(&self, rows: I) -> Self
        where I: Iterator<Item = &'a usize>
    {
        let mut data = Vec::new();
        let mut labels = Vec::new();
        for &i in rows {
            data.push(self.data[i].clone());
            labels.push(self.labels[i]);
        }

        Self {
            data,
            labels,
            class_names: self.class_names.clone(),
            skipped: 0,
        }
    }
}
