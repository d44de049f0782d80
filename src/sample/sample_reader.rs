use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::collections::HashMap;

use crate::Label;
use crate::error::SampleError;
use super::sample_struct::Sample;


/// Class names of the Iris dataset, in label order.
pub const IRIS_CLASSES: [&str; 3] = [
    "Iris-setosa",
    "Iris-versicolor",
    "Iris-virginica",
];


/// A struct that returns [`Sample`].
/// Using this struct, one can read a CSV file to [`Sample`].
///
/// Each row consists of the feature values followed by a class name,
/// e.g., `5.1,3.5,1.4,0.2,Iris-setosa`.
/// Rows that cannot be parsed are skipped and counted
/// (see [`Sample::skipped`]).
///
/// # Example
/// The following code is a simple example to read a CSV file.
/// ```no_run
/// use minicart::{SampleReader, IRIS_CLASSES};
///
/// let filename = "/path/to/iris.data";
/// let sample = SampleReader::new()
///     .file(filename)
///     .classes(IRIS_CLASSES)
///     .n_features(4)
///     .read()?;
/// # Ok::<(), minicart::SampleError>(())
/// ```
pub struct SampleReader<P> {
    file: Option<P>,
    has_header: bool,
    classes: Option<Vec<String>>,
    n_features: Option<usize>,
}


impl<P> SampleReader<P> {
    /// Construct a new instance of [`SampleReader`].
    pub fn new() -> Self {
        Self {
            file: None,
            has_header: false,
            classes: None,
            n_features: None,
        }
    }


    /// Set the flag whether the file has the header row or not.
    /// Default is `false.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }


    /// Fix the class names. The `i`-th name gets the label `i`
    /// and rows of any other class are skipped.
    /// By default, labels are assigned in order of first appearance.
    pub fn classes<I, S>(mut self, names: I) -> Self
        where I: IntoIterator<Item = S>,
              S: AsRef<str>,
    {
        let names = names.into_iter()
            .map(|s| s.as_ref().to_string())
            .collect();
        self.classes = Some(names);
        self
    }


    /// Set the number of feature columns.
    /// By default, the width of the first valid row is used.
    pub fn n_features(mut self, n_features: usize) -> Self {
        self.n_features = Some(n_features);
        self
    }
}


impl<P> Default for SampleReader<P> {
    fn default() -> Self {
        Self::new()
    }
}


impl<P> SampleReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }


    /// Reads the file based on the arguments,
    /// and returns [`Sample`].
    /// This method consumes `self.`
    pub fn read(self) -> Result<Sample, SampleError> {
        let file = self.file.as_ref().ok_or(SampleError::MissingFile)?;
        let file = File::open(file)?;

        self.read_from(BufReader::new(file))
    }


    /// Parse the lines of `reader`.
    fn read_from<R: BufRead>(&self, reader: R) -> Result<Sample, SampleError> {
        let mut encoder = LabelEncoder::new(self.classes.clone());
        let mut n_features = self.n_features;

        let mut data = Vec::new();
        let mut labels = Vec::new();
        let mut skipped = 0_usize;

        let skip = usize::from(self.has_header);
        for line in reader.split(b'\n').skip(skip) {
            let line = line?;
            // A row that is not UTF-8 is malformed, not an I/O failure.
            let Ok(line) = std::str::from_utf8(&line) else {
                skipped += 1;
                continue;
            };
            let line = line.trim();
            if line.is_empty() { continue; }

            match parse_row(line, n_features, &mut encoder) {
                Some((x, y)) => {
                    n_features.get_or_insert(x.len());
                    data.push(x);
                    labels.push(y);
                },
                None => { skipped += 1; },
            }
        }

        if data.is_empty() {
            return Err(SampleError::Empty { skipped, });
        }

        Ok(Sample {
            data,
            labels,
            class_names: encoder.into_names(),
            skipped,
        })
    }
}


/// Parse a row `x_1,...,x_n,class`.
/// Returns `None` if the row is malformed.
fn parse_row(
    line:       &str,
    n_features: Option<usize>,
    encoder:    &mut LabelEncoder,
) -> Option<(Vec<f64>, Label)>
{
    let tokens = line.split(',')
        .map(str::trim)
        .collect::<Vec<_>>();

    let (name, values) = tokens.split_last()?;
    if values.is_empty() { return None; }
    if n_features.is_some_and(|n| n != values.len()) { return None; }

    let x = values.iter()
        .map(|v| v.parse::<f64>().ok())
        .collect::<Option<Vec<_>>>()?;

    let y = encoder.encode(name)?;

    Some((x, y))
}


/// Maps class names to contiguous labels `0, 1, 2, ...`.
struct LabelEncoder {
    names: Vec<String>,
    index: HashMap<String, Label>,
    fixed: bool,
}


impl LabelEncoder {
    fn new(classes: Option<Vec<String>>) -> Self {
        let fixed = classes.is_some();
        let names = classes.unwrap_or_default();
        let index = names.iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();

        Self { names, index, fixed, }
    }


    /// Returns the label of `name`,
    /// or `None` if `name` is not a known class of a fixed encoder.
    fn encode(&mut self, name: &str) -> Option<Label> {
        if let Some(&y) = self.index.get(name) {
            return Some(y);
        }
        if self.fixed || name.is_empty() { return None; }

        let y = self.names.len();
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), y);
        Some(y)
    }


    fn into_names(self) -> Vec<String> {
        self.names
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_rows_are_skipped() {
        let text = "\
            5.1,3.5,1.4,0.2,Iris-setosa\n\
            \n\
            oops,3.0,1.4,0.2,Iris-setosa\n\
            6.4,3.2,4.5,1.5,Iris-versicolor\n\
            6.3,3.3,6.0,Iris-virginica\n\
            6.3,3.3,6.0,2.5,Iris-unknown\n\
            6.3,3.3,6.0,2.5,Iris-virginica\n\
        ";
        let reader = SampleReader::<&str>::new()
            .classes(IRIS_CLASSES);
        let sample = reader.read_from(text.as_bytes()).unwrap();

        assert_eq!(sample.shape(), (3, 4));
        assert_eq!(sample.labels(), &[0, 1, 2]);
        assert_eq!(sample.skipped(), 3);
    }

    #[test]
    fn non_utf8_rows_are_skipped() {
        let bytes = b"1.0,2.0,a\n\xff\xfe,3.0,b\n4.0,5.0,b\n";
        let sample = SampleReader::<&str>::new()
            .read_from(&bytes[..])
            .unwrap();

        assert_eq!(sample.shape(), (2, 2));
        assert_eq!(sample.labels(), &[0, 1]);
        assert_eq!(sample.skipped(), 1);
    }

    #[test]
    fn labels_follow_first_appearance() {
        let text = "1,b\n2,a\n3,b\n";
        let sample = SampleReader::<&str>::new()
            .read_from(text.as_bytes())
            .unwrap();

        assert_eq!(sample.labels(), &[0, 1, 0]);
        assert_eq!(sample.class_name(1), Some("a"));
    }
}
