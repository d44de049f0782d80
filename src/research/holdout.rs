use rand::prelude::*;
use colored::Colorize;

use crate::Sample;
use crate::error::SampleError;


const WIDTH: usize = 9;
/// The ratio of training examples set as default.
pub const DEFAULT_TRAIN_RATIO: f64 = 0.8;
/// The seed of the shuffling set as default.
pub const DEFAULT_SEED: u64 = 1234;


/// A struct that splits a sample into a training and a test sample.
/// The split is reproducible: the same seed gives the same split.
/// # Example
/// ```no_run
/// use minicart::prelude::*;
///
/// let sample = SampleReader::new()
///     .file("/path/to/iris.data")
///     .read()?;
/// let (train, test) = HoldOut::new(&sample)
///     .train_ratio(0.8)?
///     .seed(777)
///     .shuffle()
///     .split()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct HoldOut<'a> {
    train_size: usize,
    ratio: f64,
    seed: u64,
    sample: &'a Sample,
    ix: Vec<usize>,
    verbose: bool,
}


impl<'a> HoldOut<'a> {
    /// Construct a new instance of `HoldOut.`
    #[inline]
    pub fn new(sample: &'a Sample) -> Self {
        let n_sample = sample.shape().0;
        let train_size = (n_sample as f64 * DEFAULT_TRAIN_RATIO) as usize;
        let ix = (0..n_sample).collect::<Vec<_>>();
        Self {
            ratio: DEFAULT_TRAIN_RATIO,
            seed: DEFAULT_SEED,
            verbose: false,
            train_size,
            sample,
            ix,
        }
    }


    /// Set the ratio of training sample.
    /// Default value is `0.8`.
    #[inline]
    pub fn train_ratio(mut self, ratio: f64) -> Result<Self, SampleError> {
        if !(0f64 < ratio && ratio < 1f64) {
            return Err(SampleError::InvalidRatio(ratio));
        }
        let n_sample = self.sample.shape().0 as f64;
        self.train_size = (ratio * n_sample) as usize;
        self.ratio = ratio;
        Ok(self)
    }


    /// Set the seed of the randomness for shuffling.
    /// Default vaule is `1234.`
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, `HoldOut` prints the sizes of the split.
    /// Default vaule is `false.`
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Shuffle the sample before splitting.
    /// By default, `HoldOut` keeps the file order.
    #[inline]
    pub fn shuffle(mut self) -> Self {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.ix.shuffle(&mut rng);
        self
    }


    /// Returns the pair `(train, test)`.
    /// The test sample may be empty, the training sample may not.
    pub fn split(&self) -> Result<(Sample, Sample), SampleError> {
        let n_sample = self.ix.len();
        if self.train_size == 0 {
            return Err(SampleError::EmptyTrain {
                n_sample,
                ratio: self.ratio,
            });
        }
        let output = self.sample.split(&self.ix, self.train_size, n_sample);

        if self.verbose {
            println!(
                "{}    {}",
                format!("[TRAIN {:>WIDTH$}]", output.0.shape().0).bold().green(),
                format!("[TEST {:>WIDTH$}]", output.1.shape().0).bold().yellow(),
            );
        }

        Ok(output)
    }
}


/// Shuffle `sample` with `seed` and put the first
/// `floor(ratio * n)` rows into the training sample.
pub fn train_test_split(sample: &Sample, ratio: f64, seed: u64)
    -> Result<(Sample, Sample), SampleError>
{
    let split = HoldOut::new(sample)
        .train_ratio(ratio)?
        .seed(seed)
        .shuffle()
        .split()?;
    Ok(split)
}
