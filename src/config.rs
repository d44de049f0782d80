//! Run settings of the `minicart` driver.
use serde::{Serialize, Deserialize};

use crate::decision_tree::{DEFAULT_MAX_DEPTH, DEFAULT_MIN_SPLIT_SIZE};
use crate::research::{DEFAULT_TRAIN_RATIO, DEFAULT_SEED};

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;


/// Settings for one train/evaluate run.
/// Missing fields of a config file take the default values.
///
/// ```
/// use minicart::Config;
///
/// let config: Config = serde_json::from_str(r#"{ "max_depth": 4 }"#)?;
/// assert_eq!(config.max_depth, 4);
/// assert_eq!(config.train_ratio, 0.8);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Maximal depth of the tree.
    pub max_depth: isize,
    /// Nodes over fewer rows become leaves.
    pub min_split_size: usize,
    /// Ratio of rows used for training.
    pub train_ratio: f64,
    /// Seed of the train/test shuffle.
    pub seed: u64,
    /// Fix the class mapping to the three Iris classes.
    pub iris: bool,
    /// Whether the data file has a header row.
    pub has_header: bool,
}


impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            min_split_size: DEFAULT_MIN_SPLIT_SIZE,
            train_ratio: DEFAULT_TRAIN_RATIO,
            seed: DEFAULT_SEED,
            iris: false,
            has_header: false,
        }
    }
}


/// Values given on the command line.
/// Each one that is set replaces the value of a [`Config`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Overrides {
    /// Maximal depth of the tree.
    pub max_depth: Option<isize>,
    /// Nodes over fewer rows become leaves.
    pub min_split_size: Option<usize>,
    /// Ratio of rows used for training.
    pub train_ratio: Option<f64>,
    /// Seed of the train/test shuffle.
    pub seed: Option<u64>,
    /// Turns the Iris class mapping on; `false` keeps the config value.
    pub iris: bool,
    /// Turns the header row on; `false` keeps the config value.
    pub has_header: bool,
}


impl Config {
    /// Read a JSON config file.
    /// Malformed JSON and unknown fields give
    /// [`io::ErrorKind::InvalidData`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }


    /// Read `path` if given, and fall back to the defaults otherwise.
    pub fn load<P: AsRef<Path>>(path: Option<P>) -> io::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }


    /// Apply `overrides` on top of `self`.
    ///
    /// ```
    /// use minicart::{Config, config::Overrides};
    ///
    /// let overrides = Overrides { seed: Some(7), ..Overrides::default() };
    /// let config = Config::default().merge(&overrides);
    /// assert_eq!(config.seed, 7);
    /// assert_eq!(config.max_depth, 10);
    /// ```
    pub fn merge(mut self, overrides: &Overrides) -> Self {
        if let Some(depth) = overrides.max_depth {
            self.max_depth = depth;
        }
        if let Some(size) = overrides.min_split_size {
            self.min_split_size = size;
        }
        if let Some(ratio) = overrides.train_ratio {
            self.train_ratio = ratio;
        }
        if let Some(seed) = overrides.seed {
            self.seed = seed;
        }
        self.iris |= overrides.iris;
        self.has_header |= overrides.has_header;
        self
    }
}
