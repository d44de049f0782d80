//! `minicart`: train a decision tree on a CSV file and report
//! its accuracy on a held-out test set.
use clap::Parser;
use colored::Colorize;
use serde::Serialize;

use minicart::prelude::*;
use minicart::Config;
use minicart::config::Overrides;

use std::error::Error;
use std::path::PathBuf;


const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;


#[derive(Parser)]
#[command(name = "minicart")]
#[command(about = "Train and evaluate a CART decision tree classifier")]
#[command(version)]
struct Cli {
    /// Data file: feature columns followed by a class name per row
    file: PathBuf,

    /// JSON config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximal depth of the tree
    #[arg(short = 'd', long)]
    max_depth: Option<isize>,

    /// Nodes over fewer rows become leaves
    #[arg(short, long)]
    min_split_size: Option<usize>,

    /// Ratio of rows used for training
    #[arg(short = 'r', long)]
    train_ratio: Option<f64>,

    /// Seed of the train/test shuffle
    #[arg(short, long)]
    seed: Option<u64>,

    /// Fix the class mapping to the three Iris classes
    #[arg(long)]
    iris: bool,

    /// The data file has a header row
    #[arg(long)]
    has_header: bool,

    /// Print every node while growing the tree
    #[arg(short, long)]
    verbose: bool,

    /// Print the trained tree
    #[arg(long)]
    show_tree: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}


impl Cli {
    fn config(&self) -> Result<Config, Box<dyn Error>> {
        let overrides = Overrides {
            max_depth: self.max_depth,
            min_split_size: self.min_split_size,
            train_ratio: self.train_ratio,
            seed: self.seed,
            iris: self.iris,
            has_header: self.has_header,
        };
        let config = Config::load(self.config.as_ref())?
            .merge(&overrides);
        Ok(config)
    }
}


#[derive(Serialize)]
struct Report<'a> {
    file: String,
    config: &'a Config,
    skipped_rows: usize,
    train_size: usize,
    test_size: usize,
    depth: usize,
    leaves: usize,
    train_accuracy: f64,
    test_accuracy: Option<f64>,
}


fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let config = cli.config()?;
    let chatty = !cli.json;

    let mut reader = SampleReader::new()
        .file(&cli.file)
        .has_header(config.has_header);
    if config.iris {
        reader = reader.classes(IRIS_CLASSES);
    }
    let sample = reader.read()?;

    if chatty {
        let (n_sample, n_feature) = sample.shape();
        println!(
            "{} {n_sample} samples with {n_feature} features ({} skipped)",
            "Loaded".bold().green(),
            sample.skipped(),
        );
    }

    let (train, test) = HoldOut::new(&sample)
        .train_ratio(config.train_ratio)?
        .seed(config.seed)
        .verbose(chatty)
        .shuffle()
        .split()?;

    let mut tree = DecisionTree::new()
        .min_split_size(config.min_split_size);
    if cli.verbose && chatty {
        tree.fit_with(train.data(), train.labels(), config.max_depth, &mut Verbose)?;
    } else {
        tree.fit(train.data(), train.labels(), config.max_depth)?;
    }

    let train_pred = tree.predict_all(train.data())?;
    let train_accuracy = accuracy(train.labels(), &train_pred)?;

    let test_accuracy = if test.shape().0 == 0 {
        None
    } else {
        let test_pred = tree.predict_all(test.data())?;
        Some(accuracy(test.labels(), &test_pred)?)
    };

    if cli.show_tree && chatty {
        print!("{tree}");
    }

    let report = Report {
        file: cli.file.display().to_string(),
        config: &config,
        skipped_rows: sample.skipped(),
        train_size: train.shape().0,
        test_size: test.shape().0,
        depth: tree.depth(),
        leaves: tree.n_leaves(),
        train_accuracy,
        test_accuracy,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}


fn print_report(report: &Report<'_>) {
    let percent = |acc: f64| format!("{:.2}%", acc * 100f64);
    let test = report.test_accuracy
        .map_or_else(|| "-".to_string(), percent);

    println!(
        "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
        "", "RESULT".bold(), "",
    );
    let rows = [
        ("Max depth", report.config.max_depth.to_string()),
        ("Tree depth", report.depth.to_string()),
        ("Leaves", report.leaves.to_string()),
        ("Train accuracy", percent(report.train_accuracy)),
        ("Test accuracy", test),
    ];
    for (key, val) in rows {
        println!(
            "+ {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            key.bold(),
            val.bold().green(),
        );
    }
    println!("{:=>FULL_WIDTH$}", "");
}
