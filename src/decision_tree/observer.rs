//! Extension points called while a tree grows.
use colored::Colorize;

use crate::Label;
use super::split::Split;
use super::dtree::DecisionTree;


const WIDTH: usize = 6;


/// Receives progress events from [`TreeBuilder`](crate::TreeBuilder).
///
/// The growing algorithm never prints anything;
/// implement this trait to log or to collect statistics.
/// Every method does nothing by default.
pub trait TreeObserver {
    /// Called once before growing, after the input has been validated.
    fn on_fit_start(&mut self, _n_sample: usize, _n_feature: usize) {}

    /// Called when a node over `n_sample` rows is visited.
    fn on_node(&mut self, _depth: usize, _n_sample: usize) {}

    /// Called when a branch node is created with the split `split`.
    fn on_split(&mut self, _depth: usize, _split: &Split) {}

    /// Called when a leaf node predicting `label` is created.
    fn on_leaf(&mut self, _depth: usize, _n_sample: usize, _label: Label) {}

    /// Called once after `tree` has been trained.
    fn on_fit_end(&mut self, _tree: &DecisionTree) {}
}


/// An observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl TreeObserver for Silent {}


/// An observer that prints every event to the terminal,
/// indented by the node depth.
#[derive(Debug, Clone, Copy, Default)]
pub struct Verbose;


impl Verbose {
    #[inline(always)]
    fn pad(depth: usize) -> String {
        "  ".repeat(depth)
    }
}


impl TreeObserver for Verbose {
    fn on_fit_start(&mut self, n_sample: usize, n_feature: usize) {
        println!(
            "{} [SAMPLES {:>WIDTH$}] [FEATURES {:>WIDTH$}]",
            "Growing a decision tree".bold(),
            n_sample.to_string().green(),
            n_feature.to_string().yellow(),
        );
    }


    fn on_node(&mut self, depth: usize, n_sample: usize) {
        println!(
            "{}{} [SAMPLES {:>WIDTH$}]",
            Self::pad(depth),
            format!("[DEPTH {depth:>3}]").bold().red(),
            n_sample,
        );
    }


    fn on_split(&mut self, depth: usize, split: &Split) {
        println!(
            "{}  {} feature[{}] <= {} (impurity {:.5})",
            Self::pad(depth),
            "split".bold().blue(),
            split.feature,
            split.threshold,
            split.impurity,
        );
    }


    fn on_leaf(&mut self, depth: usize, n_sample: usize, label: Label) {
        println!(
            "{}  {} class {} [SAMPLES {}]",
            Self::pad(depth),
            "leaf ".bold().green(),
            label.to_string().bold(),
            n_sample,
        );
    }


    fn on_fit_end(&mut self, tree: &DecisionTree) {
        println!(
            "{} [DEPTH {:>WIDTH$}] [LEAVES {:>WIDTH$}]",
            "Decision tree built".bold(),
            tree.depth().to_string().cyan(),
            tree.n_leaves().to_string().cyan(),
        );
    }
}

