//! Command line interface:
//! train a decision tree on one dataset, score it on another,
//! and print the number of correct predictions.
use clap::Parser;
use colored::Colorize;

use minitree::{read_dataset, Dataset, DecisionTreeBuilder};

use std::path::{Path, PathBuf};
use std::process::ExitCode;


#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of the binary training dataset
    training: PathBuf,

    /// Path of the binary testing dataset
    testing: PathBuf,
}


fn load(path: &Path) -> Option<Dataset> {
    match read_dataset(path) {
        Ok(data) => Some(data),
        Err(e) => {
            eprintln!(
                "{} failed to read {}: {e}",
                "[ERR]".bold().bright_red(),
                path.display(),
            );
            None
        },
    }
}


fn main() -> ExitCode {
    let args = Args::parse();

    let Some(train) = load(&args.training) else {
        return ExitCode::FAILURE;
    };
    let Some(test) = load(&args.testing) else {
        return ExitCode::FAILURE;
    };

    eprintln!(
        "{} growing a tree over {} training examples",
        "[LOG]".bold().magenta(),
        train.len(),
    );
    let tree = DecisionTreeBuilder::new().build(&train);
    eprintln!(
        "{} grew {} nodes, depth {}",
        "[LOG]".bold().magenta(),
        tree.node_count(),
        tree.depth(),
    );

    let n_correct = tree.correct_count(&test);
    eprintln!(
        "{} classified {} testing examples",
        "[FIN]".bold().bright_green(),
        test.len(),
    );

    // The answer: the only line this program writes to stdout.
    println!("{n_correct}");

    ExitCode::SUCCESS
}
