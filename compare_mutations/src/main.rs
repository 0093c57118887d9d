/*
Compare two mutation lists, e.g. the common_nucl tables of two periods
    + A and B are the first column of each csv
    + report the mutations only in A, in both, and only in B
    + every column is ordered by mutation position

Arguments
    --A    csv of list A
    --B    csv of list B
    --out  output csv, default compare_A_B.csv
*/

mod utils;
use clap::Parser;
use log::{debug, error};
use utils::get_args::Cli;
use utils::report_compare::report_comparison;

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    debug!("Parsing commandline arguments");
    if let Err(x) = report_comparison(&cli) {
        error!("Comparison failed");
        eprintln!("Error: {}", x);
        std::process::exit(1);
    }
}
