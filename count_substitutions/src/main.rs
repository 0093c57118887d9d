/*
Substitution spectrum from A to B, read from a compare_mutations table
    + Only_B (derived) mutations count forward, ref>alt
    + Only_A (ancestral) mutations count reversed, alt>ref
    + Both is ignored
    + 12 RNA substitution classes, everything else under OTHER/Non-simple

Arguments
    --compare  compare_A_B.csv (Only_A, Both, Only_B)
    --out      output csv, default mutation_spectrum_A_to_B.csv
    --derived  which list is the derived population, A or B (default B)
*/

mod utils;
use clap::Parser;
use log::{debug, error};
use utils::get_args::Cli;
use utils::report_spectrum::report_spectrum;

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    debug!("Parsing commandline arguments");
    if let Err(x) = report_spectrum(&cli) {
        error!("Spectrum counting failed");
        eprintln!("Error: {}", x);
        std::process::exit(1);
    }
}
