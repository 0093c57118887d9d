/*
Report mutations shared by most SARS-CoV-2 genomes collected in a date range
    + join Nextclade calls with GISAID metadata on Accession ID
    + keep genomes whose collection date falls within [start, end]
    + list nucleotide substitutions and spike (S:) amino-acid substitutions
    + report mutations present in at least `threshold` of the genomes

Arguments
    --nextclade  nextclade.tsv / nextclade.csv
    --meta       GISAID metadata.tsv
    --start      first collection date, YYYY-MM-DD
    --end        last collection date, YYYY-MM-DD
    --threshold  minimum fraction of genomes, default 0.6

Output (current directory)
    common_nucl_<start>_to_<end>.csv
    common_spikeaa_<start>_to_<end>.csv
*/

mod utils;
use clap::Parser;
use log::{debug, error};
use utils::get_args::Cli;
use utils::report_common::report_common_mutations;

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    debug!("Parsing commandline arguments");
    if let Err(x) = report_common_mutations(&cli) {
        error!("Frequency extraction failed");
        eprintln!("Error: {}", x);
        std::process::exit(1);
    }
}
