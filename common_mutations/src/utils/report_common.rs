/*
    Load, join and filter the genomes, then write one frequency table
    for nucleotide substitutions and one for spike amino-acid changes.
    Column checks on both inputs run before anything is written.
*/

use std::path::PathBuf;
use log::{info, warn};
use mutation_utils::MutationError;
use mutation_utils::lib_utils::frequency::common_mutations;
use mutation_utils::lib_utils::records::{load_samples_in_range, DateRange};
use super::get_args::Cli;

pub const NUCLEOTIDE_HEADER: &str = "Nucl_mut";
pub const SPIKE_HEADER: &str = "Spike_AA_mut";

pub fn output_files(range: &DateRange) -> (PathBuf, PathBuf) {
    let tag = range.tag();
    (
        PathBuf::from(format!("common_nucl_{}.csv", tag)),
        PathBuf::from(format!("common_spikeaa_{}.csv", tag)),
    )
}

pub fn report_common_mutations(cli: &Cli) -> Result<(), MutationError> {
    let range = DateRange::new(&cli.start, &cli.end);
    let records = load_samples_in_range(&cli.nextclade, &cli.meta, &range)?;
    println!("Records in range {} - {}: {}", cli.start, cli.end, records.len());
    if records.is_empty() {
        warn!("No qualifying samples between {} and {}", cli.start, cli.end);
    }

    info!("Counting mutations with threshold {}", cli.threshold);
    let nucleotide = common_mutations(records.iter().map(|r| r.nucleotide_mutations()), cli.threshold);
    let spike = common_mutations(records.iter().map(|r| r.spike_mutations()), cli.threshold);

    let (nucleotide_file, spike_file) = output_files(&range);
    nucleotide.write_csv(&nucleotide_file, NUCLEOTIDE_HEADER)?;
    spike.write_csv(&spike_file, SPIKE_HEADER)?;

    println!("Saved:");
    println!(" {} ({})", nucleotide_file.display(), nucleotide.len());
    println!(" {} ({})", spike_file.display(), spike.len());
    Ok(())
}
