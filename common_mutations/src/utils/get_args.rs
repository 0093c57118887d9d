use clap::Parser;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use mutation_utils::lib_utils::frequency::DEFAULT_THRESHOLD;
use mutation_utils::lib_utils::records::parse_iso_date;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Nextclade output (tsv or csv) with seqName or Accession ID, substitutions and aaSubstitutions
    #[arg(long = "nextclade", required = true, value_parser = validate_path)]
    pub nextclade: PathBuf,
    /// GISAID metadata.tsv with Accession ID and Collection date
    #[arg(long = "meta", required = true, value_parser = validate_path)]
    pub meta: PathBuf,
    /// First collection date to include, YYYY-MM-DD
    #[arg(long = "start", required = true, value_parser = validate_date)]
    pub start: String,
    /// Last collection date to include, YYYY-MM-DD
    #[arg(long = "end", required = true, value_parser = validate_date)]
    pub end: String,
    /// Minimum fraction of genomes carrying a mutation. Default: 0.6
    #[arg(short = 't', long = "threshold", value_parser = validate_percent, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,
}

const PERCENTAGE: RangeInclusive<f64> = 0f64..=1f64;

fn validate_percent(input_str: &str) -> Result<f64, String> {
    let percent: f64 = input_str
        .parse()
        .map_err(|_| format!("Threshold '{}' is not a number", input_str))?;
    if PERCENTAGE.contains(&percent) {
        Ok(percent)
    } else {
        Err(
            format!("Threshold not in the range {} - {}", PERCENTAGE.start(), PERCENTAGE.end())
        )
    }
}

// dates are filtered as plain strings, so only zero padded ISO dates are accepted
fn validate_date(input_str: &str) -> Result<String, String> {
    match parse_iso_date(input_str) {
        Ok(_) => Ok(input_str.to_string()),
        Err(x) => Err(format!("'{}' is not a YYYY-MM-DD date: {}", input_str, x)),
    }
}

fn validate_path(input_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(input_str);
    if path.is_file() {
        Ok(path)
    } else {
        Err(format!("{} file doesn't exist or there is no permission to read it", input_str))
    }
}
