/*
    Load Nextclade variant calls and join them with GISAID metadata
        + metadata: Accession ID -> Collection date, always tab separated
        + variant table: csv or tsv, Accession ID taken as is or pulled
          out of seqName ("...|EPI_ISL_<n>|...")
        + left join on Accession ID, rows without a collection date dropped
    Dates are compared as raw strings. Zero padded YYYY-MM-DD sorts
    correctly, anything else filters wrongly without raising.
*/

use std::collections::HashMap;
use std::path::Path;
use chrono::NaiveDate;
use log::{debug, info, warn};
use crate::{check_table, variant_table_delimiter, MutationError, TAB};
use super::mutation_list::{accession_from_seqname, extract_spike_aa, parse_list_field};

pub const ACCESSION_COLUMN: &str = "Accession ID";
pub const SEQNAME_COLUMN: &str = "seqName";
pub const DATE_COLUMN: &str = "Collection date";
pub const NUCLEOTIDE_COLUMN: &str = "substitutions";
pub const AMINO_ACID_COLUMN: &str = "aaSubstitutions";

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_iso_date(date: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date, ISO_DATE_FORMAT)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantRecord {
    pub accession: String,
    pub collection_date: String,
    pub substitutions: String,
    pub aa_substitutions: String,
}

impl VariantRecord {
    pub fn nucleotide_mutations(&self) -> Vec<String> {
        parse_list_field(&self.substitutions)
    }

    pub fn spike_mutations(&self) -> Vec<String> {
        extract_spike_aa(&self.aa_substitutions)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl DateRange {
    pub fn new(start: &str, end: &str) -> Self {
        if start > end {
            warn!("Start date {} sorts after end date {}, no record can match", start, end);
        }
        Self { start: start.to_string(), end: end.to_string() }
    }

    // inclusive on both ends, plain string comparison
    pub fn contains(&self, date: &str) -> bool {
        date >= self.start.as_str() && date <= self.end.as_str()
    }

    // "2021-01-01", "2021-03-31" -> "20210101_to_20210331"
    pub fn tag(&self) -> String {
        format!("{}_to_{}", self.start, self.end).replace('-', "")
    }
}

pub fn load_metadata(infile: &Path) -> Result<HashMap<String, String>, MutationError> {
    let mut table = check_table(infile, TAB, &[ACCESSION_COLUMN, DATE_COLUMN])?;
    let accession_idx = table.require_column(ACCESSION_COLUMN)?;
    let date_idx = table.require_column(DATE_COLUMN)?;
    let mut dates: HashMap<String, String> = HashMap::new();
    let mut duplicates = 0usize;
    while table.read_record()? {
        let accession = table.field(accession_idx);
        let date = table.field(date_idx);
        if accession.is_empty() || date.is_empty() {
            continue;
        }
        if dates.contains_key(accession) {
            duplicates += 1;
            continue;
        }
        dates.insert(accession.to_string(), date.to_string());
    }
    if duplicates > 0 {
        warn!("{} duplicate accessions in {:?}, keeping the first occurrence", duplicates, infile);
    }
    info!("Loaded collection dates for {} accessions", dates.len());
    Ok(dates)
}

// one record per variant row that found a collection date
pub fn load_variant_records(
    infile: &Path,
    metadata: &HashMap<String, String>,
) -> Result<Vec<VariantRecord>, MutationError> {
    let mut table = check_table(infile, variant_table_delimiter(infile), &[NUCLEOTIDE_COLUMN, AMINO_ACID_COLUMN])?;
    let accession_idx = table.column_index(ACCESSION_COLUMN);
    let seqname_idx = table.column_index(SEQNAME_COLUMN);
    if accession_idx.is_none() && seqname_idx.is_none() {
        return Err(MutationError::MissingAnyColumn {
            path: infile.to_path_buf(),
            columns: vec![ACCESSION_COLUMN.to_string(), SEQNAME_COLUMN.to_string()],
        });
    }
    if accession_idx.is_none() {
        info!("No '{}' column, deriving accessions from '{}'", ACCESSION_COLUMN, SEQNAME_COLUMN);
    }
    let nucleotide_idx = table.require_column(NUCLEOTIDE_COLUMN)?;
    let amino_acid_idx = table.require_column(AMINO_ACID_COLUMN)?;

    let mut records = Vec::new();
    let mut rows = 0usize;
    while table.read_record()? {
        rows += 1;
        let accession = match (accession_idx, seqname_idx) {
            (Some(idx), _) => table.field(idx),
            (None, Some(idx)) => accession_from_seqname(table.field(idx)).unwrap_or(""),
            (None, None) => "",
        };
        let date = if accession.is_empty() { None } else { metadata.get(accession) };
        match date {
            Some(date) => records.push(VariantRecord {
                accession: accession.to_string(),
                collection_date: date.clone(),
                substitutions: table.field(nucleotide_idx).to_string(),
                aa_substitutions: table.field(amino_acid_idx).to_string(),
            }),
            None => debug!("Row {} ('{}') has no collection date, dropped", rows, accession),
        }
    }
    info!("{} of {} variant rows joined with a collection date", records.len(), rows);
    Ok(records)
}

pub fn filter_by_date(records: Vec<VariantRecord>, range: &DateRange) -> Vec<VariantRecord> {
    records
        .into_iter()
        .filter(|record| {
            if parse_iso_date(&record.collection_date).is_err() {
                debug!("{} has non ISO collection date '{}'", record.accession, record.collection_date);
            }
            range.contains(&record.collection_date)
        })
        .collect()
}

pub fn load_samples_in_range(
    variant_file: &Path,
    metadata_file: &Path,
    range: &DateRange,
) -> Result<Vec<VariantRecord>, MutationError> {
    // validate both tables before reading either body
    check_table(metadata_file, TAB, &[ACCESSION_COLUMN, DATE_COLUMN])?;
    check_table(variant_file, variant_table_delimiter(variant_file), &[NUCLEOTIDE_COLUMN, AMINO_ACID_COLUMN])?;
    let metadata = load_metadata(metadata_file)?;
    let records = load_variant_records(variant_file, &metadata)?;
    Ok(filter_by_date(records, range))
}
