/*
    Share of samples carrying each mutation
        n     = number of samples (empty lists included)
        count = samples containing the mutation at least once
        freq  = count / n, kept when freq >= threshold
    Output is ordered by descending freq, then ascending mutation.
*/

use std::collections::{HashMap, HashSet};
use std::path::Path;
use log::{debug, info, warn};
use serde::Serialize;
use crate::MutationError;
use super::struct_helper::BomWriter;

pub const DEFAULT_THRESHOLD: f64 = 0.6;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MutationFrequency {
    pub mutation: String,
    pub count: usize,
    pub freq: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable {
    pub sample_count: usize,
    pub entries: Vec<MutationFrequency>,
}

impl FrequencyTable {
    pub fn has_samples(&self) -> bool {
        self.sample_count > 0
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn write_csv(&self, outfile: &Path, mutation_header: &str) -> Result<(), MutationError> {
        info!("Output file: {:?}", outfile);
        let mut writer = BomWriter::create(outfile)?;
        writer.write_row([mutation_header, "count", "freq"])?;
        for entry in &self.entries {
            writer.serialize_row(entry)?;
        }
        writer.finish()
    }
}

pub fn common_mutations<I, S>(samples: I, threshold: f64) -> FrequencyTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<[String]>,
{
    let mut sample_count = 0usize;
    let mut counts: HashMap<String, usize> = HashMap::new();
    for sample in samples {
        sample_count += 1;
        // a mutation listed twice in one sample counts once
        let distinct: HashSet<&String> = sample.as_ref().iter().collect();
        for mutation in distinct {
            match counts.get_mut(mutation) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(mutation.clone(), 1);
                }
            }
        }
    }
    if sample_count == 0 {
        warn!("No qualifying samples, frequency table is empty");
        return FrequencyTable { sample_count, entries: Vec::new() };
    }
    debug!("{} distinct mutations across {} samples", counts.len(), sample_count);

    let mut entries: Vec<MutationFrequency> = counts
        .into_iter()
        .map(|(mutation, count)| MutationFrequency {
            mutation,
            count,
            freq: count as f64 / sample_count as f64,
        })
        .filter(|entry| entry.freq >= threshold)
        .collect();
    entries.sort_by(|a, b| b.freq.total_cmp(&a.freq).then_with(|| a.mutation.cmp(&b.mutation)));
    FrequencyTable { sample_count, entries }
}
