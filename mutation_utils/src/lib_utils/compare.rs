/*
    Partition two mutation lists
        + A and B are the first column of each table, empty cells dropped
        + Only_A = A - B, Both = A & B, Only_B = B - A
        + each partition is ordered by the first run of digits in the token
          (the genomic or residue position), tokens without digits last,
          ties broken by the token itself
    The three columns are written side by side, shorter ones padded
    with empty cells.
*/

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::path::Path;
use log::{debug, info};
use crate::{check_table, MutationError, COMMA};
use super::struct_helper::BomWriter;

pub const ONLY_A_COLUMN: &str = "Only_A";
pub const BOTH_COLUMN: &str = "Both";
pub const ONLY_B_COLUMN: &str = "Only_B";

// position digits are kept as text without leading zeros so that any
// length of digit run orders like the integer it spells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionKey<'a> {
    position: Option<&'a str>,
    token: &'a str,
}

impl<'a> PositionKey<'a> {
    pub fn new(token: &'a str) -> Self {
        let position = token.find(|c: char| c.is_ascii_digit()).map(|start| {
            let run = &token[start..];
            let end = run.find(|c: char| !c.is_ascii_digit()).unwrap_or(run.len());
            run[..end].trim_start_matches('0')
        });
        Self { position, token }
    }
}

impl Ord for PositionKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        let by_position = match (self.position, other.position) {
            (Some(a), Some(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_position.then_with(|| self.token.cmp(other.token))
    }
}

impl PartialOrd for PositionKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub fn sort_by_position(tokens: &mut [String]) {
    tokens.sort_by(|a, b| PositionKey::new(a).cmp(&PositionKey::new(b)));
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub only_a: Vec<String>,
    pub both: Vec<String>,
    pub only_b: Vec<String>,
}

impl Partition {
    pub fn new(set_a: &BTreeSet<String>, set_b: &BTreeSet<String>) -> Self {
        let mut only_a: Vec<String> = set_a.difference(set_b).cloned().collect();
        let mut both: Vec<String> = set_a.intersection(set_b).cloned().collect();
        let mut only_b: Vec<String> = set_b.difference(set_a).cloned().collect();
        sort_by_position(&mut only_a);
        sort_by_position(&mut both);
        sort_by_position(&mut only_b);
        debug!("Partitioned {} + {} tokens", set_a.len(), set_b.len());
        Self { only_a, both, only_b }
    }

    pub fn rows(&self) -> usize {
        self.only_a.len().max(self.both.len()).max(self.only_b.len())
    }

    pub fn write_csv(&self, outfile: &Path) -> Result<(), MutationError> {
        info!("Output file: {:?}", outfile);
        let mut writer = BomWriter::create(outfile)?;
        writer.write_row([ONLY_A_COLUMN, BOTH_COLUMN, ONLY_B_COLUMN])?;
        for idx in 0..self.rows() {
            writer.write_row([cell(&self.only_a, idx), cell(&self.both, idx), cell(&self.only_b, idx)])?;
        }
        writer.finish()
    }
}

fn cell(column: &[String], idx: usize) -> &str {
    column.get(idx).map(String::as_str).unwrap_or("")
}

// non-empty cells of one column, in file order
fn read_column_cells(infile: &Path, pick: impl Fn(&[String]) -> Option<usize>) -> Result<Vec<String>, MutationError> {
    let mut table = check_table(infile, COMMA, &[])?;
    let idx = match pick(table.headers.as_slice()) {
        Some(idx) => idx,
        None => return Err(MutationError::EmptyTable { path: infile.to_path_buf() }),
    };
    let mut cells = Vec::new();
    while table.read_record()? {
        let cell = table.field(idx);
        if !cell.is_empty() {
            cells.push(cell.to_string());
        }
    }
    Ok(cells)
}

pub fn read_first_column(infile: &Path) -> Result<BTreeSet<String>, MutationError> {
    let cells = read_column_cells(infile, |_| Some(0))?;
    info!("Read {} tokens from the first column of {:?}", cells.len(), infile);
    Ok(cells.into_iter().collect())
}

// Only_A / Only_B columns of a comparison table, falling back to the
// first and last column when the headers were renamed
pub struct ComparisonColumns {
    pub only_a: Vec<String>,
    pub only_b: Vec<String>,
}

impl ComparisonColumns {
    pub fn read(infile: &Path) -> Result<Self, MutationError> {
        let only_a = read_column_cells(infile, |headers| {
            headers.iter().position(|h| h == ONLY_A_COLUMN).or(Some(0))
        })?;
        let only_b = read_column_cells(infile, |headers| {
            headers
                .iter()
                .position(|h| h == ONLY_B_COLUMN)
                .or_else(|| headers.len().checked_sub(1))
        })?;
        info!("Read {} Only_A and {} Only_B tokens from {:?}", only_a.len(), only_b.len(), infile);
        Ok(Self { only_a, only_b })
    }
}
