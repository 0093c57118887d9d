/*
    Shared helpers for the SARS-CoV-2 surveillance mutation scripts
        + open delimited tables and check the columns they must carry
        + join Nextclade calls with GISAID metadata, filter by collection date
        + split mutation list fields, keep spike (S:) amino-acid changes
        + count how many samples carry each mutation
        + partition two mutation lists into Only_A / Both / Only_B
        + classify point substitutions into the 12 directional RNA classes

    Every table is read whole into memory, processed in one pass and
    written back as a BOM-prefixed CSV.
*/

use std::path::Path;
use log::{debug, error, info};
pub mod lib_utils;
pub use lib_utils::error::MutationError;
use lib_utils::struct_helper::TableBufferHelper;

pub const TAB: u8 = b'\t';
pub const COMMA: u8 = b',';

// Nextclade exports either format, the extension decides
pub fn variant_table_delimiter(infile: &Path) -> u8 {
    let is_tsv = infile
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("tsv"))
        .unwrap_or(false);
    if is_tsv {
        TAB
    } else {
        COMMA
    }
}

pub fn check_table(infile: &Path, delimiter: u8, required: &[&str]) -> Result<TableBufferHelper, MutationError> {
    // open the table and read the header row
    // every required column must be present before any row is touched
    let table = match TableBufferHelper::new(infile, delimiter) {
        Ok(table) => {
            info!("Table opened successfully - {:?}", infile);
            table
        }
        Err(x) => {
            error!("Table {:?} could not be opened - {}", infile, x);
            return Err(x);
        }
    };
    for column in required {
        table.require_column(column)?;
        debug!("Found column '{}' in {:?}", column, infile);
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiter_follows_extension() {
        assert_eq!(variant_table_delimiter(Path::new("nextclade.tsv")), TAB);
        assert_eq!(variant_table_delimiter(Path::new("NEXTCLADE.TSV")), TAB);
        assert_eq!(variant_table_delimiter(Path::new("nextclade.csv")), COMMA);
        assert_eq!(variant_table_delimiter(Path::new("nextclade")), COMMA);
        assert_eq!(variant_table_delimiter(Path::new("nextclade.tsv.gz")), COMMA);
    }
}
