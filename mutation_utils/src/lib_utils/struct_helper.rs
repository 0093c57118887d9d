// structs to handle table buffers

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use log::debug;
use super::error::MutationError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub struct TableBufferHelper {
    pub path: PathBuf,
    pub headers: Vec<String>,
    pub buffer_reader: csv::Reader<File>,
    pub record: StringRecord,
}

impl TableBufferHelper {
    pub fn new(file: &Path, delimiter: u8) -> Result<TableBufferHelper, MutationError> {
        // every cell stays a string, ragged rows are padded on access
        debug!("TableHelper created for: {:?}", file);
        let file_open = File::open(file).map_err(|e| MutationError::io(file, e))?;
        let mut buffer_reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(file_open);
        let headers: Vec<String> = buffer_reader
            .headers()
            .map_err(|e| MutationError::csv(file, e))?
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                if idx == 0 {
                    name.trim_start_matches('\u{feff}').to_string()
                } else {
                    name.to_string()
                }
            })
            .collect();
        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            return Err(MutationError::EmptyTable { path: file.to_path_buf() });
        }
        Ok(Self {
            path: file.to_path_buf(),
            headers,
            buffer_reader,
            record: StringRecord::new(),
        })
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == column)
    }

    pub fn require_column(&self, column: &str) -> Result<usize, MutationError> {
        self.column_index(column).ok_or_else(|| MutationError::MissingColumn {
            path: self.path.clone(),
            column: column.to_string(),
        })
    }

    // read the next row into self.record, false once the table is exhausted
    pub fn read_record(&mut self) -> Result<bool, MutationError> {
        self.buffer_reader
            .read_record(&mut self.record)
            .map_err(|e| MutationError::csv(&self.path, e))
    }

    // cell of the current row, cells past the end of a short row are empty
    pub fn field(&self, idx: usize) -> &str {
        self.record.get(idx).unwrap_or("")
    }
}

// csv writer that leads with a UTF-8 BOM so spreadsheet tools detect the encoding
pub struct BomWriter {
    pub path: PathBuf,
    pub writer: csv::Writer<File>,
}

impl BomWriter {
    pub fn create(file: &Path) -> Result<BomWriter, MutationError> {
        debug!("Creating output table {:?}", file);
        let mut file_open = File::create(file).map_err(|e| MutationError::io(file, e))?;
        file_open.write_all(UTF8_BOM).map_err(|e| MutationError::io(file, e))?;
        let writer = WriterBuilder::new().has_headers(false).from_writer(file_open);
        Ok(Self { path: file.to_path_buf(), writer })
    }

    pub fn write_row<I, T>(&mut self, row: I) -> Result<(), MutationError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        self.writer
            .write_record(row)
            .map_err(|e| MutationError::csv(&self.path, e))
    }

    pub fn serialize_row<S: serde::Serialize>(&mut self, row: S) -> Result<(), MutationError> {
        self.writer
            .serialize(row)
            .map_err(|e| MutationError::csv(&self.path, e))
    }

    pub fn finish(mut self) -> Result<(), MutationError> {
        self.writer.flush().map_err(|e| MutationError::io(&self.path, e))
    }
}
