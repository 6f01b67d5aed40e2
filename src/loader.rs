// Delimited-text dataset loading
use crate::error::DatasetError;
use crate::model::Record;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, info, warn};

pub const DEFAULT_SEPARATOR: u8 = b',';

pub trait DatasetLoader {
    fn load(&self, path: &Path) -> Result<Vec<Record>, DatasetError>;
}

/// Reads a header-driven delimited file into records.
///
/// Bytes are decoded as Latin-1, so no row is ever rejected for its encoding.
/// The last column of every row is an artifact of the export format and is dropped.
/// Rows whose field count differs from the header are skipped as a whole.
#[derive(Debug, Clone, Copy)]
pub struct CsvDatasetLoader {
    separator: u8,
}

impl CsvDatasetLoader {
    pub fn new(separator: u8) -> Self {
        Self { separator }
    }

    pub fn read<R: Read>(&self, input: R) -> Result<Vec<Record>, csv::Error> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.separator)
            .has_headers(true)
            .flexible(true)
            .from_reader(input);

        let headers: Vec<String> = reader.byte_headers()?.iter().map(decode_latin1).collect();
        debug!("Dataset header: {:?}", headers);
        let kept = headers.len().saturating_sub(1);

        let mut records = Vec::new();
        let mut row = csv::ByteRecord::new();
        while reader.read_byte_record(&mut row)? {
            if row.len() != headers.len() {
                let line = row.position().map(|p| p.line()).unwrap_or_default();
                warn!(
                    "Skipping row at line {}: expected {} fields, found {}",
                    line,
                    headers.len(),
                    row.len()
                );
                continue;
            }

            records.push(Record::from_pairs(
                headers[..kept]
                    .iter()
                    .cloned()
                    .zip(row.iter().take(kept).map(decode_latin1)),
            ));
        }

        Ok(records)
    }
}

impl Default for CsvDatasetLoader {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR)
    }
}

impl DatasetLoader for CsvDatasetLoader {
    fn load(&self, path: &Path) -> Result<Vec<Record>, DatasetError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => DatasetError::NotFound(path.to_path_buf()),
            _ => DatasetError::Load {
                path: path.to_path_buf(),
                source: e.into(),
            },
        })?;

        let records = self.read(file).map_err(|source| DatasetError::Load {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Loaded {} records from {}", records.len(), path.display());
        Ok(records)
    }
}

fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_trailing_column() {
        let input = "Name,Price,Extra\nPortal,9.99,x\n";
        let records = CsvDatasetLoader::default().read(input.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("Name"), Some("Portal"));
        assert_eq!(records[0].get("Price"), Some("9.99"));
        assert_eq!(records[0].get("Extra"), None);
        assert_eq!(records[0].len(), 2);
        assert!(!records[0].is_empty());
    }

    #[test]
    fn keeps_values_as_raw_text() {
        let input = "Price,Positive,_\n0.0,,\n";
        let records = CsvDatasetLoader::default().read(input.as_bytes()).unwrap();

        assert_eq!(records[0].get("Price"), Some("0.0"));
        assert_eq!(records[0].get("Positive"), Some(""));
    }

    #[test]
    fn skips_rows_with_wrong_field_count() {
        let input = "Name,Price,_\nA,1.0,\nB,2.0\nC,3.0,,extra\nD,0.0,\n";
        let records = CsvDatasetLoader::default().read(input.as_bytes()).unwrap();

        let names: Vec<_> = records.iter().filter_map(|r| r.get("Name")).collect();
        assert_eq!(names, vec!["A", "D"]);
    }

    #[test]
    fn decodes_latin1_bytes() {
        let mut input = b"Name,_\n".to_vec();
        input.extend_from_slice(b"Pok\xe9mon,\n");
        let records = CsvDatasetLoader::default().read(input.as_slice()).unwrap();

        assert_eq!(records[0].get("Name"), Some("Pokémon"));
    }

    #[test]
    fn honors_custom_separator() {
        let input = "Name;Price;_\nHades;24.99;\n";
        let records = CsvDatasetLoader::new(b';').read(input.as_bytes()).unwrap();

        assert_eq!(records[0].get("Price"), Some("24.99"));
    }

    #[test]
    fn empty_input_yields_no_records() {
        let records = CsvDatasetLoader::default().read("".as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn missing_file_is_not_found() {
        let result = CsvDatasetLoader::default().load(Path::new("nonexistent_catalog.csv"));
        assert!(matches!(result, Err(DatasetError::NotFound(_))));
    }
}
