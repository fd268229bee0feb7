//! CSV catalog import
//!
//! Reads a delimiter-separated field catalog with a header row into
//! [`RawRow`] values. Short records are accepted; their missing trailing
//! cells simply become absent columns.

use std::path::Path;

use tracing::{debug, info};

use super::{ImportError, RawRow};

/// CSV importer for field catalogs
pub struct CsvImporter {
    /// Field delimiter
    pub delimiter: u8,
}

impl Default for CsvImporter {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvImporter {
    /// Create a new importer with the given field delimiter
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Parse catalog content into raw rows
    ///
    /// Blank lines are skipped. Unbalanced quoting and similar syntax
    /// problems are reported with the offending line.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pimcore_class_sdk::import::CsvImporter;
    ///
    /// let csv = "Screen ID,Bundle,Datatype,Name\nMedia,ca_attribute_caption,Text,Caption\n";
    /// let rows = CsvImporter::default().parse(csv).unwrap();
    /// assert_eq!(rows.len(), 1);
    /// assert_eq!(rows[0].get("Bundle"), Some("ca_attribute_caption"));
    /// ```
    pub fn parse(&self, content: &str) -> Result<Vec<RawRow>, ImportError> {
        let mut reader = ::csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| ImportError::ParseError(describe_csv_error(&e)))?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        if headers.iter().all(String::is_empty) {
            return Err(ImportError::ParseError(
                "Catalog has no header row".to_string(),
            ));
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| ImportError::ParseError(describe_csv_error(&e)))?;
            if record.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }

            let row: RawRow = headers
                .iter()
                .zip(record.iter())
                .filter(|(header, _)| !header.is_empty())
                .map(|(header, cell)| (header.as_str(), cell))
                .collect();
            rows.push(row);
        }

        debug!("Parsed {} catalog rows with {} columns", rows.len(), headers.len());
        Ok(rows)
    }

    /// Read and parse a catalog file
    pub fn parse_file(&self, path: &Path) -> Result<Vec<RawRow>, ImportError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ImportError::IoError(format!("{}: {}", path.display(), e)))?;
        info!("Reading file: {}", path.display());
        self.parse(&content)
    }
}

fn describe_csv_error(error: &::csv::Error) -> String {
    match error.position() {
        Some(position) => format!("line {}: {}", position.line(), error),
        None => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_importer_default() {
        let importer = CsvImporter::default();
        assert_eq!(importer.delimiter, b',');
    }

    #[test]
    fn test_parse_rows_by_header() {
        let csv = "\
Screen ID,Bundle,Datatype,Name,is container,is ripetibile,wysiwyg,List Values
IDENTIFICAZIONE,ca_attribute_dcType,Text,Tipo,FALSE,FALSE,FALSE,
MEDIA E COLLEGAMENTI,ca_attribute_lingua,List,Lingua,FALSE,FALSE,FALSE,\"it; en\"
";
        let rows = CsvImporter::default().parse(csv).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("Screen ID"), Some("IDENTIFICAZIONE"));
        assert_eq!(rows[1].get("List Values"), Some("it; en"));
        assert_eq!(rows[0].get("List Values"), Some(""));
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let csv = "Screen ID,Bundle\n\nMedia,ca_attribute_a\n,\n";
        let rows = CsvImporter::default().parse(csv).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_short_records_leave_columns_absent() {
        let csv = "Screen ID,Bundle,Datatype\nMedia,ca_attribute_a\n";
        let rows = CsvImporter::default().parse(csv).unwrap();
        assert_eq!(rows[0].get("Bundle"), Some("ca_attribute_a"));
        assert_eq!(rows[0].get("Datatype"), None);
    }

    #[test]
    fn test_custom_delimiter() {
        let csv = "Screen ID;Bundle\nMedia;ca_attribute_a\n";
        let rows = CsvImporter::new(b';').parse(csv).unwrap();
        assert_eq!(rows[0].get("Bundle"), Some("ca_attribute_a"));
    }

    #[test]
    fn test_headers_are_trimmed() {
        let csv = "Screen ID , Bundle\nMedia,ca_attribute_a\n";
        let rows = CsvImporter::default().parse(csv).unwrap();
        assert_eq!(rows[0].get("Screen ID"), Some("Media"));
        assert_eq!(rows[0].get("Bundle"), Some("ca_attribute_a"));
    }

    #[test]
    fn test_empty_content_is_an_error() {
        let result = CsvImporter::default().parse("");
        assert!(matches!(result, Err(ImportError::ParseError(_))));
    }

    #[test]
    fn test_parse_file_missing() {
        let result = CsvImporter::default().parse_file(Path::new("/nonexistent/catalog.csv"));
        assert!(matches!(result, Err(ImportError::IoError(_))));
    }
}
