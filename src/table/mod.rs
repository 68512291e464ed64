//! Prescale tables: loading, column detection and writing.
//!
//! A prescale table is a delimited text file with a header row. One column
//! holds seed names (`L1_...`), exactly one column is headed `prescale` or
//! `ps`; any other columns are carried through untouched to the output files.

mod columns;
mod writer;

pub use columns::{detect_columns, name_column, prescale_column, ColumnLayout};
pub use writer::write_rows;

use crate::errors::{Error, Result};
use crate::seed::Seed;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Delimiters recognised when sniffing the header line.
const CANDIDATE_DELIMITERS: [u8; 4] = [b',', b';', b'\t', b'|'];

/// A rectangular table of text cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Parse delimited text, sniffing the delimiter from the header line.
    pub fn parse(contents: &str) -> Result<Self> {
        let header_line = contents.lines().next().unwrap_or_default();
        Self::from_reader(contents.as_bytes(), sniff_delimiter(header_line))
    }

    pub fn from_reader<R: Read>(reader: R, delimiter: u8) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if headers.is_empty() {
            return Err(Error::EmptyTable);
        }

        let rows = reader
            .records()
            .map(|record| record.map(|r| r.iter().map(str::to_string).collect()))
            .collect::<std::result::Result<Vec<Vec<String>>, _>>()?;

        Ok(Self { headers, rows })
    }

    pub fn column(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .map(move |row| row.get(index).map(String::as_str).unwrap_or_default())
    }

    /// One seed per row, using the detected name and prescale columns.
    pub fn seeds(&self) -> Result<Vec<Seed>> {
        let layout = detect_columns(self)?;
        Ok(self.seeds_with(&layout))
    }

    /// Blank or non-numeric prescale cells are logged and kept as `None`.
    pub fn seeds_with(&self, layout: &ColumnLayout) -> Vec<Seed> {
        self.rows
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                let prescale_cell = cell(cells, layout.prescale);
                let prescale = parse_prescale(prescale_cell);
                if prescale.is_none() {
                    tracing::warn!(
                        row,
                        value = prescale_cell,
                        "Invalid prescale: row is compared by name only"
                    );
                }

                let name = cell(cells, layout.name);
                if name.is_empty() {
                    tracing::warn!(row, "Invalid seed name: empty cell, row is not compared");
                    return Seed::unnamed(row, prescale);
                }
                Seed {
                    row,
                    name: Some(name.to_string()),
                    prescale,
                }
            })
            .collect()
    }
}

fn cell(cells: &[String], index: usize) -> &str {
    cells.get(index).map(String::as_str).unwrap_or_default()
}

/// Pick the candidate delimiter occurring most often in the header line.
pub fn sniff_delimiter(header_line: &str) -> u8 {
    CANDIDATE_DELIMITERS
        .iter()
        .map(|d| (*d, header_line.bytes().filter(|b| b == d).count()))
        .filter(|(_, count)| *count > 0)
        .fold(None, |best: Option<(u8, usize)>, candidate| match best {
            Some((_, best_count)) if best_count >= candidate.1 => best,
            _ => Some(candidate),
        })
        .map_or(b',', |(delimiter, _)| delimiter)
}

/// Prescales are non-negative integers; `5.0` is accepted as 5.
pub fn parse_prescale(cell: &str) -> Option<u64> {
    let cell = cell.trim();
    if let Ok(value) = cell.parse::<u64>() {
        return Some(value);
    }
    let value: f64 = cell.parse().ok()?;
    (value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64)
        .then_some(value as u64)
}

/// Load a prescale table from disk. Only `.csv` files are supported.
pub fn read_table(path: &Path) -> Result<Table> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !is_csv {
        return Err(Error::UnsupportedFormat(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)
        .map_err(|e| Error::file_system("Error opening the file", path, e))?;
    let table = Table::parse(&contents)?;
    tracing::info!(
        "Loaded {} rows and {} columns from {}",
        table.rows.len(),
        table.headers.len(),
        path.display()
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_sniff_delimiter() {
        assert_eq!(sniff_delimiter("Index,Name,Prescale"), b',');
        assert_eq!(sniff_delimiter("Index;Name;Prescale"), b';');
        assert_eq!(sniff_delimiter("Index\tName\tPrescale"), b'\t');
        assert_eq!(sniff_delimiter("Name|PS"), b'|');
        assert_eq!(sniff_delimiter("Name"), b',');
    }

    #[test]
    fn test_sniff_prefers_most_frequent() {
        assert_eq!(sniff_delimiter("a;b;c,d"), b';');
    }

    #[test]
    fn test_parse_semicolon_table() {
        let table = Table::parse(indoc! {"
            Index; Name; Prescale
            0; L1_SingleMu22; 1
            1; L1_SingleMu25; 0
        "})
        .unwrap();

        assert_eq!(table.headers, vec!["Index", "Name", "Prescale"]);
        assert_eq!(table.rows[1], vec!["1", "L1_SingleMu25", "0"]);
        assert_eq!(table.column(1).collect::<Vec<_>>(), vec!["L1_SingleMu22", "L1_SingleMu25"]);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let result = Table::parse("Name,PS\nL1_SingleMu22,1,extra\n");
        assert!(matches!(result, Err(Error::Csv(_))));
    }

    #[test]
    fn test_seeds_from_table() {
        let table = Table::parse(indoc! {"
            Name,PS
            L1_SingleMu22,1
            ,3
            L1_SingleMu25,2.0
        "})
        .unwrap();

        let seeds = table.seeds().unwrap();
        assert_eq!(
            seeds,
            vec![
                Seed::new(0, "L1_SingleMu22", 1),
                Seed::unnamed(1, Some(3)),
                Seed::new(2, "L1_SingleMu25", 2),
            ]
        );
    }

    #[test]
    fn test_invalid_prescale_keeps_row() {
        let table = Table::parse(indoc! {"
            Name,PS
            L1_SingleMu22,1
            L1_SingleMu25,
            L1_SingleMu7,high
        "})
        .unwrap();

        let seeds = table.seeds().unwrap();
        assert_eq!(seeds.len(), 3);
        assert_eq!(seeds[0].prescale, Some(1));
        assert_eq!(seeds[1].name(), Some("L1_SingleMu25"));
        assert_eq!(seeds[1].prescale, None);
        assert_eq!(seeds[2].prescale, None);
    }

    #[test]
    fn test_parse_prescale() {
        assert_eq!(parse_prescale("12"), Some(12));
        assert_eq!(parse_prescale(" 0 "), Some(0));
        assert_eq!(parse_prescale("5.0"), Some(5));
        assert_eq!(parse_prescale("5.5"), None);
        assert_eq!(parse_prescale("-1"), None);
        assert_eq!(parse_prescale(""), None);
        assert_eq!(parse_prescale("NaN"), None);
    }

    #[test]
    fn test_read_table_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = read_table(&temp.path().join("menu.csv"));
        assert!(matches!(result, Err(Error::FileNotFound(_))));
    }

    #[test]
    fn test_read_table_unsupported_format() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("menu.xlsx");
        fs::write(&path, "Name,PS\n").unwrap();
        assert!(matches!(read_table(&path), Err(Error::UnsupportedFormat(_))));
    }

    #[test]
    fn test_read_table_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("menu.CSV");
        fs::write(&path, "Name,PS\nL1_SingleMu22,1\n").unwrap();
        let table = read_table(&path).unwrap();
        assert_eq!(table.rows.len(), 1);
    }
}
