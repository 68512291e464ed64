use super::Table;
use crate::errors::{Error, Result};
use std::fs::File;
use std::path::Path;

/// Write the selected rows of `table` as comma-delimited text.
///
/// The first column is unnamed and holds each row's index in the input
/// table, followed by the input header and cells unchanged.
pub fn write_rows(path: &Path, table: &Table, rows: &[usize]) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| Error::file_system("Failed to create output file", path, e))?;
    let mut writer = csv::Writer::from_writer(file);

    writer.write_record(std::iter::once("").chain(table.headers.iter().map(String::as_str)))?;
    for &row in rows {
        let Some(cells) = table.rows.get(row) else {
            tracing::warn!(row, "Skipping row outside the table");
            continue;
        };
        let index = row.to_string();
        writer.write_record(
            std::iter::once(index.as_str()).chain(cells.iter().map(String::as_str)),
        )?;
    }
    writer.flush()?;

    tracing::info!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn menu() -> Table {
        Table::parse(indoc! {"
            Name;Prescale
            L1_SingleMu22;1
            L1_SingleMu22_er1p5;0
            L1_DoubleMu_15_7;1
        "})
        .unwrap()
    }

    #[test]
    fn test_write_selected_rows_with_index() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("signal_seeds.csv");

        write_rows(&path, &menu(), &[0, 2]).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            indoc! {"
                ,Name,Prescale
                0,L1_SingleMu22,1
                2,L1_DoubleMu_15_7,1
            "}
        );
    }

    #[test]
    fn test_write_no_rows_keeps_header() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("backup_seeds.csv");

        write_rows(&path, &menu(), &[]).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), ",Name,Prescale\n");
    }

    #[test]
    fn test_written_file_reads_back() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.csv");
        write_rows(&path, &menu(), &[1]).unwrap();

        let table = crate::table::read_table(&path).unwrap();
        assert_eq!(table.headers, vec!["", "Name", "Prescale"]);
        assert_eq!(table.rows, vec![vec!["1", "L1_SingleMu22_er1p5", "0"]]);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("out.csv");
        let err = write_rows(&path, &menu(), &[0]).unwrap_err();
        assert!(matches!(err, Error::FileSystem { .. }));
    }
}
