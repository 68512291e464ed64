use super::Table;
use crate::errors::{Error, Result};
use crate::seed::SEED_PREFIX;

/// Header names accepted for the prescale column.
const PRESCALE_HEADERS: [&str; 2] = ["prescale", "ps"];

/// Positions of the columns the classifier reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub name: usize,
    pub prescale: usize,
}

pub fn detect_columns(table: &Table) -> Result<ColumnLayout> {
    let prescale = prescale_column(&table.headers)?;
    let name = name_column(table)?;
    tracing::debug!(name, prescale, "Detected seed name and prescale columns");
    Ok(ColumnLayout { name, prescale })
}

/// The single column headed `prescale` or `ps`, ignoring case.
pub fn prescale_column(headers: &[String]) -> Result<usize> {
    let matches: Vec<usize> = headers
        .iter()
        .enumerate()
        .filter(|(_, header)| {
            let header = header.trim();
            PRESCALE_HEADERS
                .iter()
                .any(|candidate| header.eq_ignore_ascii_case(candidate))
        })
        .map(|(index, _)| index)
        .collect();

    match matches.as_slice() {
        [index] => Ok(*index),
        _ => Err(Error::PrescaleColumn {
            found: matches.len(),
        }),
    }
}

/// The column holding the most `L1_` cells; the leftmost one wins ties.
pub fn name_column(table: &Table) -> Result<usize> {
    (0..table.headers.len())
        .map(|index| {
            let count = table
                .column(index)
                .filter(|cell| cell.starts_with(SEED_PREFIX))
                .count();
            (index, count)
        })
        .filter(|(_, count)| *count > 0)
        .fold(None, |best: Option<(usize, usize)>, candidate| match best {
            Some((_, best_count)) if best_count >= candidate.1 => best,
            _ => Some(candidate),
        })
        .map(|(index, _)| index)
        .ok_or(Error::NameColumn {
            prefix: SEED_PREFIX,
        })
}
