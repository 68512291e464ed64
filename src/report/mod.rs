//! Terminal report of the identified backup seeds.

use crate::classify::{BackupSeed, Classification};
use crate::formatting::{OutputFormatter, Style};
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};

pub const REPORT_HEADERS: [&str; 3] = [
    "Identified backup seed",
    "Corresponding signal seeds",
    "Used criteria (in signal seed order)",
];

const LIST_SEPARATOR: &str = ", ";

/// Render the backup seed table followed by the summary line.
pub fn render_report(classification: &Classification, formatter: &dyn OutputFormatter) -> String {
    let mut out = String::new();
    if classification.backup.is_empty() {
        out.push_str(&formatter.paint("No backup seeds identified.", Style::Muted));
    } else {
        out.push_str(&backup_table(&classification.backup, formatter.is_colored()).to_string());
    }
    out.push('\n');
    out.push_str(&summary_line(classification, formatter));
    out
}

pub fn print_report(classification: &Classification, formatter: &dyn OutputFormatter) {
    println!("{}", render_report(classification, formatter));
}

fn backup_table(backup: &[BackupSeed], colored: bool) -> Table {
    let mut table = Table::new();
    if colored {
        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .enforce_styling();
    } else {
        table
            .load_preset(presets::ASCII_FULL)
            .set_content_arrangement(ContentArrangement::Disabled)
            .force_no_tty();
    }

    table.set_header(REPORT_HEADERS.iter().map(|h| Cell::new(h).fg(Color::Blue)));
    for seed in backup {
        table.add_row(vec![
            Cell::new(&seed.name).fg(Color::Yellow),
            Cell::new(signal_list(seed)).fg(Color::Green),
            Cell::new(criteria_list(seed)),
        ]);
    }
    table
}

/// Signal seeds a backup seed was matched against, in discovery order.
pub fn signal_list(seed: &BackupSeed) -> String {
    seed.evidence
        .iter()
        .map(|e| e.signal_seed.as_str())
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

/// Criterion labels aligned one-to-one with [`signal_list`].
pub fn criteria_list(seed: &BackupSeed) -> String {
    seed.evidence
        .iter()
        .map(|e| e.criterion.label())
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

pub fn summary_line(classification: &Classification, formatter: &dyn OutputFormatter) -> String {
    format!(
        "{} backup and {} signal seeds identified in {} rows",
        formatter.paint(&classification.backup.len().to_string(), Style::Backup),
        formatter.paint(&classification.signal.len().to_string(), Style::Signal),
        formatter.paint(&classification.total_rows().to_string(), Style::Emphasis),
    )
}
