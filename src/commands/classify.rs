use crate::classify::{classify_table_with, Classification};
use crate::config::{load_config, load_config_from, OutputConfig, SeedsConfig};
use crate::formatting::FormattingConfig;
use crate::observability::{set_input_file, set_phase, ClassificationPhase};
use crate::report::print_report;
use crate::table::{self, Table};
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Everything the classify command needs from the command line.
#[derive(Debug, Clone)]
pub struct ClassifyConfig {
    pub input: PathBuf,
    pub config_file: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub jobs: Option<usize>,
    pub parallel: bool,
    pub quiet: bool,
    pub formatting_config: FormattingConfig,
}

pub fn handle_classify(config: ClassifyConfig) -> Result<Classification> {
    let settings = resolve_settings(load_settings(&config)?, &config);
    let _file = set_input_file(&config.input);

    let table = {
        let _phase = set_phase(ClassificationPhase::TableLoading);
        table::read_table(&config.input)
            .with_context(|| format!("Failed to load {}", config.input.display()))?
    };

    let seeds = {
        let _phase = set_phase(ClassificationPhase::ColumnDetection);
        table.seeds()?
    };

    let classification = classify_table_with(&seeds, &settings.parallel)?;
    tracing::info!(
        "Identified {} backup seeds among {} rows",
        classification.backup.len(),
        classification.total_rows()
    );

    if settings.report.enabled {
        let _phase = set_phase(ClassificationPhase::Reporting);
        let formatter = config.formatting_config.formatter();
        print_report(&classification, formatter.as_ref());
    }

    write_results(&table, &classification, &settings.output)?;
    Ok(classification)
}

/// An explicit `--config` must load; a discovered one falls back to defaults.
fn load_settings(config: &ClassifyConfig) -> Result<SeedsConfig> {
    match &config.config_file {
        Some(path) => load_config_from(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(load_config()),
    }
}

/// Apply command-line overrides on top of the file configuration.
pub fn resolve_settings(mut settings: SeedsConfig, config: &ClassifyConfig) -> SeedsConfig {
    if let Some(dir) = &config.output_dir {
        settings.output.directory = Some(dir.clone());
    }
    if let Some(jobs) = config.jobs {
        settings.parallel.max_concurrency = Some(jobs);
    }
    if !config.parallel {
        settings.parallel.enabled = false;
    }
    if config.quiet {
        settings.report.enabled = false;
    }
    settings
}

fn write_results(
    table: &Table,
    classification: &Classification,
    output: &OutputConfig,
) -> Result<()> {
    let _phase = set_phase(ClassificationPhase::Writing);

    if let Some(dir) = &output.directory {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    }

    let signal_path = output.signal_path();
    table::write_rows(&signal_path, table, &classification.signal)
        .with_context(|| format!("Failed to write {}", signal_path.display()))?;

    let backup_path = output.backup_path();
    table::write_rows(&backup_path, table, &classification.backup_rows())
        .with_context(|| format!("Failed to write {}", backup_path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn command_config(input: PathBuf, output_dir: PathBuf) -> ClassifyConfig {
        ClassifyConfig {
            input,
            config_file: None,
            output_dir: Some(output_dir),
            jobs: Some(2),
            parallel: true,
            quiet: true,
            formatting_config: FormattingConfig::plain(),
        }
    }

    #[test]
    fn test_resolve_settings_overrides() {
        let temp = TempDir::new().unwrap();
        let mut config = command_config(temp.path().join("menu.csv"), temp.path().join("out"));
        config.parallel = false;

        let settings = resolve_settings(SeedsConfig::default(), &config);

        assert_eq!(settings.output.directory, Some(temp.path().join("out")));
        assert_eq!(settings.parallel.max_concurrency, Some(2));
        assert!(!settings.parallel.enabled);
        assert!(!settings.report.enabled);
    }

    #[test]
    fn test_resolve_settings_keeps_file_values() {
        let temp = TempDir::new().unwrap();
        let config = ClassifyConfig {
            output_dir: None,
            jobs: None,
            quiet: false,
            ..command_config(temp.path().join("menu.csv"), temp.path().to_path_buf())
        };
        let mut file = SeedsConfig::default();
        file.output.directory = Some(PathBuf::from("results"));

        let settings = resolve_settings(file, &config);

        assert_eq!(settings.output.directory, Some(PathBuf::from("results")));
        assert!(settings.parallel.enabled);
        assert!(settings.report.enabled);
    }

    #[test]
    fn test_handle_classify_writes_both_tables() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("menu.csv");
        fs::write(
            &input,
            indoc! {"
                Index;Name;Prescale
                0;L1_SingleMu22;1
                1;L1_SingleMu25;1
                2;L1_ZeroBias;1
            "},
        )
        .unwrap();
        let out = temp.path().join("out");

        let classification = handle_classify(command_config(input, out.clone())).unwrap();
        assert_eq!(classification.signal, vec![0, 2]);
        assert_eq!(classification.backup_rows(), vec![1]);

        let signal = fs::read_to_string(out.join("signal_seeds.csv")).unwrap();
        assert_eq!(
            signal,
            ",Index,Name,Prescale\n0,0,L1_SingleMu22,1\n2,2,L1_ZeroBias,1\n"
        );
        let backup = fs::read_to_string(out.join("backup_seeds.csv")).unwrap();
        assert_eq!(backup, ",Index,Name,Prescale\n1,1,L1_SingleMu25,1\n");
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let temp = TempDir::new().unwrap();
        let config = ClassifyConfig {
            config_file: Some(temp.path().join("missing.toml")),
            ..command_config(temp.path().join("menu.csv"), temp.path().to_path_buf())
        };
        assert!(handle_classify(config).is_err());
    }

    #[test]
    fn test_schema_error_is_reported() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("menu.csv");
        fs::write(&input, "Name,Count\nL1_SingleMu22,1\n").unwrap();

        let err = handle_classify(command_config(input, temp.path().join("out"))).unwrap_err();
        assert!(err.to_string().contains("prescale columns"));
    }
}
