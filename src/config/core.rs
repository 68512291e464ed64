use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::parallel::ParallelConfig;

/// Root configuration structure, read from `.backup-seeds.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SeedsConfig {
    /// Parallel classification settings
    #[serde(default)]
    pub parallel: ParallelConfig,

    /// Where the signal and backup tables are written
    #[serde(default)]
    pub output: OutputConfig,

    /// Terminal report settings
    #[serde(default)]
    pub report: ReportConfig,
}

fn default_signal_file() -> String {
    "signal_seeds.csv".to_string()
}

fn default_backup_file() -> String {
    "backup_seeds.csv".to_string()
}

/// Output file configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Directory for both files (default: current directory)
    #[serde(default)]
    pub directory: Option<PathBuf>,

    #[serde(default = "default_signal_file")]
    pub signal_file: String,

    #[serde(default = "default_backup_file")]
    pub backup_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: None,
            signal_file: default_signal_file(),
            backup_file: default_backup_file(),
        }
    }
}

impl OutputConfig {
    fn resolve(&self, file: &str) -> PathBuf {
        match &self.directory {
            Some(dir) => dir.join(file),
            None => Path::new(file).to_path_buf(),
        }
    }

    pub fn signal_path(&self) -> PathBuf {
        self.resolve(&self.signal_file)
    }

    pub fn backup_path(&self) -> PathBuf {
        self.resolve(&self.backup_file)
    }
}

fn default_report_enabled() -> bool {
    true
}

/// Report configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportConfig {
    /// Print the backup seed table (default: true)
    #[serde(default = "default_report_enabled")]
    pub enabled: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            enabled: default_report_enabled(),
        }
    }
}
