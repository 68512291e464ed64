use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::SeedsConfig;
use crate::errors::{Error, Result};

/// File name searched for in the working directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".backup-seeds.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<SeedsConfig, String> {
    let config = toml::from_str::<SeedsConfig>(contents)
        .map_err(|e| format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))?;

    let output = &config.output;
    if output.signal_file.trim().is_empty() || output.backup_file.trim().is_empty() {
        return Err("output file names must not be empty".to_string());
    }
    if output.signal_file == output.backup_file {
        return Err(format!(
            "signal and backup seeds would both be written to {}",
            output.signal_file
        ));
    }

    Ok(config)
}

/// Load an explicitly requested config file; failures are errors.
pub fn load_config_from(path: &Path) -> Result<SeedsConfig> {
    let contents = read_config_file(path).map_err(|e| Error::FileSystem {
        message: "Failed to read config file".to_string(),
        path: Some(path.to_path_buf()),
        source: Some(e),
    })?;
    let config = parse_and_validate_config(&contents).map_err(Error::Configuration)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Pure function to try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<SeedsConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            tracing::warn!("{} in {}. Using defaults.", e, config_path.display());
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        tracing::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Discover `.backup-seeds.toml` from the working directory upwards.
pub fn load_config() -> SeedsConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            tracing::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return SeedsConfig::default();
        }
    };

    discover_config(current)
}

pub(crate) fn discover_config(start: PathBuf) -> SeedsConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            tracing::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            SeedsConfig::default()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = parse_and_validate_config(indoc! {r#"
            [parallel]
            enabled = false
            max_concurrency = 2

            [output]
            directory = "results"
            signal_file = "signal.csv"
            backup_file = "backup.csv"

            [report]
            enabled = false
        "#})
        .unwrap();

        assert!(!config.parallel.enabled);
        assert_eq!(config.parallel.max_concurrency, Some(2));
        assert_eq!(config.output.signal_path(), PathBuf::from("results/signal.csv"));
        assert!(!config.report.enabled);
    }

    #[test]
    fn test_rejects_same_output_file() {
        let err = parse_and_validate_config(indoc! {r#"
            [output]
            signal_file = "seeds.csv"
            backup_file = "seeds.csv"
        "#})
        .unwrap_err();
        assert!(err.contains("seeds.csv"));
    }

    #[test]
    fn test_rejects_invalid_toml() {
        assert!(parse_and_validate_config("[parallel\nenabled = ").is_err());
    }

    #[test]
    fn test_directory_ancestors_respects_depth() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }

    #[test]
    fn test_discover_config_in_parent() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[parallel]\nenabled = false\n",
        )
        .unwrap();
        let nested = temp.path().join("tables");
        fs::create_dir(&nested).unwrap();

        let config = discover_config(nested);
        assert!(!config.parallel.enabled);
    }

    #[test]
    fn test_load_config_from_missing_file_is_error() {
        let temp = TempDir::new().unwrap();
        let result = load_config_from(&temp.path().join("missing.toml"));
        assert!(matches!(result, Err(Error::FileSystem { .. })));
    }

    #[test]
    fn test_load_config_from_invalid_file_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.toml");
        fs::write(&path, "[output]\nsignal_file = \"\"\n").unwrap();
        assert!(matches!(load_config_from(&path), Err(Error::Configuration(_))));
    }
}
