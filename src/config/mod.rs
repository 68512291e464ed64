// Sub-modules
mod core;
mod loader;
mod parallel;

// Re-export core types
pub use self::core::{OutputConfig, ReportConfig, SeedsConfig};

pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
    CONFIG_FILE_NAME,
};

pub use parallel::ParallelConfig;
