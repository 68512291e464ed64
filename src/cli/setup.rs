//! Translation of parsed arguments into runtime configuration.

use super::args::Cli;
use crate::commands::ClassifyConfig;
use crate::formatting::FormattingConfig;

/// `--plain` wins over the colour environment variables.
pub fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}

pub fn classify_config_from(cli: Cli) -> ClassifyConfig {
    ClassifyConfig {
        input: cli.file,
        config_file: cli.config,
        output_dir: cli.output_dir,
        jobs: cli.jobs,
        parallel: !cli.no_parallel,
        quiet: cli.quiet,
        formatting_config: create_formatting_config(cli.plain),
    }
}
