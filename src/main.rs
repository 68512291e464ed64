use anyhow::Result;
use backup_seeds::cli;
use backup_seeds::commands::handle_classify;
use backup_seeds::observability::{init_tracing, install_panic_hook};

fn main() -> Result<()> {
    install_panic_hook();

    let args = cli::parse_args();
    init_tracing(args.verbosity);

    handle_classify(cli::classify_config_from(args))?;
    Ok(())
}
