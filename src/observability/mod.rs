//! Observability infrastructure: logging, crash reports and run context.
//!
//! ## Usage
//!
//! ```ignore
//! use backup_seeds::observability::{init_tracing, install_panic_hook};
//!
//! fn main() {
//!     install_panic_hook();
//!     init_tracing(verbosity);
//!     // ... rest of application
//! }
//! ```

pub mod context;
pub mod panic_hook;

pub use context::{
    enter_context, get_current_context, get_progress, increment_processed, set_input_file,
    set_phase, set_progress, ClassificationPhase, ContextGuard, RunContext,
};
pub use panic_hook::install_panic_hook;

use tracing_subscriber::EnvFilter;

/// Default log level for a `-v` count; `RUST_LOG` takes precedence.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialise the global tracing subscriber, writing to stderr.
///
/// Calling it more than once is harmless; later calls are ignored.
pub fn init_tracing(verbosity: u8) {
    let default_level = level_for_verbosity(verbosity);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
