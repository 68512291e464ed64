//! Custom panic hook for structured crash reports.
//!
//! A crash report says which phase was running, which table was loaded and
//! how many rows had been classified, followed by the panic message and its
//! location.

use super::context::{get_current_context, get_progress, RunContext};
use std::panic::PanicHookInfo;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const RULE: &str = "════════════════════════════════════════════════════════════════════════════════";

/// Install the custom panic hook.
///
/// Call this early in `main()`, before any table is loaded.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        print_crash_report(info);
    }));
}

fn print_crash_report(info: &PanicHookInfo<'_>) {
    let context = get_current_context();
    let (processed, total) = get_progress();

    eprintln!();
    eprintln!("{RULE}");
    eprintln!("BACKUP-SEEDS CRASH REPORT");
    eprintln!("  Version: {VERSION}");
    eprintln!("  Platform: {}", std::env::consts::OS);
    eprintln!("  Time: {}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
    eprintln!("{RULE}");
    eprintln!("  PANIC: {}", extract_panic_message(info));
    if let Some(location) = info.location() {
        eprintln!(
            "  Location: {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        );
    }
    for line in context_lines(&context, processed, total) {
        eprintln!("{line}");
    }
    eprintln!("{RULE}");
    if std::env::var("RUST_BACKTRACE").is_ok() {
        eprintln!("{}", std::backtrace::Backtrace::capture());
    } else {
        eprintln!("Run with RUST_BACKTRACE=1 for stack trace");
    }
}

fn context_lines(context: &RunContext, processed: usize, total: usize) -> Vec<String> {
    let mut lines = vec!["  OPERATION CONTEXT:".to_string()];

    match &context.phase {
        Some(phase) => lines.push(format!("    Phase: {phase}")),
        None => lines.push("    Phase: (not set - crash occurred before loading)".to_string()),
    }

    if let Some(file) = &context.input_file {
        lines.push(format!("    Table: {}", file.display()));
    }

    if total > 0 {
        let pct = (processed as f64 / total as f64 * 100.0) as usize;
        lines.push(format!("    Progress: {processed} / {total} rows ({pct}%)"));
    }

    lines
}

fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
