//! Thread-local context tracking for crash reports.
//!
//! Records which phase of a run is active and which table is being
//! processed. Uses thread-local storage for the context and atomic counters
//! for the number of classified rows, which rayon workers update.
//!
//! ## Thread Safety
//!
//! - Thread-local context: Each thread has its own context (via `thread_local!`);
//!   rayon workers receive a copy through [`enter_context`]
//! - Global progress: Atomic counters for rows classified/total
//! - Context guards use RAII for automatic cleanup on drop

use std::cell::RefCell;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static ROWS_PROCESSED: AtomicUsize = AtomicUsize::new(0);
static ROWS_TOTAL: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    static CURRENT_CONTEXT: RefCell<RunContext> = const { RefCell::new(RunContext::new()) };
}

/// Context snapshot for the current run.
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    /// Current phase
    pub phase: Option<ClassificationPhase>,
    /// Prescale table being processed
    pub input_file: Option<PathBuf>,
}

impl RunContext {
    /// Create a new empty context.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: None,
            input_file: None,
        }
    }
}

/// Stages of a run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationPhase {
    /// Reading the prescale table
    TableLoading,
    /// Locating the name and prescale columns
    ColumnDetection,
    /// Comparing every seed against every other seed
    Classification,
    /// Printing the backup seed report
    Reporting,
    /// Writing the signal and backup tables
    Writing,
}

impl std::fmt::Display for ClassificationPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TableLoading => write!(f, "table_loading"),
            Self::ColumnDetection => write!(f, "column_detection"),
            Self::Classification => write!(f, "classification"),
            Self::Reporting => write!(f, "reporting"),
            Self::Writing => write!(f, "writing"),
        }
    }
}

/// RAII guard restoring the previous context on drop.
pub struct ContextGuard {
    previous: RunContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous.clone();
        });
    }
}

/// Set the current phase.
///
/// Returns a guard that restores the previous phase on drop.
#[must_use]
pub fn set_phase(phase: ClassificationPhase) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        ctx.borrow_mut().phase = Some(phase);
        ContextGuard { previous }
    })
}

/// Set the table being processed.
#[must_use]
pub fn set_input_file(path: impl Into<PathBuf>) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        ctx.borrow_mut().input_file = Some(path.into());
        ContextGuard { previous }
    })
}

/// Install a captured context on the current thread, typically a rayon worker.
#[must_use]
pub fn enter_context(context: RunContext) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.replace(context);
        ContextGuard { previous }
    })
}

/// Set the progress counters (rows classified and total rows).
pub fn set_progress(processed: usize, total: usize) {
    ROWS_PROCESSED.store(processed, Ordering::Relaxed);
    ROWS_TOTAL.store(total, Ordering::Relaxed);
}

/// Increment the classified row count; safe to call from rayon workers.
pub fn increment_processed() {
    ROWS_PROCESSED.fetch_add(1, Ordering::Relaxed);
}

/// Get the current context snapshot.
#[must_use]
pub fn get_current_context() -> RunContext {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}

/// Get the current progress (processed, total).
#[must_use]
pub fn get_progress() -> (usize, usize) {
    (
        ROWS_PROCESSED.load(Ordering::Relaxed),
        ROWS_TOTAL.load(Ordering::Relaxed),
    )
}

/// Reset the current thread's context to empty.
pub fn reset_context() {
    CURRENT_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = RunContext::new();
    });
}
