//! Command implementations for backup-seeds.
//!
//! - **classify**: load a prescale table, split it into signal and backup
//!   seeds, report the backup seeds and write both tables.

pub mod classify;

pub use classify::{handle_classify, resolve_settings, ClassifyConfig};
