// Export modules for library usage
pub mod classify;
pub mod cli;
pub mod commands;
pub mod config;
pub mod criteria;
pub mod errors;
pub mod formatting;
pub mod observability;
pub mod report;
pub mod seed;
pub mod table;

// Re-export commonly used types
pub use crate::classify::{
    classify_pair, classify_table, classify_table_with, BackupSeed, Classification, Evidence,
    PairVerdict,
};

pub use crate::criteria::{Criterion, CriterionResult, ALL_CRITERIA};

pub use crate::errors::{Error, Result};

pub use crate::seed::{basename, Seed, SEED_PREFIX};

pub use crate::table::{read_table, write_rows, Table};
