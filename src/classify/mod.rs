//! Pairwise and table-wide backup-seed classification.
//!
//! Every seed is compared against every row of the table (itself included)
//! under every criterion. A seed with at least one positive result is a
//! backup seed; everything else is a signal seed. Relations are not chained:
//! a seed is only reported against the seeds a criterion matched directly.

mod parallel;

pub use parallel::classify_table_with;

use crate::criteria::{Criterion, ALL_CRITERIA};
use crate::seed::Seed;

/// One reason a seed was classified as backup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evidence {
    pub signal_seed: String,
    pub criterion: Criterion,
}

/// Outcome of comparing one seed against all candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairVerdict {
    pub evidence: Vec<Evidence>,
}

impl PairVerdict {
    pub fn is_backup(&self) -> bool {
        !self.evidence.is_empty()
    }

    /// Signal seeds in discovery order, aligned with [`Self::criteria`].
    pub fn signal_seeds(&self) -> impl Iterator<Item = &str> {
        self.evidence.iter().map(|e| e.signal_seed.as_str())
    }

    pub fn criteria(&self) -> impl Iterator<Item = Criterion> + '_ {
        self.evidence.iter().map(|e| e.criterion)
    }
}

/// A seed identified as backup, with everything that made it one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupSeed {
    pub row: usize,
    pub name: String,
    pub evidence: Vec<Evidence>,
}

/// Partition of a table into signal and backup rows, both in row order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub signal: Vec<usize>,
    pub backup: Vec<BackupSeed>,
}

impl Classification {
    pub fn backup_rows(&self) -> Vec<usize> {
        self.backup.iter().map(|b| b.row).collect()
    }

    pub fn total_rows(&self) -> usize {
        self.signal.len() + self.backup.len()
    }

    pub(crate) fn from_verdicts(seeds: &[Seed], verdicts: Vec<PairVerdict>) -> Self {
        let mut classification = Self {
            signal: Vec::with_capacity(seeds.len()),
            backup: Vec::new(),
        };

        for (seed, verdict) in seeds.iter().zip(verdicts) {
            match seed.name() {
                Some(name) if verdict.is_backup() => classification.backup.push(BackupSeed {
                    row: seed.row,
                    name: name.to_string(),
                    evidence: verdict.evidence,
                }),
                _ => classification.signal.push(seed.row),
            }
        }

        classification
    }
}

/// Compare `seed` against every candidate under every criterion.
pub fn classify_pair(seed: &Seed, candidates: &[Seed]) -> PairVerdict {
    let mut verdict = PairVerdict::default();
    let Some(name) = seed.name() else {
        return verdict;
    };

    for candidate in candidates {
        let Some(other) = candidate.name() else {
            continue;
        };
        for criterion in ALL_CRITERIA {
            let result = criterion.evaluate(name, seed.prescale, other, candidate.prescale);
            if let (true, Some(signal_seed)) = (result.is_backup, result.signal_seed) {
                verdict.evidence.push(Evidence {
                    signal_seed,
                    criterion,
                });
            }
        }
    }

    verdict
}

/// Classify every row of the table sequentially.
pub fn classify_table(seeds: &[Seed]) -> Classification {
    let verdicts = seeds
        .iter()
        .map(|seed| classify_pair(seed, seeds))
        .collect();
    Classification::from_verdicts(seeds, verdicts)
}
