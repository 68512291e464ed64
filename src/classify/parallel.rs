use rayon::prelude::*;

use super::{classify_pair, Classification, PairVerdict};
use crate::config::ParallelConfig;
use crate::errors::{Error, Result};
use crate::observability::{
    enter_context, get_current_context, increment_processed, set_phase, set_progress,
    ClassificationPhase,
};
use crate::seed::Seed;

/// Classify every row, sharding rows across a rayon pool when enabled.
///
/// Each row only reads the shared seed slice, and the indexed collect keeps
/// verdicts in row order, so the result equals [`super::classify_table`].
/// Both paths count classified rows for crash reports, and workers run with
/// the caller's phase and input file.
pub fn classify_table_with(seeds: &[Seed], config: &ParallelConfig) -> Result<Classification> {
    let _phase = set_phase(ClassificationPhase::Classification);
    set_progress(0, seeds.len());

    if !config.enabled || seeds.len() < 2 {
        tracing::debug!("Classifying {} rows sequentially", seeds.len());
        let verdicts = seeds.iter().map(|seed| classify_row(seed, seeds)).collect();
        return Ok(Classification::from_verdicts(seeds, verdicts));
    }

    let workers = config.effective_concurrency();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|e| Error::ThreadPool(e.to_string()))?;
    tracing::debug!("Classifying {} rows on {} threads", seeds.len(), workers);

    let context = get_current_context();
    let verdicts: Vec<PairVerdict> = pool.install(|| {
        seeds
            .par_iter()
            .map_init(
                || enter_context(context.clone()),
                |_context, seed| classify_row(seed, seeds),
            )
            .collect()
    });

    Ok(Classification::from_verdicts(seeds, verdicts))
}

fn classify_row(seed: &Seed, seeds: &[Seed]) -> PairVerdict {
    let verdict = classify_pair(seed, seeds);
    increment_processed();
    verdict
}
