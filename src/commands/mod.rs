pub mod plot;
pub mod scan;

use crate::gene::{GeneRecord, Sequence};
use crate::motif::Motif;
use crate::utils::Result;
use rayon::{prelude::*, ThreadPool, ThreadPoolBuilder};

/// Builds one record per sequence; ordinals follow input order regardless of thread count
pub fn annotate_genes(
    sequences: Vec<Sequence>,
    motifs: &[Motif],
    num_threads: usize,
) -> Result<Vec<GeneRecord>> {
    log::debug!(
        "Annotating {} sequences with {} threads",
        sequences.len(),
        num_threads
    );
    let pool = initialize_thread_pool(num_threads)?;
    pool.install(|| {
        sequences
            .into_par_iter()
            .enumerate()
            .map(|(index, sequence)| GeneRecord::build(sequence, index + 1, motifs))
            .collect::<Result<Vec<_>>>()
    })
}

fn initialize_thread_pool(num_threads: usize) -> Result<ThreadPool> {
    ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .map_err(|e| format!("Failed to initialize thread pool: {}", e))
}
