use std::sync::mpsc;
use std::thread;

use log::debug;

use crate::error::{CountError, Result};

use super::config::CounterConfig;
use super::counter::Counter;
use super::sample::SupervisedSample;

/// Number of chunks per CPU.
const CHUNK_FACTOR: usize = 8;

/// Counts `samples` on every CPU and returns the merged, pruned counter.
///
/// # Behavior
/// - Splits the samples into chunks (based on CPU cores * factor).
/// - Spawns one thread per chunk, each counting into its own `Counter`.
/// - Merges the partial counters in chunk order, then applies the
///   configured cutoff once.
///
/// The tables are identical to sequential training on the same samples,
/// and so are dictionary indices, since chunks are merged in input order.
///
/// # Errors
/// - Returns the first ingestion error of any chunk.
/// - Returns `CountError::Worker` if a thread died without reporting.
pub fn count_parallel(samples: &[SupervisedSample], config: CounterConfig) -> Result<Counter> {
	let mut final_counter = Counter::new(config);
	if samples.is_empty() {
		return Ok(final_counter);
	}

	let chunks = num_cpus::get() * CHUNK_FACTOR;
	let chunk_size = samples.len().div_ceil(chunks);

	let (tx, rx) = mpsc::channel();
	let mut spawned = 0;
	for (index, chunk) in samples.chunks(chunk_size).enumerate() {
		let tx = tx.clone();
		let chunk: Vec<SupervisedSample> = chunk.to_vec();

		thread::spawn(move || {
			let mut partial = Counter::new(config);
			let result = chunk.iter().try_for_each(|sample| partial.ingest(sample)).map(|_| partial);
			// The receiver outlives every worker
			let _ = tx.send((index, result));
		});
		spawned += 1;
	}
	drop(tx);

	let mut partials: Vec<(usize, Result<Counter>)> = rx.iter().collect();
	if partials.len() != spawned {
		return Err(CountError::Worker(format!(
			"{} of {} chunks reported",
			partials.len(),
			spawned
		)));
	}
	partials.sort_by_key(|(index, _)| *index);

	for (_, partial) in partials {
		final_counter.merge(&partial?)?;
	}
	debug!("counted {} samples in {} chunks", samples.len(), spawned);

	final_counter.prune();
	Ok(final_counter)
}
