use std::env;

use hmm_count_core::io::LineSampleStream;
use hmm_count_core::{Counter, CounterConfig, State, StateSequence, SupervisedSample, count_parallel};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Hidden states and observations of the synthetic weather model.
const WEATHER: [&str; 2] = ["Sunny", "Rainy"];
const ACTIVITY: [&str; 3] = ["walk", "shop", "clean"];

/// Generates `count` samples from a small two-state weather HMM.
fn synthetic_corpus(count: usize, seed: u64) -> Vec<SupervisedSample> {
	// P(next | current) and P(activity | weather)
	let transition = [[0.7, 0.3], [0.4, 0.6]];
	let emission = [[0.6, 0.3, 0.1], [0.1, 0.4, 0.5]];

	let mut rng = StdRng::seed_from_u64(seed);
	let mut pick = |weights: &[f64]| -> usize {
		let mut r: f64 = rng.random();
		for (i, weight) in weights.iter().enumerate() {
			if r < *weight {
				return i;
			}
			r -= weight;
		}
		weights.len() - 1
	};

	(0..count)
		.map(|_| {
			let len = 3 + pick(&[0.25, 0.25, 0.25, 0.25]) * 2;
			let mut weather = pick(&[0.6, 0.4]);
			let mut pairs = Vec::with_capacity(len);
			for _ in 0..len {
				pairs.push((ACTIVITY[pick(&emission[weather])], WEATHER[weather]));
				weather = pick(&transition[weather]);
			}
			SupervisedSample::from_pairs(&pairs)
		})
		.collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::init();

	// Usage: hmm-count-exemple [corpus.txt] [config.json]
	let args: Vec<String> = env::args().skip(1).collect();
	let config = match args.get(1) {
		Some(path) => serde_json::from_str::<CounterConfig>(&std::fs::read_to_string(path)?)?,
		None => CounterConfig::new(2, 2)?,
	};
	info!("order = {}, cutoff = {}", config.order(), config.cutoff());

	// Train from a corpus file (one "observation/state" token per word),
	// or from generated samples counted on every CPU
	let counter = match args.first() {
		Some(path) => Counter::train(&mut LineSampleStream::open(path)?, config)?,
		None => count_parallel(&synthetic_corpus(2_000, 42), config)?,
	};

	println!(
		"{} samples, {} state sequences, {} emitting states",
		counter.samples_ingested(),
		counter.transitions().len(),
		counter.emissions().len()
	);

	// Most frequent histories of each length
	for len in 1..=counter.order() + 1 {
		let mut histories: Vec<(&StateSequence, u64)> = counter
			.transitions()
			.iter()
			.filter(|(sequence, _)| sequence.len() == len)
			.map(|(sequence, entry)| (sequence, entry.count()))
			.collect();
		histories.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.to_string().cmp(&b.0.to_string())));
		for (sequence, count) in histories.iter().take(3) {
			println!("history {}: {}", sequence, count);
		}
	}

	// Transitions and emissions of every known state
	let states: Vec<State> = counter.dictionary().states().to_vec();
	for state in &states {
		let context: StateSequence = vec![state.clone()].into();
		for target in &states {
			println!("transition {}->{}: {}", context, target, counter.transition_count(&context, target));
		}
		for observation in counter.dictionary().observations() {
			println!("emission {}->{}: {}", state, observation, counter.emission_count(state, observation));
		}
	}

	Ok(())
}
