use log::{debug, info, trace};

use crate::error::{CountError, Result};

use super::config::CounterConfig;
use super::dictionary::{Dictionary, SymbolDictionary};
use super::ngram::windows;
use super::pruner::{self, PruneReport};
use super::sample::{SampleStream, SupervisedSample, check_aligned};
use super::symbol::{Emission, Observation, ObservationSequence, State, StateSequence, Transition};
use super::table::{EmissionTable, TransitionTable};

/// Transition and emission frequency counter for an order-K HMM.
///
/// The `Counter` ingests labeled samples one at a time and accumulates:
/// - history counts of every state n-gram of length 1..=K+1
/// - transition counts from every context of length 1..=K to the next state
/// - emission counts of every state to the observation at the same position
///
/// # Responsibilities
/// - Intern samples through its `Dictionary`
/// - Drive window generation and update both tables
/// - Prune rare entries once ingestion is over
/// - Answer count queries, with 0 for anything unknown
///
/// # Notes
/// - Sequences of the top length K+1 get a history count but never a
///   target. They are kept until the first cutoff pass with a threshold
///   above 0, which drops every entry without targets.
///
/// # Invariants
/// - `config.order() >= 1`
/// - For every sequence, history count >= sum of its transition counts
/// - For every state, emission count == sum of its observation counts
#[derive(Debug)]
pub struct Counter<D: Dictionary = SymbolDictionary> {
	config: CounterConfig,
	dictionary: D,
	transitions: TransitionTable,
	emissions: EmissionTable,
	samples: u64,
}

impl Counter<SymbolDictionary> {
	/// Creates an empty counter with a fresh `SymbolDictionary`.
	pub fn new(config: CounterConfig) -> Self {
		Self::with_dictionary(config, SymbolDictionary::new())
	}

	/// Counts every sample of `stream`, then applies the configured cutoff.
	///
	/// # Errors
	/// Returns the first error raised by the stream or by ingestion.
	pub fn train<S: SampleStream>(stream: &mut S, config: CounterConfig) -> Result<Self> {
		let mut counter = Self::new(config);
		counter.ingest_stream(stream)?;
		counter.prune();
		Ok(counter)
	}

	/// Counts every sample of `samples`, then applies the configured cutoff.
	pub fn train_samples<'a, I>(samples: I, config: CounterConfig) -> Result<Self>
	where
		I: IntoIterator<Item = &'a SupervisedSample>,
	{
		let mut counter = Self::new(config);
		for sample in samples {
			counter.ingest(sample)?;
		}
		counter.prune();
		Ok(counter)
	}
}

impl<D: Dictionary> Counter<D> {
	/// Creates an empty counter interning through `dictionary`.
	pub fn with_dictionary(config: CounterConfig, dictionary: D) -> Self {
		Self {
			config,
			dictionary,
			transitions: TransitionTable::new(),
			emissions: EmissionTable::new(),
			samples: 0,
		}
	}

	/// Adds one sample to the tables.
	///
	/// # Errors
	/// Returns `CountError::MisalignedSample` if interning changed the
	/// length of either sequence. Nothing is counted in that case.
	pub fn ingest(&mut self, sample: &SupervisedSample) -> Result<()> {
		self.ingest_sequences(sample.state_sequence(), sample.observation_sequence())
	}

	/// Adds one pair of aligned sequences to the tables.
	///
	/// # Errors
	/// Returns `CountError::MisalignedSample` if the lengths differ.
	/// Nothing is counted in that case.
	pub fn ingest_sequences(&mut self, states: &StateSequence, observations: &ObservationSequence) -> Result<()> {
		check_aligned(states, observations)?;
		let states = self.dictionary.intern_states(states);
		let observations = self.dictionary.intern_observations(observations);
		check_aligned(&states, &observations)?;

		trace!("ingest {} states: {}", states.len(), states);

		// No window is longer than the sample
		let longest = self.config.order().saturating_add(1).min(states.len());
		for len in 1..=longest {
			for (start, window) in windows(&states, len) {
				self.transitions.record_history(window);

				if len > 1 {
					// The context is the window one shorter at the same start,
					// recorded during the previous pass
					let (context, target) = window.split_at(len - 1);
					self.transitions.record_transition(context, &target[0]);
				} else {
					// Aligned by absolute position
					self.emissions.record_emission(&window[0], &observations.as_slice()[start]);
				}
			}
		}

		self.samples += 1;
		Ok(())
	}

	/// Reads and ingests every sample of `stream` until end of input.
	///
	/// Returns the number of samples ingested by this call.
	pub fn ingest_stream<S: SampleStream>(&mut self, stream: &mut S) -> Result<u64> {
		let mut ingested = 0;
		while let Some(sample) = stream.read()? {
			self.ingest(&sample)?;
			ingested += 1;
		}
		info!(
			"ingested {} samples: {} sequences, {} emitting states",
			ingested,
			self.transitions.len(),
			self.emissions.len()
		);
		Ok(ingested)
	}

	/// Prunes both tables with an explicit `threshold`.
	///
	/// See [`pruner::apply_cutoff`].
	pub fn apply_cutoff(&mut self, threshold: u64) -> PruneReport {
		pruner::apply_cutoff(&mut self.transitions, &mut self.emissions, threshold)
	}

	/// Prunes both tables with the configured cutoff.
	pub fn prune(&mut self) -> PruneReport {
		self.apply_cutoff(self.config.cutoff())
	}

	/// Sums the counts of `other` into this counter.
	///
	/// Both counters must have been built with the same order, and neither
	/// should have been pruned yet.
	///
	/// # Errors
	/// Returns `CountError::OrderMismatch` if the orders differ.
	pub fn merge(&mut self, other: &Self) -> Result<()> {
		if self.config.order() != other.config.order() {
			return Err(CountError::OrderMismatch {
				expected: self.config.order(),
				got: other.config.order(),
			});
		}

		self.dictionary.merge(&other.dictionary);
		self.transitions.merge(&other.transitions, &mut self.dictionary);
		self.emissions.merge(&other.emissions, &mut self.dictionary);
		self.samples += other.samples;

		debug!("merged {} samples, {} total", other.samples, self.samples);
		Ok(())
	}

	/// History count of `sequence`, or 0.
	pub fn history_count(&self, sequence: &StateSequence) -> u64 {
		self.transitions.history_count(sequence.as_slice())
	}

	/// Number of times `target` followed `context`, or 0.
	pub fn transition_count(&self, context: &StateSequence, target: &State) -> u64 {
		self.transitions.transition_count(context.as_slice(), target)
	}

	pub fn count_transition(&self, transition: &Transition) -> u64 {
		self.transition_count(transition.context(), transition.target())
	}

	/// Number of times `state` emitted `observation`, or 0.
	pub fn emission_count(&self, state: &State, observation: &Observation) -> u64 {
		self.emissions.emission_count(state, observation)
	}

	pub fn count_emission(&self, emission: &Emission) -> u64 {
		self.emission_count(emission.state(), emission.observation())
	}

	/// Returns `true` if `target` was recorded after `context`.
	pub fn contains_transition_to(&self, context: &StateSequence, target: &State) -> bool {
		self.transitions.contains_transition(context.as_slice(), target)
	}

	/// Returns `true` if `state` was recorded emitting `observation`.
	pub fn contains_emission_of(&self, state: &State, observation: &Observation) -> bool {
		self.emissions.contains_emission(state, observation)
	}

	/// Returns `true` if `sequence` has an entry in the transition table.
	pub fn contains_sequence(&self, sequence: &StateSequence) -> bool {
		self.transitions.contains(sequence.as_slice())
	}

	/// Returns `true` if `state` has an entry in the emission table.
	pub fn contains_state(&self, state: &State) -> bool {
		self.emissions.contains(state)
	}

	pub fn contains_emission(&self, emission: &Emission) -> bool {
		self.contains_emission_of(emission.state(), emission.observation())
	}

	pub fn contains_transition(&self, transition: &Transition) -> bool {
		self.contains_transition_to(transition.context(), transition.target())
	}

	pub fn transitions(&self) -> &TransitionTable {
		&self.transitions
	}

	pub fn emissions(&self) -> &EmissionTable {
		&self.emissions
	}

	pub fn dictionary(&self) -> &D {
		&self.dictionary
	}

	pub fn config(&self) -> &CounterConfig {
		&self.config
	}

	pub fn order(&self) -> usize {
		self.config.order()
	}

	/// Number of samples ingested so far, merged counters included.
	pub fn samples_ingested(&self) -> u64 {
		self.samples
	}
}
