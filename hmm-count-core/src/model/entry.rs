use std::collections::HashMap;

use super::dictionary::Dictionary;
use super::symbol::{Observation, State};

/// Counts attached to one state sequence of the transition table.
///
/// The entry plays two roles at once:
/// - `count` is the history count of the sequence, i.e. how many times it
///   occurred as a contiguous n-gram anywhere in the training data.
/// - `targets` is the breakdown of what followed the sequence when it was
///   used as a transition context.
///
/// Every transition occurrence of a context is also a history occurrence
/// of that context, but a history occurrence at the end of a sample (or
/// at the top window length) has no target.
///
/// ## Invariants
/// - `count` >= sum of the target counts
/// - Each target count is strictly positive
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct TransitionEntry {
	/// History count of the owning sequence.
	count: u64,
	/// Next-state counts, indexed by target.
	/// Example: { B => 42, C => 3 }
	targets: HashMap<State, u64>,
}

impl TransitionEntry {
	pub fn new() -> Self {
		Self::default()
	}

	/// History count of the owning sequence.
	pub fn count(&self) -> u64 {
		self.count
	}

	/// Records one standalone occurrence of the owning sequence.
	pub(crate) fn add_occurrence(&mut self) {
		self.count += 1;
	}

	/// Records one occurrence of the transition toward `target`.
	///
	/// The owning sequence's occurrence at the same position is recorded
	/// through `add_occurrence`, so the history count is left untouched.
	pub(crate) fn add_transition(&mut self, target: &State) {
		*self.targets.entry(target.clone()).or_insert(0) += 1;
	}

	/// Returns how many times `target` followed the owning sequence.
	pub fn transition_count(&self, target: &State) -> u64 {
		self.targets.get(target).copied().unwrap_or(0)
	}

	pub fn contains(&self, target: &State) -> bool {
		self.targets.contains_key(target)
	}

	/// Iterates over `(target, count)` pairs in arbitrary order.
	pub fn targets(&self) -> impl Iterator<Item = (&State, u64)> {
		self.targets.iter().map(|(target, occurrence)| (target, *occurrence))
	}

	/// Number of distinct targets.
	pub fn len(&self) -> usize {
		self.targets.len()
	}

	pub fn is_empty(&self) -> bool {
		self.targets.is_empty()
	}

	/// Sum of the target counts.
	pub fn transition_total(&self) -> u64 {
		self.targets.values().sum()
	}

	/// Drops every target seen fewer than `threshold` times.
	///
	/// The history count is decremented by the removed amount.
	/// Returns the number of targets removed.
	pub(crate) fn cutoff(&mut self, threshold: u64) -> usize {
		let before = self.targets.len();
		let mut removed = 0;
		self.targets.retain(|_, occurrence| {
			if *occurrence < threshold {
				removed += *occurrence;
				false
			} else {
				true
			}
		});
		self.count -= removed;
		before - self.targets.len()
	}

	/// Merges another entry of the same sequence into this one.
	///
	/// History and target counts are summed. Targets new to this entry
	/// are stored under `dictionary`'s handle.
	pub(crate) fn merge<D: Dictionary>(&mut self, other: &Self, dictionary: &mut D) {
		self.count += other.count;
		for (target, occurrence) in &other.targets {
			if let Some(existing) = self.targets.get_mut(target) {
				*existing += *occurrence;
			} else {
				self.targets.insert(dictionary.intern_state(target), *occurrence);
			}
		}
	}
}

/// Counts attached to one state of the emission table.
///
/// ## Invariants
/// - `count` == sum of the observation counts
/// - Each observation count is strictly positive
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct EmissionEntry {
	count: u64,
	observations: HashMap<Observation, u64>,
}

impl EmissionEntry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Total number of emissions of the owning state.
	pub fn count(&self) -> u64 {
		self.count
	}

	/// Records one emission of `observation`.
	pub(crate) fn add_emission(&mut self, observation: &Observation) {
		self.count += 1;
		*self.observations.entry(observation.clone()).or_insert(0) += 1;
	}

	pub fn emission_count(&self, observation: &Observation) -> u64 {
		self.observations.get(observation).copied().unwrap_or(0)
	}

	pub fn contains(&self, observation: &Observation) -> bool {
		self.observations.contains_key(observation)
	}

	pub fn observations(&self) -> impl Iterator<Item = (&Observation, u64)> {
		self.observations.iter().map(|(observation, occurrence)| (observation, *occurrence))
	}

	pub fn len(&self) -> usize {
		self.observations.len()
	}

	pub fn is_empty(&self) -> bool {
		self.observations.is_empty()
	}

	/// Drops every observation seen fewer than `threshold` times.
	///
	/// Returns the number of observations removed.
	pub(crate) fn cutoff(&mut self, threshold: u64) -> usize {
		let before = self.observations.len();
		let mut removed = 0;
		self.observations.retain(|_, occurrence| {
			if *occurrence < threshold {
				removed += *occurrence;
				false
			} else {
				true
			}
		});
		self.count -= removed;
		before - self.observations.len()
	}

	pub(crate) fn merge<D: Dictionary>(&mut self, other: &Self, dictionary: &mut D) {
		self.count += other.count;
		for (observation, occurrence) in &other.observations {
			if let Some(existing) = self.observations.get_mut(observation) {
				*existing += *occurrence;
			} else {
				self.observations.insert(dictionary.intern_observation(observation), *occurrence);
			}
		}
	}
}
