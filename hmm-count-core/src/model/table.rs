use std::collections::HashMap;

use super::dictionary::Dictionary;
use super::entry::{EmissionEntry, TransitionEntry};
use super::symbol::{Observation, State, StateSequence};

/// Mapping from a state sequence to its `TransitionEntry`.
///
/// One map serves both as the n-gram history table and as the
/// transition-context table: the entry's `count` is the history count of
/// the key, its breakdown lists what followed the key when it was used
/// as a context. Keeping both in one entry is what lets pruning subtract
/// removed transitions from the matching history count.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct TransitionTable {
	entries: HashMap<StateSequence, TransitionEntry>,
}

impl TransitionTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one history occurrence of `sequence`.
	pub(crate) fn record_history(&mut self, sequence: &[State]) {
		self.entry_mut(sequence).add_occurrence();
	}

	/// Records one transition from `context` to `target`.
	pub(crate) fn record_transition(&mut self, context: &[State], target: &State) {
		let entry = self.entry_mut(context);
		entry.add_transition(target);
		debug_assert!(entry.count() >= entry.transition_total());
	}

	/// Upsert without copying the key when it is already present.
	fn entry_mut(&mut self, sequence: &[State]) -> &mut TransitionEntry {
		if !self.entries.contains_key(sequence) {
			self.entries.insert(StateSequence::from(sequence), TransitionEntry::new());
		}
		// Should not panic, inserted above
		self.entries.get_mut(sequence).expect("entry present")
	}

	pub fn get(&self, sequence: &[State]) -> Option<&TransitionEntry> {
		self.entries.get(sequence)
	}

	/// History count of `sequence`, or 0.
	pub fn history_count(&self, sequence: &[State]) -> u64 {
		self.get(sequence).map_or(0, TransitionEntry::count)
	}

	/// Number of times `target` followed `context`, or 0.
	pub fn transition_count(&self, context: &[State], target: &State) -> u64 {
		self.get(context).map_or(0, |entry| entry.transition_count(target))
	}

	pub fn contains(&self, sequence: &[State]) -> bool {
		self.entries.contains_key(sequence)
	}

	pub fn contains_transition(&self, context: &[State], target: &State) -> bool {
		self.get(context).is_some_and(|entry| entry.contains(target))
	}

	/// Number of distinct sequences.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&StateSequence, &TransitionEntry)> {
		self.entries.iter()
	}

	/// Applies `threshold` to every entry's targets and drops entries left
	/// without any target.
	///
	/// Returns `(targets removed, sequences removed)`.
	pub(crate) fn cutoff(&mut self, threshold: u64) -> (usize, usize) {
		let before = self.entries.len();
		let mut targets_removed = 0;
		self.entries.retain(|_, entry| {
			targets_removed += entry.cutoff(threshold);
			!entry.is_empty()
		});
		(targets_removed, before - self.entries.len())
	}

	/// Sums another table into this one.
	///
	/// Keys new to this table, and their targets, are re-interned through
	/// `dictionary` so every stored handle is the dictionary's own.
	pub(crate) fn merge<D: Dictionary>(&mut self, other: &Self, dictionary: &mut D) {
		for (sequence, entry) in &other.entries {
			if let Some(existing) = self.entries.get_mut(sequence) {
				existing.merge(entry, dictionary);
			} else {
				let mut interned = TransitionEntry::new();
				interned.merge(entry, dictionary);
				self.entries.insert(dictionary.intern_states(sequence), interned);
			}
		}
	}
}

/// Mapping from a state to its `EmissionEntry`.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct EmissionTable {
	entries: HashMap<State, EmissionEntry>,
}

impl EmissionTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one emission of `observation` by `state`.
	pub(crate) fn record_emission(&mut self, state: &State, observation: &Observation) {
		self.entries.entry(state.clone()).or_default().add_emission(observation);
	}

	pub fn get(&self, state: &State) -> Option<&EmissionEntry> {
		self.entries.get(state)
	}

	/// Number of emissions of `observation` by `state`, or 0.
	pub fn emission_count(&self, state: &State, observation: &Observation) -> u64 {
		self.get(state).map_or(0, |entry| entry.emission_count(observation))
	}

	pub fn contains(&self, state: &State) -> bool {
		self.entries.contains_key(state)
	}

	pub fn contains_emission(&self, state: &State, observation: &Observation) -> bool {
		self.get(state).is_some_and(|entry| entry.contains(observation))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&State, &EmissionEntry)> {
		self.entries.iter()
	}

	/// Returns `(observations removed, states removed)`.
	pub(crate) fn cutoff(&mut self, threshold: u64) -> (usize, usize) {
		let before = self.entries.len();
		let mut observations_removed = 0;
		self.entries.retain(|_, entry| {
			observations_removed += entry.cutoff(threshold);
			!entry.is_empty()
		});
		(observations_removed, before - self.entries.len())
	}

	pub(crate) fn merge<D: Dictionary>(&mut self, other: &Self, dictionary: &mut D) {
		for (state, entry) in &other.entries {
			if let Some(existing) = self.entries.get_mut(state) {
				existing.merge(entry, dictionary);
			} else {
				let mut interned = EmissionEntry::new();
				interned.merge(entry, dictionary);
				self.entries.insert(dictionary.intern_state(state), interned);
			}
		}
	}
}
