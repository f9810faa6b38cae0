use std::collections::HashMap;

use super::symbol::{Observation, ObservationSequence, State, StateSequence};

/// Symbol interning capability consumed by the `Counter`.
///
/// A dictionary maps the states and observations of raw samples to
/// canonical handles. The counter treats it as authoritative for symbol
/// identity and never builds symbols itself.
pub trait Dictionary {
	/// Returns the canonical handle for `state`.
	fn intern_state(&mut self, state: &State) -> State;

	/// Returns the canonical handle for `observation`.
	fn intern_observation(&mut self, observation: &Observation) -> Observation;

	/// Returns `sequence` rebuilt from canonical state handles.
	fn intern_states(&mut self, sequence: &StateSequence) -> StateSequence {
		sequence.iter().map(|state| self.intern_state(state)).collect()
	}

	/// Returns `sequence` rebuilt from canonical observation handles.
	fn intern_observations(&mut self, sequence: &ObservationSequence) -> ObservationSequence {
		sequence.iter().map(|observation| self.intern_observation(observation)).collect()
	}

	/// Absorbs the symbols known to `other`.
	fn merge(&mut self, other: &Self)
	where
		Self: Sized;
}

/// Dictionary returning every sequence unchanged.
///
/// Handles compare by content, so counting stays exact without any
/// interning. Useful in tests and when samples are already canonical.
#[derive(Clone, Copy, Default, Debug)]
pub struct IdentityDictionary;

impl Dictionary for IdentityDictionary {
	fn intern_state(&mut self, state: &State) -> State {
		state.clone()
	}

	fn intern_observation(&mut self, observation: &Observation) -> Observation {
		observation.clone()
	}

	fn intern_states(&mut self, sequence: &StateSequence) -> StateSequence {
		sequence.clone()
	}

	fn intern_observations(&mut self, sequence: &ObservationSequence) -> ObservationSequence {
		sequence.clone()
	}

	fn merge(&mut self, _other: &Self) {}
}

/// Dictionary keeping one shared handle per distinct symbol.
///
/// States and observations get dense indices in first-seen order, which
/// downstream estimators can use to lay out probability matrices.
///
/// # Invariants
/// - `states[i]` is the handle with index `i` in `state_index`
/// - Same for observations
#[derive(Clone, Default, Debug)]
pub struct SymbolDictionary {
	state_index: HashMap<State, usize>,
	states: Vec<State>,
	observation_index: HashMap<Observation, usize>,
	observations: Vec<Observation>,
}

impl SymbolDictionary {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn state_index(&self, state: &State) -> Option<usize> {
		self.state_index.get(state).copied()
	}

	pub fn observation_index(&self, observation: &Observation) -> Option<usize> {
		self.observation_index.get(observation).copied()
	}

	pub fn state_count(&self) -> usize {
		self.states.len()
	}

	pub fn observation_count(&self) -> usize {
		self.observations.len()
	}

	/// Known states, in index order.
	pub fn states(&self) -> &[State] {
		&self.states
	}

	/// Known observations, in index order.
	pub fn observations(&self) -> &[Observation] {
		&self.observations
	}
}

impl Dictionary for SymbolDictionary {
	/// Returns the canonical handle for `state`, registering it if new.
	fn intern_state(&mut self, state: &State) -> State {
		if let Some((canonical, _)) = self.state_index.get_key_value(state) {
			return canonical.clone();
		}
		self.state_index.insert(state.clone(), self.states.len());
		self.states.push(state.clone());
		state.clone()
	}

	/// Returns the canonical handle for `observation`, registering it if new.
	fn intern_observation(&mut self, observation: &Observation) -> Observation {
		if let Some((canonical, _)) = self.observation_index.get_key_value(observation) {
			return canonical.clone();
		}
		self.observation_index.insert(observation.clone(), self.observations.len());
		self.observations.push(observation.clone());
		observation.clone()
	}

	/// Symbols unknown to `self` are appended after the existing ones,
	/// in `other`'s index order. Existing indices never change.
	fn merge(&mut self, other: &Self) {
		for state in &other.states {
			self.intern_state(state);
		}
		for observation in &other.observations {
			self.intern_observation(observation);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_interning_shares_handles() {
		let mut dictionary = SymbolDictionary::new();
		let first = dictionary.intern_states(&StateSequence::from_names(&["A", "B"]));
		let second = dictionary.intern_states(&StateSequence::from_names(&["B", "A"]));

		assert!(first.as_slice()[0].shares_symbol(&second.as_slice()[1]));
		assert!(first.as_slice()[1].shares_symbol(&second.as_slice()[0]));
		assert_eq!(dictionary.state_count(), 2);
	}

	#[test]
	fn test_indices_follow_first_seen_order() {
		let mut dictionary = SymbolDictionary::new();
		dictionary.intern_observations(&ObservationSequence::from_names(&["y", "x", "y"]));

		assert_eq!(dictionary.observation_index(&Observation::new("y")), Some(0));
		assert_eq!(dictionary.observation_index(&Observation::new("x")), Some(1));
		assert_eq!(dictionary.observation_index(&Observation::new("z")), None);
	}

	#[test]
	fn test_merge_keeps_existing_indices() {
		let mut left = SymbolDictionary::new();
		left.intern_states(&StateSequence::from_names(&["A", "B"]));
		let mut right = SymbolDictionary::new();
		right.intern_states(&StateSequence::from_names(&["C", "A"]));

		left.merge(&right);

		assert_eq!(left.state_index(&State::new("A")), Some(0));
		assert_eq!(left.state_index(&State::new("B")), Some(1));
		assert_eq!(left.state_index(&State::new("C")), Some(2));
	}

	#[test]
	fn test_identity_returns_input() {
		let sequence = StateSequence::from_names(&["A"]);
		assert_eq!(IdentityDictionary.intern_states(&sequence), sequence);
	}
}
