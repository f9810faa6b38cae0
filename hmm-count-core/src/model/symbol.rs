use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// A hidden state handle.
///
/// A `State` wraps a shared symbol name. Equality and hashing are by
/// content, so two handles naming the same symbol are interchangeable as
/// map keys. A `Dictionary` makes every equal handle share one allocation.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct State(Arc<str>);

impl State {
	/// Creates a new state handle for `name`.
	pub fn new(name: &str) -> Self {
		Self(Arc::from(name))
	}

	/// Returns the symbol name.
	pub fn name(&self) -> &str {
		&self.0
	}

	/// Returns `true` if both handles point at the same symbol allocation.
	pub fn shares_symbol(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0)
	}
}

impl fmt::Display for State {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// An observation handle, emitted by a `State`.
///
/// Same equality rules as `State`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Observation(Arc<str>);

impl Observation {
	/// Creates a new observation handle for `name`.
	pub fn new(name: &str) -> Self {
		Self(Arc::from(name))
	}

	/// Returns the symbol name.
	pub fn name(&self) -> &str {
		&self.0
	}

	/// Returns `true` if both handles point at the same symbol allocation.
	pub fn shares_symbol(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0)
	}
}

impl fmt::Display for Observation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// An ordered, immutable sequence of states.
///
/// Used as the key of the transition table. Equality and hashing are
/// element-wise, and a `StateSequence` can be looked up by `&[State]`
/// so that window slices never need to be copied for a read.
#[derive(Clone, PartialEq, Eq, Hash, Default, Debug)]
pub struct StateSequence(Vec<State>);

impl StateSequence {
	/// Builds a sequence from symbol names.
	pub fn from_names(names: &[&str]) -> Self {
		names.iter().map(|name| State::new(name)).collect()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Returns the state at `position`, if any.
	pub fn get(&self, position: usize) -> Option<&State> {
		self.0.get(position)
	}

	pub fn as_slice(&self) -> &[State] {
		&self.0
	}

	pub fn iter(&self) -> std::slice::Iter<'_, State> {
		self.0.iter()
	}
}

impl Borrow<[State]> for StateSequence {
	fn borrow(&self) -> &[State] {
		&self.0
	}
}

impl From<Vec<State>> for StateSequence {
	fn from(states: Vec<State>) -> Self {
		Self(states)
	}
}

impl From<&[State]> for StateSequence {
	fn from(states: &[State]) -> Self {
		Self(states.to_vec())
	}
}

impl FromIterator<State> for StateSequence {
	fn from_iter<I: IntoIterator<Item = State>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl<'a> IntoIterator for &'a StateSequence {
	type Item = &'a State;
	type IntoIter = std::slice::Iter<'a, State>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

impl fmt::Display for StateSequence {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write_list(f, &self.0)
	}
}

/// An ordered, immutable sequence of observations.
///
/// Positionally aligned with the `StateSequence` of the same sample:
/// the state at position `p` emits the observation at position `p`.
#[derive(Clone, PartialEq, Eq, Hash, Default, Debug)]
pub struct ObservationSequence(Vec<Observation>);

impl ObservationSequence {
	/// Builds a sequence from symbol names.
	pub fn from_names(names: &[&str]) -> Self {
		names.iter().map(|name| Observation::new(name)).collect()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn get(&self, position: usize) -> Option<&Observation> {
		self.0.get(position)
	}

	pub fn as_slice(&self) -> &[Observation] {
		&self.0
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
		self.0.iter()
	}
}

impl From<Vec<Observation>> for ObservationSequence {
	fn from(observations: Vec<Observation>) -> Self {
		Self(observations)
	}
}

impl FromIterator<Observation> for ObservationSequence {
	fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl<'a> IntoIterator for &'a ObservationSequence {
	type Item = &'a Observation;
	type IntoIter = std::slice::Iter<'a, Observation>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

impl fmt::Display for ObservationSequence {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write_list(f, &self.0)
	}
}

/// One order-ℓ transition: a context of ℓ-1 states followed by a target.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Transition {
	context: StateSequence,
	target: State,
}

impl Transition {
	pub fn new(context: StateSequence, target: State) -> Self {
		Self { context, target }
	}

	pub fn context(&self) -> &StateSequence {
		&self.context
	}

	pub fn target(&self) -> &State {
		&self.target
	}

	/// Order of the transition (context length + 1).
	pub fn order(&self) -> usize {
		self.context.len() + 1
	}
}

impl fmt::Display for Transition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}->{}", self.context, self.target)
	}
}

/// One state-to-observation pairing.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Emission {
	state: State,
	observation: Observation,
}

impl Emission {
	pub fn new(state: State, observation: Observation) -> Self {
		Self { state, observation }
	}

	pub fn state(&self) -> &State {
		&self.state
	}

	pub fn observation(&self) -> &Observation {
		&self.observation
	}
}

impl fmt::Display for Emission {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}->{}", self.state, self.observation)
	}
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
	f.write_str("[")?;
	for (i, item) in items.iter().enumerate() {
		if i > 0 {
			f.write_str(", ")?;
		}
		write!(f, "{}", item)?;
	}
	f.write_str("]")
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;

	#[test]
	fn test_sequence_equality_is_structural() {
		let a = StateSequence::from_names(&["A", "B"]);
		let b: StateSequence = vec![State::new("A"), State::new("B")].into();
		let c = StateSequence::from_names(&["B", "A"]);
		let d = StateSequence::from_names(&["A"]);

		assert_eq!(a, b);
		assert_ne!(a, c);
		assert_ne!(a, d);
	}

	#[test]
	fn test_sequence_lookup_by_slice() {
		let mut map = HashMap::new();
		map.insert(StateSequence::from_names(&["A", "B"]), 7);

		let window = [State::new("A"), State::new("B")];
		assert_eq!(map.get(&window[..]), Some(&7));
		assert_eq!(map.get(&window[..1]), None);
	}

	#[test]
	fn test_display() {
		let transition = Transition::new(StateSequence::from_names(&["A", "B"]), State::new("C"));
		assert_eq!(transition.to_string(), "[A, B]->C");
		assert_eq!(transition.order(), 3);

		let emission = Emission::new(State::new("A"), Observation::new("x"));
		assert_eq!(emission.to_string(), "A->x");
	}

	#[test]
	fn test_handles_compare_by_content() {
		let a = State::new("A");
		let b = State::new("A");
		assert_eq!(a, b);
		assert!(!a.shares_symbol(&b));
		assert!(a.shares_symbol(&a.clone()));
	}
}
