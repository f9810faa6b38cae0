use crate::error::{CountError, Result};

use super::symbol::{Observation, ObservationSequence, State, StateSequence};

/// A labeled training sample: a state sequence and the observation
/// sequence it emitted, position by position.
///
/// ## Invariants
/// - Both sequences have the same length
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SupervisedSample {
	states: StateSequence,
	observations: ObservationSequence,
}

impl SupervisedSample {
	/// Creates a sample from aligned sequences.
	///
	/// # Errors
	/// Returns `CountError::MisalignedSample` if the lengths differ.
	pub fn new(states: StateSequence, observations: ObservationSequence) -> Result<Self> {
		check_aligned(&states, &observations)?;
		Ok(Self { states, observations })
	}

	/// Builds a sample from `(observation, state)` name pairs.
	pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
		let observations = pairs.iter().map(|(observation, _)| Observation::new(observation)).collect();
		let states = pairs.iter().map(|(_, state)| State::new(state)).collect();
		Self { states, observations }
	}

	pub fn state_sequence(&self) -> &StateSequence {
		&self.states
	}

	pub fn observation_sequence(&self) -> &ObservationSequence {
		&self.observations
	}

	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}
}

/// Rejects a state sequence and an observation sequence of different lengths.
pub(crate) fn check_aligned(states: &StateSequence, observations: &ObservationSequence) -> Result<()> {
	if states.len() != observations.len() {
		return Err(CountError::MisalignedSample {
			states: states.len(),
			observations: observations.len(),
		});
	}
	Ok(())
}

/// A source of labeled samples, read one at a time.
///
/// `Ok(None)` signals end of input, which is not an error.
pub trait SampleStream {
	fn read(&mut self) -> Result<Option<SupervisedSample>>;
}

/// Adapts any iterator of samples into a `SampleStream`.
pub struct IterSampleStream<I> {
	inner: I,
}

impl<I> IterSampleStream<I>
where
	I: Iterator<Item = SupervisedSample>,
{
	pub fn new<T: IntoIterator<IntoIter = I>>(samples: T) -> Self {
		Self { inner: samples.into_iter() }
	}
}

impl<I> SampleStream for IterSampleStream<I>
where
	I: Iterator<Item = SupervisedSample>,
{
	fn read(&mut self) -> Result<Option<SupervisedSample>> {
		Ok(self.inner.next())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_misaligned_sample_is_rejected() {
		let result = SupervisedSample::new(
			StateSequence::from_names(&["A", "B"]),
			ObservationSequence::from_names(&["x"]),
		);
		assert!(matches!(
			result,
			Err(CountError::MisalignedSample { states: 2, observations: 1 })
		));
	}

	#[test]
	fn test_from_pairs() {
		let sample = SupervisedSample::from_pairs(&[("x", "A"), ("y", "B")]);
		assert_eq!(sample.state_sequence(), &StateSequence::from_names(&["A", "B"]));
		assert_eq!(sample.observation_sequence(), &ObservationSequence::from_names(&["x", "y"]));
	}

	#[test]
	fn test_iter_stream_ends_with_none() {
		let mut stream = IterSampleStream::new(vec![SupervisedSample::from_pairs(&[("x", "A")])]);
		assert!(stream.read().unwrap().is_some());
		assert!(stream.read().unwrap().is_none());
		assert!(stream.read().unwrap().is_none());
	}
}
