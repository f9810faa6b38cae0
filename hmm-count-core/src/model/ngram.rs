use super::symbol::{State, StateSequence};

/// Iterates over every contiguous window of `len` states in `sequence`.
///
/// Each item is `(start, window)` where `start` is the absolute position
/// of the window's first state. Windows come in start order.
///
/// # Notes
/// - Yields nothing if `len` is 0 or greater than the sequence length.
/// - Borrows the sequence, no window is copied.
pub fn windows(sequence: &StateSequence, len: usize) -> impl Iterator<Item = (usize, &[State])> {
	let states = sequence.as_slice();
	// `slice::windows` panics on 0
	let size = if len == 0 { states.len() + 1 } else { len };
	states.windows(size).enumerate()
}

/// Returns all contiguous subsequences of `len` states, in start order.
///
/// Owned counterpart of [`windows`].
pub fn generate(sequence: &StateSequence, len: usize) -> Vec<StateSequence> {
	windows(sequence, len)
		.map(|(_, window)| StateSequence::from(window))
		.collect()
}
