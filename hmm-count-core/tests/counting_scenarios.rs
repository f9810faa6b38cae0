//! Counting and pruning scenarios on small hand-checked corpora.

use hmm_count_core::{
	Counter, CounterConfig, Emission, IdentityDictionary, Observation, ObservationSequence, State,
	StateSequence, SupervisedSample, Transition, model::ngram,
};

fn seq(names: &[&str]) -> StateSequence {
	StateSequence::from_names(names)
}

fn aba_counter(config: CounterConfig) -> Counter {
	let sample = SupervisedSample::new(seq(&["A", "B", "A"]), ObservationSequence::from_names(&["x", "y", "x"]))
		.unwrap();
	let mut counter = Counter::new(config);
	counter.ingest(&sample).unwrap();
	counter
}

// --- Ingestion ---

#[test]
fn test_first_order_scenario() {
	let counter = aba_counter(CounterConfig::default());
	let a = State::new("A");
	let b = State::new("B");
	let x = Observation::new("x");
	let y = Observation::new("y");

	assert_eq!(counter.history_count(&seq(&["A"])), 2);
	assert_eq!(counter.history_count(&seq(&["B"])), 1);
	assert_eq!(counter.history_count(&seq(&["A", "B"])), 1);
	assert_eq!(counter.history_count(&seq(&["B", "A"])), 1);
	assert_eq!(counter.transition_count(&seq(&["A"]), &b), 1);
	assert_eq!(counter.transition_count(&seq(&["B"]), &a), 1);
	assert_eq!(counter.emission_count(&a, &x), 2);
	assert_eq!(counter.emission_count(&b, &y), 1);

	assert_eq!(counter.count_transition(&Transition::new(seq(&["A"]), b.clone())), 1);
	assert_eq!(counter.count_emission(&Emission::new(a.clone(), x.clone())), 2);
}

#[test]
fn test_unknown_keys_are_zero_or_false() {
	let counter = aba_counter(CounterConfig::default());
	let c = State::new("C");

	assert_eq!(counter.history_count(&seq(&["A", "A"])), 0);
	assert_eq!(counter.history_count(&StateSequence::default()), 0);
	assert_eq!(counter.transition_count(&seq(&["A"]), &State::new("A")), 0);
	assert_eq!(counter.transition_count(&seq(&["C"]), &State::new("A")), 0);
	assert_eq!(counter.emission_count(&c, &Observation::new("x")), 0);
	assert_eq!(counter.emission_count(&State::new("A"), &Observation::new("y")), 0);

	assert!(!counter.contains_sequence(&seq(&["C"])));
	assert!(!counter.contains_state(&c));
	assert!(!counter.contains_transition(&Transition::new(seq(&["B"]), State::new("B"))));
	assert!(!counter.contains_emission(&Emission::new(State::new("B"), Observation::new("x"))));
}

#[test]
fn test_contains_predicates() {
	let counter = aba_counter(CounterConfig::default());

	assert!(counter.contains_sequence(&seq(&["B", "A"])));
	assert!(counter.contains_state(&State::new("B")));
	assert!(counter.contains_transition(&Transition::new(seq(&["A"]), State::new("B"))));
	assert!(counter.contains_emission(&Emission::new(State::new("B"), Observation::new("y"))));
}

#[test]
fn test_ingestion_is_cumulative() {
	let mut counter = aba_counter(CounterConfig::default());
	counter.ingest(&SupervisedSample::from_pairs(&[("x", "A"), ("z", "C")])).unwrap();

	assert_eq!(counter.history_count(&seq(&["A"])), 3);
	assert_eq!(counter.transition_count(&seq(&["A"]), &State::new("C")), 1);
	assert_eq!(counter.transition_count(&seq(&["A"]), &State::new("B")), 1);
	assert_eq!(counter.emission_count(&State::new("A"), &Observation::new("x")), 3);
	assert_eq!(counter.samples_ingested(), 2);
}

#[test]
fn test_sequence_shorter_than_top_window() {
	let mut counter = Counter::new(CounterConfig::with_order(4).unwrap());
	counter.ingest(&SupervisedSample::from_pairs(&[("x", "A"), ("y", "B")])).unwrap();

	assert_eq!(counter.history_count(&seq(&["A", "B"])), 1);
	assert!(ngram::generate(&seq(&["A", "B"]), 5).is_empty());
}

#[test]
fn test_empty_sample_counts_nothing() {
	let mut counter = Counter::new(CounterConfig::default());
	counter.ingest(&SupervisedSample::from_pairs(&[])).unwrap();

	assert!(counter.transitions().is_empty());
	assert!(counter.emissions().is_empty());
	assert_eq!(counter.samples_ingested(), 1);
}

#[test]
fn test_identity_dictionary_gives_same_counts() {
	let sample = SupervisedSample::from_pairs(&[("x", "A"), ("y", "B"), ("x", "A")]);
	let mut interned = Counter::new(CounterConfig::with_order(2).unwrap());
	let mut identity = Counter::with_dictionary(CounterConfig::with_order(2).unwrap(), IdentityDictionary);
	interned.ingest(&sample).unwrap();
	identity.ingest(&sample).unwrap();

	assert_eq!(interned.transitions(), identity.transitions());
	assert_eq!(interned.emissions(), identity.emissions());
}

// --- Pruning ---

#[test]
fn test_cutoff_two_on_first_order_scenario() {
	let mut counter = aba_counter(CounterConfig::default());
	let report = counter.apply_cutoff(2);

	assert_eq!(counter.transition_count(&seq(&["A"]), &State::new("B")), 0);
	// [A] had no other target
	assert!(!counter.contains_sequence(&seq(&["A"])));
	assert!(!counter.contains_sequence(&seq(&["B"])));
	assert_eq!(counter.history_count(&seq(&["A"])), 0);

	assert_eq!(counter.emission_count(&State::new("A"), &Observation::new("x")), 2);
	assert!(!counter.contains_state(&State::new("B")));
	assert_eq!(report.transitions_removed, 2);
	assert_eq!(report.emissions_removed, 1);
	assert_eq!(report.states_removed, 1);
}

#[test]
fn test_cutoff_keeps_context_with_surviving_target() {
	let mut counter = Counter::new(CounterConfig::default());
	for _ in 0..3 {
		counter.ingest(&SupervisedSample::from_pairs(&[("x", "A"), ("y", "B")])).unwrap();
	}
	counter.ingest(&SupervisedSample::from_pairs(&[("x", "A"), ("z", "C")])).unwrap();

	counter.apply_cutoff(2);

	assert!(counter.contains_sequence(&seq(&["A"])));
	assert_eq!(counter.transition_count(&seq(&["A"]), &State::new("B")), 3);
	assert_eq!(counter.transition_count(&seq(&["A"]), &State::new("C")), 0);
	// 4 occurrences minus the pruned [A]->C
	assert_eq!(counter.history_count(&seq(&["A"])), 3);
}

#[test]
fn test_train_applies_configured_cutoff() {
	let samples = vec![
		SupervisedSample::from_pairs(&[("x", "A"), ("y", "B")]),
		SupervisedSample::from_pairs(&[("x", "A"), ("y", "B")]),
		SupervisedSample::from_pairs(&[("w", "B"), ("x", "A")]),
	];
	let counter = Counter::train_samples(&samples, CounterConfig::new(1, 2).unwrap()).unwrap();

	assert_eq!(counter.transition_count(&seq(&["A"]), &State::new("B")), 2);
	assert!(!counter.contains_sequence(&seq(&["B"])));
	assert_eq!(counter.emission_count(&State::new("B"), &Observation::new("y")), 2);
	assert_eq!(counter.emission_count(&State::new("B"), &Observation::new("w")), 0);
}
