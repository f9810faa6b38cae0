//! Transition and emission counting for higher-order Hidden Markov Models.
//!
//! This crate estimates the raw frequencies an order-K HMM is trained from:
//! - History counts of every state n-gram of length 1..=K+1
//! - Transition counts from every context of length 1..=K to the next state
//! - Emission counts of every state to the observation at the same position
//! - Cutoff pruning that keeps aggregate counts consistent
//!
//! Probabilities, smoothing and decoding are left to downstream estimators,
//! which read the counts through the `Counter` query API.

/// Counting engine, count tables and the types they are keyed by.
pub mod model;

/// Error type shared by the whole crate.
pub mod error;

/// Line-based corpus reader.
pub mod io;

pub use error::{CountError, Result};
pub use model::config::{CounterConfig, RawCounterConfig};
pub use model::counter::Counter;
pub use model::dictionary::{Dictionary, IdentityDictionary, SymbolDictionary};
pub use model::parallel::count_parallel;
pub use model::pruner::PruneReport;
pub use model::sample::{IterSampleStream, SampleStream, SupervisedSample};
pub use model::symbol::{Emission, Observation, ObservationSequence, State, StateSequence, Transition};
