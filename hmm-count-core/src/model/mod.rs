//! Top-level module for the counting engine.
//!
//! This module provides:
//! - Symbol and sequence value types (`State`, `StateSequence`, ...)
//! - The two count tables (`TransitionTable`, `EmissionTable`)
//! - The n-gram window generator
//! - The `Counter` orchestrating ingestion, pruning and queries

/// Value types: states, observations, their sequences, transitions and emissions.
pub mod symbol;

/// Contiguous window generation over state sequences.
pub mod ngram;

/// Per-key count entries (aggregate count plus breakdown).
pub mod entry;

/// Transition and emission count tables.
pub mod table;

/// Frequency cutoff over both tables.
pub mod pruner;

/// Symbol interning.
///
/// The counter only depends on the `Dictionary` trait.
pub mod dictionary;

/// Labeled samples and sample sources.
pub mod sample;

/// Validated counter configuration.
pub mod config;

/// The counting orchestrator.
pub mod counter;

/// Multi-threaded counting of a whole corpus.
///
/// Partial counters are built per chunk and merged.
pub mod parallel;
