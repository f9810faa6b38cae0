//! Error types for the counting engine.

use thiserror::Error;

/// Main error type for counter configuration, ingestion and sample reading.
///
/// Lookup misses are never errors: every query on the count tables
/// answers `0` or `false` for unknown keys.
#[derive(Debug, Error)]
pub enum CountError {
	#[error("Invalid configuration: {0}")]
	InvalidConfig(String),

	#[error("Misaligned sample: {states} states for {observations} observations")]
	MisalignedSample { states: usize, observations: usize },

	#[error("Order mismatch: expected {expected}, got {got}")]
	OrderMismatch { expected: usize, got: usize },

	#[error("Parse error at line {line}: {message}")]
	Parse { line: usize, message: String },

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Worker failed: {0}")]
	Worker(String),
}

/// Result type for counting operations.
pub type Result<T> = std::result::Result<T, CountError>;
