use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{CountError, Result};
use crate::model::sample::{SampleStream, SupervisedSample};
use crate::model::symbol::{Observation, State};

/// Default separator between an observation and its state in a token.
pub const DEFAULT_SEPARATOR: char = '/';

/// Reads labeled samples from a line-based text corpus.
///
/// - One sample per line, blank lines are skipped
/// - Tokens are separated by whitespace
/// - Each token is `observation/state`, split at the *last* separator so
///   observations may themselves contain it (ex. `1/2/NUM`)
///
/// Example line: `the/DET dog/NOUN barks/VERB`
pub struct LineSampleStream<R> {
	reader: R,
	separator: char,
	line_number: usize,
	buffer: String,
}

impl LineSampleStream<BufReader<File>> {
	/// Opens a corpus file.
	pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
		Ok(Self::new(BufReader::new(File::open(path)?)))
	}
}

impl<R: BufRead> LineSampleStream<R> {
	pub fn new(reader: R) -> Self {
		Self { reader, separator: DEFAULT_SEPARATOR, line_number: 0, buffer: String::new() }
	}

	/// Uses `separator` between observation and state instead of `/`.
	pub fn with_separator(mut self, separator: char) -> Self {
		self.separator = separator;
		self
	}

	/// Line number of the last line read (1-based).
	pub fn line_number(&self) -> usize {
		self.line_number
	}

	fn parse_line(&self, line: &str) -> Result<SupervisedSample> {
		let mut states = Vec::new();
		let mut observations = Vec::new();

		for token in line.split_whitespace() {
			let (observation, state) = token
				.rsplit_once(self.separator)
				.filter(|(observation, state)| !observation.is_empty() && !state.is_empty())
				.ok_or_else(|| CountError::Parse {
					line: self.line_number,
					message: format!("expected observation{}state, got {:?}", self.separator, token),
				})?;
			observations.push(Observation::new(observation));
			states.push(State::new(state));
		}

		SupervisedSample::new(states.into(), observations.into())
	}
}

impl<R: BufRead> SampleStream for LineSampleStream<R> {
	fn read(&mut self) -> Result<Option<SupervisedSample>> {
		loop {
			self.buffer.clear();
			if self.reader.read_line(&mut self.buffer)? == 0 {
				return Ok(None);
			}
			self.line_number += 1;

			let line = self.buffer.trim();
			if line.is_empty() {
				continue;
			}
			return self.parse_line(line).map(Some);
		}
	}
}
