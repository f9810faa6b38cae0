use serde::Deserialize;

use crate::error::{CountError, Result};

/// Validated counter configuration.
///
/// - `order`: maximum context length K (>= 1). Windows of length 1..=K+1
///   are counted.
/// - `cutoff`: minimum count kept by the pruning pass (0 disables it).
///
/// Deserializes from `{"order": 2, "cutoff": 1}`; missing fields take the
/// defaults and out of range values fail at deserialization time.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize)]
#[serde(try_from = "RawCounterConfig")]
pub struct CounterConfig {
	order: usize,
	cutoff: u64,
}

impl CounterConfig {
	pub const DEFAULT_ORDER: usize = 1;
	pub const DEFAULT_CUTOFF: u64 = 0;

	/// Creates a configuration.
	///
	/// # Errors
	/// Returns `CountError::InvalidConfig` if `order < 1`, or if `order + 1`
	/// (the longest window counted) does not fit in a `usize`.
	pub fn new(order: usize, cutoff: u64) -> Result<Self> {
		if order < 1 || order.checked_add(1).is_none() {
			return Err(CountError::InvalidConfig(format!(
				"order must be >= 1 and < {}: order = {}, cutoff = {}",
				usize::MAX,
				order,
				cutoff
			)));
		}
		Ok(Self { order, cutoff })
	}

	/// Default cutoff with the given order.
	pub fn with_order(order: usize) -> Result<Self> {
		Self::new(order, Self::DEFAULT_CUTOFF)
	}

	pub fn order(&self) -> usize {
		self.order
	}

	pub fn cutoff(&self) -> u64 {
		self.cutoff
	}
}

impl Default for CounterConfig {
	fn default() -> Self {
		Self { order: Self::DEFAULT_ORDER, cutoff: Self::DEFAULT_CUTOFF }
	}
}

/// Unvalidated configuration, as read from an external source.
///
/// Fields are signed so that negative input is reported instead of
/// failing as a type error.
#[derive(Clone, Copy, Default, Debug, Deserialize)]
pub struct RawCounterConfig {
	pub order: Option<i64>,
	pub cutoff: Option<i64>,
}

impl TryFrom<RawCounterConfig> for CounterConfig {
	type Error = CountError;

	fn try_from(raw: RawCounterConfig) -> Result<Self> {
		let order = raw.order.unwrap_or(Self::DEFAULT_ORDER as i64);
		let cutoff = raw.cutoff.unwrap_or(Self::DEFAULT_CUTOFF as i64);
		if order < 1 || cutoff < 0 {
			return Err(CountError::InvalidConfig(format!(
				"order must be >= 1 and cutoff >= 0: order = {}, cutoff = {}",
				order, cutoff
			)));
		}
		let order = usize::try_from(order)
			.map_err(|_| CountError::InvalidConfig(format!("order out of range: {}", order)))?;
		Self::new(order, cutoff as u64)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use test_case::test_case;

	#[test]
	fn test_defaults() {
		let config = CounterConfig::default();
		assert_eq!(config.order(), 1);
		assert_eq!(config.cutoff(), 0);
	}

	#[test]
	fn test_zero_order_is_rejected() {
		assert!(matches!(CounterConfig::new(0, 0), Err(CountError::InvalidConfig(_))));
	}

	#[test]
	fn test_largest_order_is_rejected() {
		assert!(matches!(CounterConfig::new(usize::MAX, 0), Err(CountError::InvalidConfig(_))));
		assert!(CounterConfig::new(usize::MAX - 1, 0).is_ok());
	}

	#[test_case(Some(0), None ; "zero order")]
	#[test_case(Some(-2), None ; "negative order")]
	#[test_case(None, Some(-1) ; "negative cutoff")]
	fn test_raw_config_rejected(order: Option<i64>, cutoff: Option<i64>) {
		let result = CounterConfig::try_from(RawCounterConfig { order, cutoff });
		assert!(matches!(result, Err(CountError::InvalidConfig(_))));
	}

	#[test]
	fn test_deserialize() {
		let config: CounterConfig = serde_json::from_str(r#"{"order": 3}"#).unwrap();
		assert_eq!(config, CounterConfig::new(3, 0).unwrap());

		let config: CounterConfig = serde_json::from_str("{}").unwrap();
		assert_eq!(config, CounterConfig::default());

		assert!(serde_json::from_str::<CounterConfig>(r#"{"cutoff": -4}"#).is_err());
	}
}
