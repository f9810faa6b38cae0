use log::debug;

use super::table::{EmissionTable, TransitionTable};

/// Summary of what a cutoff pass removed.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct PruneReport {
	/// Threshold the pass was run with.
	pub threshold: u64,
	/// Per-target transition counts removed.
	pub transitions_removed: usize,
	/// Whole sequence entries removed from the transition table.
	pub sequences_removed: usize,
	/// Per-observation emission counts removed.
	pub emissions_removed: usize,
	/// Whole state entries removed from the emission table.
	pub states_removed: usize,
}

impl PruneReport {
	/// Returns `true` if the pass left both tables untouched.
	pub fn is_noop(&self) -> bool {
		self.transitions_removed == 0
			&& self.sequences_removed == 0
			&& self.emissions_removed == 0
			&& self.states_removed == 0
	}
}

/// Discards every transition and emission seen fewer than `threshold` times.
///
/// # Behavior
/// - Removed breakdown counts are subtracted from the owning entry's count.
/// - Entries left without any breakdown are removed, including history-only
///   sequences that never had a target.
/// - A threshold of 0 returns immediately: every recorded count is >= 1.
///
/// # Notes
/// Pruning is meant to run once, after all ingestion. Counts added under
/// an already pruned key afterwards are not pruned.
pub fn apply_cutoff(
	transitions: &mut TransitionTable,
	emissions: &mut EmissionTable,
	threshold: u64,
) -> PruneReport {
	let mut report = PruneReport { threshold, ..PruneReport::default() };
	if threshold == 0 {
		return report;
	}

	(report.transitions_removed, report.sequences_removed) = transitions.cutoff(threshold);
	(report.emissions_removed, report.states_removed) = emissions.cutoff(threshold);

	debug!(
		"cutoff {}: removed {} transitions ({} sequences), {} emissions ({} states)",
		threshold,
		report.transitions_removed,
		report.sequences_removed,
		report.emissions_removed,
		report.states_removed
	);
	report
}
