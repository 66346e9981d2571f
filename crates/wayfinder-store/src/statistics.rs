//! Registry statistics

use serde::{Deserialize, Serialize};

/// Snapshot of registry activity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStatistics {
	/// Reads that found a payload of the requested shape
	pub hits: u64,
	/// Reads that found nothing, an expired entry, or the wrong shape
	pub misses: u64,
	/// Live entries at the time of the snapshot
	pub entry_count: u64,
	/// Entries dropped by the capacity bound or by expiry
	pub evictions: u64,
}

impl RegistryStatistics {
	/// Total number of reads
	pub fn total_requests(&self) -> u64 {
		self.hits + self.misses
	}

	/// Fraction of reads that were hits, or 0.0 before any read
	pub fn hit_rate(&self) -> f64 {
		let total = self.total_requests();
		if total == 0 {
			0.0
		} else {
			self.hits as f64 / total as f64
		}
	}
}
