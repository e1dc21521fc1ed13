use log::{info, warn};

use super::error::IngestResult;
use super::extract::QueryResponse;
use super::types::Graph;

/// Identifies one fetch issued against a [`FetchSlot`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

/// What happened to a completed fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
	/// The result replaced the stored value.
	Applied,
	/// A newer fetch already landed; the result was discarded.
	Superseded,
	/// The fetch failed; the previous value is retained.
	Failed,
}

/// Holds the last completed fetch result. Replaced wholesale, never patched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FetchSlot<T> {
	value: T,
	issued: u64,
	applied: u64,
}

/// The last fetched full graph.
pub type GraphStore = FetchSlot<Graph>;

/// The last successful query response, if any.
pub type ResponseSlot = FetchSlot<Option<QueryResponse>>;

impl<T> FetchSlot<T> {
	/// A slot seeded with `value` and no fetch history.
	pub fn new(value: T) -> Self {
		Self {
			value,
			issued: 0,
			applied: 0,
		}
	}

	/// The last applied value.
	pub fn value(&self) -> &T {
		&self.value
	}

	/// Issues a ticket for a fetch about to start.
	pub fn begin_fetch(&mut self) -> FetchTicket {
		self.issued += 1;
		FetchTicket(self.issued)
	}

	/// Applies a completed fetch unless something newer already landed.
	pub fn complete(&mut self, ticket: FetchTicket, result: IngestResult<T>) -> FetchOutcome {
		if ticket.0 <= self.applied {
			warn!(
				"discarding superseded fetch #{} (#{} already applied)",
				ticket.0, self.applied
			);
			return FetchOutcome::Superseded;
		}
		match result {
			Ok(value) => {
				info!("fetch #{} applied", ticket.0);
				self.value = value;
				self.applied = ticket.0;
				FetchOutcome::Applied
			}
			Err(err) => {
				warn!("fetch #{} failed, keeping last good value: {err}", ticket.0);
				FetchOutcome::Failed
			}
		}
	}

	/// Writes `value` directly and invalidates every outstanding ticket.
	pub fn replace(&mut self, value: T) {
		self.issued += 1;
		self.applied = self.issued;
		self.value = value;
		info!("slot replaced directly (generation {})", self.applied);
	}
}
