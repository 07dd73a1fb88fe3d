//! The observability sink for accepted reservations.
//!
//! The sink is the form's only external collaborator: every successful
//! submit hands it the full validated draft. The default implementation
//! logs; a production deployment would put a reservation backend behind the
//! same trait.

use std::cell::RefCell;

use littlelemon_pages::logging::{console_error, console_info};

use crate::reservation::draft::ReservationDraft;

/// Receives every accepted reservation draft.
pub trait SubmissionSink {
	/// Records one accepted draft.
	fn record(&self, draft: &ReservationDraft);
}

/// Default sink: logs the serialized draft to the console.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl SubmissionSink for ConsoleSink {
	fn record(&self, draft: &ReservationDraft) {
		match serde_json::to_string(draft) {
			Ok(payload) => console_info(&format!("Booking submitted: {payload}")),
			Err(error) => console_error(&format!("Booking payload serialization failed: {error}")),
		}
	}
}

/// Test double: keeps every recorded draft in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
	records: RefCell<Vec<ReservationDraft>>,
}

impl RecordingSink {
	/// Creates an empty recording sink.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of drafts recorded so far.
	pub fn len(&self) -> usize {
		self.records.borrow().len()
	}

	/// True when nothing has been recorded.
	pub fn is_empty(&self) -> bool {
		self.records.borrow().is_empty()
	}

	/// The most recently recorded draft.
	pub fn last(&self) -> Option<ReservationDraft> {
		self.records.borrow().last().cloned()
	}
}

impl SubmissionSink for RecordingSink {
	fn record(&self, draft: &ReservationDraft) {
		self.records.borrow_mut().push(draft.clone());
	}
}
