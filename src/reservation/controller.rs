//! The reservation form controller.
//!
//! Owns all of the form's state explicitly — field values, validation
//! errors, the submission flag, the success window — as one state object
//! passed to the rendering layer. Nothing here is global, and the whole
//! submit protocol is synchronous: validate, record, clear, open the
//! success window.

use std::rc::Rc;
use std::time::Duration;

use littlelemon_forms::ValidationErrors;
use littlelemon_pages::FormState;
use littlelemon_reactive::Signal;

use crate::reservation::draft::ReservationDraft;
use crate::reservation::schema::reservation_schema;
use crate::reservation::sink::{ConsoleSink, SubmissionSink};
use crate::reservation::success::SuccessWindow;

/// How long the success acknowledgment stays visible.
pub const SUCCESS_WINDOW: Duration = Duration::from_secs(3);

/// Result of one submit attempt.
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
	/// Every field passed; the draft was recorded and the form cleared.
	Accepted(ReservationDraft),
	/// At least one field failed; nothing was recorded.
	Rejected(ValidationErrors),
}

impl SubmitOutcome {
	/// True for [`SubmitOutcome::Accepted`].
	pub fn is_accepted(&self) -> bool {
		matches!(self, SubmitOutcome::Accepted(_))
	}
}

/// Collects and validates reservation input, signals success, and clears
/// the draft.
///
/// Cloning shares the underlying state — a clone captured by a DOM event
/// closure drives the same form.
pub struct ReservationForm {
	state: FormState,
	submitted: Signal<bool>,
	window: SuccessWindow,
	sink: Rc<dyn SubmissionSink>,
}

impl ReservationForm {
	/// Creates the form with the console sink.
	pub fn new() -> Self {
		Self::with_sink(Rc::new(ConsoleSink))
	}

	/// Creates the form with a custom submission sink.
	pub fn with_sink(sink: Rc<dyn SubmissionSink>) -> Self {
		Self {
			state: FormState::new(reservation_schema()),
			submitted: Signal::new(false),
			window: SuccessWindow::new(),
			sink,
		}
	}

	/// The reactive field values and errors.
	pub fn state(&self) -> &FormState {
		&self.state
	}

	/// Sets one field's raw value, as typed by the user.
	pub fn set_field(&self, field: &str, value: impl Into<String>) {
		self.state.set_value(field, value);
	}

	/// One field's current raw value.
	pub fn field(&self, field: &str) -> String {
		self.state.value(field)
	}

	/// The errors of the last validation pass.
	pub fn errors(&self) -> ValidationErrors {
		self.state.errors()
	}

	/// The submission flag: true during the success window.
	pub fn submitted_signal(&self) -> &Signal<bool> {
		&self.submitted
	}

	/// Whether the success window is currently open.
	pub fn is_submitted(&self) -> bool {
		self.submitted.get_untracked()
	}

	/// The success window, for driving expiry in native tests.
	pub fn success_window(&self) -> &SuccessWindow {
		&self.window
	}

	/// Runs the submit protocol.
	///
	/// On any field failure, every failing field's message is surfaced
	/// simultaneously and nothing else happens. On success the draft is
	/// recorded to the sink, every field resets to its unset default, the
	/// submission flag flips true, and the success window is (re)armed to
	/// flip it back after [`SUCCESS_WINDOW`]. A pending hide from an earlier
	/// submit is superseded, never left to close the new window early.
	pub fn submit(&self) -> SubmitOutcome {
		if !self.state.validate() {
			return SubmitOutcome::Rejected(self.state.errors());
		}

		match ReservationDraft::from_values(&self.state.snapshot()) {
			Ok(draft) => {
				self.sink.record(&draft);
				self.state.clear();
				self.submitted.set(true);
				let submitted = self.submitted.clone();
				self.window
					.arm(SUCCESS_WINDOW, move || submitted.set(false));
				SubmitOutcome::Accepted(draft)
			}
			Err(error) => {
				// Schema validation passed but the typed conversion did not
				// (unreachable through the UI controls). Surface it against
				// the offending field instead of panicking.
				let message = self
					.state
					.schema()
					.field(error.field())
					.and_then(|field| field.required_message())
					.unwrap_or("Invalid value")
					.to_string();
				let mut errors = ValidationErrors::new();
				errors.insert(error.field(), message);
				self.state.set_errors(errors.clone());
				SubmitOutcome::Rejected(errors)
			}
		}
	}
}

impl Clone for ReservationForm {
	fn clone(&self) -> Self {
		Self {
			state: self.state.clone(),
			submitted: self.submitted.clone(),
			window: self.window.clone(),
			sink: Rc::clone(&self.sink),
		}
	}
}

impl Default for ReservationForm {
	fn default() -> Self {
		Self::new()
	}
}
