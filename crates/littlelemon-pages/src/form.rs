//! Reactive form state.
//!
//! `FormState` joins a declarative [`FormSchema`] to live state: one
//! `Signal<String>` per field plus a `Signal<ValidationErrors>`. The schema
//! stays the single source of truth for the validation contract; this type
//! only owns the mutable side — values typed by the user and the errors of
//! the last validation pass.
//!
//! All state is request-scoped to one form lifetime and owned by the form's
//! controller; nothing here is global.

use std::collections::HashMap;
use std::rc::Rc;

use littlelemon_forms::{FormSchema, ValidationErrors};
use littlelemon_reactive::Signal;

/// Reactive field values and validation errors for one form.
///
/// Cloning shares the underlying signals, so a clone captured by an event
/// closure observes and mutates the same form.
#[derive(Clone)]
pub struct FormState {
	schema: Rc<FormSchema>,
	values: HashMap<&'static str, Signal<String>>,
	errors: Signal<ValidationErrors>,
}

impl FormState {
	/// Creates empty state for every field in `schema`.
	pub fn new(schema: FormSchema) -> Self {
		let values = schema
			.fields()
			.iter()
			.map(|field| (field.name(), Signal::new(String::new())))
			.collect();
		Self {
			schema: Rc::new(schema),
			values,
			errors: Signal::new(ValidationErrors::new()),
		}
	}

	/// The schema this state was built from.
	pub fn schema(&self) -> &FormSchema {
		&self.schema
	}

	/// Current value of `field` ("" for unknown fields).
	pub fn value(&self, field: &str) -> String {
		self.values
			.get(field)
			.map(Signal::get_untracked)
			.unwrap_or_default()
	}

	/// Sets the value of `field`; unknown fields are ignored.
	pub fn set_value(&self, field: &str, value: impl Into<String>) {
		if let Some(signal) = self.values.get(field) {
			signal.set(value.into());
		}
	}

	/// The reactive value cell for `field`, for DOM binding.
	pub fn value_signal(&self, field: &str) -> Option<&Signal<String>> {
		self.values.get(field)
	}

	/// Snapshot of every field's current value.
	pub fn snapshot(&self) -> HashMap<&'static str, String> {
		self.schema
			.fields()
			.iter()
			.map(|field| (field.name(), self.value(field.name())))
			.collect()
	}

	/// Validates the current snapshot against the schema, replacing the
	/// error map. Returns `true` when every field passed.
	pub fn validate(&self) -> bool {
		let errors = self.schema.validate(&self.snapshot());
		let is_valid = errors.is_empty();
		self.errors.set(errors);
		is_valid
	}

	/// The errors of the last validation pass.
	pub fn errors(&self) -> ValidationErrors {
		self.errors.get_untracked()
	}

	/// The reactive error map, for DOM binding.
	pub fn errors_signal(&self) -> &Signal<ValidationErrors> {
		&self.errors
	}

	/// Replaces the error map wholesale.
	pub fn set_errors(&self, errors: ValidationErrors) {
		self.errors.set(errors);
	}

	/// Resets every field to its unset default and clears all errors.
	pub fn clear(&self) {
		for signal in self.values.values() {
			signal.set(String::new());
		}
		self.errors.set(ValidationErrors::new());
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use littlelemon_forms::{EmailValidator, FieldSpec};
	use serial_test::serial;

	fn test_state() -> FormState {
		FormState::new(FormSchema::new(vec![
			FieldSpec::new("email", "Email Address")
				.required("Email is required")
				.validator(EmailValidator::new("Invalid email address")),
			FieldSpec::new("requests", "Special Requests"),
		]))
	}

	#[test]
	#[serial]
	fn test_values_start_empty() {
		let state = test_state();
		assert_eq!(state.value("email"), "");
		assert_eq!(state.value("requests"), "");
	}

	#[test]
	#[serial]
	fn test_set_and_get_value() {
		let state = test_state();
		state.set_value("email", "john@example.com");
		assert_eq!(state.value("email"), "john@example.com");
	}

	#[test]
	#[serial]
	fn test_unknown_field_is_ignored() {
		let state = test_state();
		state.set_value("nonexistent", "x");
		assert_eq!(state.value("nonexistent"), "");
		assert!(state.value_signal("nonexistent").is_none());
	}

	#[test]
	#[serial]
	fn test_validate_populates_errors() {
		let state = test_state();

		assert!(!state.validate());
		assert_eq!(state.errors().message("email"), Some("Email is required"));

		state.set_value("email", "nope");
		assert!(!state.validate());
		assert_eq!(
			state.errors().message("email"),
			Some("Invalid email address")
		);

		state.set_value("email", "john@example.com");
		assert!(state.validate());
		assert!(state.errors().is_empty());
	}

	#[test]
	#[serial]
	fn test_clear_resets_values_and_errors() {
		let state = test_state();
		state.set_value("email", "john@example.com");
		state.set_value("requests", "window seat");
		let _ = state.validate();

		state.clear();

		assert_eq!(state.value("email"), "");
		assert_eq!(state.value("requests"), "");
		assert!(state.errors().is_empty());
	}

	#[test]
	#[serial]
	fn test_clones_share_state() {
		let state = test_state();
		let clone = state.clone();
		clone.set_value("email", "shared@example.com");
		assert_eq!(state.value("email"), "shared@example.com");
	}
}
