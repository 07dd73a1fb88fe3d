//! Declarative form schema.
//!
//! A [`FormSchema`] is the single source of truth for a form's contract:
//! which fields exist, which are required, and which rules apply. Field
//! registration happens in one place and the whole schema is consumed by one
//! validation routine, instead of scattering per-field logic through the
//! rendering code.

use crate::validators::Validator;
use std::collections::BTreeMap;
use std::collections::HashMap;

/// Declarative description of a single form field.
///
/// Built fluently, the way a field is registered:
///
/// ```
/// use littlelemon_forms::{EmailValidator, FieldSpec};
///
/// let email = FieldSpec::new("email", "Email Address")
///     .required("Email is required")
///     .validator(EmailValidator::new("Invalid email address"));
/// assert!(email.is_required());
/// ```
pub struct FieldSpec {
	name: &'static str,
	label: &'static str,
	required_message: Option<String>,
	validators: Vec<Box<dyn Validator>>,
}

impl FieldSpec {
	/// Creates an optional field with no rules.
	pub fn new(name: &'static str, label: &'static str) -> Self {
		Self {
			name,
			label,
			required_message: None,
			validators: Vec::new(),
		}
	}

	/// Marks the field required, failing empty input with `message`.
	pub fn required(mut self, message: impl Into<String>) -> Self {
		self.required_message = Some(message.into());
		self
	}

	/// Appends a validation rule. Rules run in registration order against
	/// non-empty input; the first failure wins.
	pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
		self.validators.push(Box::new(validator));
		self
	}

	/// The field's machine name (form control `name`/`id`).
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// The field's human label.
	pub fn label(&self) -> &'static str {
		self.label
	}

	/// Whether absence alone fails this field.
	pub fn is_required(&self) -> bool {
		self.required_message.is_some()
	}

	/// The message surfaced when a required field is left empty.
	pub fn required_message(&self) -> Option<&str> {
		self.required_message.as_deref()
	}

	/// Checks one value against this field's rules.
	///
	/// Required-ness is evaluated first (on the trimmed value); validators
	/// then run against the raw input. Optional fields accept empty input
	/// unconditionally.
	pub fn check(&self, value: &str) -> Option<String> {
		if value.trim().is_empty() {
			return self.required_message.clone();
		}
		for validator in &self.validators {
			if let Err(error) = validator.validate(value) {
				return Some(error.message().to_string());
			}
		}
		None
	}
}

impl std::fmt::Debug for FieldSpec {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FieldSpec")
			.field("name", &self.name)
			.field("label", &self.label)
			.field("required", &self.is_required())
			.field("rules", &self.validators.len())
			.finish()
	}
}

/// Validation result: at most one message per failing field.
///
/// Backed by a `BTreeMap` so iteration follows a stable order when errors
/// are rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<&'static str, String>);

impl ValidationErrors {
	/// An empty error map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records `message` for `field`, replacing any previous message.
	pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
		self.0.insert(field, message.into());
	}

	/// The message for `field`, if it failed.
	pub fn message(&self, field: &str) -> Option<&str> {
		self.0.get(field).map(String::as_str)
	}

	/// True when every field passed.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Number of failing fields.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Iterates `(field, message)` pairs in stable field order.
	pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
		self.0.iter().map(|(&field, message)| (field, message.as_str()))
	}
}

/// An ordered collection of [`FieldSpec`]s plus the one routine that
/// validates a value snapshot against all of them.
#[derive(Debug)]
pub struct FormSchema {
	fields: Vec<FieldSpec>,
}

impl FormSchema {
	/// Creates a schema from its field registrations.
	pub fn new(fields: Vec<FieldSpec>) -> Self {
		Self { fields }
	}

	/// The fields in registration (and rendering) order.
	pub fn fields(&self) -> &[FieldSpec] {
		&self.fields
	}

	/// Looks a field up by name.
	pub fn field(&self, name: &str) -> Option<&FieldSpec> {
		self.fields.iter().find(|field| field.name() == name)
	}

	/// Validates a snapshot of field values against every field.
	///
	/// Missing entries are treated as empty input, so required fields fail
	/// with their required-message. All failing fields are reported
	/// simultaneously, not just the first.
	pub fn validate(&self, values: &HashMap<&'static str, String>) -> ValidationErrors {
		let mut errors = ValidationErrors::new();
		for field in &self.fields {
			let value = values.get(field.name()).map(String::as_str).unwrap_or("");
			if let Some(message) = field.check(value) {
				errors.insert(field.name(), message);
			}
		}
		errors
	}
}
