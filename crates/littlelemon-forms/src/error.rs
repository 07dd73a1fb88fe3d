//! Field-level error types.

/// The single error kind a field can produce: a validation failure with a
/// human-readable message. Non-fatal and always recoverable by the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
	/// The value did not satisfy a validation rule.
	#[error("{0}")]
	Validation(String),
}

impl FieldError {
	/// The message shown next to the offending field.
	pub fn message(&self) -> &str {
		match self {
			FieldError::Validation(message) => message,
		}
	}
}

/// Result alias used by validators.
pub type FieldResult<T> = Result<T, FieldError>;
