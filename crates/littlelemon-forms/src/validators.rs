//! Field validators.
//!
//! Each validator checks one rule against a string value and reports a
//! [`FieldError::Validation`] with its configured message on failure.
//! Validators never see empty input: required-ness is checked first by
//! [`FieldSpec::check`](crate::schema::FieldSpec::check), and optional fields
//! skip their validators entirely when left blank.

use crate::error::{FieldError, FieldResult};
use regex::Regex;
use std::sync::LazyLock;

// `local@domain.tld` with a 2+ letter TLD, case-insensitive.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$")
		.expect("EMAIL_REGEX: invalid regex pattern")
});

// International-style number: optional leading `+`, then 1-16 digits, the
// first of which is non-zero.
static PHONE_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("PHONE_REGEX: invalid regex pattern"));

/// A single synchronous validation rule over a string value.
pub trait Validator {
	/// Returns `Ok(())` when `value` satisfies the rule, or the message to
	/// surface next to the field when it does not.
	fn validate(&self, value: &str) -> FieldResult<()>;
}

/// Validates that a value is a well-formed email address
/// (`local@domain.tld`, case-insensitive).
///
/// # Examples
///
/// ```
/// use littlelemon_forms::{EmailValidator, Validator};
///
/// let validator = EmailValidator::new("Invalid email address");
/// assert!(validator.validate("john@example.com").is_ok());
/// assert!(validator.validate("JOHN@EXAMPLE.COM").is_ok());
/// assert!(validator.validate("john@example").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct EmailValidator {
	message: String,
}

impl EmailValidator {
	/// Creates the validator with the message reported on failure.
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
		}
	}
}

impl Validator for EmailValidator {
	fn validate(&self, value: &str) -> FieldResult<()> {
		if EMAIL_REGEX.is_match(value) {
			Ok(())
		} else {
			Err(FieldError::Validation(self.message.clone()))
		}
	}
}

/// Validates an international-style phone number: optional leading `+`,
/// then 1-16 digits with a non-zero first digit.
///
/// # Examples
///
/// ```
/// use littlelemon_forms::{PhoneValidator, Validator};
///
/// let validator = PhoneValidator::new("Invalid phone number");
/// assert!(validator.validate("1234567890").is_ok());
/// assert!(validator.validate("+441234567890").is_ok());
/// assert!(validator.validate("abc123").is_err());
/// assert!(validator.validate("0123").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PhoneValidator {
	message: String,
}

impl PhoneValidator {
	/// Creates the validator with the message reported on failure.
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
		}
	}
}

impl Validator for PhoneValidator {
	fn validate(&self, value: &str) -> FieldResult<()> {
		if PHONE_REGEX.is_match(value) {
			Ok(())
		} else {
			Err(FieldError::Validation(self.message.clone()))
		}
	}
}

/// Validates a minimum character count.
#[derive(Debug, Clone)]
pub struct MinLengthValidator {
	min: usize,
	message: String,
}

impl MinLengthValidator {
	/// Creates the validator; values shorter than `min` characters fail.
	pub fn new(min: usize, message: impl Into<String>) -> Self {
		Self {
			min,
			message: message.into(),
		}
	}
}

impl Validator for MinLengthValidator {
	fn validate(&self, value: &str) -> FieldResult<()> {
		if value.chars().count() >= self.min {
			Ok(())
		} else {
			Err(FieldError::Validation(self.message.clone()))
		}
	}
}

/// Validates membership in a fixed set of allowed values.
#[derive(Debug, Clone)]
pub struct ChoiceValidator {
	choices: Vec<String>,
	message: String,
}

impl ChoiceValidator {
	/// Creates the validator over the allowed `choices`.
	pub fn new<I, S>(choices: I, message: impl Into<String>) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			choices: choices.into_iter().map(Into::into).collect(),
			message: message.into(),
		}
	}
}

impl Validator for ChoiceValidator {
	fn validate(&self, value: &str) -> FieldResult<()> {
		if self.choices.iter().any(|choice| choice == value) {
			Ok(())
		} else {
			Err(FieldError::Validation(self.message.clone()))
		}
	}
}

/// Validates that a value parses as an integer within an inclusive range.
#[derive(Debug, Clone)]
pub struct RangeValidator {
	min: i64,
	max: i64,
	message: String,
}

impl RangeValidator {
	/// Creates the validator for integers in `min..=max`.
	pub fn new(min: i64, max: i64, message: impl Into<String>) -> Self {
		Self {
			min,
			max,
			message: message.into(),
		}
	}
}

impl Validator for RangeValidator {
	fn validate(&self, value: &str) -> FieldResult<()> {
		match value.parse::<i64>() {
			Ok(number) if number >= self.min && number <= self.max => Ok(()),
			_ => Err(FieldError::Validation(self.message.clone())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use rstest::rstest;

	// =========================================================================
	// EmailValidator tests
	// =========================================================================

	#[rstest]
	#[case("john@example.com")]
	#[case("JOHN@EXAMPLE.COM")]
	#[case("john.doe@example.com")]
	#[case("john+tag@example.co.uk")]
	#[case("j_d%x-1@sub.example.org")]
	fn test_email_validator_valid(#[case] email: &str) {
		// Arrange
		let validator = EmailValidator::new("Invalid email address");

		// Act
		let result = validator.validate(email);

		// Assert
		assert!(result.is_ok(), "Expected '{email}' to be a valid email");
	}

	#[rstest]
	#[case("plainaddress")]
	#[case("@example.com")]
	#[case("john@")]
	#[case("john@example")]
	#[case("john@example.c")]
	#[case("john doe@example.com")]
	#[case("john@exa mple.com")]
	fn test_email_validator_invalid(#[case] email: &str) {
		// Arrange
		let validator = EmailValidator::new("Invalid email address");

		// Act
		let result = validator.validate(email);

		// Assert
		assert!(result.is_err(), "Expected '{email}' to be an invalid email");
	}

	#[rstest]
	fn test_email_validator_message() {
		// Arrange
		let validator = EmailValidator::new("Invalid email address");

		// Act
		let result = validator.validate("not-an-email");

		// Assert
		match result {
			Err(FieldError::Validation(message)) => {
				assert_eq!(message, "Invalid email address");
			}
			_ => panic!("Expected Validation error"),
		}
	}

	// =========================================================================
	// PhoneValidator tests
	// =========================================================================

	#[rstest]
	#[case("1234567890")]
	#[case("+1234567890")]
	#[case("9")]
	#[case("+9")]
	#[case("1234567890123456")] // 16 digits
	fn test_phone_validator_valid(#[case] phone: &str) {
		// Arrange
		let validator = PhoneValidator::new("Invalid phone number");

		// Act
		let result = validator.validate(phone);

		// Assert
		assert!(result.is_ok(), "Expected '{phone}' to be a valid phone");
	}

	#[rstest]
	#[case("abc123")]
	#[case("0123456789")] // leading zero
	#[case("+0123")]
	#[case("123-456-7890")]
	#[case("12345678901234567")] // 17 digits
	#[case("++123")]
	#[case("12 34")]
	fn test_phone_validator_invalid(#[case] phone: &str) {
		// Arrange
		let validator = PhoneValidator::new("Invalid phone number");

		// Act
		let result = validator.validate(phone);

		// Assert
		assert!(result.is_err(), "Expected '{phone}' to be an invalid phone");
	}

	proptest! {
		// Any digit string led by a non-digit, non-plus character is rejected.
		#[test]
		fn test_phone_validator_rejects_non_numeric_prefix(
			prefix in "[a-zA-Z]{1,3}",
			digits in "[0-9]{1,10}",
		) {
			let validator = PhoneValidator::new("Invalid phone number");
			prop_assert!(validator.validate(&format!("{prefix}{digits}")).is_err());
		}

		// 1-16 digits with a non-zero first digit are always accepted.
		#[test]
		fn test_phone_validator_accepts_plain_numbers(
			first in "[1-9]",
			rest in "[0-9]{0,15}",
		) {
			let validator = PhoneValidator::new("Invalid phone number");
			prop_assert!(validator.validate(&format!("{first}{rest}")).is_ok());
		}
	}

	// =========================================================================
	// MinLengthValidator tests
	// =========================================================================

	#[rstest]
	#[case("Jo", true)]
	#[case("John Doe", true)]
	#[case("J", false)]
	fn test_min_length_validator(#[case] value: &str, #[case] expected_ok: bool) {
		// Arrange
		let validator = MinLengthValidator::new(2, "Name must be at least 2 characters");

		// Act
		let result = validator.validate(value);

		// Assert
		assert_eq!(result.is_ok(), expected_ok);
	}

	#[rstest]
	fn test_min_length_counts_characters_not_bytes() {
		// Arrange
		let validator = MinLengthValidator::new(2, "too short");

		// Act + Assert: two non-ASCII characters, four bytes
		assert!(validator.validate("éé").is_ok());
	}

	// =========================================================================
	// ChoiceValidator tests
	// =========================================================================

	#[rstest]
	fn test_choice_validator() {
		// Arrange
		let validator =
			ChoiceValidator::new(["17:00", "17:30", "18:00"], "Select a valid reservation time");

		// Act + Assert
		assert!(validator.validate("17:30").is_ok());
		assert!(validator.validate("12:34").is_err());
		assert!(validator.validate("").is_err());
	}

	// =========================================================================
	// RangeValidator tests
	// =========================================================================

	#[rstest]
	#[case("1", true)]
	#[case("8", true)]
	#[case("0", false)]
	#[case("9", false)]
	#[case("2.5", false)]
	#[case("two", false)]
	fn test_range_validator(#[case] value: &str, #[case] expected_ok: bool) {
		// Arrange
		let validator = RangeValidator::new(1, 8, "Number of guests must be between 1 and 8");

		// Act
		let result = validator.validate(value);

		// Assert
		assert_eq!(result.is_ok(), expected_ok);
	}
}
