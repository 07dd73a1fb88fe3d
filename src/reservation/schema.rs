//! Declarative registration of the reservation form's fields.
//!
//! This schema is the single source of truth for the validation contract:
//! the required messages and rules here are exactly what the UI surfaces and
//! what the tests assert. Rendering and validation both consume it — no
//! per-field rules live anywhere else.

use littlelemon_forms::{
	ChoiceValidator, EmailValidator, FieldSpec, FormSchema, MinLengthValidator, PhoneValidator,
	RangeValidator,
};

use crate::reservation::draft::TimeSlot;

/// Machine names of the form's fields (control `name`/`id` attributes).
pub mod fields {
	pub const NAME: &str = "name";
	pub const EMAIL: &str = "email";
	pub const PHONE: &str = "phone";
	pub const DATE: &str = "date";
	pub const TIME: &str = "time";
	pub const GUESTS: &str = "guests";
	pub const OCCASION: &str = "occasion";
	pub const REQUESTS: &str = "requests";
}

/// Builds the reservation form schema.
///
/// Date is presence-only by design: the picker constrains its minimum to
/// today in the UI, but logical validation does not re-check the range.
pub fn reservation_schema() -> FormSchema {
	FormSchema::new(vec![
		FieldSpec::new(fields::NAME, "Full Name")
			.required("Name is required")
			.validator(MinLengthValidator::new(
				2,
				"Name must be at least 2 characters",
			)),
		FieldSpec::new(fields::EMAIL, "Email Address")
			.required("Email is required")
			.validator(EmailValidator::new("Invalid email address")),
		FieldSpec::new(fields::PHONE, "Phone Number")
			.required("Phone number is required")
			.validator(PhoneValidator::new("Invalid phone number")),
		FieldSpec::new(fields::DATE, "Reservation Date").required("Date is required"),
		FieldSpec::new(fields::TIME, "Reservation Time")
			.required("Time is required")
			.validator(ChoiceValidator::new(
				TimeSlot::ALL.map(TimeSlot::value),
				"Select a valid reservation time",
			)),
		FieldSpec::new(fields::GUESTS, "Number of Guests")
			.required("Number of guests is required")
			.validator(RangeValidator::new(
				1,
				8,
				"Number of guests must be between 1 and 8",
			)),
		FieldSpec::new(fields::OCCASION, "Special Occasion (Optional)"),
		FieldSpec::new(fields::REQUESTS, "Special Requests (Optional)"),
	])
}
