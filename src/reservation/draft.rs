//! The typed reservation draft.
//!
//! A [`ReservationDraft`] is built from the form's string values only after
//! schema validation has passed. It is transient: owned by the form for the
//! duration of one submission, handed to the observability sink, and never
//! persisted.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use crate::reservation::schema::fields;

/// The nine bookable half-hour slots, 5:00 PM through 9:00 PM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSlot {
	FivePm,
	FiveThirtyPm,
	SixPm,
	SixThirtyPm,
	SevenPm,
	SevenThirtyPm,
	EightPm,
	EightThirtyPm,
	NinePm,
}

impl TimeSlot {
	/// Every slot, in menu order.
	pub const ALL: [TimeSlot; 9] = [
		TimeSlot::FivePm,
		TimeSlot::FiveThirtyPm,
		TimeSlot::SixPm,
		TimeSlot::SixThirtyPm,
		TimeSlot::SevenPm,
		TimeSlot::SevenThirtyPm,
		TimeSlot::EightPm,
		TimeSlot::EightThirtyPm,
		TimeSlot::NinePm,
	];

	/// The wire value carried by the form control (24-hour `HH:MM`).
	pub fn value(self) -> &'static str {
		match self {
			TimeSlot::FivePm => "17:00",
			TimeSlot::FiveThirtyPm => "17:30",
			TimeSlot::SixPm => "18:00",
			TimeSlot::SixThirtyPm => "18:30",
			TimeSlot::SevenPm => "19:00",
			TimeSlot::SevenThirtyPm => "19:30",
			TimeSlot::EightPm => "20:00",
			TimeSlot::EightThirtyPm => "20:30",
			TimeSlot::NinePm => "21:00",
		}
	}

	/// The label shown to the user.
	pub fn label(self) -> &'static str {
		match self {
			TimeSlot::FivePm => "5:00 PM",
			TimeSlot::FiveThirtyPm => "5:30 PM",
			TimeSlot::SixPm => "6:00 PM",
			TimeSlot::SixThirtyPm => "6:30 PM",
			TimeSlot::SevenPm => "7:00 PM",
			TimeSlot::SevenThirtyPm => "7:30 PM",
			TimeSlot::EightPm => "8:00 PM",
			TimeSlot::EightThirtyPm => "8:30 PM",
			TimeSlot::NinePm => "9:00 PM",
		}
	}

	/// Parses a wire value back into a slot.
	pub fn from_value(value: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|slot| slot.value() == value)
	}
}

impl Serialize for TimeSlot {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.value())
	}
}

/// Optional special-occasion tag. Free choice, no validation: unknown wire
/// values are treated as no selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occasion {
	Birthday,
	Anniversary,
	DateNight,
	Business,
	Other,
}

impl Occasion {
	/// Every occasion, in menu order.
	pub const ALL: [Occasion; 5] = [
		Occasion::Birthday,
		Occasion::Anniversary,
		Occasion::DateNight,
		Occasion::Business,
		Occasion::Other,
	];

	/// The wire value carried by the form control.
	pub fn value(self) -> &'static str {
		match self {
			Occasion::Birthday => "birthday",
			Occasion::Anniversary => "anniversary",
			Occasion::DateNight => "date",
			Occasion::Business => "business",
			Occasion::Other => "other",
		}
	}

	/// The label shown to the user.
	pub fn label(self) -> &'static str {
		match self {
			Occasion::Birthday => "Birthday",
			Occasion::Anniversary => "Anniversary",
			Occasion::DateNight => "Date Night",
			Occasion::Business => "Business Dinner",
			Occasion::Other => "Other",
		}
	}

	/// Parses a wire value back into an occasion.
	pub fn from_value(value: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|occasion| occasion.value() == value)
	}
}

impl Serialize for Occasion {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.value())
	}
}

/// Raised when a value snapshot cannot be lifted into a typed draft.
///
/// Unreachable through the UI once schema validation has passed; kept so the
/// conversion never panics when driven programmatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
	/// A required field was empty.
	#[error("missing required field `{0}`")]
	Missing(&'static str),
	/// A field value could not be parsed into its typed form.
	#[error("invalid value for field `{0}`")]
	Invalid(&'static str),
}

impl DraftError {
	/// The field the error belongs to.
	pub fn field(&self) -> &'static str {
		match self {
			DraftError::Missing(field) | DraftError::Invalid(field) => field,
		}
	}
}

/// One validated, in-memory reservation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservationDraft {
	pub name: String,
	pub email: String,
	pub phone: String,
	pub date: NaiveDate,
	pub time: TimeSlot,
	pub guests: u8,
	pub occasion: Option<Occasion>,
	pub requests: Option<String>,
}

impl ReservationDraft {
	/// Lifts a snapshot of raw form values into a typed draft.
	pub fn from_values(values: &HashMap<&'static str, String>) -> Result<Self, DraftError> {
		let name = required_text(values, fields::NAME)?;
		let email = required_text(values, fields::EMAIL)?;
		let phone = required_text(values, fields::PHONE)?;

		let date_raw = required_text(values, fields::DATE)?;
		let date = NaiveDate::parse_from_str(&date_raw, "%Y-%m-%d")
			.map_err(|_| DraftError::Invalid(fields::DATE))?;

		let time_raw = required_text(values, fields::TIME)?;
		let time = TimeSlot::from_value(&time_raw).ok_or(DraftError::Invalid(fields::TIME))?;

		let guests_raw = required_text(values, fields::GUESTS)?;
		let guests: u8 = guests_raw
			.parse()
			.ok()
			.filter(|count| (1..=8).contains(count))
			.ok_or(DraftError::Invalid(fields::GUESTS))?;

		let occasion = optional_text(values, fields::OCCASION)
			.as_deref()
			.and_then(Occasion::from_value);
		let requests = optional_text(values, fields::REQUESTS);

		Ok(Self {
			name,
			email,
			phone,
			date,
			time,
			guests,
			occasion,
			requests,
		})
	}
}

fn required_text(
	values: &HashMap<&'static str, String>,
	field: &'static str,
) -> Result<String, DraftError> {
	match values.get(field) {
		Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
		_ => Err(DraftError::Missing(field)),
	}
}

fn optional_text(values: &HashMap<&'static str, String>, field: &'static str) -> Option<String> {
	values
		.get(field)
		.map(|value| value.trim())
		.filter(|value| !value.is_empty())
		.map(str::to_string)
}
