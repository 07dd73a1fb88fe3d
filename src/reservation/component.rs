//! DOM rendering of the reservation form.
//!
//! The view renders once into live DOM nodes and keeps a set of effects
//! alive that mirror the controller's signals into the tree: per-field error
//! spans, the `error` class on failing groups, `aria-invalid` wiring, the
//! success banner, and the field controls themselves (so a successful submit
//! visibly clears them).

use std::cell::RefCell;
use std::rc::Rc;

use littlelemon_pages::builder::{
	button, div, form, h2, input, label, option, section, select, span, textarea,
};
use littlelemon_pages::component::Component;
use littlelemon_pages::dom::{DomError, Element};
use littlelemon_reactive::Effect;

use crate::reservation::controller::ReservationForm;
use crate::reservation::draft::{Occasion, TimeSlot};
use crate::reservation::schema::fields;

/// Text of the success acknowledgment.
pub const SUCCESS_MESSAGE: &str = "Thank you! Your reservation has been submitted successfully.";

/// The reservation form's DOM view, wrapping its controller.
pub struct ReservationFormView {
	controller: ReservationForm,
	effects: Rc<RefCell<Vec<Effect>>>,
}

impl ReservationFormView {
	/// Wraps a controller for rendering.
	pub fn new(controller: ReservationForm) -> Self {
		Self {
			controller,
			effects: Rc::new(RefCell::new(Vec::new())),
		}
	}

	/// The underlying controller.
	pub fn controller(&self) -> &ReservationForm {
		&self.controller
	}

	fn keep(&self, effect: Effect) {
		self.effects.borrow_mut().push(effect);
	}

	fn label_text(&self, name: &str) -> String {
		match self.controller.state().schema().field(name) {
			Some(spec) if spec.is_required() => format!("{} *", spec.label()),
			Some(spec) => spec.label().to_string(),
			None => name.to_string(),
		}
	}

	/// Wires one control's value to the controller, both ways.
	fn bind_value(&self, name: &'static str, control: &Element, event: &str) {
		// DOM -> state, as the user types or picks
		let state = self.controller.state().clone();
		let control_for_read = control.clone();
		control
			.on(event, move || {
				state.set_value(name, control_for_read.value());
			})
			.forget();

		// state -> DOM, so clearing the draft clears the control
		if let Some(signal) = self.controller.state().value_signal(name) {
			let signal = signal.clone();
			let control_for_write = control.clone();
			self.keep(Effect::new(move || {
				let value = signal.get();
				if control_for_write.value() != value {
					control_for_write.set_value(&value);
				}
			}));
		}
	}

	/// Wraps a control in a labeled form group with a reactive error span.
	fn form_group(&self, name: &'static str, control: Element) -> Result<Element, DomError> {
		let group = div()?.class("form-group").build();

		let field_label = label()?.attr("for", name).text(&self.label_text(name)).build();
		group.append_child(&field_label)?;
		group.append_child(&control)?;

		let error_id = format!("{name}-error");
		let error_span = span()?
			.id(&error_id)
			.class("error-message")
			.attr("role", "alert")
			.build();
		group.append_child(&error_span)?;

		let errors = self.controller.state().errors_signal().clone();
		let group_ref = group.clone();
		let control_ref = control.clone();
		self.keep(Effect::new(move || {
			match errors.get().message(name) {
				Some(message) => {
					error_span.set_text(message);
					group_ref.add_class("error");
					let _ = control_ref.set_attribute("aria-invalid", "true");
					let _ = control_ref.set_attribute("aria-describedby", &error_id);
				}
				None => {
					error_span.clear_text();
					group_ref.remove_class("error");
					let _ = control_ref.set_attribute("aria-invalid", "false");
					control_ref.remove_attribute("aria-describedby");
				}
			}
		}));

		Ok(group)
	}

	fn text_field(&self, name: &'static str, input_type: &str) -> Result<Element, DomError> {
		let control = input()?
			.id(name)
			.attr("name", name)
			.attr("type", input_type)
			.build();
		self.bind_value(name, &control, "input");
		self.form_group(name, control)
	}

	fn date_field(&self) -> Result<Element, DomError> {
		let control = input()?
			.id(fields::DATE)
			.attr("name", fields::DATE)
			.attr("type", "date")
			.attr("min", &today_value())
			.build();
		self.bind_value(fields::DATE, &control, "change");
		self.form_group(fields::DATE, control)
	}

	fn select_field(
		&self,
		name: &'static str,
		placeholder: &str,
		options: &[(String, String)],
	) -> Result<Element, DomError> {
		let mut control = select()?
			.id(name)
			.attr("name", name)
			.child(option()?.attr("value", "").text(placeholder).build())?;
		for (value, text) in options {
			control = control.child(option()?.attr("value", value).text(text).build())?;
		}
		let control = control.build();
		self.bind_value(name, &control, "change");
		self.form_group(name, control)
	}

	fn requests_field(&self) -> Result<Element, DomError> {
		let control = textarea()?
			.id(fields::REQUESTS)
			.attr("name", fields::REQUESTS)
			.attr("rows", "3")
			.attr(
				"placeholder",
				"Any dietary restrictions, seating preferences, or special requests...",
			)
			.build();
		self.bind_value(fields::REQUESTS, &control, "input");
		self.form_group(fields::REQUESTS, control)
	}

	fn success_banner(&self) -> Result<Element, DomError> {
		let banner = div()?
			.class("success-message")
			.attr("role", "alert")
			.attr("aria-live", "polite")
			.attr("hidden", "")
			.text(SUCCESS_MESSAGE)
			.build();

		let submitted = self.controller.submitted_signal().clone();
		let banner_ref = banner.clone();
		self.keep(Effect::new(move || {
			if submitted.get() {
				banner_ref.remove_attribute("hidden");
			} else {
				let _ = banner_ref.set_attribute("hidden", "");
			}
		}));

		Ok(banner)
	}
}

impl Component for ReservationFormView {
	fn render(&self) -> Result<Element, DomError> {
		let booking_form = form()?
			.id("booking-form")
			.class("booking-form")
			.attr("novalidate", "")
			.attr("aria-labelledby", "booking-title")
			.on_submit({
				let controller = self.controller.clone();
				move || {
					let _ = controller.submit();
				}
			})
			.build();

		booking_form
			.append_child(&h2()?.id("booking-title").text("Reserve Your Table").build())?;
		booking_form.append_child(&self.success_banner()?)?;

		booking_form.append_child(&self.text_field(fields::NAME, "text")?)?;
		booking_form.append_child(&self.text_field(fields::EMAIL, "email")?)?;
		booking_form.append_child(&self.text_field(fields::PHONE, "tel")?)?;
		booking_form.append_child(&self.date_field()?)?;

		let time_options: Vec<(String, String)> = TimeSlot::ALL
			.iter()
			.map(|slot| (slot.value().to_string(), slot.label().to_string()))
			.collect();
		booking_form.append_child(&self.select_field(
			fields::TIME,
			"Select a time",
			&time_options,
		)?)?;

		let guest_options: Vec<(String, String)> = (1u8..=8)
			.map(|count| {
				let plural = if count == 1 { "Guest" } else { "Guests" };
				(count.to_string(), format!("{count} {plural}"))
			})
			.collect();
		booking_form.append_child(&self.select_field(
			fields::GUESTS,
			"Select number of guests",
			&guest_options,
		)?)?;

		let occasion_options: Vec<(String, String)> = Occasion::ALL
			.iter()
			.map(|occasion| (occasion.value().to_string(), occasion.label().to_string()))
			.collect();
		booking_form.append_child(&self.select_field(
			fields::OCCASION,
			"Select an occasion",
			&occasion_options,
		)?)?;

		booking_form.append_child(&self.requests_field()?)?;

		booking_form.append_child(
			&button()?
				.class("submit-button")
				.attr("type", "submit")
				.text("Reserve Table")
				.build(),
		)?;

		let container = section()?
			.class("booking-section")
			.attr("aria-labelledby", "booking-title")
			.child(booking_form)?
			.build();
		Ok(container)
	}

	fn name() -> &'static str {
		"ReservationFormView"
	}
}

/// Today's date in the `YYYY-MM-DD` form the date picker expects, from the
/// browser clock.
fn today_value() -> String {
	let iso = String::from(js_sys::Date::new_0().to_iso_string());
	iso.chars().take(10).collect()
}
