//! Browser tests for the reservation form view.
//!
//! Run with: `wasm-pack test --headless --chrome`

#![cfg(target_arch = "wasm32")]

use std::rc::Rc;
use std::time::Duration;

use gloo_timers::future::sleep;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use littlelemon::reservation::component::{ReservationFormView, SUCCESS_MESSAGE};
use littlelemon::reservation::schema::fields;
use littlelemon::reservation::{RecordingSink, ReservationForm};
use littlelemon_pages::component::Component;

wasm_bindgen_test_configure!(run_in_browser);

fn body() -> web_sys::HtmlElement {
	web_sys::window()
		.unwrap()
		.document()
		.unwrap()
		.body()
		.unwrap()
}

fn document() -> web_sys::Document {
	web_sys::window().unwrap().document().unwrap()
}

/// Renders the view into the document and returns the rendered container.
/// The caller removes it when done so ids do not collide across tests.
fn attach(view: &ReservationFormView) -> web_sys::Element {
	let rendered = view.render().unwrap();
	let node = rendered.raw().clone();
	body().append_child(&node).unwrap();
	node
}

fn detach(node: &web_sys::Element) {
	node.remove();
}

fn by_id(id: &str) -> web_sys::Element {
	document()
		.get_element_by_id(id)
		.unwrap_or_else(|| panic!("#{id} not found"))
}

fn set_input_value(id: &str, value: &str) {
	let element = by_id(id);
	if let Some(input) = element.dyn_ref::<web_sys::HtmlInputElement>() {
		input.set_value(value);
	} else if let Some(select) = element.dyn_ref::<web_sys::HtmlSelectElement>() {
		select.set_value(value);
	} else {
		panic!("#{id} is not an input or select");
	}
	let event_type = if element.tag_name().eq_ignore_ascii_case("select") {
		"change"
	} else {
		"input"
	};
	let event = web_sys::Event::new(event_type).unwrap();
	element.dispatch_event(&event).unwrap();
}

fn fill_valid_via_dom() {
	set_input_value(fields::NAME, "John Doe");
	set_input_value(fields::EMAIL, "john@example.com");
	set_input_value(fields::PHONE, "1234567890");
	set_input_value(fields::DATE, "2030-01-01");
	set_input_value(fields::TIME, "19:00");
	set_input_value(fields::GUESTS, "2");
}

fn dispatch_submit() {
	let form = by_id("booking-form");
	let event = web_sys::Event::new("submit").unwrap();
	form.dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn test_renders_every_field_control() {
	let view = ReservationFormView::new(ReservationForm::new());
	let node = attach(&view);

	for id in [
		fields::NAME,
		fields::EMAIL,
		fields::PHONE,
		fields::DATE,
		fields::TIME,
		fields::GUESTS,
		fields::OCCASION,
		fields::REQUESTS,
	] {
		assert!(document().get_element_by_id(id).is_some(), "#{id} missing");
	}

	detach(&node);
}

#[wasm_bindgen_test]
fn test_time_select_offers_the_nine_slots_plus_placeholder() {
	let view = ReservationFormView::new(ReservationForm::new());
	let node = attach(&view);

	let options = by_id(fields::TIME).children();
	assert_eq!(options.length(), 10);

	detach(&node);
}

#[wasm_bindgen_test]
fn test_date_picker_minimum_is_set() {
	let view = ReservationFormView::new(ReservationForm::new());
	let node = attach(&view);

	let min = by_id(fields::DATE).get_attribute("min").unwrap();
	assert_eq!(min.len(), 10, "expected YYYY-MM-DD, got {min}");

	detach(&node);
}

#[wasm_bindgen_test]
fn test_typing_reaches_the_controller() {
	let view = ReservationFormView::new(ReservationForm::new());
	let node = attach(&view);

	set_input_value(fields::NAME, "Jane Doe");
	assert_eq!(view.controller().field(fields::NAME), "Jane Doe");

	detach(&node);
}

#[wasm_bindgen_test]
fn test_empty_submit_surfaces_inline_errors() {
	let view = ReservationFormView::new(ReservationForm::new());
	let node = attach(&view);

	dispatch_submit();

	let email_error = by_id("email-error");
	assert!(
		email_error
			.text_content()
			.unwrap_or_default()
			.to_lowercase()
			.contains("email is required")
	);
	assert_eq!(
		by_id(fields::EMAIL).get_attribute("aria-invalid").as_deref(),
		Some("true")
	);
	// The banner stays hidden on a failed submit.
	let banner = node.query_selector(".success-message").unwrap().unwrap();
	assert!(banner.has_attribute("hidden"));

	detach(&node);
}

#[wasm_bindgen_test]
async fn test_valid_submit_shows_then_hides_the_acknowledgment() {
	let sink = Rc::new(RecordingSink::new());
	let view = ReservationFormView::new(ReservationForm::with_sink(sink.clone()));
	let node = attach(&view);

	fill_valid_via_dom();
	dispatch_submit();

	// Present immediately, with the contract text.
	let banner = node.query_selector(".success-message").unwrap().unwrap();
	assert!(!banner.has_attribute("hidden"));
	assert_eq!(banner.text_content().unwrap_or_default(), SUCCESS_MESSAGE);

	// The draft reached the sink and the controls were cleared.
	assert_eq!(sink.len(), 1);
	let name_input = by_id(fields::NAME)
		.dyn_into::<web_sys::HtmlInputElement>()
		.unwrap();
	assert_eq!(name_input.value(), "");

	// Absent once the fixed window elapses.
	sleep(Duration::from_millis(3200)).await;
	assert!(banner.has_attribute("hidden"));

	detach(&node);
}

#[wasm_bindgen_test]
async fn test_resubmission_restarts_the_window() {
	let view = ReservationFormView::new(ReservationForm::new());
	let node = attach(&view);

	fill_valid_via_dom();
	dispatch_submit();
	sleep(Duration::from_millis(2000)).await;

	// Second submit 2s into the first window; the hide must restart.
	fill_valid_via_dom();
	dispatch_submit();
	sleep(Duration::from_millis(2000)).await;

	// 4s after the first submit, 2s after the second: still visible.
	let banner = node.query_selector(".success-message").unwrap().unwrap();
	assert!(!banner.has_attribute("hidden"));

	sleep(Duration::from_millis(1500)).await;
	assert!(banner.has_attribute("hidden"));

	detach(&node);
}
