//! Thin DOM abstraction over `web-sys`.
//!
//! Wraps the handful of DOM operations the site needs so component code
//! stays free of raw `web_sys` plumbing and `JsValue` error juggling.

use std::fmt;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;

/// Errors from the DOM layer.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomError {
	/// `window` is unavailable (not running in a browser context).
	#[error("no global window object")]
	NoWindow,
	/// `window.document` is unavailable.
	#[error("no document on the global window")]
	NoDocument,
	/// `document.createElement` failed for the given tag.
	#[error("failed to create <{tag}> element: {detail}")]
	CreateElement {
		/// Tag that could not be created.
		tag: String,
		/// Browser-reported detail.
		detail: String,
	},
	/// Any other DOM operation failure.
	#[error("dom operation failed: {0}")]
	Js(String),
}

fn js_detail(value: JsValue) -> String {
	value
		.as_string()
		.unwrap_or_else(|| format!("{value:?}"))
}

/// Handle to `window.document`.
#[derive(Clone)]
pub struct Document {
	inner: web_sys::Document,
}

impl Document {
	/// The global document.
	pub fn global() -> Result<Self, DomError> {
		let window = web_sys::window().ok_or(DomError::NoWindow)?;
		let inner = window.document().ok_or(DomError::NoDocument)?;
		Ok(Self { inner })
	}

	/// Creates an element with the given tag.
	pub fn create_element(&self, tag: &str) -> Result<Element, DomError> {
		let inner = self
			.inner
			.create_element(tag)
			.map_err(|err| DomError::CreateElement {
				tag: tag.to_string(),
				detail: js_detail(err),
			})?;
		Ok(Element { inner })
	}

	/// Looks an element up by id.
	pub fn get_element_by_id(&self, id: &str) -> Option<Element> {
		self.inner
			.get_element_by_id(id)
			.map(|inner| Element { inner })
	}
}

/// A DOM element. Cloning clones the handle, not the node.
#[derive(Clone)]
pub struct Element {
	inner: web_sys::Element,
}

impl Element {
	/// Sets an attribute.
	pub fn set_attribute(&self, name: &str, value: &str) -> Result<(), DomError> {
		self.inner
			.set_attribute(name, value)
			.map_err(|err| DomError::Js(js_detail(err)))
	}

	/// Removes an attribute (no-op when absent).
	pub fn remove_attribute(&self, name: &str) {
		let _ = self.inner.remove_attribute(name);
	}

	/// Whether the attribute is present.
	pub fn has_attribute(&self, name: &str) -> bool {
		self.inner.has_attribute(name)
	}

	/// The attribute's current value.
	pub fn attribute(&self, name: &str) -> Option<String> {
		self.inner.get_attribute(name)
	}

	/// Appends `child` to this element.
	pub fn append_child(&self, child: &Element) -> Result<(), DomError> {
		self.inner
			.append_child(&child.inner)
			.map(|_| ())
			.map_err(|err| DomError::Js(js_detail(err)))
	}

	/// Replaces the element's text content.
	pub fn set_text(&self, text: &str) {
		self.inner.set_text_content(Some(text));
	}

	/// Clears the element's text content.
	pub fn clear_text(&self) {
		self.inner.set_text_content(None);
	}

	/// The element's text content ("" when none).
	pub fn text(&self) -> String {
		self.inner.text_content().unwrap_or_default()
	}

	/// Adds a class to the element's class list.
	pub fn add_class(&self, class: &str) {
		let _ = self.inner.class_list().add_1(class);
	}

	/// Removes a class from the element's class list.
	pub fn remove_class(&self, class: &str) {
		let _ = self.inner.class_list().remove_1(class);
	}

	/// Whether the class list contains `class`.
	pub fn has_class(&self, class: &str) -> bool {
		self.inner.class_list().contains(class)
	}

	/// Current value of a form control (`<input>`, `<select>`,
	/// `<textarea>`); empty for other elements.
	pub fn value(&self) -> String {
		if let Some(input) = self.inner.dyn_ref::<web_sys::HtmlInputElement>() {
			input.value()
		} else if let Some(select) = self.inner.dyn_ref::<web_sys::HtmlSelectElement>() {
			select.value()
		} else if let Some(textarea) = self.inner.dyn_ref::<web_sys::HtmlTextAreaElement>() {
			textarea.value()
		} else {
			String::new()
		}
	}

	/// Sets the value of a form control; no-op for other elements.
	pub fn set_value(&self, value: &str) {
		if let Some(input) = self.inner.dyn_ref::<web_sys::HtmlInputElement>() {
			input.set_value(value);
		} else if let Some(select) = self.inner.dyn_ref::<web_sys::HtmlSelectElement>() {
			select.set_value(value);
		} else if let Some(textarea) = self.inner.dyn_ref::<web_sys::HtmlTextAreaElement>() {
			textarea.set_value(value);
		}
	}

	/// Attaches a listener that ignores the event object.
	pub fn on(&self, event_type: &str, mut callback: impl FnMut() + 'static) -> EventHandle {
		self.on_event(event_type, move |_event| callback())
	}

	/// Attaches a listener that receives the event object.
	pub fn on_event(
		&self,
		event_type: &str,
		callback: impl FnMut(web_sys::Event) + 'static,
	) -> EventHandle {
		let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut(web_sys::Event)>);
		let _ = self
			.inner
			.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref());
		EventHandle {
			target: self.inner.clone(),
			event_type: event_type.to_string(),
			closure: Some(closure),
		}
	}

	/// Smooth-scrolls the viewport to bring this element into view.
	pub fn scroll_into_view_smooth(&self) {
		let options = web_sys::ScrollIntoViewOptions::new();
		options.set_behavior(web_sys::ScrollBehavior::Smooth);
		self.inner
			.scroll_into_view_with_scroll_into_view_options(&options);
	}

	/// Escape hatch to the underlying `web_sys` element.
	pub fn raw(&self) -> &web_sys::Element {
		&self.inner
	}
}

impl fmt::Debug for Element {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Element")
			.field("tag", &self.inner.tag_name())
			.finish()
	}
}

/// RAII handle for an attached event listener.
///
/// Dropping the handle detaches the listener. Listeners that should live for
/// the whole page lifetime call [`EventHandle::forget`] instead, which leaks
/// the closure deliberately — the single-page shell is never unmounted.
pub struct EventHandle {
	target: web_sys::Element,
	event_type: String,
	closure: Option<Closure<dyn FnMut(web_sys::Event)>>,
}

impl EventHandle {
	/// Keeps the listener attached forever.
	pub fn forget(mut self) {
		if let Some(closure) = self.closure.take() {
			closure.forget();
		}
	}
}

impl Drop for EventHandle {
	fn drop(&mut self) {
		if let Some(closure) = self.closure.take() {
			let _ = self
				.target
				.remove_event_listener_with_callback(
					&self.event_type,
					closure.as_ref().unchecked_ref(),
				);
		}
	}
}
