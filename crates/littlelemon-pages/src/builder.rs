//! Fluent HTML element builder.
//!
//! Thin sugar over [`Document::create_element`](crate::dom::Document) for
//! composing static page structure:
//!
//! ```ignore
//! let card = article()?
//!     .class("feature-card")
//!     .child(h3()?.text("Fresh Ingredients").build())?
//!     .build();
//! ```
//!
//! Event listeners registered through the builder live for the page
//! lifetime: the handles are forgotten at [`ElementBuilder::build`], because
//! the single-page shell never unmounts. Components that need scoped
//! listeners attach them through [`Element::on`](crate::dom::Element::on)
//! directly and keep the returned handles.

use crate::dom::{Document, DomError, Element, EventHandle};

/// Builder for one DOM element.
pub struct ElementBuilder {
	element: Element,
	event_handles: Vec<EventHandle>,
}

impl ElementBuilder {
	/// Wraps an already-created element.
	pub fn new(element: Element) -> Self {
		Self {
			element,
			event_handles: Vec::new(),
		}
	}

	/// Sets the `class` attribute (space-separated for multiple classes).
	pub fn class(self, class: &str) -> Self {
		let _ = self.element.set_attribute("class", class);
		self
	}

	/// Sets the `id` attribute.
	pub fn id(self, id: &str) -> Self {
		let _ = self.element.set_attribute("id", id);
		self
	}

	/// Sets an arbitrary attribute.
	pub fn attr(self, name: &str, value: &str) -> Self {
		let _ = self.element.set_attribute(name, value);
		self
	}

	/// Sets the text content.
	pub fn text(self, text: &str) -> Self {
		self.element.set_text(text);
		self
	}

	/// Appends a child element.
	pub fn child(self, child: Element) -> Result<Self, DomError> {
		self.element.append_child(&child)?;
		Ok(self)
	}

	/// Adds a listener for any event type.
	pub fn on(mut self, event_type: &str, callback: impl FnMut() + 'static) -> Self {
		let handle = self.element.on(event_type, callback);
		self.event_handles.push(handle);
		self
	}

	/// Adds a `click` listener.
	#[inline]
	pub fn on_click(self, callback: impl FnMut() + 'static) -> Self {
		self.on("click", callback)
	}

	/// Adds an `input` listener (text inputs and textareas).
	#[inline]
	pub fn on_input(self, callback: impl FnMut() + 'static) -> Self {
		self.on("input", callback)
	}

	/// Adds a `change` listener (selects).
	#[inline]
	pub fn on_change(self, callback: impl FnMut() + 'static) -> Self {
		self.on("change", callback)
	}

	/// Adds a `submit` listener that suppresses the browser's native form
	/// submission before invoking `callback`.
	pub fn on_submit(mut self, mut callback: impl FnMut() + 'static) -> Self {
		let handle = self.element.on_event("submit", move |event| {
			event.prevent_default();
			callback();
		});
		self.event_handles.push(handle);
		self
	}

	/// Finalizes the element. Listeners registered on the builder are kept
	/// attached for the page lifetime.
	pub fn build(self) -> Element {
		for handle in self.event_handles {
			handle.forget();
		}
		self.element
	}
}

/// Macro for defining HTML element constructor functions.
macro_rules! define_element {
	($(#[$meta:meta])* $name:ident, $tag:literal) => {
		$(#[$meta])*
		pub fn $name() -> Result<ElementBuilder, DomError> {
			let document = Document::global()?;
			let element = document.create_element($tag)?;
			Ok(ElementBuilder::new(element))
		}
	};
}

define_element!(
	/// Creates a `<div>` element.
	div, "div"
);

define_element!(
	/// Creates a `<span>` element.
	span, "span"
);

define_element!(
	/// Creates a `<p>` element.
	p, "p"
);

define_element!(
	/// Creates a `<button>` element.
	button, "button"
);

define_element!(
	/// Creates an `<input>` element.
	input, "input"
);

define_element!(
	/// Creates a `<textarea>` element.
	textarea, "textarea"
);

define_element!(
	/// Creates a `<select>` element.
	select, "select"
);

define_element!(
	/// Creates an `<option>` element.
	option, "option"
);

define_element!(
	/// Creates a `<form>` element.
	form, "form"
);

define_element!(
	/// Creates a `<label>` element.
	label, "label"
);

define_element!(
	/// Creates an `<a>` element.
	a, "a"
);

define_element!(
	/// Creates an `<img>` element.
	img, "img"
);

define_element!(
	/// Creates an `<h1>` element.
	h1, "h1"
);

define_element!(
	/// Creates an `<h2>` element.
	h2, "h2"
);

define_element!(
	/// Creates an `<h3>` element.
	h3, "h3"
);

define_element!(
	/// Creates a `<ul>` element.
	ul, "ul"
);

define_element!(
	/// Creates an `<li>` element.
	li, "li"
);

define_element!(
	/// Creates a `<header>` element.
	header, "header"
);

define_element!(
	/// Creates a `<footer>` element.
	footer, "footer"
);

define_element!(
	/// Creates a `<nav>` element.
	nav, "nav"
);

define_element!(
	/// Creates a `<main>` element.
	main, "main"
);

define_element!(
	/// Creates a `<section>` element.
	section, "section"
);

define_element!(
	/// Creates an `<article>` element.
	article, "article"
);
