//! The page footer.

use littlelemon_pages::builder::{div, footer as footer_element, p, span};
use littlelemon_pages::dom::{DomError, Element};

/// Renders the footer landmark.
pub fn footer() -> Result<Element, DomError> {
	let logo = div()?
		.class("footer-logo")
		.attr("aria-label", "Little Lemon Restaurant Logo")
		.child(span()?.text("Little Lemon").build())?
		.build();

	let info = div()?
		.class("footer-info")
		.child(
			p()?
				.text("\u{a9} 2024 Little Lemon Restaurant. All rights reserved.")
				.build(),
		)?
		.child(
			p()?
				.text("123 Mediterranean Ave, Chicago, IL 60601 | (555) 123-4567")
				.build(),
		)?
		.build();

	let container = footer_element()?
		.attr("role", "contentinfo")
		.child(logo)?
		.child(info)?
		.build();
	Ok(container)
}
