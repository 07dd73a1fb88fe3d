//! The hero banner.

use littlelemon_pages::builder::{button, div, h1, img, p, section};
use littlelemon_pages::dom::{DomError, Element};

const TAGLINE: &str = "A charming neighborhood bistro that serves simple food and classic \
	cocktails in a lively but casual environment.";

const HERO_IMAGE_URL: &str = "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80";

const HERO_IMAGE_ALT: &str =
	"Interior of Little Lemon restaurant showing elegant dining area with warm lighting";

/// Renders the hero banner. `on_reserve` runs when the call-to-action
/// button is activated.
pub fn hero(on_reserve: impl FnMut() + 'static) -> Result<Element, DomError> {
	let content = div()?
		.class("hero-content")
		.child(h1()?.id("hero-title").text("Little Lemon").build())?
		.child(p()?.text(TAGLINE).build())?
		.child(
			button()?
				.class("cta-button")
				.text("Reserve a Table")
				.on_click(on_reserve)
				.build(),
		)?
		.build();

	let image = div()?
		.class("hero-image")
		.child(
			img()?
				.attr("src", HERO_IMAGE_URL)
				.attr("alt", HERO_IMAGE_ALT)
				.build(),
		)?
		.build();

	let banner = section()?
		.class("hero-banner")
		.attr("aria-labelledby", "hero-title")
		.child(content)?
		.child(image)?
		.build();
	Ok(banner)
}
