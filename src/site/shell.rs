//! The page shell: static composition of every section.

use littlelemon_pages::builder::{div, header, main as main_element, span};
use littlelemon_pages::component::Component;
use littlelemon_pages::dom::{Document, DomError, Element};
use littlelemon_pages::warn_log;

use crate::reservation::component::ReservationFormView;
use crate::reservation::controller::ReservationForm;
use crate::site::features::features;
use crate::site::footer::footer;
use crate::site::hero::hero;
use crate::site::nav::NavigationMenu;

/// The whole page: header/nav, hero, features, reservation form, footer.
///
/// Owns the navigation menu and the reservation form for the page lifetime.
/// The one behavior it adds itself is the hero call-to-action, which
/// smooth-scrolls to the form's container.
pub struct PageShell {
	navigation: NavigationMenu,
	reservation: ReservationFormView,
}

impl PageShell {
	/// Creates the shell with a fresh menu and reservation form.
	pub fn new() -> Self {
		Self {
			navigation: NavigationMenu::new(),
			reservation: ReservationFormView::new(ReservationForm::new()),
		}
	}

	/// The navigation menu.
	pub fn navigation(&self) -> &NavigationMenu {
		&self.navigation
	}

	/// The reservation form view.
	pub fn reservation(&self) -> &ReservationFormView {
		&self.reservation
	}

	fn scroll_to_booking_form() {
		match Document::global() {
			Ok(document) => match document.get_element_by_id("booking-form") {
				Some(target) => target.scroll_into_view_smooth(),
				None => warn_log!("booking form not in document, cannot scroll"),
			},
			Err(error) => warn_log!("cannot scroll to booking form: {error}"),
		}
	}
}

impl Component for PageShell {
	fn render(&self) -> Result<Element, DomError> {
		let logo = div()?
			.class("logo")
			.attr("aria-label", "Little Lemon Restaurant Logo")
			.child(span()?.text("Little Lemon").build())?
			.build();

		let page_header = header()?
			.attr("role", "banner")
			.child(logo)?
			.child(self.navigation.render()?)?
			.build();

		let page_main = main_element()?
			.attr("role", "main")
			.child(hero(Self::scroll_to_booking_form)?)?
			.child(features()?)?
			.child(self.reservation.render()?)?
			.build();

		let app = div()?
			.class("app")
			.child(page_header)?
			.child(page_main)?
			.child(footer()?)?
			.build();
		Ok(app)
	}

	fn name() -> &'static str {
		"PageShell"
	}
}

impl Default for PageShell {
	fn default() -> Self {
		Self::new()
	}
}
