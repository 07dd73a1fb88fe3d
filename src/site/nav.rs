//! The mobile navigation menu.
//!
//! One boolean flag, flipped on each activation of the toggle control. The
//! flag drives the toggle's `aria-expanded` attribute and the list's
//! `menu-open` class. Purely presentational — no validation, nothing async.

use std::cell::RefCell;
use std::rc::Rc;

use littlelemon_reactive::{Effect, Signal};

#[cfg(target_arch = "wasm32")]
use littlelemon_pages::builder::{a, button, li, nav, ul};
#[cfg(target_arch = "wasm32")]
use littlelemon_pages::component::Component;
#[cfg(target_arch = "wasm32")]
use littlelemon_pages::dom::{DomError, Element};

/// Menu entries: label and in-page anchor. The first entry is the current
/// page.
pub const MENU_ITEMS: [(&str, &str); 5] = [
	("Home", "#home"),
	("About", "#about"),
	("Menu", "#menu"),
	("Reservations", "#reservations"),
	("Contact", "#contact"),
];

/// The navigation menu's state and view.
#[derive(Clone)]
pub struct NavigationMenu {
	open: Signal<bool>,
	/// Effects created by the WASM render path, kept alive with the menu.
	#[allow(dead_code)]
	effects: Rc<RefCell<Vec<Effect>>>,
}

impl NavigationMenu {
	/// Creates the menu, collapsed.
	pub fn new() -> Self {
		Self {
			open: Signal::new(false),
			effects: Rc::new(RefCell::new(Vec::new())),
		}
	}

	/// Flips the open flag.
	pub fn toggle(&self) {
		self.open.update(|open| *open = !*open);
	}

	/// Whether the menu is currently expanded.
	pub fn is_open(&self) -> bool {
		self.open.get_untracked()
	}

	/// The reactive open flag.
	pub fn open_signal(&self) -> &Signal<bool> {
		&self.open
	}

	#[cfg(target_arch = "wasm32")]
	fn keep(&self, effect: Effect) {
		self.effects.borrow_mut().push(effect);
	}
}

#[cfg(target_arch = "wasm32")]
impl Component for NavigationMenu {
	fn render(&self) -> Result<Element, DomError> {
		let toggle = button()?
			.class("menu-toggle")
			.attr("aria-controls", "main-menu")
			.attr("aria-label", "Toggle navigation menu")
			.text("\u{2630}")
			.on_click({
				let menu = self.clone();
				move || menu.toggle()
			})
			.build();

		let mut list = ul()?.id("main-menu");
		for (index, (label, anchor)) in MENU_ITEMS.into_iter().enumerate() {
			let mut link = a()?.attr("href", anchor).text(label);
			if index == 0 {
				link = link.class("active").attr("aria-current", "page");
			}
			list = list.child(li()?.child(link.build())?.build())?;
		}
		let list = list.build();

		let open = self.open.clone();
		let toggle_ref = toggle.clone();
		let list_ref = list.clone();
		self.keep(Effect::new(move || {
			if open.get() {
				let _ = toggle_ref.set_attribute("aria-expanded", "true");
				list_ref.add_class("menu-open");
			} else {
				let _ = toggle_ref.set_attribute("aria-expanded", "false");
				list_ref.remove_class("menu-open");
			}
		}));

		let container = nav()?
			.attr("role", "navigation")
			.attr("aria-label", "Main navigation")
			.child(toggle)?
			.child(list)?
			.build();
		Ok(container)
	}

	fn name() -> &'static str {
		"NavigationMenu"
	}
}

impl Default for NavigationMenu {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serial_test::serial;

	#[test]
	#[serial]
	fn test_menu_starts_collapsed() {
		let menu = NavigationMenu::new();
		assert!(!menu.is_open());
	}

	#[test]
	#[serial]
	fn test_toggle_twice_round_trips() {
		let menu = NavigationMenu::new();

		menu.toggle();
		assert!(menu.is_open());

		menu.toggle();
		assert!(!menu.is_open());
	}

	#[test]
	#[serial]
	fn test_clones_share_the_flag() {
		let menu = NavigationMenu::new();
		let clone = menu.clone();
		clone.toggle();
		assert!(menu.is_open());
	}
}
