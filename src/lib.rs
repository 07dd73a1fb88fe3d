//! Little Lemon — a single-page marketing site with a client-side
//! table-reservation form.
//!
//! There is no backend: "submitting" a reservation validates the draft,
//! records it to the observability sink, clears the form, and shows a
//! success acknowledgment for three seconds. Everything else on the page
//! (hero banner, feature cards, footer, the mobile navigation toggle) is
//! presentational.
//!
//! ## Structure
//!
//! - [`reservation`]: the reservation form — typed draft, declarative field
//!   schema, submission controller, success window, DOM component
//! - [`site`]: the page shell — navigation menu, hero, feature cards, footer
//!
//! The crate compiles to `wasm32-unknown-unknown` and mounts into the
//! `#root` container of `static/index.html`. All state machines are plain
//! Rust and tested on the native target; browser tests live under
//! `tests/wasm/`.

pub mod reservation;
pub mod site;

#[cfg(target_arch = "wasm32")]
mod boot {
	use std::cell::RefCell;

	use littlelemon_pages::mount::{MountError, init_panic_hook, mount};
	use littlelemon_pages::{info_log, warn_log};
	use wasm_bindgen::JsValue;
	use wasm_bindgen::prelude::wasm_bindgen;

	use crate::site::shell::PageShell;

	thread_local! {
		// The shell owns every signal and effect on the page; it must live
		// for the page lifetime, not just the duration of `start`.
		static APP: RefCell<Option<PageShell>> = const { RefCell::new(None) };
	}

	/// Entry point: renders the page shell into `#root`.
	///
	/// A host page without the container (the browser test harness, for
	/// one) is left unmounted rather than treated as a fatal error.
	#[wasm_bindgen(start)]
	pub fn start() -> Result<(), JsValue> {
		init_panic_hook();
		let shell = PageShell::new();
		match mount("root", &shell) {
			Ok(()) => {
				APP.with(|app| *app.borrow_mut() = Some(shell));
				info_log!("Little Lemon site mounted");
				Ok(())
			}
			Err(MountError::RootNotFound(root_id)) => {
				warn_log!("mount root #{root_id} missing, page left unmounted");
				Ok(())
			}
			Err(error) => Err(JsValue::from_str(&error.to_string())),
		}
	}
}
