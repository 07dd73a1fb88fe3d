//! Browser tests for the page shell and navigation menu.
//!
//! Run with: `wasm-pack test --headless --chrome`

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use littlelemon::site::shell::PageShell;
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

fn attach(shell: &PageShell) -> web_sys::Element {
	let rendered = shell.render().unwrap();
	let node = rendered.raw().clone();
	body().append_child(&node).unwrap();
	node
}

#[wasm_bindgen_test]
fn test_shell_composes_every_section() {
	let shell = PageShell::new();
	let node = attach(&shell);

	assert!(node.query_selector("header .logo").unwrap().is_some());
	assert!(node.query_selector("nav #main-menu").unwrap().is_some());
	assert!(node.query_selector(".hero-banner .cta-button").unwrap().is_some());
	assert_eq!(node.query_selector_all(".feature-card").unwrap().length(), 3);
	assert!(node.query_selector("#booking-form").unwrap().is_some());
	assert!(node.query_selector("footer .footer-info").unwrap().is_some());

	node.remove();
}

#[wasm_bindgen_test]
fn test_menu_toggle_round_trips_its_indicator() {
	let shell = PageShell::new();
	let node = attach(&shell);

	let toggle = node.query_selector(".menu-toggle").unwrap().unwrap();
	let menu = node.query_selector("#main-menu").unwrap().unwrap();
	assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
	assert!(!menu.class_list().contains("menu-open"));

	let click = web_sys::Event::new("click").unwrap();
	toggle.dispatch_event(&click).unwrap();
	assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("true"));
	assert!(menu.class_list().contains("menu-open"));

	let click = web_sys::Event::new("click").unwrap();
	toggle.dispatch_event(&click).unwrap();
	assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
	assert!(!menu.class_list().contains("menu-open"));

	node.remove();
}

#[wasm_bindgen_test]
fn test_menu_lists_the_five_destinations() {
	let shell = PageShell::new();
	let node = attach(&shell);

	let links = node.query_selector_all("#main-menu a").unwrap();
	assert_eq!(links.length(), 5);
	let first = node.query_selector("#main-menu a").unwrap().unwrap();
	assert_eq!(first.get_attribute("aria-current").as_deref(), Some("page"));

	node.remove();
}

#[wasm_bindgen_test]
fn test_cta_click_does_not_panic_without_scroll_target_visible() {
	let shell = PageShell::new();
	let node = attach(&shell);

	let cta = node.query_selector(".cta-button").unwrap().unwrap();
	let click = web_sys::Event::new("click").unwrap();
	cta.dispatch_event(&click).unwrap();

	node.remove();
}
