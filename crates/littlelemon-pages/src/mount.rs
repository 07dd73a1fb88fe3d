//! Mounting a component into the root container.

use crate::component::Component;
use crate::dom::{Document, DomError};

/// Errors raised while mounting the page.
#[derive(Debug, thiserror::Error)]
pub enum MountError {
	/// The root container does not exist in the host document.
	#[error("mount root #{0} not found in document")]
	RootNotFound(String),
	/// A DOM operation failed while rendering.
	#[error(transparent)]
	Dom(#[from] DomError),
}

/// Renders `component` and appends it to the element with id `root_id`.
pub fn mount(root_id: &str, component: &impl Component) -> Result<(), MountError> {
	let document = Document::global()?;
	let root = document
		.get_element_by_id(root_id)
		.ok_or_else(|| MountError::RootNotFound(root_id.to_string()))?;
	let rendered = component.render()?;
	root.append_child(&rendered)?;
	Ok(())
}

/// Installs the readable-panics hook when the feature is enabled.
pub fn init_panic_hook() {
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();
}
