//! Component trait definition.

use crate::dom::{DomError, Element};

/// Trait for the page's building blocks.
///
/// A component encapsulates state and rendering into one unit. Rendering
/// creates live DOM nodes; components that update the DOM reactively keep
/// the [`Effect`](crate::Effect)s created during `render` alive alongside
/// the returned element.
///
/// # Example
///
/// ```ignore
/// use littlelemon_pages::{Component, DomError, Element};
/// use littlelemon_pages::builder::p;
///
/// struct Tagline;
///
/// impl Component for Tagline {
///     fn render(&self) -> Result<Element, DomError> {
///         Ok(p().text("A charming neighborhood bistro")?.build())
///     }
///
///     fn name() -> &'static str {
///         "Tagline"
///     }
/// }
/// ```
pub trait Component {
	/// Renders the component into a detached DOM element.
	fn render(&self) -> Result<Element, DomError>;

	/// The component's name, for diagnostics.
	fn name() -> &'static str
	where
		Self: Sized;
}
