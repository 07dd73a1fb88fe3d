//! Rendering layer for the Little Lemon single-page site.
//!
//! Built directly on `wasm-bindgen`, `web-sys`, and `js-sys` — no high-level
//! framework dependencies. The site renders into a single root container;
//! there is no server-side rendering and no routing.
//!
//! ## Modules
//!
//! - [`dom`]: thin DOM abstraction (`Document`, `Element`, `EventHandle`)
//! - [`builder`]: fluent HTML element builder
//! - [`component`]: the `Component` trait implemented by page sections
//! - [`form`](mod@form): `FormState`, joining a declarative schema to
//!   reactive field values and errors
//! - [`mount`]: mounting a component into the root container
//! - [`logging`]: console logging helpers and macros
//!
//! The DOM-facing modules only exist on `wasm32`; `form` and `logging` are
//! available on every target so the state machines stay natively testable.

#[cfg(target_arch = "wasm32")]
pub mod builder;
#[cfg(target_arch = "wasm32")]
pub mod component;
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod form;
pub mod logging;
#[cfg(target_arch = "wasm32")]
pub mod mount;

#[cfg(target_arch = "wasm32")]
pub use component::Component;
#[cfg(target_arch = "wasm32")]
pub use dom::{Document, DomError, Element, EventHandle};
pub use form::FormState;
#[cfg(target_arch = "wasm32")]
pub use mount::{MountError, mount};

// Re-export the reactive and schema types the site works with, so page code
// has one import root.
pub use littlelemon_forms::{FieldSpec, FormSchema, ValidationErrors};
pub use littlelemon_reactive::{Effect, Signal};
