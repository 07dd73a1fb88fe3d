//! Fine-grained reactivity for the Little Lemon site.
//!
//! The site keeps every piece of mutable UI state — field values, validation
//! errors, the submission flag, the menu-open flag — in a [`Signal`]. DOM
//! updates subscribe through [`Effect`]s, which re-run automatically when a
//! signal they read changes.
//!
//! ## Model
//!
//! - [`Signal<T>`]: a reactive cell. Reading it inside an effect records a
//!   dependency; writing it re-runs the dependent effects.
//! - [`Effect`]: a side effect (usually a DOM mutation) that re-runs when any
//!   signal it read last time changes.
//! - A thread-local runtime holds the dependency graph. Everything is
//!   single-threaded, matching the browser execution model: an event handler
//!   runs to completion, then dependent effects flush synchronously.
//!
//! ## Example
//!
//! ```ignore
//! use littlelemon_reactive::{Effect, Signal};
//!
//! let open = Signal::new(false);
//! let open_for_effect = open.clone();
//! let _effect = Effect::new(move || {
//!     let _ = open_for_effect.get(); // tracked
//! });
//! open.set(true); // the effect re-runs before `set` returns
//! ```

pub mod effect;
pub mod runtime;
pub mod signal;

pub use effect::Effect;
pub use runtime::NodeId;
pub use signal::Signal;
