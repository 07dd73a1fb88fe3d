//! The table-reservation form.
//!
//! Split the way the data flows:
//!
//! - [`schema`]: the declarative field contract (names, required messages,
//!   rules) — the single source of truth for validation
//! - [`draft`]: the typed [`ReservationDraft`](draft::ReservationDraft)
//!   built from a valid snapshot
//! - [`controller`]: the submit protocol and state ownership
//! - [`success`]: the cancellable three-second success window
//! - [`sink`]: where accepted drafts are recorded
//! - [`component`]: the DOM rendering (wasm only)

#[cfg(target_arch = "wasm32")]
pub mod component;
pub mod controller;
pub mod draft;
pub mod schema;
pub mod sink;
pub mod success;

#[cfg(target_arch = "wasm32")]
pub use component::ReservationFormView;
pub use controller::{ReservationForm, SubmitOutcome};
pub use draft::{Occasion, ReservationDraft, TimeSlot};
pub use schema::reservation_schema;
pub use sink::{ConsoleSink, RecordingSink, SubmissionSink};
