//! The success window: a scoped, cancellable deferred hide.
//!
//! After a valid submit the success acknowledgment is visible for a fixed
//! interval, then hides. The window must be supersedable: a re-submission
//! mid-window restarts it, and tearing the form down cancels it. Both are
//! enforced two ways — the platform timer is dropped (which cancels it), and
//! every armed window carries an epoch so a stale expiry that fires anyway
//! is inert.
//!
//! On `wasm32` the deferred task is a `gloo_timers` [`Timeout`]; on native
//! targets the pending expiry is held and driven explicitly (by tests) via
//! [`SuccessWindow::fire`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

#[cfg(target_arch = "wasm32")]
use gloo_timers::callback::Timeout;

#[cfg(target_arch = "wasm32")]
type Pending = Timeout;

#[cfg(not(target_arch = "wasm32"))]
struct PendingExpiry {
	epoch: u64,
	on_expire: Box<dyn FnOnce()>,
}

#[cfg(not(target_arch = "wasm32"))]
type Pending = PendingExpiry;

/// One form's success-window state. Clones share the same window, so a
/// clone held by an event closure arms and cancels the same timer.
#[derive(Clone)]
pub struct SuccessWindow {
	/// Bumped on every arm/cancel; an expiry only acts if its epoch is
	/// still current.
	epoch: Rc<Cell<u64>>,
	pending: Rc<RefCell<Option<Pending>>>,
}

impl SuccessWindow {
	/// Creates an idle window.
	pub fn new() -> Self {
		Self {
			epoch: Rc::new(Cell::new(0)),
			pending: Rc::new(RefCell::new(None)),
		}
	}

	/// The current epoch. Bumped by [`arm`](Self::arm) and
	/// [`cancel`](Self::cancel).
	pub fn epoch(&self) -> u64 {
		self.epoch.get()
	}

	/// Schedules `on_expire` to run after `delay`, superseding any pending
	/// expiry. Returns the epoch of the newly armed window.
	pub fn arm(&self, delay: Duration, on_expire: impl FnOnce() + 'static) -> u64 {
		let epoch = self.epoch.get() + 1;
		self.epoch.set(epoch);

		#[cfg(target_arch = "wasm32")]
		{
			let guard = Rc::clone(&self.epoch);
			let timeout = Timeout::new(delay.as_millis() as u32, move || {
				if guard.get() == epoch {
					on_expire();
				}
			});
			// Replacing the previous Timeout drops it, which cancels it.
			*self.pending.borrow_mut() = Some(timeout);
		}
		#[cfg(not(target_arch = "wasm32"))]
		{
			let _ = delay;
			*self.pending.borrow_mut() = Some(PendingExpiry {
				epoch,
				on_expire: Box::new(on_expire),
			});
		}

		epoch
	}

	/// Cancels any pending expiry without running it.
	pub fn cancel(&self) {
		self.epoch.set(self.epoch.get() + 1);
		self.pending.borrow_mut().take();
	}

	/// Whether an expiry is currently pending.
	pub fn is_armed(&self) -> bool {
		self.pending.borrow().is_some()
	}

	/// Drives the pending expiry, simulating the timer firing for the given
	/// epoch. Stale epochs are inert; the current epoch runs the expiry at
	/// most once.
	#[cfg(not(target_arch = "wasm32"))]
	pub fn fire(&self, epoch: u64) {
		if self.epoch.get() != epoch {
			return;
		}
		let pending = self.pending.borrow_mut().take();
		if let Some(pending) = pending {
			if pending.epoch == epoch {
				(pending.on_expire)();
			}
		}
	}
}

impl Default for SuccessWindow {
	fn default() -> Self {
		Self::new()
	}
}
