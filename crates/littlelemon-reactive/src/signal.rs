//! `Signal<T>` — the reactive cell holding one piece of state.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::runtime::{NodeId, try_with_runtime, with_runtime};

/// A reactive cell that tracks its readers and notifies them on change.
///
/// Cloning a `Signal` is cheap and shares the underlying value; all clones
/// refer to the same state. The value type only needs `Clone` for the
/// reading accessors.
///
/// Reading with [`Signal::get`] inside an [`Effect`](crate::Effect) records a
/// dependency; writing with [`Signal::set`] or [`Signal::update`] re-runs the
/// dependent effects before the write call returns (unless the write happens
/// inside an effect, in which case the enclosing flush picks it up).
///
/// ## Example
///
/// ```ignore
/// let guests = Signal::new(String::new());
/// guests.set("2".to_string());
/// assert_eq!(guests.get(), "2");
/// ```
pub struct Signal<T: 'static> {
	id: NodeId,
	value: Rc<RefCell<T>>,
}

impl<T: 'static> Signal<T> {
	/// Creates a new signal holding `value`.
	pub fn new(value: T) -> Self {
		Self {
			id: NodeId::next(),
			value: Rc::new(RefCell::new(value)),
		}
	}

	/// Returns a clone of the current value, recording a dependency when
	/// called from inside an effect.
	pub fn get(&self) -> T
	where
		T: Clone,
	{
		with_runtime(|rt| rt.track_dependency(self.id));
		self.get_untracked()
	}

	/// Returns a clone of the current value without dependency tracking.
	pub fn get_untracked(&self) -> T
	where
		T: Clone,
	{
		self.value.borrow().clone()
	}

	/// Reads the current value through a borrow, without cloning and without
	/// dependency tracking.
	pub fn with_untracked<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		f(&self.value.borrow())
	}

	/// Replaces the value and notifies dependent effects.
	pub fn set(&self, value: T) {
		*self.value.borrow_mut() = value;
		with_runtime(|rt| rt.notify_signal_change(self.id));
	}

	/// Mutates the value in place and notifies dependent effects once.
	pub fn update(&self, f: impl FnOnce(&mut T)) {
		f(&mut self.value.borrow_mut());
		with_runtime(|rt| rt.notify_signal_change(self.id));
	}

	/// This signal's node id in the dependency graph.
	pub fn id(&self) -> NodeId {
		self.id
	}
}

impl<T: 'static> Clone for Signal<T> {
	fn clone(&self) -> Self {
		Self {
			id: self.id,
			value: Rc::clone(&self.value),
		}
	}
}

impl<T: 'static> Drop for Signal<T> {
	fn drop(&mut self) {
		// Last clone cleans the node out of the dependency graph.
		if Rc::strong_count(&self.value) == 1 {
			let _ = try_with_runtime(|rt| rt.remove_node(self.id));
		}
	}
}

impl<T: fmt::Debug + Clone + 'static> fmt::Debug for Signal<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Signal")
			.field("id", &self.id)
			.field("value", &self.get_untracked())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serial_test::serial;

	#[test]
	#[serial]
	fn test_signal_creation_and_get() {
		let signal = Signal::new(41);
		assert_eq!(signal.get(), 41);
		assert_eq!(signal.get_untracked(), 41);
	}

	#[test]
	#[serial]
	fn test_signal_set() {
		let signal = Signal::new(String::new());
		signal.set("john@example.com".to_string());
		assert_eq!(signal.get(), "john@example.com");
	}

	#[test]
	#[serial]
	fn test_signal_update() {
		let signal = Signal::new(false);
		signal.update(|open| *open = !*open);
		assert!(signal.get());
		signal.update(|open| *open = !*open);
		assert!(!signal.get());
	}

	#[test]
	#[serial]
	fn test_signal_clone_shares_value() {
		let original = Signal::new(1);
		let clone = original.clone();
		original.set(2);
		assert_eq!(clone.get(), 2);
		assert_eq!(original.id(), clone.id());
	}

	#[test]
	#[serial]
	fn test_with_untracked_borrows() {
		let signal = Signal::new(vec![1, 2, 3]);
		let len = signal.with_untracked(|v| v.len());
		assert_eq!(len, 3);
	}
}
