//! `Effect` — a side effect that re-runs when its signal dependencies change.
//!
//! Effects bridge the reactive graph to the outside world (DOM nodes,
//! console). An effect runs once on creation; every [`Signal`](crate::Signal)
//! it reads during a run becomes a dependency for the next run.
//!
//! Dropping an effect disposes it: it stops re-running and is removed from
//! the dependency graph. Components therefore keep their effects alive for as
//! long as the rendered nodes exist.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::runtime::{NodeId, try_with_runtime, with_runtime};

type EffectFn = Rc<RefCell<Box<dyn FnMut()>>>;

thread_local! {
	static EFFECT_FUNCTIONS: RefCell<BTreeMap<NodeId, EffectFn>> = RefCell::new(BTreeMap::new());
}

/// A reactive side effect.
///
/// ## Example
///
/// ```ignore
/// let submitted = Signal::new(false);
/// let submitted_for_effect = submitted.clone();
/// let _effect = Effect::new(move || {
///     let visible = submitted_for_effect.get();
///     // toggle the success banner here
///     let _ = visible;
/// });
/// submitted.set(true); // effect re-runs
/// ```
pub struct Effect {
	id: NodeId,
	disposed: Rc<RefCell<bool>>,
}

impl Effect {
	/// Creates the effect and runs it immediately, recording dependencies.
	pub fn new(mut f: impl FnMut() + 'static) -> Self {
		let id = NodeId::next();
		let disposed = Rc::new(RefCell::new(false));

		let disposed_guard = disposed.clone();
		let wrapped: Box<dyn FnMut()> = Box::new(move || {
			if !*disposed_guard.borrow() {
				f();
			}
		});
		EFFECT_FUNCTIONS.with(|storage| {
			storage
				.borrow_mut()
				.insert(id, Rc::new(RefCell::new(wrapped)));
		});

		execute_effect(id);
		// The first run may have queued follow-up work by writing signals.
		with_runtime(|rt| rt.flush_if_idle());

		Self { id, disposed }
	}

	/// This effect's node id in the dependency graph.
	pub fn id(&self) -> NodeId {
		self.id
	}

	/// Stops the effect from ever running again and removes it from the
	/// dependency graph. Called automatically on drop.
	pub fn dispose(&self) {
		*self.disposed.borrow_mut() = true;
		let _ = try_with_runtime(|rt| rt.remove_node(self.id));
		let _ = EFFECT_FUNCTIONS.try_with(|storage| {
			storage.borrow_mut().remove(&self.id);
		});
	}
}

impl Drop for Effect {
	fn drop(&mut self) {
		self.dispose();
	}
}

/// Runs the effect with `effect_id`, re-recording its dependencies.
///
/// The closure is cloned out of thread-local storage before the call so an
/// effect may create further signals and effects while it runs.
pub(crate) fn execute_effect(effect_id: NodeId) {
	let Some(effect_fn) =
		EFFECT_FUNCTIONS.with(|storage| storage.borrow().get(&effect_id).cloned())
	else {
		return; // disposed while pending
	};

	with_runtime(|rt| {
		rt.clear_dependencies(effect_id);
		rt.push_observer(effect_id);
	});
	(effect_fn.borrow_mut())();
	with_runtime(|rt| rt.pop_observer());
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::signal::Signal;
	use serial_test::serial;

	#[test]
	#[serial]
	fn test_effect_runs_immediately() {
		let runs = Rc::new(RefCell::new(0));
		let runs_clone = runs.clone();
		let _effect = Effect::new(move || {
			*runs_clone.borrow_mut() += 1;
		});
		assert_eq!(*runs.borrow(), 1);
	}

	#[test]
	#[serial]
	fn test_effect_reruns_synchronously_on_signal_change() {
		let signal = Signal::new(0);
		let seen = Rc::new(RefCell::new(Vec::new()));

		let signal_for_effect = signal.clone();
		let seen_clone = seen.clone();
		let _effect = Effect::new(move || {
			seen_clone.borrow_mut().push(signal_for_effect.get());
		});

		signal.set(10);
		signal.set(20);
		assert_eq!(*seen.borrow(), vec![0, 10, 20]);
	}

	#[test]
	#[serial]
	fn test_effect_tracks_multiple_signals() {
		let first = Signal::new(1);
		let second = Signal::new(2);
		let sum = Rc::new(RefCell::new(0));

		let first_for_effect = first.clone();
		let second_for_effect = second.clone();
		let sum_clone = sum.clone();
		let _effect = Effect::new(move || {
			*sum_clone.borrow_mut() = first_for_effect.get() + second_for_effect.get();
		});

		assert_eq!(*sum.borrow(), 3);
		first.set(10);
		assert_eq!(*sum.borrow(), 12);
		second.set(20);
		assert_eq!(*sum.borrow(), 30);
	}

	#[test]
	#[serial]
	fn test_disposed_effect_stops_rerunning() {
		let signal = Signal::new(0);
		let runs = Rc::new(RefCell::new(0));

		let signal_for_effect = signal.clone();
		let runs_clone = runs.clone();
		let effect = Effect::new(move || {
			let _ = signal_for_effect.get();
			*runs_clone.borrow_mut() += 1;
		});

		effect.dispose();
		signal.set(7);
		assert_eq!(*runs.borrow(), 1);
	}

	#[test]
	#[serial]
	fn test_dropped_effect_stops_rerunning() {
		let signal = Signal::new(0);
		let runs = Rc::new(RefCell::new(0));

		{
			let signal_for_effect = signal.clone();
			let runs_clone = runs.clone();
			let _effect = Effect::new(move || {
				let _ = signal_for_effect.get();
				*runs_clone.borrow_mut() += 1;
			});
		}

		signal.set(7);
		assert_eq!(*runs.borrow(), 1);
	}

	#[test]
	#[serial]
	fn test_write_inside_effect_is_picked_up_by_enclosing_flush() {
		let source = Signal::new(0);
		let mirror = Signal::new(0);
		let mirrored = Rc::new(RefCell::new(Vec::new()));

		let source_for_copy = source.clone();
		let mirror_for_copy = mirror.clone();
		let _copy = Effect::new(move || {
			mirror_for_copy.set(source_for_copy.get() * 2);
		});

		let mirror_for_log = mirror.clone();
		let mirrored_clone = mirrored.clone();
		let _log = Effect::new(move || {
			mirrored_clone.borrow_mut().push(mirror_for_log.get());
		});

		source.set(5);
		assert_eq!(mirror.get(), 10);
		assert!(mirrored.borrow().contains(&10));
	}
}
