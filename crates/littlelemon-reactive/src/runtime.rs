//! Thread-local reactive runtime.
//!
//! The runtime owns the dependency graph between signals and effects. It is
//! deliberately single-threaded: the whole site runs on the browser's main
//! thread, so a `thread_local!` instance with interior mutability is enough.
//!
//! Signal writes flush synchronously. When [`Runtime::notify_signal_change`]
//! is called outside of any running effect, the scheduled effects execute
//! before the call returns, so event handlers observe their own updates in
//! order. Writes made *inside* a running effect are queued and picked up by
//! the flush loop already in progress.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use crate::effect;

thread_local! {
	static RUNTIME: Runtime = Runtime::new();
	static NEXT_NODE_ID: Cell<u64> = const { Cell::new(0) };
}

/// Identifier for a node (signal or effect) in the dependency graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u64);

impl NodeId {
	/// Allocates the next id on this thread.
	pub(crate) fn next() -> Self {
		NEXT_NODE_ID.with(|counter| {
			let id = counter.get();
			counter.set(id + 1);
			NodeId(id)
		})
	}
}

/// Per-signal bookkeeping: the effects subscribed to it.
#[derive(Debug, Default)]
pub(crate) struct NodeData {
	pub(crate) subscribers: Vec<NodeId>,
}

/// The reactive runtime. One instance per thread, accessed via
/// [`with_runtime`].
pub(crate) struct Runtime {
	/// signal id -> subscribed effect ids
	dependency_graph: RefCell<BTreeMap<NodeId, NodeData>>,
	/// Effects currently executing, innermost last.
	observer_stack: RefCell<Vec<NodeId>>,
	/// Effects scheduled to re-run, in notification order.
	pending_updates: RefCell<Vec<NodeId>>,
	/// Set while the flush loop is draining `pending_updates`.
	flushing: Cell<bool>,
}

impl Runtime {
	fn new() -> Self {
		Self {
			dependency_graph: RefCell::new(BTreeMap::new()),
			observer_stack: RefCell::new(Vec::new()),
			pending_updates: RefCell::new(Vec::new()),
			flushing: Cell::new(false),
		}
	}

	/// Records that the currently running effect (if any) read `signal_id`.
	pub(crate) fn track_dependency(&self, signal_id: NodeId) {
		let Some(&observer) = self.observer_stack.borrow().last() else {
			return;
		};
		let mut graph = self.dependency_graph.borrow_mut();
		let node = graph.entry(signal_id).or_default();
		if !node.subscribers.contains(&observer) {
			node.subscribers.push(observer);
		}
	}

	/// Schedules the subscribers of `signal_id` and flushes if idle.
	pub(crate) fn notify_signal_change(&self, signal_id: NodeId) {
		{
			let graph = self.dependency_graph.borrow();
			let Some(node) = graph.get(&signal_id) else {
				return;
			};
			let mut pending = self.pending_updates.borrow_mut();
			for &subscriber in &node.subscribers {
				if !pending.contains(&subscriber) {
					pending.push(subscriber);
				}
			}
		}
		self.flush_if_idle();
	}

	/// Removes `effect_id` from every subscriber list. Called before an
	/// effect re-runs so its dependency set reflects the latest execution.
	pub(crate) fn clear_dependencies(&self, effect_id: NodeId) {
		let mut graph = self.dependency_graph.borrow_mut();
		for node in graph.values_mut() {
			node.subscribers.retain(|&id| id != effect_id);
		}
	}

	/// Drops all bookkeeping for a node (signal or effect).
	pub(crate) fn remove_node(&self, id: NodeId) {
		let mut graph = self.dependency_graph.borrow_mut();
		graph.remove(&id);
		for node in graph.values_mut() {
			node.subscribers.retain(|&sub| sub != id);
		}
		self.pending_updates.borrow_mut().retain(|&sub| sub != id);
	}

	pub(crate) fn push_observer(&self, id: NodeId) {
		self.observer_stack.borrow_mut().push(id);
	}

	pub(crate) fn pop_observer(&self) {
		self.observer_stack.borrow_mut().pop();
	}

	/// Runs scheduled effects until the queue is empty.
	///
	/// No-op while an effect is executing (its enclosing flush loop will pick
	/// the new work up) or when a flush is already in progress.
	pub(crate) fn flush_if_idle(&self) {
		if self.flushing.get() || !self.observer_stack.borrow().is_empty() {
			return;
		}
		self.flushing.set(true);
		loop {
			let next = {
				let mut pending = self.pending_updates.borrow_mut();
				if pending.is_empty() {
					None
				} else {
					Some(pending.remove(0))
				}
			};
			match next {
				Some(effect_id) => effect::execute_effect(effect_id),
				None => break,
			}
		}
		self.flushing.set(false);
	}

	#[cfg(test)]
	pub(crate) fn subscriber_count(&self, signal_id: NodeId) -> usize {
		self.dependency_graph
			.borrow()
			.get(&signal_id)
			.map(|node| node.subscribers.len())
			.unwrap_or(0)
	}
}

/// Runs `f` with this thread's runtime.
pub(crate) fn with_runtime<R>(f: impl FnOnce(&Runtime) -> R) -> R {
	RUNTIME.with(|rt| f(rt))
}

/// Like [`with_runtime`], but returns `None` if the thread-local storage has
/// already been torn down (possible during `Drop` at thread exit).
pub(crate) fn try_with_runtime<R>(f: impl FnOnce(&Runtime) -> R) -> Option<R> {
	RUNTIME.try_with(|rt| f(rt)).ok()
}
