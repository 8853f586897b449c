//! Non-fatal problem reporting.

use parking_lot::Mutex;

use crate::error::GenError;

/// Receives non-fatal discovery, construction and dispatch errors.
///
/// Implementations must never panic or otherwise re-throw out of `handle`;
/// callers rely on the call returning so they can degrade and continue.
pub trait ExceptionSink: Send + Sync {
	fn handle(&self, error: GenError);
}

/// Sink that collects everything reported during a run.
///
/// The collected list becomes part of the generation report, so a run that
/// lost components still tells the user exactly what went wrong.
#[derive(Debug, Default)]
pub struct CollectingSink {
	problems: Mutex<Vec<GenError>>,
}

impl CollectingSink {
	pub fn new() -> Self {
		Self::default()
	}

	/// Snapshot of everything reported so far.
	pub fn problems(&self) -> Vec<GenError> {
		self.problems.lock().clone()
	}

	pub fn is_empty(&self) -> bool {
		self.problems.lock().is_empty()
	}

	pub fn len(&self) -> usize {
		self.problems.lock().len()
	}
}

impl ExceptionSink for CollectingSink {
	fn handle(&self, error: GenError) {
		tracing::warn!(%error, "generation problem reported");
		self.problems.lock().push(error);
	}
}
