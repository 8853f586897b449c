//! The per-run runtime context.
//!
//! Created once per generation run and threaded explicitly into the registry
//! and dispatch loop. The context starts empty and fails fast on every
//! accessor until [`RuntimeContext::initialize`] populates it; silent
//! misconfiguration becomes a loud [`ContextError::NotInitialized`] at first
//! use instead of a null-like default deep inside a handler.

use std::sync::Arc;

use arc_swap::ArcSwap;
use dialogen_doctree::XmlUtility;

use crate::discovery::DiscoveryService;
use crate::error::ContextError;
use crate::sink::ExceptionSink;

/// The shared services handlers and pipeline stages reach for.
#[derive(Clone)]
pub struct Services {
	pub discovery: Arc<DiscoveryService>,
	pub exceptions: Arc<dyn ExceptionSink>,
	pub xml: Arc<XmlUtility>,
}

enum State {
	Uninitialized,
	Active(Services),
}

/// Two-state service locator: `Uninitialized` until populated, `Active`
/// afterwards.
pub struct RuntimeContext {
	state: ArcSwap<State>,
}

/// Shared handle to the per-run context. Handlers capture one at
/// construction.
pub type Runtime = Arc<RuntimeContext>;

impl RuntimeContext {
	/// Creates an empty, not-yet-initialized context.
	pub fn new() -> Self {
		Self {
			state: ArcSwap::from_pointee(State::Uninitialized),
		}
	}

	/// Populates the context. Exactly once per run; a second call is a
	/// contract violation, not a reconfiguration.
	pub fn initialize(&self, services: Services) -> Result<(), ContextError> {
		let current = self.state.load();
		if matches!(**current, State::Active(_)) {
			return Err(ContextError::AlreadyInitialized);
		}
		self.state.store(Arc::new(State::Active(services)));
		Ok(())
	}

	pub fn is_initialized(&self) -> bool {
		matches!(**self.state.load(), State::Active(_))
	}

	fn services(&self) -> Result<Services, ContextError> {
		let state = self.state.load();
		match &**state {
			State::Active(services) => Ok(services.clone()),
			State::Uninitialized => Err(ContextError::NotInitialized),
		}
	}

	/// The type-discovery service of the active run.
	pub fn discovery(&self) -> Result<Arc<DiscoveryService>, ContextError> {
		Ok(self.services()?.discovery)
	}

	/// The exception sink of the active run.
	pub fn exceptions(&self) -> Result<Arc<dyn ExceptionSink>, ContextError> {
		Ok(self.services()?.exceptions)
	}

	/// The document-mutation utility of the active run.
	pub fn xml(&self) -> Result<Arc<XmlUtility>, ContextError> {
		Ok(self.services()?.xml)
	}
}

impl Default for RuntimeContext {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::sink::CollectingSink;

	fn services() -> Services {
		Services {
			discovery: Arc::new(DiscoveryService::empty()),
			exceptions: Arc::new(CollectingSink::new()),
			xml: Arc::new(XmlUtility::new()),
		}
	}

	#[test]
	fn every_accessor_fails_before_initialize_every_time() {
		let ctx = RuntimeContext::new();
		for _ in 0..2 {
			assert_eq!(ctx.discovery().err(), Some(ContextError::NotInitialized));
			assert_eq!(ctx.exceptions().err(), Some(ContextError::NotInitialized));
			assert_eq!(ctx.xml().err(), Some(ContextError::NotInitialized));
		}
		assert!(!ctx.is_initialized());
	}

	#[test]
	fn accessors_delegate_after_initialize() {
		let ctx = RuntimeContext::new();
		ctx.initialize(services()).expect("first initialize");
		assert!(ctx.is_initialized());
		assert!(ctx.discovery().is_ok());
		assert!(ctx.exceptions().is_ok());
		assert!(ctx.xml().is_ok());
	}

	#[test]
	fn second_initialize_is_rejected() {
		let ctx = RuntimeContext::new();
		ctx.initialize(services()).expect("first initialize");
		assert_eq!(
			ctx.initialize(services()).err(),
			Some(ContextError::AlreadyInitialized)
		);
	}
}
