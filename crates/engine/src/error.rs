//! Error taxonomy of the generation pipeline.
//!
//! Only [`ContextError`] is allowed to abort the operation that raised it;
//! every other category is reported to the exception sink and degraded
//! around, so one malformed input never halts generation for unrelated
//! components.

/// Runtime-context contract violations. Fatal to the call, never recovered
/// internally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
	/// An accessor was called before the context was populated.
	#[error("runtime context was not initialized")]
	NotInitialized,
	/// `initialize` was called on an already-active context.
	#[error("runtime context is already initialized")]
	AlreadyInitialized,
}

/// Discovery-time failures around descriptor sources and parent chains.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
	#[error("no descriptor source is registered under root {0:?}")]
	UnknownRoot(String),
	#[error("descriptor source {name:?} failed: {reason}")]
	Provider { name: String, reason: String },
	#[error("component {component} names parent {parent}, which is not in the index")]
	UnresolvedParent { component: String, parent: String },
	#[error("parent chain of component {component} contains a cycle")]
	ParentCycle { component: String },
}

/// Handler construction and invocation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HandlerError {
	#[error("handler {name} failed to construct: {reason}")]
	Construction { name: &'static str, reason: String },
	#[error("handler {name} was constructed with a capability other than its declared one")]
	CapabilityMismatch { name: &'static str },
	#[error("handler {handler} failed on {subject}: {reason}")]
	Invocation {
		handler: &'static str,
		subject: String,
		reason: String,
	},
}

/// Umbrella error for the whole pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenError {
	#[error(transparent)]
	Context(#[from] ContextError),
	#[error(transparent)]
	Source(#[from] SourceError),
	#[error(transparent)]
	Handler(#[from] HandlerError),
}
