//! Metadata-driven dialog generation pipeline.
//!
//! Turns component descriptors (plain records carrying field metadata) into
//! one document tree per component. The run is single-threaded and
//! single-pass: the runtime context is initialized once, discovery resolves
//! the registered descriptor sources into an immutable index, the handler
//! pool is instantiated once, and the dispatch loop applies the matching
//! handlers to every field of every component in a deterministic order.
//!
//! Failure policy: only runtime-context contract violations abort an
//! operation. Bad roots, broken handlers and failing components degrade to
//! sink reports, so a run always finishes with whatever it could generate
//! plus the list of what it could not.

pub mod context;
pub mod defs;
pub mod discovery;
pub mod dispatch;
pub mod error;
pub mod generator;
pub mod handlers;
pub mod introspect;
pub mod registry;
pub mod sink;

#[cfg(test)]
mod tests;

pub use context::{Runtime, RuntimeContext, Services};
pub use defs::{Capability, HandlerDef, HandlerReg, SourceDef, TypeSet};
pub use discovery::DiscoveryService;
pub use dispatch::GeneratedComponent;
pub use error::{ContextError, GenError, HandlerError, SourceError};
pub use generator::{GenerationReport, Generator};
pub use handlers::{DialogHandler, HandlerInstance, WidgetHandler};
pub use introspect::BoundField;
pub use registry::HandlerRegistry;
pub use sink::{CollectingSink, ExceptionSink};
