//! Registration surface for descriptor sources and handler types.
//!
//! Both arrive through explicit compile-time registration (`inventory`) or
//! as owned sets handed to the generator by the embedding tool. Either way
//! the pipeline only ever sees the narrow descriptor interface.

use dialogen_model::ComponentSpec;

use crate::context::Runtime;
use crate::error::{HandlerError, SourceError};
use crate::handlers::HandlerInstance;

/// The handler capability families dispatch knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
	/// Per-field handlers, invoked against the field's node.
	Widget,
	/// Per-component handlers, invoked once against the document root.
	Dialog,
}

/// Describes one registrable handler type.
///
/// `construct` receives the shared runtime handle; handler types take their
/// services as constructor arguments instead of having fields injected after
/// the fact. A failing constructor excludes only this handler from the pool.
pub struct HandlerDef {
	/// Stable identifying name.
	pub name: &'static str,
	/// Capability the constructed instance must serve.
	pub capability: Capability,
	/// Constructs the instance, capturing whatever services it needs.
	pub construct: fn(Runtime) -> Result<HandlerInstance, HandlerError>,
}

/// Inventory wrapper for built-in and linked-in handler definitions.
pub struct HandlerReg(pub &'static HandlerDef);

inventory::collect!(HandlerReg);

/// Everything one descriptor source contributes to a scan.
#[derive(Default)]
pub struct TypeSet {
	/// Component descriptors carrying the generation marker.
	pub components: Vec<ComponentSpec>,
	/// Handler types found alongside them.
	pub handlers: Vec<&'static HandlerDef>,
}

impl TypeSet {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_component(mut self, component: ComponentSpec) -> Self {
		self.components.push(component);
		self
	}

	pub fn with_handler(mut self, def: &'static HandlerDef) -> Self {
		self.handlers.push(def);
		self
	}
}

/// A named descriptor source a scan root can resolve to.
///
/// The analogue of one classpath entry: the provider either yields its type
/// set or fails as a unit, in which case the root is skipped and reported.
pub struct SourceDef {
	pub name: &'static str,
	pub provide: fn() -> Result<TypeSet, SourceError>,
}

inventory::collect!(SourceDef);
