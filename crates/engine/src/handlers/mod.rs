//! The handler capability surface and the built-in handler pool.
//!
//! Handlers are constructed once per run by the registry and shared across
//! every component and field, so they must keep no per-invocation state;
//! anything mutable belongs on the node they receive. A handler may only
//! touch the node passed to it and must not assume structure it did not
//! create itself.

pub mod builtins;

use dialogen_doctree::Node;
use dialogen_model::ComponentSpec;

use crate::error::GenError;
use crate::introspect::BoundField;

/// Kind string under which generic (kind-agnostic) widget handlers register.
///
/// The dispatch loop invokes these once per field, before the per-kind
/// handlers; the built-in property-mapping handler lives here.
pub const GENERIC_KIND: &str = "*";

/// A per-field handler: reacts to one metadata kind and mutates the field's
/// node.
pub trait WidgetHandler: Send + Sync {
	/// Stable identifying name, unique across the pool.
	fn name(&self) -> &'static str;

	/// The metadata kind this handler reacts to, or [`GENERIC_KIND`].
	fn kind(&self) -> &'static str;

	/// Inspects the field's metadata and mutates `node` accordingly.
	fn accept(&self, node: &mut Node, field: &BoundField) -> Result<(), GenError>;
}

/// A per-component handler: runs once against the component's document root
/// after the field pass.
pub trait DialogHandler: Send + Sync {
	fn name(&self) -> &'static str;

	fn accept(&self, root: &mut Node, component: &ComponentSpec) -> Result<(), GenError>;
}

/// A constructed handler, tagged with the capability it serves.
pub enum HandlerInstance {
	Widget(Box<dyn WidgetHandler>),
	Dialog(Box<dyn DialogHandler>),
}
