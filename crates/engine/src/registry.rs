//! Handler instantiation and the per-run handler pool.
//!
//! Every handler definition discovery yields is constructed exactly once; the
//! instances are cached for the whole run and shared across all components
//! and fields. A definition whose constructor fails (or whose instance does
//! not match its declared capability) is reported to the sink and excluded —
//! one broken handler never takes the rest of the pool down with it.

use rustc_hash::FxHashMap;

use crate::context::Runtime;
use crate::defs::Capability;
use crate::error::{ContextError, HandlerError};
use crate::handlers::{DialogHandler, HandlerInstance, WidgetHandler};

/// The instantiated handler pool for one run.
pub struct HandlerRegistry {
	widgets: FxHashMap<Box<str>, Vec<Box<dyn WidgetHandler>>>,
	dialogs: Vec<Box<dyn DialogHandler>>,
	len: usize,
}

impl HandlerRegistry {
	/// Constructs every discovered handler, injecting the runtime handle
	/// through the constructor.
	pub fn instantiate(runtime: &Runtime) -> Result<Self, ContextError> {
		let discovery = runtime.discovery()?;
		let sink = runtime.exceptions()?;

		let mut registry = Self {
			widgets: FxHashMap::default(),
			dialogs: Vec::new(),
			len: 0,
		};

		for capability in [Capability::Widget, Capability::Dialog] {
			for def in discovery.handler_types_of(capability) {
				let instance = match (def.construct)(runtime.clone()) {
					Ok(instance) => instance,
					Err(error) => {
						tracing::warn!(handler = def.name, %error, "handler excluded from pool");
						sink.handle(error.into());
						continue;
					}
				};
				match (capability, instance) {
					(Capability::Widget, HandlerInstance::Widget(handler)) => {
						registry
							.widgets
							.entry(Box::from(handler.kind()))
							.or_default()
							.push(handler);
						registry.len += 1;
					}
					(Capability::Dialog, HandlerInstance::Dialog(handler)) => {
						registry.dialogs.push(handler);
						registry.len += 1;
					}
					_ => {
						sink.handle(HandlerError::CapabilityMismatch { name: def.name }.into());
					}
				}
			}
		}

		tracing::debug!(handlers = registry.len, "handler pool instantiated");
		Ok(registry)
	}

	/// Widget handlers registered for a metadata kind.
	pub fn widgets_for(&self, kind: &str) -> &[Box<dyn WidgetHandler>] {
		self.widgets.get(kind).map_or(&[], Vec::as_slice)
	}

	/// Dialog-capability handlers, run once per component.
	pub fn dialogs(&self) -> &[Box<dyn DialogHandler>] {
		&self.dialogs
	}

	/// Number of live handler instances in the pool.
	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}
}
