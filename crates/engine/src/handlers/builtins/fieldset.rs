//! Fieldset widget handler.

use dialogen_doctree::Node;
use dialogen_model::kinds;

use crate::context::Runtime;
use crate::defs::{Capability, HandlerDef, HandlerReg};
use crate::error::{GenError, HandlerError};
use crate::handlers::{HandlerInstance, WidgetHandler};
use crate::handlers::builtins::names;
use crate::introspect;

/// Expands another component's fields as items nested under this field's
/// node.
///
/// The `source` property names the component descriptor whose processable
/// fields become child nodes under an `items` child. A source that is not in
/// the index is reported and the fieldset is left empty; generation of the
/// surrounding component continues.
pub struct FieldSetHandler {
	runtime: Runtime,
}

impl WidgetHandler for FieldSetHandler {
	fn name(&self) -> &'static str {
		"fieldset"
	}

	fn kind(&self) -> &'static str {
		kinds::FIELDSET
	}

	fn accept(&self, node: &mut Node, field: &introspect::BoundField) -> Result<(), GenError> {
		let Some(item) = field.field.metadata_of(kinds::FIELDSET) else {
			return Ok(());
		};
		let Some(source) = item.str_property("source") else {
			return Ok(());
		};

		let discovery = self.runtime.discovery()?;
		let sink = self.runtime.exceptions()?;
		let xml = self.runtime.xml()?;

		let Some(component) = discovery.get(source).cloned() else {
			sink.handle(
				HandlerError::Invocation {
					handler: self.name(),
					subject: field.name().to_owned(),
					reason: format!("fieldset source {source} is not in the index"),
				}
				.into(),
			);
			return Ok(());
		};

		let members = introspect::fields(&discovery, &component, sink.as_ref());
		if node.child(names::NN_ITEMS).is_none() {
			xml.append_child(node, names::NN_ITEMS);
		}
		let Some(items) = node.child_mut(names::NN_ITEMS) else {
			return Ok(());
		};
		for member in members {
			let child = xml.append_child(items, member.name());
			let path = xml.field_property_path(member.name());
			xml.set_attribute(child, names::PN_NAME, path);
		}
		Ok(())
	}
}

static FIELDSET: HandlerDef = HandlerDef {
	name: "fieldset",
	capability: Capability::Widget,
	construct: |runtime| Ok(HandlerInstance::Widget(Box::new(FieldSetHandler { runtime }))),
};

inventory::submit!(HandlerReg(&FIELDSET));
