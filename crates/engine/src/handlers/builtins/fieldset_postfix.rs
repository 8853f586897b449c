//! Fieldset postfix handler.

use dialogen_doctree::{Node, Value};
use dialogen_model::kinds;

use crate::context::Runtime;
use crate::defs::{Capability, HandlerDef, HandlerReg};
use crate::error::GenError;
use crate::handlers::{HandlerInstance, WidgetHandler};
use crate::handlers::builtins::names;
use crate::introspect::BoundField;

/// Appends a postfix to the `name` attribute of every item node already
/// nested under this field's node.
///
/// Runs after the fieldset expansion that created those items, so the
/// metadata declaration order on the field decides whether there is anything
/// to rename.
pub struct FieldsetPostfixHandler {
	runtime: Runtime,
}

impl WidgetHandler for FieldsetPostfixHandler {
	fn name(&self) -> &'static str {
		"fieldset-postfix"
	}

	fn kind(&self) -> &'static str {
		kinds::FIELDSET_POSTFIX
	}

	fn accept(&self, node: &mut Node, field: &BoundField) -> Result<(), GenError> {
		let Some(item) = field.field.metadata_of(kinds::FIELDSET_POSTFIX) else {
			return Ok(());
		};
		let postfix = item.str_property("postfix").unwrap_or_default().to_owned();
		if postfix.is_empty() {
			return Ok(());
		}
		let xml = self.runtime.xml()?;
		let Some(items) = node.child_mut(names::NN_ITEMS) else {
			return Ok(());
		};
		for child in items.children_mut() {
			let Some(Value::Str(current)) = child.attribute(names::PN_NAME).cloned() else {
				continue;
			};
			xml.set_attribute(child, names::PN_NAME, format!("{current}{postfix}"));
		}
		Ok(())
	}
}

static FIELDSET_POSTFIX: HandlerDef = HandlerDef {
	name: "fieldset-postfix",
	capability: Capability::Widget,
	construct: |runtime| {
		Ok(HandlerInstance::Widget(Box::new(FieldsetPostfixHandler { runtime })))
	},
};

inventory::submit!(HandlerReg(&FIELDSET_POSTFIX));
