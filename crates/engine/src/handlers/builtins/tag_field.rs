//! Tag field widget handler.

use dialogen_doctree::Node;
use dialogen_model::kinds;

use crate::context::Runtime;
use crate::defs::{Capability, HandlerDef, HandlerReg};
use crate::error::GenError;
use crate::handlers::{HandlerInstance, WidgetHandler};
use crate::handlers::builtins::names;
use crate::introspect::BoundField;

/// Writes `autocreateTag` as the negation of the item's `forceSelection`
/// property: a tag field restricted to existing tags must not create new
/// ones.
pub struct TagFieldHandler {
	runtime: Runtime,
}

impl WidgetHandler for TagFieldHandler {
	fn name(&self) -> &'static str {
		"tag-field"
	}

	fn kind(&self) -> &'static str {
		kinds::TAG_FIELD
	}

	fn accept(&self, node: &mut Node, field: &BoundField) -> Result<(), GenError> {
		let Some(item) = field.field.metadata_of(kinds::TAG_FIELD) else {
			return Ok(());
		};
		let force_selection = item.bool_property("forceSelection").unwrap_or(false);
		let xml = self.runtime.xml()?;
		xml.set_attribute(node, names::PN_AUTOCREATE_TAG, !force_selection);
		Ok(())
	}
}

static TAG_FIELD: HandlerDef = HandlerDef {
	name: "tag-field",
	capability: Capability::Widget,
	construct: |runtime| Ok(HandlerInstance::Widget(Box::new(TagFieldHandler { runtime }))),
};

inventory::submit!(HandlerReg(&TAG_FIELD));

#[cfg(test)]
mod tests {
	use dialogen_doctree::Value;
	use dialogen_model::{FieldSpec, MetadataItem};
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::handlers::builtins::testing::runtime_with;

	#[test]
	fn autocreate_is_the_negated_force_selection() {
		let (runtime, _) = runtime_with(Vec::new());
		let handler = TagFieldHandler { runtime };

		for (force, expected) in [(true, false), (false, true)] {
			let bound = BoundField {
				declared_by: "a.Only".to_owned(),
				field: FieldSpec::new("tags").with_metadata(
					MetadataItem::new(kinds::TAG_FIELD).with_defaulted_property(
						"forceSelection",
						force,
						false,
					),
				),
			};
			let mut node = Node::new("tags");
			handler.accept(&mut node, &bound).expect("handled");
			assert_eq!(
				node.attribute(names::PN_AUTOCREATE_TAG),
				Some(&Value::Bool(expected))
			);
		}
	}
}
