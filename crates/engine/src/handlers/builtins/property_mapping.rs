//! The generic property-mapping handler.

use dialogen_doctree::Node;

use crate::context::Runtime;
use crate::defs::{Capability, HandlerDef, HandlerReg};
use crate::error::GenError;
use crate::handlers::{GENERIC_KIND, HandlerInstance, WidgetHandler};
use crate::introspect::BoundField;

/// Writes every non-default property of each mapped metadata item on the
/// field as an attribute of the field's node, using the
/// `{namespace}{property}` convention.
///
/// Runs for every field (generic kind); items whose properties are all at
/// their defaults contribute nothing, so no redundant attributes are emitted.
pub struct PropertyMappingHandler {
	runtime: Runtime,
}

impl WidgetHandler for PropertyMappingHandler {
	fn name(&self) -> &'static str {
		"property-mapping"
	}

	fn kind(&self) -> &'static str {
		GENERIC_KIND
	}

	fn accept(&self, node: &mut Node, field: &BoundField) -> Result<(), GenError> {
		let xml = self.runtime.xml()?;
		for item in field.field.metadata.iter().filter(|i| i.mapped) {
			xml.map_properties(
				node,
				&item.namespace,
				item.non_default_properties()
					.map(|p| (p.name.as_str(), &p.value)),
			);
		}
		Ok(())
	}
}

static PROPERTY_MAPPING: HandlerDef = HandlerDef {
	name: "property-mapping",
	capability: Capability::Widget,
	construct: |runtime| Ok(HandlerInstance::Widget(Box::new(PropertyMappingHandler { runtime }))),
};

inventory::submit!(HandlerReg(&PROPERTY_MAPPING));

#[cfg(test)]
mod tests {
	use dialogen_doctree::Value;
	use dialogen_model::{FieldSpec, MetadataItem};
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::handlers::builtins::testing::runtime_with;

	#[test]
	fn maps_only_non_default_properties_of_mapped_items() {
		let (runtime, _) = runtime_with(Vec::new());
		let handler = PropertyMappingHandler { runtime };

		let field = FieldSpec::new("text").with_metadata(
			MetadataItem::new("text_field")
				.mapped()
				.with_defaulted_property("emptyText", "Type here", "")
				.with_defaulted_property("required", false, false),
		);
		let bound = BoundField {
			declared_by: "a.Only".to_owned(),
			field,
		};

		let mut node = Node::new("text");
		handler.accept(&mut node, &bound).expect("mapping succeeds");

		assert_eq!(node.attribute_count(), 1);
		assert_eq!(
			node.attribute("emptyText"),
			Some(&Value::Str("Type here".into()))
		);
	}

	#[test]
	fn unmapped_items_are_ignored() {
		let (runtime, _) = runtime_with(Vec::new());
		let handler = PropertyMappingHandler { runtime };

		let field = FieldSpec::new("text").with_metadata(
			MetadataItem::new("text_field").with_defaulted_property("emptyText", "x", ""),
		);
		let bound = BoundField {
			declared_by: "a.Only".to_owned(),
			field,
		};

		let mut node = Node::new("text");
		handler.accept(&mut node, &bound).expect("mapping succeeds");
		assert_eq!(node.attribute_count(), 0);
	}
}
