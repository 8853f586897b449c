//! Dependency-reference widget handler.

use dialogen_doctree::Node;
use dialogen_model::kinds;

use crate::context::Runtime;
use crate::defs::{Capability, HandlerDef, HandlerReg};
use crate::error::GenError;
use crate::handlers::{HandlerInstance, WidgetHandler};
use crate::handlers::builtins::names;
use crate::introspect::BoundField;

/// Reference type written only when it differs from automatic detection.
const REF_TYPE_AUTO: &str = "auto";

/// Publishes a field as a dependency reference: writes `dependsOnRef` with
/// the declared tag and, for an explicit reference type, `dependsOnRefType`.
pub struct DependsOnRefHandler {
	runtime: Runtime,
}

impl WidgetHandler for DependsOnRefHandler {
	fn name(&self) -> &'static str {
		"depends-on-ref"
	}

	fn kind(&self) -> &'static str {
		kinds::DEPENDS_ON_REF
	}

	fn accept(&self, node: &mut Node, field: &BoundField) -> Result<(), GenError> {
		let Some(item) = field.field.metadata_of(kinds::DEPENDS_ON_REF) else {
			return Ok(());
		};
		let Some(name) = item.str_property(names::PN_NAME) else {
			return Ok(());
		};
		let xml = self.runtime.xml()?;
		xml.set_attribute(node, names::PN_DEPENDS_ON_REF, name);
		let ref_type = item.str_property("type").unwrap_or(REF_TYPE_AUTO);
		if ref_type != REF_TYPE_AUTO {
			xml.set_attribute(node, names::PN_DEPENDS_ON_REF_TYPE, ref_type);
		}
		Ok(())
	}
}

static DEPENDS_ON_REF: HandlerDef = HandlerDef {
	name: "depends-on-ref",
	capability: Capability::Widget,
	construct: |runtime| Ok(HandlerInstance::Widget(Box::new(DependsOnRefHandler { runtime }))),
};

inventory::submit!(HandlerReg(&DEPENDS_ON_REF));

#[cfg(test)]
mod tests {
	use dialogen_doctree::Value;
	use dialogen_model::{FieldSpec, MetadataItem};
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::handlers::builtins::testing::runtime_with;

	fn bound(item: MetadataItem) -> BoundField {
		BoundField {
			declared_by: "a.Only".to_owned(),
			field: FieldSpec::new("toggle").with_metadata(item),
		}
	}

	#[test]
	fn auto_type_writes_only_the_reference() {
		let (runtime, _) = runtime_with(Vec::new());
		let handler = DependsOnRefHandler { runtime };

		let item = MetadataItem::new(kinds::DEPENDS_ON_REF)
			.with_property(names::PN_NAME, "showAdvanced")
			.with_defaulted_property("type", REF_TYPE_AUTO, REF_TYPE_AUTO);
		let mut node = Node::new("toggle");
		handler.accept(&mut node, &bound(item)).expect("handled");

		assert_eq!(
			node.attribute(names::PN_DEPENDS_ON_REF),
			Some(&Value::Str("showAdvanced".into()))
		);
		assert!(node.attribute(names::PN_DEPENDS_ON_REF_TYPE).is_none());
	}

	#[test]
	fn explicit_type_is_written() {
		let (runtime, _) = runtime_with(Vec::new());
		let handler = DependsOnRefHandler { runtime };

		let item = MetadataItem::new(kinds::DEPENDS_ON_REF)
			.with_property(names::PN_NAME, "showAdvanced")
			.with_defaulted_property("type", "boolean", REF_TYPE_AUTO);
		let mut node = Node::new("toggle");
		handler.accept(&mut node, &bound(item)).expect("handled");

		assert_eq!(
			node.attribute(names::PN_DEPENDS_ON_REF_TYPE),
			Some(&Value::Str("boolean".into()))
		);
	}
}
