//! Password widget handler.

use dialogen_doctree::Node;
use dialogen_model::kinds;

use crate::context::Runtime;
use crate::defs::{Capability, HandlerDef, HandlerReg};
use crate::error::GenError;
use crate::handlers::{HandlerInstance, WidgetHandler};
use crate::handlers::builtins::names;
use crate::introspect::BoundField;

/// When the `password` item names a retype field, writes a `retype` attribute
/// referencing that field by relative property path.
pub struct PasswordHandler {
	runtime: Runtime,
}

impl WidgetHandler for PasswordHandler {
	fn name(&self) -> &'static str {
		"password"
	}

	fn kind(&self) -> &'static str {
		kinds::PASSWORD
	}

	fn accept(&self, node: &mut Node, field: &BoundField) -> Result<(), GenError> {
		let Some(item) = field.field.metadata_of(kinds::PASSWORD) else {
			return Ok(());
		};
		let retype = item.str_property(names::PN_RETYPE).unwrap_or_default();
		if !retype.is_empty() {
			let xml = self.runtime.xml()?;
			xml.set_attribute(node, names::PN_RETYPE, xml.field_property_path(retype));
		}
		Ok(())
	}
}

static PASSWORD: HandlerDef = HandlerDef {
	name: "password",
	capability: Capability::Widget,
	construct: |runtime| Ok(HandlerInstance::Widget(Box::new(PasswordHandler { runtime }))),
};

inventory::submit!(HandlerReg(&PASSWORD));

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
			field: FieldSpec::new("secret").with_metadata(item),
		}
	}

	#[test]
	fn retype_reference_is_prefixed_and_mangled() {
		let (runtime, _) = runtime_with(Vec::new());
		let handler = PasswordHandler { runtime };

		let mut node = Node::new("secret");
		let item = MetadataItem::new(kinds::PASSWORD).with_defaulted_property(
			names::PN_RETYPE,
			"confirm password",
			"",
		);
		handler.accept(&mut node, &bound(item)).expect("handled");
		assert_eq!(
			node.attribute(names::PN_RETYPE),
			Some(&Value::Str("./confirm_password".into()))
		);
	}

	#[test]
	fn empty_retype_writes_nothing() {
		let (runtime, _) = runtime_with(Vec::new());
		let handler = PasswordHandler { runtime };

		let mut node = Node::new("secret");
		let item =
			MetadataItem::new(kinds::PASSWORD).with_defaulted_property(names::PN_RETYPE, "", "");
		handler.accept(&mut node, &bound(item)).expect("handled");
		assert_eq!(node.attribute_count(), 0);
	}
}
