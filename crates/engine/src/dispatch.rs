//! The per-component dispatch loop.
//!
//! One document tree per component: the loop appends a node per field in
//! introspector order and threads that single tree through every handler
//! invocation. Generic widget handlers run first for each field, then the
//! per-kind handlers in the field's metadata declaration order; dialog
//! handlers run once against the root after the field pass. A handler
//! failure aborts only the component being generated.

use std::sync::Arc;

use dialogen_doctree::Node;
use dialogen_model::ComponentSpec;

use crate::context::Runtime;
use crate::error::{GenError, HandlerError};
use crate::handlers::{GENERIC_KIND, WidgetHandler};
use crate::introspect::{self, BoundField};
use crate::registry::HandlerRegistry;

/// Node names of the per-component scaffold.
pub mod nodes {
	pub const ROOT: &str = "dialog";
	pub const CONTENT: &str = "content";
	pub const ITEMS: &str = "items";
}

const PN_COMPONENT: &str = "component";
const PN_TITLE: &str = "title";
const PN_NAME: &str = "name";

/// The generation result for a single component type.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedComponent {
	pub qualified_name: String,
	pub tree: Node,
}

/// Builds the document tree for one component.
///
/// The tree is owned exclusively by this call until it is returned; no
/// handler and no other component may hold on to any of its nodes.
pub fn generate_component(
	runtime: &Runtime,
	registry: &HandlerRegistry,
	component: &Arc<ComponentSpec>,
) -> Result<GeneratedComponent, GenError> {
	let discovery = runtime.discovery()?;
	let sink = runtime.exceptions()?;
	let xml = runtime.xml()?;

	let mut root = Node::new(nodes::ROOT);
	xml.set_attribute(&mut root, PN_COMPONENT, component.qualified_name.as_str());
	xml.set_attribute(&mut root, PN_TITLE, component.short_name());

	let mut items = Node::new(nodes::ITEMS);
	for field in introspect::fields(&discovery, component, sink.as_ref()) {
		let mut node = Node::new(xml.valid_field_name(field.name()));
		xml.set_attribute(&mut node, PN_NAME, xml.field_property_path(field.name()));

		for handler in registry.widgets_for(GENERIC_KIND) {
			invoke(handler.as_ref(), &mut node, &field)?;
		}
		for item in &field.field.metadata {
			for handler in registry.widgets_for(&item.kind) {
				invoke(handler.as_ref(), &mut node, &field)?;
			}
		}
		items.append_child(node);
	}

	let content = root.append_child(Node::new(nodes::CONTENT));
	content.append_child(items);

	for handler in registry.dialogs() {
		handler.accept(&mut root, component).map_err(|error| {
			HandlerError::Invocation {
				handler: handler.name(),
				subject: component.qualified_name.clone(),
				reason: error.to_string(),
			}
		})?;
	}

	Ok(GeneratedComponent {
		qualified_name: component.qualified_name.clone(),
		tree: root,
	})
}

fn invoke(
	handler: &dyn WidgetHandler,
	node: &mut Node,
	field: &BoundField,
) -> Result<(), HandlerError> {
	handler.accept(node, field).map_err(|error| {
		HandlerError::Invocation {
			handler: handler.name(),
			subject: field.name().to_owned(),
			reason: error.to_string(),
		}
	})
}
