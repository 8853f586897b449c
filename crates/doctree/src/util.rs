use crate::node::{Node, Value};

/// Prefix that turns a field name into a relative property path.
const NAME_PREFIX: &str = "./";

/// The document-mutation utility shared by all handlers in a run.
///
/// Stateless; it exists as a value so it can be carried in the runtime
/// context services alongside discovery and the exception sink, and so the
/// mutation contract has a single named surface.
#[derive(Debug, Default)]
pub struct XmlUtility;

impl XmlUtility {
	pub fn new() -> Self {
		Self
	}

	/// Creates a child node with the given name and appends it to `parent`.
	pub fn append_child<'a>(&self, parent: &'a mut Node, name: &str) -> &'a mut Node {
		parent.append_child(Node::new(self.valid_field_name(name)))
	}

	/// Sets a named attribute on `node`.
	pub fn set_attribute(&self, node: &mut Node, name: &str, value: impl Into<Value>) {
		node.set_attribute(name, value);
	}

	/// Returns the prefix used to reference sibling fields by relative path.
	pub fn name_prefix(&self) -> &'static str {
		NAME_PREFIX
	}

	/// Mangles a user-supplied field name into a valid node name.
	///
	/// Characters outside `[A-Za-z0-9_-]` become `_`; a name that does not
	/// start with a letter or underscore is prefixed with `_`. The mapping is
	/// deterministic so re-generation yields identical trees.
	pub fn valid_field_name(&self, raw: &str) -> String {
		let mut out = String::with_capacity(raw.len());
		for ch in raw.chars() {
			if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' {
				out.push(ch);
			} else {
				out.push('_');
			}
		}
		if out.is_empty() || !out.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
			out.insert(0, '_');
		}
		out
	}

	/// Returns the relative property path for a field name: `./` plus the
	/// mangled name.
	pub fn field_property_path(&self, raw: &str) -> String {
		format!("{}{}", NAME_PREFIX, self.valid_field_name(raw))
	}

	/// Writes a set of generic properties to `node` as attributes.
	///
	/// Attribute names follow the fixed `{namespace}{property}` convention;
	/// callers pass only the properties they consider worth emitting (the
	/// non-default filtering happens upstream).
	pub fn map_properties<'a>(
		&self,
		node: &mut Node,
		namespace: &str,
		properties: impl IntoIterator<Item = (&'a str, &'a Value)>,
	) {
		for (name, value) in properties {
			let attr = if namespace.is_empty() {
				name.to_owned()
			} else {
				format!("{namespace}{name}")
			};
			node.set_attribute(attr, value.clone());
		}
	}
}
