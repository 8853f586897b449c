use indexmap::IndexMap;
use serde::Serialize;

/// An attribute (or metadata property) value.
///
/// Attribute order on a node is insertion order; value comparison is plain
/// structural equality, which is what the non-default filtering upstream
/// relies on.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
	Str(String),
	Bool(bool),
	Long(i64),
	Double(f64),
	StrList(Vec<String>),
	LongList(Vec<i64>),
}

impl Value {
	/// Returns true for an empty list-valued variant.
	///
	/// Non-list values are never "empty" in this sense, even `""`.
	pub fn is_empty_list(&self) -> bool {
		match self {
			Self::StrList(v) => v.is_empty(),
			Self::LongList(v) => v.is_empty(),
			_ => false,
		}
	}

	/// Returns the string payload, if this is a string value.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Str(s) => Some(s),
			_ => None,
		}
	}

	/// Returns the boolean payload, if this is a boolean value.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(b) => Some(*b),
			_ => None,
		}
	}

	/// Returns the integer payload, if this is an integer value.
	pub fn as_long(&self) -> Option<i64> {
		match self {
			Self::Long(n) => Some(*n),
			_ => None,
		}
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::Str(value.to_owned())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::Str(value)
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Self::Long(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Double(value)
	}
}

impl From<Vec<String>> for Value {
	fn from(value: Vec<String>) -> Self {
		Self::StrList(value)
	}
}

impl From<Vec<i64>> for Value {
	fn from(value: Vec<i64>) -> Self {
		Self::LongList(value)
	}
}

/// A single node of the generated document.
///
/// Nodes are owned by exactly one tree; nothing here is shared or reference
/// counted, so two component trees can never alias a node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
	name: String,
	attributes: IndexMap<String, Value>,
	children: Vec<Node>,
}

impl Node {
	/// Creates an empty node with the given name.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			attributes: IndexMap::new(),
			children: Vec::new(),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Sets a named attribute, replacing any previous value under that name.
	pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<Value>) {
		self.attributes.insert(name.into(), value.into());
	}

	pub fn attribute(&self, name: &str) -> Option<&Value> {
		self.attributes.get(name)
	}

	/// Iterates attributes in insertion order.
	pub fn attributes(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.attributes.iter().map(|(k, v)| (k.as_str(), v))
	}

	pub fn attribute_count(&self) -> usize {
		self.attributes.len()
	}

	/// Appends a child and returns a mutable reference to it.
	pub fn append_child(&mut self, child: Node) -> &mut Node {
		self.children.push(child);
		let last = self.children.len() - 1;
		&mut self.children[last]
	}

	/// Returns the first child with the given name.
	pub fn child(&self, name: &str) -> Option<&Node> {
		self.children.iter().find(|c| c.name == name)
	}

	/// Returns the first child with the given name, mutably.
	pub fn child_mut(&mut self, name: &str) -> Option<&mut Node> {
		self.children.iter_mut().find(|c| c.name == name)
	}

	pub fn children(&self) -> &[Node] {
		&self.children
	}

	pub fn children_mut(&mut self) -> &mut [Node] {
		&mut self.children
	}
}
