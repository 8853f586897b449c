use crate::kinds;
use crate::metadata::MetadataItem;

/// A type marked as a generation target.
///
/// Discovered once per run and immutable thereafter. `parent` names another
/// component descriptor; the ancestor chain it induces drives inherited-field
/// collection in the introspector.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentSpec {
	/// Fully qualified name, e.g. `com.acme.components.Banner`.
	pub qualified_name: String,
	/// Qualified name of the ancestor descriptor, if any.
	pub parent: Option<String>,
	/// Own declared fields, in declaration order. Inherited fields are not
	/// repeated here.
	pub fields: Vec<FieldSpec>,
}

impl ComponentSpec {
	pub fn new(qualified_name: impl Into<String>) -> Self {
		Self {
			qualified_name: qualified_name.into(),
			parent: None,
			fields: Vec::new(),
		}
	}

	pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
		self.parent = Some(parent.into());
		self
	}

	pub fn with_field(mut self, field: FieldSpec) -> Self {
		self.fields.push(field);
		self
	}

	/// The package portion of the qualified name (empty for unqualified
	/// names).
	pub fn package(&self) -> &str {
		self.qualified_name
			.rsplit_once('.')
			.map_or("", |(pkg, _)| pkg)
	}

	/// The unqualified trailing segment of the name.
	pub fn short_name(&self) -> &str {
		self.qualified_name
			.rsplit_once('.')
			.map_or(self.qualified_name.as_str(), |(_, name)| name)
	}
}

/// A named member of a component type.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
	pub name: String,
	/// Static members never map to dialog output.
	pub is_static: bool,
	/// Metadata items in declaration order.
	pub metadata: Vec<MetadataItem>,
}

impl FieldSpec {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			is_static: false,
			metadata: Vec::new(),
		}
	}

	/// Marks the field as a static member.
	pub fn static_member(mut self) -> Self {
		self.is_static = true;
		self
	}

	pub fn with_metadata(mut self, item: MetadataItem) -> Self {
		self.metadata.push(item);
		self
	}

	/// Returns the first metadata item of the given kind.
	pub fn metadata_of(&self, kind: &str) -> Option<&MetadataItem> {
		self.metadata.iter().find(|m| m.kind == kind)
	}

	/// The explicit ordering hint, read from the `dialog_field` item's
	/// `ranking` property. Fields without one rank as 0.
	pub fn rank(&self) -> i64 {
		self.metadata_of(kinds::DIALOG_FIELD)
			.and_then(|m| m.long_property(kinds::PN_RANKING))
			.unwrap_or(0)
	}

	/// Whether the field carries the `ignore` marker.
	pub fn is_ignored(&self) -> bool {
		self.metadata_of(kinds::IGNORE).is_some()
	}
}
