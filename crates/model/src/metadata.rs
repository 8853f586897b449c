use dialogen_doctree::Value;

/// A structured, defaulted record attached to a field.
///
/// The `kind` decides which handlers react to the item. An item whose
/// properties are all at their declared defaults is structurally present but
/// semantically empty: handlers may still fire, they just have nothing
/// non-default to emit.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataItem {
	/// Identifies the handler vocabulary this item belongs to.
	pub kind: String,
	/// Whether the generic property-mapping path applies to this item.
	pub mapped: bool,
	/// Attribute namespace prepended to mapped property names. Empty by
	/// default.
	pub namespace: String,
	/// Properties in declaration order.
	pub properties: Vec<Property>,
}

impl MetadataItem {
	pub fn new(kind: impl Into<String>) -> Self {
		Self {
			kind: kind.into(),
			mapped: false,
			namespace: String::new(),
			properties: Vec::new(),
		}
	}

	/// Opts this item into the generic property-mapping path.
	pub fn mapped(mut self) -> Self {
		self.mapped = true;
		self
	}

	pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
		self.namespace = namespace.into();
		self
	}

	/// Adds a property with no declared default. Such a property is always
	/// considered non-default.
	pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.properties.push(Property {
			name: name.into(),
			value: value.into(),
			default: None,
		});
		self
	}

	/// Adds a property with a declared default.
	pub fn with_defaulted_property(
		mut self,
		name: impl Into<String>,
		value: impl Into<Value>,
		default: impl Into<Value>,
	) -> Self {
		self.properties.push(Property {
			name: name.into(),
			value: value.into(),
			default: Some(default.into()),
		});
		self
	}

	pub fn property(&self, name: &str) -> Option<&Property> {
		self.properties.iter().find(|p| p.name == name)
	}

	pub fn str_property(&self, name: &str) -> Option<&str> {
		self.property(name).and_then(|p| p.value.as_str())
	}

	pub fn bool_property(&self, name: &str) -> Option<bool> {
		self.property(name).and_then(|p| p.value.as_bool())
	}

	pub fn long_property(&self, name: &str) -> Option<i64> {
		self.property(name).and_then(|p| p.value.as_long())
	}

	/// True iff at least one property was explicitly set away from its
	/// declared default.
	pub fn is_any_non_default(&self) -> bool {
		self.properties.iter().any(Property::is_non_default)
	}

	/// Iterates the properties that were set away from their defaults, in
	/// declaration order.
	pub fn non_default_properties(&self) -> impl Iterator<Item = &Property> {
		self.properties.iter().filter(|p| p.is_non_default())
	}
}

/// A single metadata property: live value plus declared default.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
	pub name: String,
	pub value: Value,
	/// The statically declared default, if any. Absent means the property is
	/// mandatory and always treated as non-default.
	pub default: Option<Value>,
}

impl Property {
	/// Applies the non-default rule:
	///
	/// - no declared default: always non-default;
	/// - empty list value: default, regardless of what the declared default
	///   says;
	/// - otherwise: value inequality against the declared default.
	pub fn is_non_default(&self) -> bool {
		let Some(default) = &self.default else {
			return true;
		};
		if self.value.is_empty_list() {
			return false;
		}
		self.value != *default
	}
}
