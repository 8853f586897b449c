//! Built-in handler implementations.
//!
//! Each built-in registers itself through the same [`inventory`] path a
//! third-party handler would use; dispatch treats them identically. Their
//! widget vocabulary is illustrative, not contractual — nothing in the
//! pipeline depends on these kinds existing.

mod depends_on_ref;
mod fieldset;
mod fieldset_postfix;
mod password;
mod property_mapping;
mod tag_field;

pub use depends_on_ref::DependsOnRefHandler;
pub use fieldset::FieldSetHandler;
pub use fieldset_postfix::FieldsetPostfixHandler;
pub use password::PasswordHandler;
pub use property_mapping::PropertyMappingHandler;
pub use tag_field::TagFieldHandler;

/// Attribute and node names the built-ins write.
pub mod names {
	pub const PN_NAME: &str = "name";
	pub const PN_RETYPE: &str = "retype";
	pub const PN_AUTOCREATE_TAG: &str = "autocreateTag";
	pub const PN_DEPENDS_ON_REF: &str = "dependsOnRef";
	pub const PN_DEPENDS_ON_REF_TYPE: &str = "dependsOnRefType";
	pub const NN_ITEMS: &str = "items";
}
