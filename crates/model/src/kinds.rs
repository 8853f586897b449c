//! Well-known metadata kind names.
//!
//! Kinds are open-ended strings; third-party handlers bring their own. The
//! constants here are the ones the pipeline itself gives meaning to (`ignore`,
//! `dialog_field` ranking) plus the built-in widget vocabulary.

/// Marks a field as a dialog field; carries the `ranking` ordering hint.
pub const DIALOG_FIELD: &str = "dialog_field";

/// Excludes a field from generation output.
pub const IGNORE: &str = "ignore";

pub const PASSWORD: &str = "password";
pub const TAG_FIELD: &str = "tag_field";
pub const DEPENDS_ON_REF: &str = "depends_on_ref";
pub const FIELDSET: &str = "fieldset";
pub const FIELDSET_POSTFIX: &str = "fieldset_postfix";

/// Name of the `dialog_field` property holding the explicit rank.
pub const PN_RANKING: &str = "ranking";
