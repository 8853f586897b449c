//! Descriptors consumed by the generation pipeline.
//!
//! A build step (or the embedding tool's startup scan) produces
//! [`ComponentSpec`] values describing each generation target: its fields and
//! the metadata items attached to them. The pipeline never inspects live
//! types; everything it needs is in these plain records, which is what makes
//! the output reproducible.
//!
//! Metadata items pair every property with its declared default, so
//! "was this set away from the default" is an ordinary value comparison
//! (see [`Property::is_non_default`]).

mod metadata;
mod spec;

pub mod kinds;

pub use metadata::{MetadataItem, Property};
pub use spec::{ComponentSpec, FieldSpec};
