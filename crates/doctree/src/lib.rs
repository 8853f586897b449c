//! Document tree for generated configuration dialogs.
//!
//! One tree is produced per generation target. Nodes are named, carry an
//! insertion-ordered attribute map, and may have children. Serialization of
//! the tree is left to the consumer; everything here derives [`serde::Serialize`]
//! so any format can be emitted downstream.
//!
//! The [`XmlUtility`] is the mutation surface handlers go through: appending
//! children, setting typed attributes, mangling user-supplied names into valid
//! node names, and mapping generic property sets onto a node.

mod node;
mod util;

pub use node::{Node, Value};
pub use util::XmlUtility;
