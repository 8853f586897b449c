//! Ordered, filtered field extraction across a component's ancestor chain.
//!
//! Collection walks the chain most-derived type first and takes each type's
//! own declared fields (never inherited ones, so nothing is seen twice),
//! concatenating in chain order. A stable sort then applies the user-facing
//! order: explicit rank first, ancestor-before-descendant on ties. The
//! tie-break reads each declarer's position in the already-cut chain, so it
//! stays a strict weak ordering even when the parent graph cycles. Two fields
//! declared by the same type with the same rank keep declaration order.

use std::sync::Arc;

use dialogen_model::{ComponentSpec, FieldSpec};
use rustc_hash::FxHashMap;

use crate::discovery::DiscoveryService;
use crate::sink::ExceptionSink;

/// A field paired with the type that declared it.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundField {
	/// Qualified name of the declaring component type.
	pub declared_by: String,
	pub field: FieldSpec,
}

impl BoundField {
	pub fn name(&self) -> &str {
		&self.field.name
	}

	pub fn rank(&self) -> i64 {
		self.field.rank()
	}
}

/// The processable fields of a component: not static, not ignored, in
/// generation order.
pub fn fields(
	discovery: &DiscoveryService,
	component: &Arc<ComponentSpec>,
	sink: &dyn ExceptionSink,
) -> Vec<BoundField> {
	let chain = discovery.ancestor_chain(component, sink);
	let mut out = collect(&chain, |f| !f.is_static && !f.is_ignored());
	sort_by_rank(&chain, &mut out);
	out
}

/// Every declared field of the chain, unfiltered, in generation order.
pub fn all_fields(
	discovery: &DiscoveryService,
	component: &Arc<ComponentSpec>,
	sink: &dyn ExceptionSink,
) -> Vec<BoundField> {
	let chain = discovery.ancestor_chain(component, sink);
	let mut out = collect(&chain, |_| true);
	sort_by_rank(&chain, &mut out);
	out
}

/// Only the fields carrying the `ignore` marker, in traversal order. Kept for
/// diagnostics and round-tripping; no generation order applies.
pub fn ignored_fields(
	discovery: &DiscoveryService,
	component: &Arc<ComponentSpec>,
	sink: &dyn ExceptionSink,
) -> Vec<BoundField> {
	collect(&discovery.ancestor_chain(component, sink), FieldSpec::is_ignored)
}

fn collect(
	chain: &[Arc<ComponentSpec>],
	predicate: impl Fn(&FieldSpec) -> bool,
) -> Vec<BoundField> {
	let mut out = Vec::new();
	for ancestor in chain {
		for field in ancestor.fields.iter().filter(|f| predicate(f)) {
			out.push(BoundField {
				declared_by: ancestor.qualified_name.clone(),
				field: field.clone(),
			});
		}
	}
	out
}

/// Stable sort: rank ascending, then ancestor's fields before a descendant's.
///
/// The ancestor test is the declarer's index in the chain (most-derived
/// first), so fields declared further up the chain sort earlier on ties.
/// Every declarer holds exactly one index; the comparator is consistent even
/// when the parent graph that produced the chain contained a cycle.
fn sort_by_rank(chain: &[Arc<ComponentSpec>], fields: &mut [BoundField]) {
	let position: FxHashMap<&str, usize> = chain
		.iter()
		.enumerate()
		.map(|(index, c)| (c.qualified_name.as_str(), index))
		.collect();
	fields.sort_by(|a, b| {
		a.rank().cmp(&b.rank()).then_with(|| {
			let a_pos = position.get(a.declared_by.as_str());
			let b_pos = position.get(b.declared_by.as_str());
			b_pos.cmp(&a_pos)
		})
	});
}

#[cfg(test)]
mod tests {
	use dialogen_model::{MetadataItem, kinds};
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::defs::TypeSet;
	use crate::sink::CollectingSink;

	fn ranked(name: &str, rank: i64) -> FieldSpec {
		FieldSpec::new(name).with_metadata(
			MetadataItem::new(kinds::DIALOG_FIELD).with_defaulted_property(
				kinds::PN_RANKING,
				rank,
				0i64,
			),
		)
	}

	fn discovery_of(sets: Vec<TypeSet>) -> (DiscoveryService, CollectingSink) {
		let sink = CollectingSink::new();
		let discovery = DiscoveryService::from_sets(sets, None, &sink);
		(discovery, sink)
	}

	fn names(fields: &[BoundField]) -> Vec<&str> {
		fields.iter().map(BoundField::name).collect()
	}

	#[test]
	fn statics_and_ignored_are_excluded() {
		let set = TypeSet::new().with_component(
			ComponentSpec::new("a.Only")
				.with_field(FieldSpec::new("kept"))
				.with_field(FieldSpec::new("constant").static_member())
				.with_field(FieldSpec::new("hidden").with_metadata(MetadataItem::new(kinds::IGNORE))),
		);
		let (discovery, sink) = discovery_of(vec![set]);
		let component = discovery.get("a.Only").expect("indexed").clone();

		assert_eq!(names(&fields(&discovery, &component, &sink)), vec!["kept"]);
		assert_eq!(
			names(&ignored_fields(&discovery, &component, &sink)),
			vec!["hidden"]
		);
		assert_eq!(all_fields(&discovery, &component, &sink).len(), 3);
	}

	#[test]
	fn rank_dominates_declaration_order() {
		let set = TypeSet::new().with_component(
			ComponentSpec::new("a.Only")
				.with_field(ranked("late", 5))
				.with_field(ranked("early", 1))
				.with_field(FieldSpec::new("unranked")),
		);
		let (discovery, sink) = discovery_of(vec![set]);
		let component = discovery.get("a.Only").expect("indexed").clone();

		assert_eq!(
			names(&fields(&discovery, &component, &sink)),
			vec!["unranked", "early", "late"]
		);
	}

	#[test]
	fn equal_rank_puts_ancestor_fields_first() {
		let set = TypeSet::new()
			.with_component(ComponentSpec::new("a.Base").with_field(FieldSpec::new("baseField")))
			.with_component(
				ComponentSpec::new("a.Leaf")
					.with_parent("a.Base")
					.with_field(FieldSpec::new("leafField")),
			);
		let (discovery, sink) = discovery_of(vec![set]);
		let leaf = discovery.get("a.Leaf").expect("indexed").clone();

		assert_eq!(
			names(&fields(&discovery, &leaf, &sink)),
			vec!["baseField", "leafField"]
		);
	}

	#[test]
	fn rank_still_beats_ancestry() {
		let set = TypeSet::new()
			.with_component(ComponentSpec::new("a.Base").with_field(ranked("baseField", 9)))
			.with_component(
				ComponentSpec::new("a.Leaf")
					.with_parent("a.Base")
					.with_field(ranked("leafField", 1)),
			);
		let (discovery, sink) = discovery_of(vec![set]);
		let leaf = discovery.get("a.Leaf").expect("indexed").clone();

		assert_eq!(
			names(&fields(&discovery, &leaf, &sink)),
			vec!["leafField", "baseField"]
		);
	}

	#[test]
	fn tied_ranks_across_a_parent_cycle_keep_chain_order() {
		let mut one = ComponentSpec::new("a.One").with_parent("a.Two");
		let mut two = ComponentSpec::new("a.Two").with_parent("a.One");
		for i in 0..64 {
			one = one.with_field(FieldSpec::new(format!("one{i}")));
			two = two.with_field(FieldSpec::new(format!("two{i}")));
		}
		let (discovery, sink) = discovery_of(vec![
			TypeSet::new().with_component(one).with_component(two),
		]);
		let component = discovery.get("a.One").expect("indexed").clone();

		// The cycle cuts the chain at [One, Two]; with every rank tied the
		// fields of the chain-uppermost type come first, declaration order
		// preserved within each type.
		let out = fields(&discovery, &component, &sink);
		assert_eq!(out.len(), 128);
		assert_eq!(out[0].name(), "two0");
		assert_eq!(out[63].name(), "two63");
		assert_eq!(out[64].name(), "one0");
		assert_eq!(sink.len(), 1);
	}

	#[test]
	fn introspection_is_reproducible() {
		let set = TypeSet::new()
			.with_component(
				ComponentSpec::new("a.Base")
					.with_field(ranked("b1", 2))
					.with_field(FieldSpec::new("b2")),
			)
			.with_component(
				ComponentSpec::new("a.Leaf")
					.with_parent("a.Base")
					.with_field(FieldSpec::new("l1"))
					.with_field(ranked("l2", 2)),
			);
		let (discovery, sink) = discovery_of(vec![set]);
		let leaf = discovery.get("a.Leaf").expect("indexed").clone();

		let first = fields(&discovery, &leaf, &sink);
		let second = fields(&discovery, &leaf, &sink);
		assert_eq!(first, second);
		assert_eq!(names(&first), vec!["b2", "l1", "b1", "l2"]);
	}
}
