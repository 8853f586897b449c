//! Type discovery over registered descriptor sources.
//!
//! A scan resolves each root name to a [`SourceDef`] and folds the yielded
//! type sets into one immutable index. A root that resolves to nothing, or
//! whose provider fails, is reported to the exception sink and skipped; one
//! bad root never aborts discovery of the rest.
//!
//! Index order is unspecified. Accessors that feed generation output sort
//! before returning so the run stays reproducible.

use std::sync::Arc;

use dialogen_model::ComponentSpec;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::defs::{Capability, HandlerDef, HandlerReg, SourceDef, TypeSet};
use crate::error::SourceError;
use crate::sink::ExceptionSink;

/// Characters stripped from the end of a package-prefix filter.
const PACKAGE_WILDCARD: [char; 2] = ['.', '*'];

/// Immutable index of component descriptors and handler types for one run.
pub struct DiscoveryService {
	package_base: String,
	components: FxHashMap<String, Arc<ComponentSpec>>,
	handlers: Vec<&'static HandlerDef>,
}

impl DiscoveryService {
	/// An index with no components and no scanned handlers. Built-in handler
	/// registrations still show through [`Self::handler_types_of`].
	pub fn empty() -> Self {
		Self {
			package_base: String::new(),
			components: FxHashMap::default(),
			handlers: Vec::new(),
		}
	}

	/// Scans the given roots. Each root names a registered [`SourceDef`];
	/// unknown roots and failing providers are reported and skipped.
	pub fn scan(roots: &[String], package_base: Option<&str>, sink: &dyn ExceptionSink) -> Self {
		let mut sets = Vec::with_capacity(roots.len());
		for root in roots {
			let def = inventory::iter::<SourceDef>
				.into_iter()
				.find(|s| s.name == root.as_str());
			let Some(def) = def else {
				sink.handle(SourceError::UnknownRoot(root.clone()).into());
				continue;
			};
			match (def.provide)() {
				Ok(set) => {
					tracing::debug!(
						root,
						components = set.components.len(),
						handlers = set.handlers.len(),
						"descriptor source resolved"
					);
					sets.push(set);
				}
				Err(error) => sink.handle(error.into()),
			}
		}
		Self::from_sets(sets, package_base, sink)
	}

	/// Builds the index from owned type sets, bypassing source registration.
	/// This is the path embedding tools (and tests) use.
	pub fn from_sets(
		sets: Vec<TypeSet>,
		package_base: Option<&str>,
		_sink: &dyn ExceptionSink,
	) -> Self {
		let package_base = package_base
			.unwrap_or_default()
			.trim_end_matches(PACKAGE_WILDCARD)
			.to_owned();
		let mut components: FxHashMap<String, Arc<ComponentSpec>> = FxHashMap::default();
		let mut handlers = Vec::new();
		for set in sets {
			for component in set.components {
				if components.contains_key(&component.qualified_name) {
					// First-seen definition wins, matching handler dedup.
					tracing::debug!(
						name = component.qualified_name,
						"duplicate component descriptor skipped"
					);
					continue;
				}
				components.insert(component.qualified_name.clone(), Arc::new(component));
			}
			handlers.extend(set.handlers);
		}
		Self {
			package_base,
			components,
			handlers,
		}
	}

	/// All component descriptors whose qualified name starts with the package
	/// prefix (no prefix means no filtering), sorted by qualified name.
	pub fn component_types(&self) -> Vec<Arc<ComponentSpec>> {
		let mut out: Vec<Arc<ComponentSpec>> = self
			.components
			.values()
			.filter(|c| {
				self.package_base.is_empty() || c.qualified_name.starts_with(&self.package_base)
			})
			.cloned()
			.collect();
		out.sort_by(|a, b| a.qualified_name.cmp(&b.qualified_name));
		out
	}

	/// All handler definitions serving the given capability: compile-time
	/// registrations first, then scanned ones, first definition per name
	/// winning. The package prefix does not apply here; handlers are
	/// infrastructure, not content. Sorted by name.
	pub fn handler_types_of(&self, capability: Capability) -> Vec<&'static HandlerDef> {
		let mut seen: FxHashSet<&'static str> = FxHashSet::default();
		let mut out: Vec<&'static HandlerDef> = Vec::new();
		let registered = inventory::iter::<HandlerReg>.into_iter().map(|r| r.0);
		for def in registered.chain(self.handlers.iter().copied()) {
			if def.capability == capability && seen.insert(def.name) {
				out.push(def);
			}
		}
		out.sort_by_key(|d| d.name);
		out
	}

	pub fn get(&self, qualified_name: &str) -> Option<&Arc<ComponentSpec>> {
		self.components.get(qualified_name)
	}

	/// Whether `ancestor` is a strict ancestor of `descendant` in the parent
	/// graph. Cycles terminate the walk.
	pub fn is_ancestor_of(&self, ancestor: &str, descendant: &str) -> bool {
		let mut visited: FxHashSet<&str> = FxHashSet::default();
		let mut current = self.components.get(descendant).and_then(|c| c.parent.as_deref());
		while let Some(name) = current {
			if name == ancestor {
				return true;
			}
			if !visited.insert(name) {
				return false;
			}
			current = self.components.get(name).and_then(|c| c.parent.as_deref());
		}
		false
	}

	/// The ancestor chain of a component, the component itself first.
	///
	/// An unresolved parent name or a cycle cuts the chain at that point and
	/// is reported to the sink; the already-collected prefix is still
	/// returned.
	pub fn ancestor_chain(
		&self,
		component: &Arc<ComponentSpec>,
		sink: &dyn ExceptionSink,
	) -> Vec<Arc<ComponentSpec>> {
		let mut chain = vec![component.clone()];
		let mut seen: FxHashSet<String> = FxHashSet::default();
		seen.insert(component.qualified_name.clone());
		let mut current = component.clone();
		while let Some(parent_name) = current.parent.clone() {
			if seen.contains(&parent_name) {
				sink.handle(
					SourceError::ParentCycle {
						component: component.qualified_name.clone(),
					}
					.into(),
				);
				break;
			}
			match self.components.get(&parent_name) {
				Some(parent) => {
					seen.insert(parent_name);
					chain.push(parent.clone());
					current = parent.clone();
				}
				None => {
					sink.handle(
						SourceError::UnresolvedParent {
							component: current.qualified_name.clone(),
							parent: parent_name,
						}
						.into(),
					);
					break;
				}
			}
		}
		chain
	}
}
