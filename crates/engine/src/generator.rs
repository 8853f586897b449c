//! The end-to-end generation run.

use std::sync::Arc;

use dialogen_doctree::XmlUtility;

use crate::context::{Runtime, RuntimeContext, Services};
use crate::defs::TypeSet;
use crate::discovery::DiscoveryService;
use crate::dispatch::{self, GeneratedComponent};
use crate::error::GenError;
use crate::registry::HandlerRegistry;
use crate::sink::{CollectingSink, ExceptionSink};

/// What a run hands back: the trees that generated, plus every problem that
/// was reported along the way. Partial output with an honest problem list,
/// never a first-error abort.
#[derive(Debug)]
pub struct GenerationReport {
	pub components: Vec<GeneratedComponent>,
	pub problems: Vec<GenError>,
}

enum Input {
	Roots(Vec<String>),
	Sets(Vec<TypeSet>),
}

/// Configures and executes one generation run.
///
/// Wires the control flow end to end: context initialization, discovery,
/// handler instantiation, then the per-component dispatch loop. Components
/// are processed in qualified-name order; a component whose dispatch fails is
/// reported and skipped without touching its siblings.
pub struct Generator {
	input: Input,
	package_base: Option<String>,
}

impl Generator {
	/// A run over registered descriptor sources named by `roots`.
	pub fn from_roots<I, S>(roots: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			input: Input::Roots(roots.into_iter().map(Into::into).collect()),
			package_base: None,
		}
	}

	/// A run over type sets owned by the embedding tool.
	pub fn from_sets(sets: Vec<TypeSet>) -> Self {
		Self {
			input: Input::Sets(sets),
			package_base: None,
		}
	}

	/// Restricts component discovery to qualified names under this package
	/// prefix. A trailing `.*` wildcard is accepted and stripped.
	pub fn package_base(mut self, base: impl Into<String>) -> Self {
		self.package_base = Some(base.into());
		self
	}

	/// Executes the run.
	pub fn run(self) -> Result<GenerationReport, GenError> {
		let sink = Arc::new(CollectingSink::new());
		let base = self.package_base.as_deref();
		let discovery = Arc::new(match self.input {
			Input::Roots(roots) => DiscoveryService::scan(&roots, base, sink.as_ref()),
			Input::Sets(sets) => DiscoveryService::from_sets(sets, base, sink.as_ref()),
		});

		let runtime: Runtime = Arc::new(RuntimeContext::new());
		runtime.initialize(Services {
			discovery: discovery.clone(),
			exceptions: sink.clone(),
			xml: Arc::new(XmlUtility::new()),
		})?;

		let registry = HandlerRegistry::instantiate(&runtime)?;

		let mut components = Vec::new();
		for component in discovery.component_types() {
			match dispatch::generate_component(&runtime, &registry, &component) {
				Ok(generated) => components.push(generated),
				Err(error) => {
					tracing::warn!(
						component = component.qualified_name,
						%error,
						"component skipped"
					);
					sink.handle(error);
				}
			}
		}

		Ok(GenerationReport {
			components,
			problems: sink.problems(),
		})
	}
}
