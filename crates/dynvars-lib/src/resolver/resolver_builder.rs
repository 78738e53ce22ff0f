use super::OrderResolver;
use super::DependencyGraph;
use crate::config::DynvarsOptions;
use crate::variable::VariableDefinition;

pub struct ResolverBuilder<'defs> {
	definitions: &'defs [VariableDefinition],
	options: DynvarsOptions,
}

impl<'defs> ResolverBuilder<'defs> {
	/// `definitions` in declaration order.
	pub fn new(definitions: &'defs [VariableDefinition]) -> Self {
		Self {
			definitions,
			options: Default::default(),
		}
	}

	pub fn options(mut self, options: DynvarsOptions) -> Self {
		self.options = options;
		self
	}

	/// Builds the dependency graph.
	///
	/// # Errors
	/// - [`crate::Error::DuplicateVariable`] if two definitions share a name.
	/// - [`crate::Error::UnknownReferences`] if [`DynvarsOptions::strict_references`] is set and any
	///   expression names an undeclared variable.
	pub fn build(self) -> crate::Result<OrderResolver<'defs>> {
		log::debug!("Building dependency graph for {} variables", self.definitions.len());
		let dep_graph = DependencyGraph::build(self.definitions)?;

		if self.options.strict_references() && !dep_graph.unknown_references().is_empty() {
			return Err(crate::Error::UnknownReferences(dep_graph.unknown_references().to_vec()));
		}

		Ok(OrderResolver::new(self.definitions, dep_graph))
	}
}
