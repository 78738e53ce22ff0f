use super::*;

/// Holds the finished graph until it is sorted.
#[derive(Debug)]
pub struct OrderResolver<'defs> {
	definitions: &'defs [VariableDefinition],
	dep_graph: DependencyGraph,
}

impl<'defs> OrderResolver<'defs> {
	pub(super) fn new(definitions: &'defs [VariableDefinition], dep_graph: DependencyGraph) -> Self {
		Self { definitions, dep_graph }
	}

	pub fn get_graph(&self) -> &DependencyGraph {
		&self.dep_graph
	}

	/// Sorts the graph, see [`topological_sort()`].
	///
	/// # Errors
	/// [`crate::Error::CyclicDependency`] naming the variables that could not be ordered,
	/// nothing of the order is kept in that case.
	pub fn resolve(self) -> crate::Result<ResolverFinalized<'defs>> {
		let order = topological_sort(&self.dep_graph)?;
		let statics = self.dep_graph.graph().node_weights().filter(|n| n.is_static).count();
		log::info!("Resolved evaluation order of {} variables ({} static)", order.len(), statics);
		Ok(ResolverFinalized::new(self.definitions, self.dep_graph, order))
	}
}
