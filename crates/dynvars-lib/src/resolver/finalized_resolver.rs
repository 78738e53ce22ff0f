//! Result of a completed resolve.

use super::*;

pub struct ResolverFinalized<'defs> {
	definitions: &'defs [VariableDefinition],
	dep_graph: DependencyGraph,
	order: EvaluationOrder,
}

impl<'defs> ResolverFinalized<'defs> {
	pub(super) fn new(definitions: &'defs [VariableDefinition], dep_graph: DependencyGraph, order: EvaluationOrder) -> Self {
		Self {
			definitions,
			dep_graph,
			order,
		}
	}

	pub fn get_graph(self) -> DependencyGraph {
		self.dep_graph
	}

	pub fn get_order(&self) -> &EvaluationOrder {
		&self.order
	}

	pub fn unknown_references(&self) -> &[UnknownReferenceWarning] {
		self.dep_graph.unknown_references()
	}

	/// Copies of the definitions in evaluation order.
	pub fn get_ordered_variables(&self) -> OrderedVariables {
		OrderedVariables::emit(&self.order, self.definitions)
	}
}
