//! Reference graph between the variables of one compilation.

use std::collections::HashMap;

use petgraph::prelude::*;

use super::reference_extractor::extract_references;
use crate::variable::VariableDefinition;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
	pub name: String,
	/// Declaration index of the variable, also its position in the definitions given to the builder.
	pub source_order: usize,
	pub is_static: bool,
}

/// Two definitions share a name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("variable `{name}` is declared more than once (declarations {first} and {second})")]
pub struct DuplicateVariableError {
	pub name: String,
	pub first: usize,
	pub second: usize,
}

/// An expression names a variable that is not part of the definitions.
///
/// Not fatal, the name is left for the install time substitution to deal with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownReferenceWarning {
	/// The variable whose value contains the reference.
	pub variable: String,
	pub reference: String,
}

impl std::fmt::Display for UnknownReferenceWarning {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "variable `{}` references undeclared variable `{}`", self.variable, self.reference)
	}
}

/// Edges point from a referenced variable to the variable whose value uses it,
/// the source must be computed before the target.
///
/// The graph can't be changed once built, rebuild it from the definitions instead.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
	graph: DiGraph<NodeData, ()>,
	/* Lookup only, never iterated */
	indices: HashMap<String, NodeIndex>,
	unknown_references: Vec<UnknownReferenceWarning>,
}

impl DependencyGraph {
	/// Builds the graph for `definitions`, node `i` is `definitions[i]`.
	pub fn build(definitions: &[VariableDefinition]) -> Result<Self, DuplicateVariableError> {
		let mut graph = DiGraph::<NodeData, ()>::with_capacity(definitions.len(), definitions.len());
		let mut indices = HashMap::<String, NodeIndex>::with_capacity(definitions.len());

		for (source_order, definition) in definitions.iter().enumerate() {
			if let Some(existing) = indices.get(&definition.name) {
				return Err(DuplicateVariableError {
					name: definition.name.clone(),
					first: graph[*existing].source_order,
					second: source_order,
				});
			}
			let i = graph.add_node(NodeData {
				name: definition.name.clone(),
				source_order,
				is_static: definition.is_static,
			});
			indices.insert(definition.name.clone(), i);
		}

		let mut unknown_references = Vec::<UnknownReferenceWarning>::new();
		for (source_order, definition) in definitions.iter().enumerate() {
			let dependent = NodeIndex::new(source_order);
			for reference in &extract_references(definition) {
				match indices.get(reference) {
					Some(&referenced) => {
						log::trace!("`{}` must be computed before `{}`", reference, definition.name);
						graph.update_edge(referenced, dependent, ());
					},
					None => {
						let warning = UnknownReferenceWarning { variable: definition.name.clone(), reference: reference.clone() };
						log::warn!("{}, leaving it for install time", warning);
						unknown_references.push(warning);
					},
				}
			}
		}

		log::debug!("Built dependency graph with {} variables and {} edges", graph.node_count(), graph.edge_count());

		Ok(Self { graph, indices, unknown_references })
	}

	pub fn graph(&self) -> &DiGraph<NodeData, ()> {
		&self.graph
	}

	pub fn node_count(&self) -> usize {
		self.graph.node_count()
	}

	pub fn edge_count(&self) -> usize {
		self.graph.edge_count()
	}

	pub fn node_index(&self, name: &str) -> Option<NodeIndex> {
		self.indices.get(name).copied()
	}

	pub fn node(&self, i: NodeIndex) -> Option<&NodeData> {
		self.graph.node_weight(i)
	}

	/// `true` if `referenced` must be computed before `dependent` because of a direct reference.
	pub fn has_edge(&self, referenced: &str, dependent: &str) -> bool {
		match (self.node_index(referenced), self.node_index(dependent)) {
			(Some(a), Some(b)) => self.graph.contains_edge(a, b),
			_ => false,
		}
	}

	/// Every edge as `(referenced, dependent)` names, ordered by the dependent's then the referenced variable's declaration.
	pub fn edges(&self) -> Vec<(&str, &str)> {
		let mut edges: Vec<_> = self.graph.edge_references()
			.map(|e| (e.target(), e.source()))
			.collect();
		edges.sort();
		edges.into_iter()
			.map(|(dependent, referenced)| (self.graph[referenced].name.as_str(), self.graph[dependent].name.as_str()))
			.collect()
	}

	/// References to names outside the variable set, in declaration order of the referencing variable.
	pub fn unknown_references(&self) -> &[UnknownReferenceWarning] {
		&self.unknown_references
	}
}
