//! Stable topological ordering of the dependency graph.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use petgraph::prelude::*;

use super::dependency_graph::DependencyGraph;

/// The references between some variables form a loop.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cyclic dependency between variables {}; unresolved variables: {}", display_cycles(.cycles), .unresolved.join(", "))]
pub struct CyclicDependencyError {
	/// Each strongly connected group of variables that reference each other, or a variable referencing itself.
	/// Members and groups are in declaration order.
	pub cycles: Vec<Vec<String>>,
	/// Every variable that could not be ordered, the cycles plus anything depending on them.
	pub unresolved: Vec<String>,
}

fn display_cycles(cycles: &[Vec<String>]) -> String {
	cycles.iter().map(|c| format!("[{}]", c.join(", "))).collect::<Vec<_>>().join(", ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedNode {
	pub name: String,
	pub source_order: usize,
}

/// Every variable of the graph, each one after all the variables it references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvaluationOrder {
	nodes: Vec<OrderedNode>,
}

impl EvaluationOrder {
	pub fn iter(&self) -> std::slice::Iter<'_, OrderedNode> {
		self.nodes.iter()
	}

	pub fn names(&self) -> Vec<&str> {
		self.nodes.iter().map(|n| n.name.as_str()).collect()
	}

	pub fn position(&self, name: &str) -> Option<usize> {
		self.nodes.iter().position(|n| n.name == name)
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}
}

pub type OrderedResult = Result<EvaluationOrder, CyclicDependencyError>;

/// Kahn's algorithm picking the ready node with the lowest declaration index each step.
///
/// Unconstrained variables therefore keep their declaration order and the result never depends on
/// hashing or container iteration order.
pub fn topological_sort(dep_graph: &DependencyGraph) -> OrderedResult {
	let graph = dep_graph.graph();

	let mut in_degree: Vec<usize> = graph.node_indices()
		.map(|i| graph.edges_directed(i, Incoming).count())
		.collect();

	let mut ready = BinaryHeap::<Reverse<(usize, NodeIndex)>>::new();
	for i in graph.node_indices() {
		if in_degree[i.index()] == 0 {
			ready.push(Reverse((graph[i].source_order, i)));
		}
	}

	let mut emitted = vec![false; graph.node_count()];
	let mut nodes = Vec::<OrderedNode>::with_capacity(graph.node_count());

	while let Some(Reverse((source_order, i))) = ready.pop() {
		emitted[i.index()] = true;
		nodes.push(OrderedNode { name: graph[i].name.clone(), source_order });

		for dependent in graph.neighbors_directed(i, Outgoing) {
			let degree = &mut in_degree[dependent.index()];
			*degree -= 1;
			if *degree == 0 {
				ready.push(Reverse((graph[dependent].source_order, dependent)));
			}
		}
	}

	if nodes.len() == graph.node_count() {
		log::debug!("Ordered {} variables", nodes.len());
		Ok(EvaluationOrder { nodes })
	} else {
		let remaining: Vec<NodeIndex> = graph.node_indices().filter(|i| !emitted[i.index()]).collect();
		Err(describe_remainder(dep_graph, &remaining))
	}
}

/// Splits the unordered remainder into its cycles.
fn describe_remainder(dep_graph: &DependencyGraph, remaining: &[NodeIndex]) -> CyclicDependencyError {
	let graph = dep_graph.graph();

	/* Copy of the remainder so the component search doesn't wander into ordered nodes */
	let mut sub = DiGraph::<NodeIndex, ()>::with_capacity(remaining.len(), 0);
	let mut sub_index = vec![None; graph.node_count()];
	for &i in remaining {
		sub_index[i.index()] = Some(sub.add_node(i));
	}
	for e in graph.edge_references() {
		if let (Some(a), Some(b)) = (sub_index[e.source().index()], sub_index[e.target().index()]) {
			sub.add_edge(a, b, ());
		}
	}

	let mut cycles: Vec<Vec<NodeIndex>> = petgraph::algo::tarjan_scc(&sub)
		.into_iter()
		.filter(|component| component.len() > 1 || sub.contains_edge(component[0], component[0]))
		.map(|component| {
			let mut members: Vec<NodeIndex> = component.into_iter().map(|s| sub[s]).collect();
			members.sort_by_key(|i| graph[*i].source_order);
			members
		})
		.collect();
	cycles.sort_by_key(|members| graph[members[0]].source_order);

	let name = |i: &NodeIndex| graph[*i].name.clone();
	let error = CyclicDependencyError {
		cycles: cycles.iter().map(|c| c.iter().map(name).collect()).collect(),
		unresolved: remaining.iter().map(name).collect(),
	};
	log::debug!("{} variables left unordered in {} cycle(s)", error.unresolved.len(), error.cycles.len());
	error
}
