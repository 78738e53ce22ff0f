//! Computing the order dynamic variables are evaluated in at install time.
//!
//! # Usage
//! 1. Create a [`ResolverBuilder`] over the variable definitions in declaration order.
//! 1. [`ResolverBuilder::build()`] to get an [`OrderResolver`] holding the [`DependencyGraph`].
//! 1. [`OrderResolver::resolve()`] to sort the graph and get a [`ResolverFinalized`].
//! 1. [`ResolverFinalized::get_ordered_variables()`] for the records to embed in the installer.
//!
//! [`resolve_order()`] does all of the above with default options.
//!
//! A variable comes after every variable its values reference, directly or through provider
//! parameters. Variables without a constraint between them keep their declaration order.

use crate::variable::VariableDefinition;

mod reference_extractor;
pub use reference_extractor::ReferenceSet;
pub use reference_extractor::extract_references;
pub use reference_extractor::extract_expression_references;

mod dependency_graph;
pub use dependency_graph::DependencyGraph;
pub use dependency_graph::NodeData;
pub use dependency_graph::DuplicateVariableError;
pub use dependency_graph::UnknownReferenceWarning;

mod topological_sort;
pub use topological_sort::topological_sort;
pub use topological_sort::CyclicDependencyError;
pub use topological_sort::EvaluationOrder;
pub use topological_sort::OrderedNode;
pub use topological_sort::OrderedResult;

mod ordered_list;
pub use ordered_list::OrderedVariables;

mod resolver_builder;
pub use resolver_builder::ResolverBuilder;
mod order_resolver;
pub use order_resolver::OrderResolver;
mod finalized_resolver;
pub use finalized_resolver::ResolverFinalized;

/// Orders `definitions` with the default options.
pub fn resolve_order(definitions: &[VariableDefinition]) -> crate::Result<OrderedVariables> {
	Ok(ResolverBuilder::new(definitions).build()?.resolve()?.get_ordered_variables())
}
