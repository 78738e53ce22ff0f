//! Various helper functions for testing
//!
//! Builders keep variable declarations in tests to one line, the `assert_*` functions panic with a
//! message naming the variables involved.

use dynvars::expression::{Expression, ProviderCall, ProviderKind};
use dynvars::variable::ValueCandidate;
use dynvars::VariableDefinition;

/// A static variable.
pub fn static_var(name: &str, value: &str) -> VariableDefinition {
	VariableDefinition::new_static(name, value)
}

/// A dynamic variable with one unconditional text value.
pub fn dyn_var(name: &str, value: &str) -> VariableDefinition {
	VariableDefinition::new_dynamic(name, vec![ValueCandidate::new(Expression::text(value))])
}

/// A dynamic variable with one unconditional provider value.
pub fn provider_var(name: &str, call: ProviderCall) -> VariableDefinition {
	VariableDefinition::new_dynamic(name, vec![ValueCandidate::new(call.into())])
}

/// Shorthand for [`ProviderCall::new()`] followed by text params.
pub fn provider(kind: ProviderKind, params: &[(&str, &str)]) -> ProviderCall {
	params.iter().fold(ProviderCall::new(kind), |call, (name, value)| call.param(*name, *value))
}

pub fn position(order: &[&str], name: &str) -> Option<usize> {
	order.iter().position(|n| *n == name)
}

pub fn assert_contains(order: &[&str], name: &str) {
	if position(order, name).is_none() {
		panic!("variable '{}' must be contained in variables-list {:?}", name, order);
	}
}

/// Each name must appear and come before the next one.
pub fn assert_order(order: &[&str], names: &[&str]) {
	for pair in names.windows(2) {
		assert_contains(order, pair[0]);
		assert_contains(order, pair[1]);
		if position(order, pair[0]) >= position(order, pair[1]) {
			panic!("'{}' must come before '{}' in variables-list {:?}", pair[0], pair[1], order);
		}
	}
	if let [only] = names {
		assert_contains(order, only);
	}
}

/// Each name exactly once and nothing else.
pub fn assert_permutation(order: &[&str], definitions: &[VariableDefinition]) {
	let mut expected: Vec<&str> = definitions.iter().map(|d| d.name.as_str()).collect();
	let mut actual = order.to_vec();
	expected.sort_unstable();
	actual.sort_unstable();
	assert_eq!(actual, expected, "order is not a permutation of the declared variables");
}

/// Writes `definitions` to a temporary JSON file the way the loader would hand them over.
pub fn write_definitions_file(definitions: &[VariableDefinition]) -> std::io::Result<tempfile::NamedTempFile> {
	let file = tempfile::NamedTempFile::new()?;
	serde_json::to_writer_pretty(file.as_file(), definitions)?;
	Ok(file)
}
