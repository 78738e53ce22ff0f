//! Finding the variables an expression refers to.

use crate::expression::{Expression, Term};
use crate::variable::VariableDefinition;

/// Deduplicated variable names in the order they first appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceSet {
	names: Vec<String>,
}

impl ReferenceSet {
	/// Returns `false` if `name` was already present.
	pub fn insert(&mut self, name: &str) -> bool {
		if self.contains(name) {
			false
		} else {
			self.names.push(name.to_string());
			true
		}
	}

	pub fn contains(&self, name: &str) -> bool {
		self.names.iter().any(|n| n == name)
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.names.iter().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.names.len()
	}

	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}
}

impl<'a> IntoIterator for &'a ReferenceSet {
	type Item = &'a String;
	type IntoIter = std::slice::Iter<'a, String>;

	fn into_iter(self) -> Self::IntoIter {
		self.names.iter()
	}
}

/// Every variable referenced by the expression, including inside nested provider parameters.
pub fn extract_expression_references(expression: &Expression) -> ReferenceSet {
	let mut refs = ReferenceSet::default();
	collect_term_references(&expression.to_terms(), &mut refs);
	refs
}

/// Every variable referenced by any value candidate or filter of `definition`.
///
/// References to the definition's own name are kept, they are how self dependencies surface.
pub fn extract_references(definition: &VariableDefinition) -> ReferenceSet {
	let mut refs = ReferenceSet::default();
	for candidate in &definition.candidates {
		collect_term_references(&candidate.value.to_terms(), &mut refs);
	}
	for filter in &definition.filters {
		for text in filter.texts() {
			collect_term_references(&crate::expression::parse_template(text), &mut refs);
		}
	}
	refs
}

fn collect_term_references(terms: &[Term], refs: &mut ReferenceSet) {
	for term in terms {
		match term {
			Term::Reference(name) => { refs.insert(name); },
			Term::Provider { kind, params } => {
				for (param, value) in params {
					log::trace!("Scanning `{}` parameter of {} provider", param, kind);
					collect_term_references(value, refs);
				}
			},
			Term::Literal(_) | Term::External(_) => {},
		}
	}
}
