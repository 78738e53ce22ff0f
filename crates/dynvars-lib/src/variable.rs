//! Variable records as handed over by the definition loader.

use serde::{Serialize, Deserialize};

use crate::expression::Expression;

/// A single variable declared by an installer definition.
///
/// The position of a definition in the sequence given to the resolver is its declaration index,
/// used to break ties between variables with no ordering constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDefinition {
	pub name: String,
	/// Possible values, the first whose condition holds at install time is used.
	#[serde(default)]
	pub candidates: Vec<ValueCandidate>,
	/// Value is fixed at compile time.
	#[serde(default, rename = "static")]
	pub is_static: bool,
	/// Applied in order to the computed value.
	#[serde(default)]
	pub filters: Vec<ValueFilter>,

	/* Install time behaviour, carried through untouched */
	#[serde(default)]
	pub check_once: bool,
	#[serde(default)]
	pub ignore_failure: bool,
	#[serde(default = "default_unset")]
	pub unset: bool,
}

fn default_unset() -> bool { true }

impl VariableDefinition {
	/// A static variable with a single unconditional value.
	pub fn new_static(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			is_static: true,
			..Self::new_dynamic(name, vec![ValueCandidate::new(Expression::Text(value.into()))])
		}
	}

	pub fn new_dynamic(name: impl Into<String>, candidates: Vec<ValueCandidate>) -> Self {
		Self {
			name: name.into(),
			candidates,
			is_static: false,
			filters: Vec::new(),
			check_once: false,
			ignore_failure: false,
			unset: true,
		}
	}

	pub fn with_filter(mut self, filter: ValueFilter) -> Self {
		self.filters.push(filter);
		self
	}
}

/// One possible value of a variable, optionally guarded by a condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueCandidate {
	pub value: Expression,
	/// Identifier of the condition guarding this value, never evaluated by the resolver.
	#[serde(default)]
	pub condition: Option<String>,
}

impl ValueCandidate {
	pub fn new(value: Expression) -> Self {
		Self { value, condition: None }
	}

	pub fn with_condition(value: Expression, condition: impl Into<String>) -> Self {
		Self { value, condition: Some(condition.into()) }
	}
}

/// Post processing applied to a computed value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueFilter {
	Regex {
		pattern: String,
		#[serde(default)]
		select: Option<String>,
		#[serde(default)]
		replace: Option<String>,
		#[serde(default)]
		default_value: Option<String>,
		#[serde(default = "default_case_sensitive")]
		case_sensitive: bool,
		#[serde(default)]
		global: bool,
	},
	/// Resolves a relative path against `base_dir`.
	Location {
		base_dir: String,
	},
}

fn default_case_sensitive() -> bool { true }

impl ValueFilter {
	/// Every text field of the filter that may contain placeholders.
	pub fn texts(&self) -> Vec<&str> {
		match self {
			ValueFilter::Regex { pattern, select, replace, default_value, .. } => {
				std::iter::once(pattern.as_str())
					.chain(select.as_deref())
					.chain(replace.as_deref())
					.chain(default_value.as_deref())
					.collect()
			},
			ValueFilter::Location { base_dir } => vec![base_dir.as_str()],
		}
	}
}
