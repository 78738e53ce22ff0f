//! Library error type.

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

use crate::resolver::{CyclicDependencyError, DuplicateVariableError, UnknownReferenceWarning};

#[derive(Debug, Error)]
pub enum Error {
	#[error(transparent)]
	DuplicateVariable(#[from] DuplicateVariableError),
	#[error(transparent)]
	CyclicDependency(#[from] CyclicDependencyError),
	/// Only raised when [`crate::DynvarsOptions::strict_references`] is enabled.
	#[error("{} reference(s) to undeclared variables: {}", .0.len(), display_warnings(.0))]
	UnknownReferences(Vec<UnknownReferenceWarning>),
	#[error("IO error: {0}")]
	IO(#[from] std::io::Error),
	#[error("JSON error: {0}")]
	SerdeJSON(#[from] serde_json::Error),
	#[error("bincode error: {0}")]
	Bincode(#[from] bincode::Error),
	#[error("validation error: {0}")]
	Validation(String),
}

fn display_warnings(warnings: &[UnknownReferenceWarning]) -> String {
	warnings.iter().map(|w| w.to_string()).collect::<Vec<_>>().join("; ")
}

impl Error {
	/// Names of the variables this error is about, empty for errors unrelated to the graph.
	pub fn offending_variables(&self) -> Vec<&str> {
		match self {
			Error::DuplicateVariable(e) => vec![e.name.as_str()],
			Error::CyclicDependency(e) => e.unresolved.iter().map(String::as_str).collect(),
			Error::UnknownReferences(w) => w.iter().map(|w| w.variable.as_str()).collect(),
			Error::IO(_) | Error::SerdeJSON(_) | Error::Bincode(_) | Error::Validation(_) => vec![],
		}
	}
}
