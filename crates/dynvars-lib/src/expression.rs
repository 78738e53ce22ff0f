//! Value expressions and the tree they parse into.
//!
//! An [`Expression`] is what the loader hands over: either text that may contain placeholders or a
//! [`ProviderCall`] whose parameters are expressions again. [`Expression::to_terms()`] turns it
//! into a tree of [`Term`]s, which is all the reference extraction needs to look at.

use std::collections::BTreeMap;
use serde::{Serialize, Deserialize};

mod placeholder;
pub use placeholder::parse_template;

/// Serialized externally tagged, `{ "text": "..." }` or `{ "provider": { ... } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expression {
	/// Text with embedded `${name}` or `$name` placeholders.
	Text(String),
	/// Value read from an external source described by its parameters.
	Provider(ProviderCall),
}

impl Expression {
	pub fn text(s: impl Into<String>) -> Self {
		Expression::Text(s.into())
	}

	/// Parses the expression and every nested provider parameter.
	pub fn to_terms(&self) -> Vec<Term> {
		match self {
			Expression::Text(s) => parse_template(s),
			Expression::Provider(call) => vec![Term::Provider {
				kind: call.kind,
				params: call.params.iter().map(|(name, value)| (name.clone(), value.to_terms())).collect(),
			}],
		}
	}
}

impl From<ProviderCall> for Expression {
	fn from(value: ProviderCall) -> Self {
		Expression::Provider(value)
	}
}

/// The kinds of value sources a variable can read from.
///
/// The resolver only needs to see the parameters so this is informational beyond this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderKind {
	/// Contents of a plain file.
	File,
	/// Entry inside a zip archive.
	ZipEntry,
	/// Entry inside a jar archive.
	JarEntry,
	/// Key of a section in an ini file.
	Ini,
	/// Key in a java style properties file.
	Options,
	/// XPath lookup in an xml document.
	Xml,
	/// Windows registry key or value.
	Registry,
	/// Output of running an executable.
	Exec,
}

impl std::fmt::Display for ProviderKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let s = match self {
			ProviderKind::File => "file",
			ProviderKind::ZipEntry => "zip-entry",
			ProviderKind::JarEntry => "jar-entry",
			ProviderKind::Ini => "ini",
			ProviderKind::Options => "options",
			ProviderKind::Xml => "xml",
			ProviderKind::Registry => "registry",
			ProviderKind::Exec => "exec",
		};
		write!(f, "{}", s)
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderCall {
	pub kind: ProviderKind,
	#[serde(default)]
	pub params: BTreeMap<String, Expression>,
}

impl ProviderCall {
	pub fn new(kind: ProviderKind) -> Self {
		Self { kind, params: BTreeMap::new() }
	}

	pub fn param(mut self, name: impl Into<String>, value: impl Into<Expression>) -> Self {
		self.params.insert(name.into(), value.into());
		self
	}
}

impl From<&str> for Expression {
	fn from(value: &str) -> Self {
		Expression::Text(value.to_string())
	}
}

impl From<String> for Expression {
	fn from(value: String) -> Self {
		Expression::Text(value)
	}
}

/// A node of a parsed expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
	Literal(String),
	/// Placeholder naming another variable.
	Reference(String),
	/// Placeholder resolved outside the variable set, such as `${ENV[HOME]}`.
	External(String),
	Provider {
		kind: ProviderKind,
		params: Vec<(String, Vec<Term>)>,
	},
}
