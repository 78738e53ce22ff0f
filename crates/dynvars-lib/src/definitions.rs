//! Reading already parsed variable definitions from JSON.
//!
//! The installer definition loader hands its records over as a JSON array of [`VariableDefinition`]s,
//! array position is the declaration index.

use crate::config::DynvarsOptions;
use crate::variable::VariableDefinition;
use crate::Error::Validation;

/// Checks `json` against the bundled definitions schema.
pub fn validate_definitions(json: &serde_json::Value) -> crate::Result<()> {
	let schema = serde_json::from_str::<serde_json::Value>(include_str!("definitions.schema.json")).expect("schema isn't valid json");
	let compiled = jsonschema::JSONSchema::compile(&schema).map_err(|e| Validation(format!("definitions schema is invalid: {}", e)))?;

	let problems: Vec<String> = match compiled.validate(json) {
		Ok(()) => Vec::new(),
		Err(errors) => errors.map(|e| e.to_string()).collect(),
	};

	if problems.is_empty() {
		Ok(())
	} else {
		Err(Validation(format!("definitions do not match schema: {}", problems.join("; "))))
	}
}

pub fn read_definitions_from_json(json: serde_json::Value, options: &DynvarsOptions) -> crate::Result<Vec<VariableDefinition>> {
	if options.validate_definitions() {
		validate_definitions(&json)?;
	}
	let definitions = serde_json::from_value::<Vec<VariableDefinition>>(json)?;
	log::debug!("Read {} variable definitions", definitions.len());
	Ok(definitions)
}

pub fn read_definitions_from_path(path: impl AsRef<std::path::Path>, options: &DynvarsOptions) -> crate::Result<Vec<VariableDefinition>> {
	let data = std::fs::read(path.as_ref())?;
	let json = serde_json::from_slice::<serde_json::Value>(&data)?;
	log::trace!("Reading definitions from {}", path.as_ref().display());
	read_definitions_from_json(json, options)
}
