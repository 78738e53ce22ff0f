//! The ordered variables resource embedded in the installer.

use serde::{Serialize, Deserialize};

use super::topological_sort::EvaluationOrder;
use crate::config::ResourceFormat;
use crate::variable::VariableDefinition;

/// Full variable records in the order they are safe to evaluate top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderedVariables {
	variables: Vec<VariableDefinition>,
}

impl OrderedVariables {
	/// `order` must come from a graph built over `definitions`.
	pub(super) fn emit(order: &EvaluationOrder, definitions: &[VariableDefinition]) -> Self {
		Self {
			variables: order.iter().map(|node| definitions[node.source_order].clone()).collect(),
		}
	}

	pub fn names(&self) -> Vec<&str> {
		self.variables.iter().map(|v| v.name.as_str()).collect()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, VariableDefinition> {
		self.variables.iter()
	}

	pub fn as_slice(&self) -> &[VariableDefinition] {
		&self.variables
	}

	pub fn into_inner(self) -> Vec<VariableDefinition> {
		self.variables
	}

	pub fn len(&self) -> usize {
		self.variables.len()
	}

	pub fn is_empty(&self) -> bool {
		self.variables.is_empty()
	}

	pub fn to_resource(&self, format: ResourceFormat) -> crate::Result<Vec<u8>> {
		Ok(match format {
			ResourceFormat::Bincode => bincode::serialize(self)?,
			ResourceFormat::Json => serde_json::to_vec_pretty(self)?,
		})
	}

	pub fn from_resource(data: &[u8], format: ResourceFormat) -> crate::Result<Self> {
		Ok(match format {
			ResourceFormat::Bincode => bincode::deserialize::<Self>(data)?,
			ResourceFormat::Json => serde_json::from_slice::<Self>(data)?,
		})
	}

	/// Encodes the variables and writes them to `path`, creating missing parent directories.
	pub fn write_resource(&self, path: impl AsRef<std::path::Path>, format: ResourceFormat) -> crate::Result<()> {
		let data = self.to_resource(format)?;
		if let Some(parent) = path.as_ref().parent() {
			std::fs::create_dir_all(parent)?;
		}
		std::fs::write(path.as_ref(), data)?;
		log::debug!("Wrote {} ordered variables to {}", self.len(), path.as_ref().display());
		Ok(())
	}
}

impl<'a> IntoIterator for &'a OrderedVariables {
	type Item = &'a VariableDefinition;
	type IntoIter = std::slice::Iter<'a, VariableDefinition>;

	fn into_iter(self) -> Self::IntoIter {
		self.variables.iter()
	}
}
