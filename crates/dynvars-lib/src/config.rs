use serde::{Serialize, Deserialize};

/// Name of the resource the ordered variables are embedded as.
pub const DEFAULT_RESOURCE_NAME: &str = "resources/dynvariables";

/// Encoding used when writing the ordered variables resource.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceFormat {
	#[default] Bincode,
	Json,
}

impl std::str::FromStr for ResourceFormat {
	type Err = crate::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"bincode" => Ok(ResourceFormat::Bincode),
			"json" => Ok(ResourceFormat::Json),
			other => Err(crate::Error::Validation(format!("unknown resource format `{}`", other))),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DynvarsOptions {
	resource_name: String,
	resource_format: ResourceFormat,
	validate_definitions: bool,
	strict_references: bool,
}

impl Default for DynvarsOptions {
	fn default() -> Self {
		Self {
			resource_name: DEFAULT_RESOURCE_NAME.to_string(),
			resource_format: ResourceFormat::default(),
			validate_definitions: true,
			strict_references: false,
		}
	}
}

impl DynvarsOptions {
	/// Reads options from a JSON file, missing fields take their default value.
	pub fn load_from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
		let data = std::fs::read(path.as_ref())?;
		let options = serde_json::from_slice::<Self>(&data)?;
		log::debug!("Loaded options from {}", path.as_ref().display());
		Ok(options)
	}

	pub fn resource_name(&self) -> &str {
		&self.resource_name
	}
	/// returns if the name is valid or not.
	pub fn set_resource_name(&mut self, resource_name: impl Into<String>) -> bool {
		let resource_name = resource_name.into();
		if resource_name.trim().is_empty() {
			false
		} else {
			self.resource_name = resource_name;
			true
		}
	}

	pub fn resource_format(&self) -> ResourceFormat {
		self.resource_format
	}
	pub fn set_resource_format(&mut self, resource_format: ResourceFormat) {
		self.resource_format = resource_format;
	}

	/// Check definition JSON against the bundled schema before reading it.
	pub fn validate_definitions(&self) -> bool {
		self.validate_definitions
	}
	pub fn set_validate_definitions(&mut self, validate_definitions: bool) {
		self.validate_definitions = validate_definitions;
	}

	/// Turn references to undeclared variables into a hard error instead of a warning.
	pub fn strict_references(&self) -> bool {
		self.strict_references
	}
	pub fn set_strict_references(&mut self, strict_references: bool) {
		self.strict_references = strict_references;
	}
}
