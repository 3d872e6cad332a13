//! Generator configuration

use crate::error::{GenerateError, GenerateResult};
use crate::naming::is_identifier;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Built-in schema type aliases, consulted after [`ApiConfig::types`].
const TYPE_ALIASES: &[(&str, &str)] = &[
    ("int", "i32"),
    ("long", "i64"),
    ("short", "i16"),
    ("byte", "u8"),
    ("string", "String"),
    ("bool", "bool"),
    ("float", "f32"),
    ("double", "f64"),
    ("decimal", "f64"),
    ("char", "char"),
];

/// What API generation does with an entity that fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidEntityPolicy {
    /// Fail the whole run.
    #[default]
    Abort,
    /// Omit the entity and leave it out of the bootstrap artifact.
    Skip,
}

/// Configuration shared by all generators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Path of the runtime crate referenced by generated code
    pub runtime_path: String,

    /// API generation settings
    pub api: ApiConfig,

    /// Mapping generation settings
    pub mapping: MappingConfig,

    /// Handler generation settings
    pub handler: HandlerConfig,
}

/// Settings for schema-driven API generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Derives applied to generated models; must include `Clone`
    pub derives: Vec<String>,

    /// Policy for entities that fail validation
    pub on_invalid_entity: InvalidEntityPolicy,

    /// Prefix of each controller's `ROUTE` constant
    pub route_prefix: String,

    /// Schema type aliases, merged over the built-in table
    pub types: BTreeMap<String, String>,
}

/// Settings for registration call discovery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    /// Registration method name
    pub method: String,

    /// Receiver names accepted bare or behind `qualifier`
    pub receivers: Vec<String>,

    /// Crate name allowed in front of a receiver
    pub qualifier: String,
}

/// Settings for handler declaration discovery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandlerConfig {
    /// Marker attribute names
    pub markers: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            runtime_path: "::stencil".to_string(),
            api: ApiConfig::default(),
            mapping: MappingConfig::default(),
            handler: HandlerConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            derives: ["Debug", "Clone", "PartialEq", "Default"]
                .map(String::from)
                .to_vec(),
            on_invalid_entity: InvalidEntityPolicy::Abort,
            route_prefix: "/".to_string(),
            types: BTreeMap::new(),
        }
    }
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            method: "register".to_string(),
            receivers: vec!["Mappings".to_string()],
            qualifier: "stencil".to_string(),
        }
    }
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            markers: vec!["handler".to_string()],
        }
    }
}

impl GeneratorConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the runtime crate path
    pub fn runtime(&self) -> GenerateResult<syn::Path> {
        syn::parse_str(&self.runtime_path).map_err(|_| {
            GenerateError::Config(format!("runtime_path `{}` is not a path", self.runtime_path))
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> GenerateResult<()> {
        self.runtime()?;
        self.api.derive_paths()?;

        if !self.api.derives.iter().any(|d| d.rsplit("::").next() == Some("Clone")) {
            return Err(GenerateError::Config(
                "api.derives must include Clone".to_string(),
            ));
        }

        for (alias, target) in &self.api.types {
            if syn::parse_str::<syn::Type>(target).is_err() {
                return Err(GenerateError::Config(format!(
                    "api.types.{alias} = `{target}` is not a type"
                )));
            }
        }

        if !is_identifier(&self.mapping.method) {
            return Err(GenerateError::Config(format!(
                "mapping.method `{}` is not an identifier",
                self.mapping.method
            )));
        }
        if self.mapping.receivers.is_empty() {
            return Err(GenerateError::Config(
                "mapping.receivers cannot be empty".to_string(),
            ));
        }
        if let Some(bad) = self.mapping.receivers.iter().find(|r| !is_identifier(r)) {
            return Err(GenerateError::Config(format!(
                "mapping receiver `{bad}` is not an identifier"
            )));
        }

        if self.handler.markers.is_empty() {
            return Err(GenerateError::Config(
                "handler.markers cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl ApiConfig {
    /// Map a schema type name to a Rust type name
    pub fn resolve_type_name<'a>(&'a self, type_name: &'a str) -> &'a str {
        if let Some(target) = self.types.get(type_name) {
            return target;
        }
        TYPE_ALIASES
            .iter()
            .find(|(alias, _)| *alias == type_name)
            .map(|(_, target)| *target)
            .unwrap_or(type_name)
    }

    /// Parse the configured derives
    pub fn derive_paths(&self) -> GenerateResult<Vec<syn::Path>> {
        self.derives
            .iter()
            .map(|d| {
                syn::parse_str(d)
                    .map_err(|_| GenerateError::Config(format!("derive `{d}` is not a path")))
            })
            .collect()
    }
}
