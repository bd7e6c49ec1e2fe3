//! Schema model and document loaders
//!
//! A schema is a static, declarative description of what to materialize
//! onto a host instance: configuration properties, internal attributes,
//! user-visible variables, and the shared presentation profiles those
//! variables reference. Documents are YAML or JSON mappings; sections keep
//! document order, which is the batch processing order.

use serde::{Deserialize, Serialize};

use crate::core::error::SchemaError;
use crate::core::types::Value;

/// One enumerated association entry of a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Association {
    pub value: Value,
    pub text: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default = "default_color")]
    pub color: i32,
}

fn default_color() -> i32 {
    -1
}

/// Declared shape of a property, attribute, or variable item.
///
/// One shape serves all three categories; the validator enforces which
/// fields a category requires. `type` stays an open string here - an
/// unrecognized name is a dispatch-time failure, not a parse failure.
/// Unknown fields in the source document are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemSpec {
    #[serde(rename = "type")]
    pub value_type: Option<String>,
    pub default: Option<Value>,
    pub name: Option<String>,
    pub profile: Option<String>,
    pub position: Option<i64>,
    pub enable_action: Option<bool>,
}

/// Declared settings of a shared presentation profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileSpec {
    #[serde(rename = "type")]
    pub value_type: Option<String>,
    pub icon: String,
    pub suffix: Option<String>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub step_size: Option<f64>,
    pub action_script: Option<String>,
    pub associations: Vec<Association>,
    pub digits: Option<u32>,
}

/// A declarative module schema, immutable once loaded
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    pub properties: Vec<(String, ItemSpec)>,
    pub attributes: Vec<(String, ItemSpec)>,
    pub variables: Vec<(String, ItemSpec)>,
    pub profiles: Vec<(String, ProfileSpec)>,
}

impl Schema {
    /// Load a schema from a YAML document
    pub fn from_yaml(text: &str) -> Result<Schema, SchemaError> {
        let value: serde_yml::Value = serde_yml::from_str(text).map_err(|e| SchemaError::Parse {
            message: e.to_string(),
        })?;
        Self::from_value(&value)
    }

    /// Load a schema from a JSON document
    pub fn from_json(text: &str) -> Result<Schema, SchemaError> {
        let json: serde_json::Value =
            serde_json::from_str(text).map_err(|e| SchemaError::Parse {
                message: e.to_string(),
            })?;
        let value = serde_yml::to_value(&json).map_err(|e| SchemaError::Parse {
            message: e.to_string(),
        })?;
        Self::from_value(&value)
    }

    fn from_value(value: &serde_yml::Value) -> Result<Schema, SchemaError> {
        let root = value.as_mapping().ok_or(SchemaError::Format)?;
        let mut schema = Schema::default();
        for (key, section) in root {
            let Some(section_name) = key.as_str() else {
                continue;
            };
            match section_name {
                "properties" => schema.properties = parse_items(section_name, section)?,
                "attributes" => schema.attributes = parse_items(section_name, section)?,
                "variables" => schema.variables = parse_items(section_name, section)?,
                "profiles" => schema.profiles = parse_profiles(section)?,
                // unknown top-level sections are ignored
                _ => {}
            }
        }
        Ok(schema)
    }

    /// Look up a profile spec by name
    pub fn profile(&self, name: &str) -> Option<&ProfileSpec> {
        self.profiles
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, spec)| spec)
    }
}

fn parse_items(
    section: &str,
    value: &serde_yml::Value,
) -> Result<Vec<(String, ItemSpec)>, SchemaError> {
    let mapping = value.as_mapping().ok_or_else(|| SchemaError::Section {
        section: section.to_string(),
    })?;
    let mut items = Vec::with_capacity(mapping.len());
    for (key, item) in mapping {
        let ident = key
            .as_str()
            .ok_or_else(|| SchemaError::Section {
                section: section.to_string(),
            })?
            .to_string();
        if !item.is_mapping() {
            return Err(SchemaError::InvalidItemShape { ident });
        }
        let spec: ItemSpec =
            serde_yml::from_value(item.clone()).map_err(|e| SchemaError::Parse {
                message: format!("item '{}': {}", ident, e),
            })?;
        items.push((ident, spec));
    }
    Ok(items)
}

fn parse_profiles(value: &serde_yml::Value) -> Result<Vec<(String, ProfileSpec)>, SchemaError> {
    let mapping = value.as_mapping().ok_or(SchemaError::InvalidProfileSchema)?;
    let mut profiles = Vec::with_capacity(mapping.len());
    for (key, settings) in mapping {
        let name = key
            .as_str()
            .ok_or(SchemaError::InvalidProfileSchema)?
            .to_string();
        if !settings.is_mapping() {
            return Err(SchemaError::InvalidItemShape { ident: name });
        }
        let spec: ProfileSpec =
            serde_yml::from_value(settings.clone()).map_err(|e| SchemaError::Parse {
                message: format!("profile '{}': {}", name, e),
            })?;
        profiles.push((name, spec));
    }
    Ok(profiles)
}
