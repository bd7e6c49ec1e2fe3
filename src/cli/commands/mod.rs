//! Command implementations

pub mod check;
pub mod plan;
pub mod validate;

use std::path::Path;

use miette::Result;

use crate::schema::Schema;

/// Load a schema document, picking the format from the file extension
pub(crate) fn load_schema(path: &Path) -> Result<Schema> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| miette::miette!("failed to read {}: {}", path.display(), e))?;
    let schema = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Schema::from_json(&text)?,
        _ => Schema::from_yaml(&text)?,
    };
    Ok(schema)
}
