//! Required-field validation for declared schema items
//!
//! Each category has a fixed table of required fields; everything else on
//! an item is optional and passed through untouched. Validation is
//! non-mutating and runs before any side-effecting host call.

use crate::core::error::SchemaError;
use crate::core::types::{Category, Value};
use crate::schema::model::ItemSpec;

/// Category-shaped view of an item that passed validation
#[derive(Debug, Clone, PartialEq)]
pub enum CheckedItem<'a> {
    /// Property or attribute: configuration/state storage
    Stored {
        type_name: &'a str,
        default: &'a Value,
    },
    /// Variable: user-visible display slot
    Display {
        type_name: &'a str,
        name: &'a str,
        profile: &'a str,
        position: i64,
    },
}

impl CheckedItem<'_> {
    pub fn type_name(&self) -> &str {
        match self {
            CheckedItem::Stored { type_name, .. } => type_name,
            CheckedItem::Display { type_name, .. } => type_name,
        }
    }
}

/// Check an item against the required fields of its category and return
/// the typed view the dispatcher consumes.
pub fn check(category: Category, item: &ItemSpec) -> Result<CheckedItem<'_>, SchemaError> {
    let missing = |field| SchemaError::MissingField { category, field };
    let type_name = item.value_type.as_deref().ok_or_else(|| missing("type"))?;
    match category {
        Category::Property | Category::Attribute => {
            let default = item.default.as_ref().ok_or_else(|| missing("default"))?;
            Ok(CheckedItem::Stored { type_name, default })
        }
        Category::Variable => {
            let name = item.name.as_deref().ok_or_else(|| missing("name"))?;
            let profile = item.profile.as_deref().ok_or_else(|| missing("profile"))?;
            let position = item.position.ok_or_else(|| missing("position"))?;
            Ok(CheckedItem::Display {
                type_name,
                name,
                profile,
                position,
            })
        }
    }
}

/// Validate an item, discarding the view
pub fn validate(category: Category, item: &ItemSpec) -> Result<(), SchemaError> {
    check(category, item).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variable() -> ItemSpec {
        ItemSpec {
            value_type: Some("Integer".to_string()),
            name: Some("Target Current".to_string()),
            profile: Some(String::new()),
            position: Some(6),
            ..ItemSpec::default()
        }
    }

    #[test]
    fn test_valid_variable_yields_display_view() {
        let item = variable();
        let view = check(Category::Variable, &item).unwrap();
        assert_eq!(
            view,
            CheckedItem::Display {
                type_name: "Integer",
                name: "Target Current",
                profile: "",
                position: 6,
            }
        );
    }

    #[test]
    fn test_variable_missing_position_fails() {
        let item = ItemSpec {
            position: None,
            ..variable()
        };
        let err = validate(Category::Variable, &item).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::MissingField {
                category: Category::Variable,
                field: "position"
            }
        ));
    }

    #[test]
    fn test_property_missing_default_fails() {
        let item = ItemSpec {
            value_type: Some("String".to_string()),
            ..ItemSpec::default()
        };
        let err = validate(Category::Property, &item).unwrap_err();
        assert!(matches!(err, SchemaError::MissingField { field: "default", .. }));
    }

    #[test]
    fn test_attribute_missing_type_fails() {
        let item = ItemSpec {
            default: Some(Value::Int(0)),
            ..ItemSpec::default()
        };
        let err = validate(Category::Attribute, &item).unwrap_err();
        assert!(matches!(err, SchemaError::MissingField { field: "type", .. }));
    }

    #[test]
    fn test_valid_property_yields_stored_view() {
        let item = ItemSpec {
            value_type: Some("String".to_string()),
            default: Some(Value::Text("h".to_string())),
            ..ItemSpec::default()
        };
        let view = check(Category::Property, &item).unwrap();
        assert_eq!(view.type_name(), "String");
    }
}
