//! Semantic value types, storage-kind codes, and dynamic scalar values

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::error::SchemaError;

/// A type name outside the recognized four-value set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported value type: {0}")]
pub struct UnknownTypeError(pub String);

/// Semantic value type of a storage slot or presentation profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    Boolean,
    Integer,
    Float,
    String,
}

impl ValueType {
    pub const ALL: [ValueType; 4] = [
        ValueType::Boolean,
        ValueType::Integer,
        ValueType::Float,
        ValueType::String,
    ];

    /// Stable storage-kind code passed to the host
    /// (Boolean=0, Integer=1, Float=2, String=3)
    pub fn code(self) -> u8 {
        match self {
            ValueType::Boolean => 0,
            ValueType::Integer => 1,
            ValueType::Float => 2,
            ValueType::String => 3,
        }
    }

    /// Parse a declared type name; exact match only
    pub fn parse(name: &str) -> Result<Self, UnknownTypeError> {
        match name {
            "Boolean" => Ok(ValueType::Boolean),
            "Integer" => Ok(ValueType::Integer),
            "Float" => Ok(ValueType::Float),
            "String" => Ok(ValueType::String),
            _ => Err(UnknownTypeError(name.to_string())),
        }
    }

    /// Encode a declared type name straight to its storage-kind code
    pub fn encode(name: &str) -> Result<u8, UnknownTypeError> {
        Self::parse(name).map(Self::code)
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueType::Boolean => write!(f, "Boolean"),
            ValueType::Integer => write!(f, "Integer"),
            ValueType::Float => write!(f, "Float"),
            ValueType::String => write!(f, "String"),
        }
    }
}

impl std::str::FromStr for ValueType {
    type Err = UnknownTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Registration category of a declared item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Property,
    Attribute,
    Variable,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Property, Category::Attribute, Category::Variable];

    /// Fields an item of this category must declare
    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            Category::Property | Category::Attribute => &["type", "default"],
            Category::Variable => &["type", "name", "profile", "position"],
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Property => write!(f, "property"),
            Category::Attribute => write!(f, "attribute"),
            Category::Variable => write!(f, "variable"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "property" => Ok(Category::Property),
            "attribute" => Ok(Category::Attribute),
            "variable" => Ok(Category::Variable),
            _ => Err(SchemaError::InvalidCategory(s.to_string())),
        }
    }
}

/// Dynamic scalar carried by defaults, set-value calls, and associations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_codes() {
        assert_eq!(ValueType::Boolean.code(), 0);
        assert_eq!(ValueType::Integer.code(), 1);
        assert_eq!(ValueType::Float.code(), 2);
        assert_eq!(ValueType::String.code(), 3);
    }

    #[test]
    fn test_encode_succeeds_for_exactly_the_four_names() {
        assert_eq!(ValueType::encode("String").unwrap(), 3);
        assert_eq!(ValueType::encode("Float").unwrap(), 2);
        assert_eq!(ValueType::encode("Integer").unwrap(), 1);
        assert_eq!(ValueType::encode("Boolean").unwrap(), 0);

        assert!(ValueType::encode("Currency").is_err());
        assert!(ValueType::encode("string").is_err());
        assert!(ValueType::encode("").is_err());
    }

    #[test]
    fn test_parse_error_carries_the_offending_name() {
        let err = ValueType::parse("Currency").unwrap_err();
        assert_eq!(err.0, "Currency");
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("property".parse::<Category>().unwrap(), Category::Property);
        assert_eq!("Variable".parse::<Category>().unwrap(), Category::Variable);
        assert!(matches!(
            "gadget".parse::<Category>(),
            Err(SchemaError::InvalidCategory(name)) if name == "gadget"
        ));
    }

    #[test]
    fn test_category_required_fields() {
        assert_eq!(Category::Property.required_fields(), &["type", "default"]);
        assert_eq!(
            Category::Variable.required_fields(),
            &["type", "name", "profile", "position"]
        );
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::from(5i64).to_string(), "5");
        assert_eq!(Value::from("h").to_string(), "h");
    }
}
