//! Core module - value types, categories, and the error taxonomy

pub mod error;
pub mod types;

pub use error::{RegistrarError, SchemaError};
pub use types::{Category, UnknownTypeError, Value, ValueType};
