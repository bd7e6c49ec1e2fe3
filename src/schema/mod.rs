//! Schema system - model, loading, validation, and consistency checks

pub mod consistency;
pub mod model;
pub mod validator;

pub use consistency::{check_type_consistency, TypeMismatch};
pub use model::{Association, ItemSpec, ProfileSpec, Schema};
pub use validator::{check, validate, CheckedItem};
