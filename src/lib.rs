//! Declarative schema registrar for automation host modules.
//!
//! Given a static schema describing properties, attributes, display
//! variables, and shared presentation profiles, the registrar materializes
//! that schema onto a live host object: typed storage slots are created or
//! updated, action-enable flags wired, and shared profiles created or
//! patched in place. Deletion of shared profiles is gated on being the
//! last surviving instance of the owning module kind.

pub mod cli;
pub mod core;
pub mod host;
pub mod registrar;
pub mod schema;

pub use crate::core::{Category, RegistrarError, SchemaError, Value, ValueType};
pub use crate::registrar::Registrar;
pub use crate::schema::Schema;
