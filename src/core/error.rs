//! Error taxonomy for schema loading, validation, and registration

use miette::Diagnostic;
use thiserror::Error;

use crate::core::types::Category;
use crate::host::HostError;

/// Failures of schema shape and required-field validation
#[derive(Debug, Error, Diagnostic)]
pub enum SchemaError {
    /// Top-level schema document is not a structured mapping
    #[error("schema document root must be a mapping")]
    #[diagnostic(code(registrar::schema::format))]
    Format,

    /// A known section is not a mapping of idents to items
    #[error("section '{section}' must be a mapping of idents to items")]
    #[diagnostic(code(registrar::schema::format))]
    Section { section: String },

    #[error("unknown registration category: {0}")]
    #[diagnostic(code(registrar::schema::invalid_category))]
    InvalidCategory(String),

    #[error("item '{ident}' must be a mapping")]
    #[diagnostic(code(registrar::schema::invalid_item_shape))]
    InvalidItemShape { ident: String },

    #[error("missing field '{field}' for {category} item")]
    #[diagnostic(code(registrar::schema::missing_field))]
    MissingField {
        category: Category,
        field: &'static str,
    },

    /// Profiles input is not a mapping of profile names to settings
    #[error("profiles must be a mapping of profile names to settings")]
    #[diagnostic(code(registrar::schema::invalid_profile_schema))]
    InvalidProfileSchema,

    #[error("failed to parse schema document: {message}")]
    #[diagnostic(code(registrar::schema::parse))]
    Parse { message: String },
}

/// Failures surfaced while materializing a schema onto a host
#[derive(Debug, Error, Diagnostic)]
pub enum RegistrarError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Schema(#[from] SchemaError),

    /// The host declares no registration capability for this pair
    #[error("no {category} registration capability for type '{type_name}'")]
    #[diagnostic(code(registrar::dispatch::unsupported_operation))]
    UnsupportedOperation {
        category: Category,
        type_name: String,
    },

    #[error("unsupported profile type '{type_name}' for profile '{profile}'")]
    #[diagnostic(code(registrar::profiles::unsupported_type))]
    UnsupportedProfileType { profile: String, type_name: String },

    #[error("host rejected operation: {0}")]
    #[diagnostic(code(registrar::host::rejected))]
    Host(#[from] HostError),
}
