//! Cross-check variable types against the profiles they reference
//!
//! A pure diagnostic pass: it never mutates host state and never aborts
//! registration. Callers decide what to do with the mismatch list.

use crate::schema::model::Schema;

/// A variable whose declared type differs from its profile's declared type
#[derive(Debug, Clone, PartialEq)]
pub struct TypeMismatch {
    pub variable: String,
    pub variable_type: String,
    pub profile: String,
    pub profile_type: String,
}

/// Collect every variable/profile type disagreement in the schema.
///
/// Variables with an empty or unknown profile reference are skipped; many
/// variables carry no profile at all.
pub fn check_type_consistency(schema: &Schema) -> Vec<TypeMismatch> {
    let mut mismatches = Vec::new();
    for (ident, item) in &schema.variables {
        let Some(variable_type) = item.value_type.as_deref() else {
            continue;
        };
        let Some(profile_name) = item.profile.as_deref() else {
            continue;
        };
        if profile_name.is_empty() {
            continue;
        }
        let Some(profile) = schema.profile(profile_name) else {
            continue;
        };
        let profile_type = profile.value_type.as_deref().unwrap_or_default();
        if variable_type != profile_type {
            mismatches.push(TypeMismatch {
                variable: ident.clone(),
                variable_type: variable_type.to_string(),
                profile: profile_name.to_string(),
                profile_type: profile_type.to_string(),
            });
        }
    }
    mismatches
}
