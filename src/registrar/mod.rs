//! Schema to host materialization engine
//!
//! The registrar validates declared items, dispatches category/type-specific
//! registration calls through the host's capability set, and creates or
//! patches shared presentation profiles. It performs no retries, no logging,
//! and no locking; every failure aborts the current call and is surfaced to
//! the caller. Partial application within a batch is expected: items already
//! registered stay registered when a later item fails.

mod dispatch;
mod profiles;

use crate::core::error::RegistrarError;
use crate::host::Host;
use crate::schema::model::Schema;

/// Materializes a declarative schema onto a borrowed host instance
pub struct Registrar<'h, H: Host> {
    host: &'h mut H,
}

impl<'h, H: Host> Registrar<'h, H> {
    pub fn new(host: &'h mut H) -> Self {
        Self { host }
    }

    /// Apply a full schema: properties, attributes, profiles, then
    /// variables. Profiles come before the variables that reference them.
    pub fn register(&mut self, schema: &Schema) -> Result<(), RegistrarError> {
        self.register_properties(&schema.properties)?;
        self.register_attributes(&schema.attributes)?;
        self.register_profiles(&schema.profiles, true)?;
        self.register_variables(&schema.variables)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::memory::HostOp;
    use crate::host::{InstanceId, MemoryHost};

    #[test]
    fn test_full_registration_orders_profiles_before_variables() {
        let schema = Schema::from_yaml(
            r#"
properties:
  host: { type: String, default: "h" }
variables:
  state: { type: Integer, name: "State", profile: "P", position: 1 }
profiles:
  P: { type: Integer, icon: Gear }
"#,
        )
        .unwrap();

        let mut host = MemoryHost::new(InstanceId(1));
        Registrar::new(&mut host).register(&schema).unwrap();

        let profile_created = host
            .log
            .iter()
            .position(|op| matches!(op, HostOp::CreateProfile { .. }))
            .unwrap();
        let variable_registered = host
            .log
            .iter()
            .position(|op| matches!(op, HostOp::RegisterSlot { ident, .. } if ident == "state"))
            .unwrap();
        assert!(profile_created < variable_registered);
        assert!(host.slot("host").is_some());
        assert!(host.profile("P").is_some());
    }
}
