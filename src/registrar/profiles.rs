//! Create-or-update and guarded deletion of shared presentation profiles
//!
//! Profiles are named globally and shared by every instance of a module
//! kind. Registration converges: applying the same settings twice leaves
//! the same host state, so sibling instances may race freely. Deletion is
//! gated on being the last surviving instance of the kind.

use crate::core::error::RegistrarError;
use crate::core::types::ValueType;
use crate::host::{Host, InstanceDirectory};
use crate::registrar::Registrar;
use crate::schema::model::ProfileSpec;

impl<H: Host> Registrar<'_, H> {
    /// Create or update the named profiles. With `update_existing` false,
    /// profiles that already exist on the host are left untouched.
    pub fn register_profiles(
        &mut self,
        profiles: &[(String, ProfileSpec)],
        update_existing: bool,
    ) -> Result<(), RegistrarError> {
        for (name, settings) in profiles {
            let type_name = settings.value_type.as_deref().unwrap_or_default();
            let value_type = ValueType::parse(type_name).map_err(|_| {
                RegistrarError::UnsupportedProfileType {
                    profile: name.clone(),
                    type_name: type_name.to_string(),
                }
            })?;

            let exists = self.host.profile_exists(name);
            if exists && !update_existing {
                continue;
            }
            if !exists {
                self.host.create_profile(name, value_type.code())?;
            }

            self.host.set_profile_icon(name, &settings.icon)?;

            // suffix text applies to all types except Boolean
            if value_type != ValueType::Boolean {
                if let Some(suffix) = &settings.suffix {
                    self.host.set_profile_text(name, "", suffix)?;
                }
            }

            // numeric range applies to Integer and Float only
            if matches!(value_type, ValueType::Integer | ValueType::Float) {
                if let Some(min) = settings.min_value {
                    let max = settings.max_value.unwrap_or(0.0);
                    let step = settings.step_size.unwrap_or(match value_type {
                        ValueType::Float => 0.1,
                        _ => 1.0,
                    });
                    self.host.set_profile_values(name, min, max, step)?;
                }
            }

            if let Some(script) = &settings.action_script {
                self.host.set_profile_action(name, script)?;
            }

            for assoc in &settings.associations {
                self.host.set_profile_association(
                    name,
                    &assoc.value,
                    &assoc.text,
                    &assoc.icon,
                    assoc.color,
                )?;
            }

            // digit precision applies to Float only
            if value_type == ValueType::Float {
                if let Some(digits) = settings.digits {
                    self.host.set_profile_digits(name, digits)?;
                }
            }
        }
        Ok(())
    }

    /// Delete the named profiles, but only when this host is the last
    /// surviving instance of its module kind; otherwise a silent no-op,
    /// since sibling instances still reference the shared profiles.
    ///
    /// The directory lookup is a point-in-time count; the embedder must
    /// serialize instance teardown per module kind.
    pub fn delete_profiles(
        &mut self,
        profiles: &[(String, ProfileSpec)],
        directory: &dyn InstanceDirectory,
    ) -> Result<(), RegistrarError> {
        if !self.is_last_instance(directory) {
            return Ok(());
        }
        for (name, _) in profiles {
            if self.host.profile_exists(name) {
                self.host.delete_profile(name)?;
            }
        }
        Ok(())
    }

    fn is_last_instance(&self, directory: &dyn InstanceDirectory) -> bool {
        match directory.module_kind_of(self.host.instance_id()) {
            Some(kind) => directory.instances_of(&kind).len() == 1,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::memory::HostOp;
    use crate::host::{InstanceId, MemoryDirectory, MemoryHost};
    use crate::schema::model::Schema;

    fn profiles(yaml: &str) -> Vec<(String, ProfileSpec)> {
        Schema::from_yaml(yaml).unwrap().profiles
    }

    const CHARGER_PROFILES: &str = r#"
profiles:
  WARP2.ChargerCurrent:
    type: Integer
    icon: Graph
    suffix: " mA"
  WARP2.ChargerState:
    type: Integer
    icon: Garage
    minValue: 0
    maxValue: 4
    stepSize: 1
    associations:
      - { value: 0, text: "not connected", icon: Cross, color: -1 }
      - { value: 3, text: "charging", icon: Ok, color: -1 }
"#;

    #[test]
    fn test_registration_is_idempotent() {
        let profiles = profiles(CHARGER_PROFILES);

        let mut once = MemoryHost::new(InstanceId(1));
        Registrar::new(&mut once)
            .register_profiles(&profiles, true)
            .unwrap();

        let mut twice = MemoryHost::new(InstanceId(1));
        let mut registrar = Registrar::new(&mut twice);
        registrar.register_profiles(&profiles, true).unwrap();
        registrar.register_profiles(&profiles, true).unwrap();

        assert_eq!(once.profiles, twice.profiles);
    }

    #[test]
    fn test_update_existing_false_skips_existing_profiles() {
        let before = profiles(CHARGER_PROFILES);
        let changed = profiles(&CHARGER_PROFILES.replace("Graph", "Lightning"));

        let mut host = MemoryHost::new(InstanceId(1));
        let mut registrar = Registrar::new(&mut host);
        registrar.register_profiles(&before, true).unwrap();
        registrar.register_profiles(&changed, false).unwrap();

        assert_eq!(host.profile("WARP2.ChargerCurrent").unwrap().icon, "Graph");
    }

    #[test]
    fn test_range_defaults_per_numeric_type() {
        let profiles = profiles(
            r#"
profiles:
  Power: { type: Float, icon: Graph, minValue: 0, digits: 1 }
  Count: { type: Integer, icon: Graph, minValue: 0 }
"#,
        );
        let mut host = MemoryHost::new(InstanceId(1));
        Registrar::new(&mut host)
            .register_profiles(&profiles, true)
            .unwrap();

        assert_eq!(host.profile("Power").unwrap().range, Some((0.0, 0.0, 0.1)));
        assert_eq!(host.profile("Power").unwrap().digits, Some(1));
        assert_eq!(host.profile("Count").unwrap().range, Some((0.0, 0.0, 1.0)));
        assert_eq!(host.profile("Count").unwrap().digits, None);
    }

    #[test]
    fn test_action_script_is_applied_for_any_type() {
        let profiles = profiles(
            r#"
profiles:
  Plugged: { type: Boolean, icon: Plug, actionScript: "ToggleCharging" }
"#,
        );
        let mut host = MemoryHost::new(InstanceId(1));
        Registrar::new(&mut host)
            .register_profiles(&profiles, true)
            .unwrap();

        assert_eq!(
            host.profile("Plugged").unwrap().action_script.as_deref(),
            Some("ToggleCharging")
        );
        assert!(host.log.contains(&HostOp::SetProfileAction {
            name: "Plugged".to_string(),
            script: "ToggleCharging".to_string(),
        }));
    }

    #[test]
    fn test_boolean_profile_ignores_suffix() {
        let profiles = profiles(
            r#"
profiles:
  Plugged: { type: Boolean, icon: Plug, suffix: " yes" }
"#,
        );
        let mut host = MemoryHost::new(InstanceId(1));
        Registrar::new(&mut host)
            .register_profiles(&profiles, true)
            .unwrap();
        assert_eq!(host.profile("Plugged").unwrap().suffix, "");
    }

    #[test]
    fn test_unrecognized_profile_type_fails() {
        let profiles = profiles(
            r#"
profiles:
  Pay: { type: Currency, icon: Euro }
"#,
        );
        let mut host = MemoryHost::new(InstanceId(1));
        let err = Registrar::new(&mut host)
            .register_profiles(&profiles, true)
            .unwrap_err();
        assert!(matches!(
            err,
            RegistrarError::UnsupportedProfileType { profile, type_name }
                if profile == "Pay" && type_name == "Currency"
        ));
    }

    #[test]
    fn test_empty_profiles_is_a_no_op() {
        let mut host = MemoryHost::new(InstanceId(1));
        Registrar::new(&mut host).register_profiles(&[], true).unwrap();
        assert!(host.log.is_empty());
    }

    #[test]
    fn test_delete_is_a_no_op_with_sibling_instances() {
        let profiles = profiles(CHARGER_PROFILES);
        let mut host = MemoryHost::new(InstanceId(1));
        let mut registrar = Registrar::new(&mut host);
        registrar.register_profiles(&profiles, true).unwrap();

        let mut directory = MemoryDirectory::new();
        directory.add(InstanceId(1), "charger-gateway");
        directory.add(InstanceId(2), "charger-gateway");

        registrar.delete_profiles(&profiles, &directory).unwrap();
        assert!(host.profile("WARP2.ChargerCurrent").is_some());
    }

    #[test]
    fn test_delete_runs_for_the_last_instance() {
        let profiles = profiles(CHARGER_PROFILES);
        let mut host = MemoryHost::new(InstanceId(1));
        let mut registrar = Registrar::new(&mut host);
        registrar.register_profiles(&profiles, true).unwrap();

        let mut directory = MemoryDirectory::new();
        directory.add(InstanceId(1), "charger-gateway");
        // an instance of a different kind does not hold the profiles alive
        directory.add(InstanceId(9), "meter");

        registrar.delete_profiles(&profiles, &directory).unwrap();
        assert!(host.profiles.is_empty());
    }

    #[test]
    fn test_delete_skips_profiles_missing_on_the_host() {
        let profiles = profiles(CHARGER_PROFILES);
        let mut host = MemoryHost::new(InstanceId(1));
        let mut directory = MemoryDirectory::new();
        directory.add(InstanceId(1), "charger-gateway");

        // nothing registered: deletion must not error
        Registrar::new(&mut host)
            .delete_profiles(&profiles, &directory)
            .unwrap();
        assert!(host.log.is_empty());
    }

    #[test]
    fn test_delete_is_a_no_op_for_unknown_instances() {
        let profiles = profiles(CHARGER_PROFILES);
        let mut host = MemoryHost::new(InstanceId(7));
        let mut registrar = Registrar::new(&mut host);
        registrar.register_profiles(&profiles, true).unwrap();

        let directory = MemoryDirectory::new();
        registrar.delete_profiles(&profiles, &directory).unwrap();
        assert!(host.profile("WARP2.ChargerState").is_some());
    }
}
