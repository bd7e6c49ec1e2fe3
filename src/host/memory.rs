//! In-memory host used for dry runs and tests
//!
//! `MemoryHost` materializes slots and profiles into ordered maps and keeps
//! an operation log in call order, so a registration pass can be inspected
//! without a live runtime.

use std::collections::BTreeMap;

use crate::core::types::{Category, Value, ValueType};

use super::{
    CapabilitySet, Host, HostError, HostResult, InstanceDirectory, InstanceId, SlotRequest,
};

/// A materialized storage slot
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    pub category: Category,
    pub value_type: ValueType,
    pub name: Option<String>,
    pub profile: Option<String>,
    pub position: Option<i64>,
    pub value: Option<Value>,
    pub action_enabled: bool,
}

/// One enumerated association entry of a materialized profile
#[derive(Debug, Clone, PartialEq)]
pub struct AssociationEntry {
    pub value: Value,
    pub text: String,
    pub icon: String,
    pub color: i32,
}

/// A materialized presentation profile
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileState {
    pub code: u8,
    pub icon: String,
    pub suffix: String,
    pub range: Option<(f64, f64, f64)>,
    pub action_script: Option<String>,
    /// Keyed by the rendered association value; re-setting a value replaces
    /// its entry
    pub associations: BTreeMap<String, AssociationEntry>,
    pub digits: Option<u32>,
}

/// One recorded host invocation, in call order
#[derive(Debug, Clone, PartialEq)]
pub enum HostOp {
    RegisterSlot {
        category: Category,
        value_type: ValueType,
        ident: String,
    },
    EnableAction(String),
    DisableAction(String),
    SetValue {
        ident: String,
        value: Value,
    },
    CreateProfile {
        name: String,
        code: u8,
    },
    SetProfileIcon {
        name: String,
        icon: String,
    },
    SetProfileText {
        name: String,
        suffix: String,
    },
    SetProfileValues {
        name: String,
        min: f64,
        max: f64,
        step: f64,
    },
    SetProfileAction {
        name: String,
        script: String,
    },
    SetProfileAssociation {
        name: String,
        value: Value,
        text: String,
    },
    SetProfileDigits {
        name: String,
        digits: u32,
    },
    DeleteProfile(String),
}

impl std::fmt::Display for HostOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostOp::RegisterSlot {
                category,
                value_type,
                ident,
            } => write!(f, "register {} '{}' ({})", category, ident, value_type),
            HostOp::EnableAction(ident) => write!(f, "enable action '{}'", ident),
            HostOp::DisableAction(ident) => write!(f, "disable action '{}'", ident),
            HostOp::SetValue { ident, value } => write!(f, "set value '{}' = {}", ident, value),
            HostOp::CreateProfile { name, code } => {
                write!(f, "create profile '{}' (code {})", name, code)
            }
            HostOp::SetProfileIcon { name, icon } => {
                write!(f, "set profile icon '{}' = {}", name, icon)
            }
            HostOp::SetProfileText { name, suffix } => {
                write!(f, "set profile suffix '{}' = '{}'", name, suffix)
            }
            HostOp::SetProfileValues {
                name,
                min,
                max,
                step,
            } => write!(f, "set profile range '{}' = {}..{} step {}", name, min, max, step),
            HostOp::SetProfileAction { name, script } => {
                write!(f, "set profile action '{}' = {}", name, script)
            }
            HostOp::SetProfileAssociation { name, value, text } => {
                write!(f, "set profile association '{}' [{}] = {}", name, value, text)
            }
            HostOp::SetProfileDigits { name, digits } => {
                write!(f, "set profile digits '{}' = {}", name, digits)
            }
            HostOp::DeleteProfile(name) => write!(f, "delete profile '{}'", name),
        }
    }
}

/// In-process host implementation of the full capability surface
#[derive(Debug)]
pub struct MemoryHost {
    instance: InstanceId,
    capabilities: CapabilitySet,
    pub slots: BTreeMap<String, Slot>,
    pub profiles: BTreeMap<String, ProfileState>,
    pub log: Vec<HostOp>,
}

impl MemoryHost {
    /// Host exposing every registration capability
    pub fn new(instance: InstanceId) -> Self {
        Self::with_capabilities(instance, CapabilitySet::full())
    }

    /// Host limited to the given capabilities
    pub fn with_capabilities(instance: InstanceId, capabilities: CapabilitySet) -> Self {
        Self {
            instance,
            capabilities,
            slots: BTreeMap::new(),
            profiles: BTreeMap::new(),
            log: Vec::new(),
        }
    }

    pub fn slot(&self, ident: &str) -> Option<&Slot> {
        self.slots.get(ident)
    }

    pub fn profile(&self, name: &str) -> Option<&ProfileState> {
        self.profiles.get(name)
    }

    fn slot_mut(&mut self, ident: &str) -> Result<&mut Slot, HostError> {
        self.slots
            .get_mut(ident)
            .ok_or_else(|| HostError::UnknownIdent(ident.to_string()))
    }

    fn profile_mut(&mut self, name: &str) -> Result<&mut ProfileState, HostError> {
        self.profiles
            .get_mut(name)
            .ok_or_else(|| HostError::UnknownProfile(name.to_string()))
    }
}

impl Host for MemoryHost {
    fn instance_id(&self) -> InstanceId {
        self.instance
    }

    fn capabilities(&self) -> &CapabilitySet {
        &self.capabilities
    }

    fn register_slot(
        &mut self,
        category: Category,
        value_type: ValueType,
        request: SlotRequest<'_>,
    ) -> HostResult {
        let ident = request.ident().to_string();
        let slot = self.slots.entry(ident.clone()).or_insert(Slot {
            category,
            value_type,
            name: None,
            profile: None,
            position: None,
            value: None,
            action_enabled: false,
        });
        slot.category = category;
        slot.value_type = value_type;
        match request {
            SlotRequest::Stored { default, .. } => {
                slot.value = Some(default.clone());
            }
            SlotRequest::Display {
                name,
                profile,
                position,
                ..
            } => {
                slot.name = Some(name.to_string());
                slot.profile = if profile.is_empty() {
                    None
                } else {
                    Some(profile.to_string())
                };
                slot.position = Some(position);
            }
        }
        self.log.push(HostOp::RegisterSlot {
            category,
            value_type,
            ident,
        });
        Ok(())
    }

    fn enable_action(&mut self, ident: &str) -> HostResult {
        self.slot_mut(ident)?.action_enabled = true;
        self.log.push(HostOp::EnableAction(ident.to_string()));
        Ok(())
    }

    fn disable_action(&mut self, ident: &str) -> HostResult {
        self.slot_mut(ident)?.action_enabled = false;
        self.log.push(HostOp::DisableAction(ident.to_string()));
        Ok(())
    }

    fn set_value(&mut self, ident: &str, value: &Value) -> HostResult {
        self.slot_mut(ident)?.value = Some(value.clone());
        self.log.push(HostOp::SetValue {
            ident: ident.to_string(),
            value: value.clone(),
        });
        Ok(())
    }

    fn profile_exists(&self, name: &str) -> bool {
        self.profiles.contains_key(name)
    }

    fn create_profile(&mut self, name: &str, code: u8) -> HostResult {
        self.profiles.insert(
            name.to_string(),
            ProfileState {
                code,
                ..ProfileState::default()
            },
        );
        self.log.push(HostOp::CreateProfile {
            name: name.to_string(),
            code,
        });
        Ok(())
    }

    fn set_profile_icon(&mut self, name: &str, icon: &str) -> HostResult {
        self.profile_mut(name)?.icon = icon.to_string();
        self.log.push(HostOp::SetProfileIcon {
            name: name.to_string(),
            icon: icon.to_string(),
        });
        Ok(())
    }

    fn set_profile_text(&mut self, name: &str, _prefix: &str, suffix: &str) -> HostResult {
        self.profile_mut(name)?.suffix = suffix.to_string();
        self.log.push(HostOp::SetProfileText {
            name: name.to_string(),
            suffix: suffix.to_string(),
        });
        Ok(())
    }

    fn set_profile_values(&mut self, name: &str, min: f64, max: f64, step: f64) -> HostResult {
        self.profile_mut(name)?.range = Some((min, max, step));
        self.log.push(HostOp::SetProfileValues {
            name: name.to_string(),
            min,
            max,
            step,
        });
        Ok(())
    }

    fn set_profile_action(&mut self, name: &str, script: &str) -> HostResult {
        self.profile_mut(name)?.action_script = Some(script.to_string());
        self.log.push(HostOp::SetProfileAction {
            name: name.to_string(),
            script: script.to_string(),
        });
        Ok(())
    }

    fn set_profile_association(
        &mut self,
        name: &str,
        value: &Value,
        text: &str,
        icon: &str,
        color: i32,
    ) -> HostResult {
        let entry = AssociationEntry {
            value: value.clone(),
            text: text.to_string(),
            icon: icon.to_string(),
            color,
        };
        self.profile_mut(name)?
            .associations
            .insert(value.to_string(), entry);
        self.log.push(HostOp::SetProfileAssociation {
            name: name.to_string(),
            value: value.clone(),
            text: text.to_string(),
        });
        Ok(())
    }

    fn set_profile_digits(&mut self, name: &str, digits: u32) -> HostResult {
        self.profile_mut(name)?.digits = Some(digits);
        self.log.push(HostOp::SetProfileDigits {
            name: name.to_string(),
            digits,
        });
        Ok(())
    }

    fn delete_profile(&mut self, name: &str) -> HostResult {
        self.profiles
            .remove(name)
            .ok_or_else(|| HostError::UnknownProfile(name.to_string()))?;
        self.log.push(HostOp::DeleteProfile(name.to_string()));
        Ok(())
    }
}

/// Fake instance directory for tests and embedders without a runtime
#[derive(Debug, Clone, Default)]
pub struct MemoryDirectory {
    kinds: BTreeMap<InstanceId, String>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, instance: InstanceId, kind: &str) {
        self.kinds.insert(instance, kind.to_string());
    }

    pub fn remove(&mut self, instance: InstanceId) {
        self.kinds.remove(&instance);
    }
}

impl InstanceDirectory for MemoryDirectory {
    fn module_kind_of(&self, instance: InstanceId) -> Option<String> {
        self.kinds.get(&instance).cloned()
    }

    fn instances_of(&self, kind: &str) -> Vec<InstanceId> {
        self.kinds
            .iter()
            .filter(|(_, k)| k.as_str() == kind)
            .map(|(id, _)| *id)
            .collect()
    }
}
