//! Host capability surface consumed by the registrar
//!
//! A host is any object exposing typed storage slots, action-enable flags,
//! and shared presentation profiles. The registrar is written against these
//! traits only; it never talks to a device or a runtime directly.

pub mod memory;

use std::collections::HashSet;
use thiserror::Error;

use crate::core::types::{Category, Value, ValueType};

pub use memory::{MemoryDirectory, MemoryHost};

/// Opaque identifier of a live host instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(pub u32);

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Error a host returns when it rejects an operation
#[derive(Debug, Error)]
pub enum HostError {
    #[error("no slot registered for ident '{0}'")]
    UnknownIdent(String),

    #[error("no profile named '{0}'")]
    UnknownProfile(String),

    #[error("{0}")]
    Rejected(String),
}

pub type HostResult = Result<(), HostError>;

/// Positional arguments of a slot registration call
#[derive(Debug, Clone, PartialEq)]
pub enum SlotRequest<'a> {
    /// Property or attribute storage: ident and default value
    Stored { ident: &'a str, default: &'a Value },
    /// User-visible variable: ident, display name, profile reference, position
    Display {
        ident: &'a str,
        name: &'a str,
        profile: &'a str,
        position: i64,
    },
}

impl SlotRequest<'_> {
    pub fn ident(&self) -> &str {
        match self {
            SlotRequest::Stored { ident, .. } => ident,
            SlotRequest::Display { ident, .. } => ident,
        }
    }
}

/// Registration capabilities a host declares at startup.
///
/// The dispatcher resolves each item against this set; a missing pair is an
/// `UnsupportedOperation`. New value kinds are added by declaring a pair
/// here, with no dispatcher change.
#[derive(Debug, Clone, Default)]
pub struct CapabilitySet {
    entries: HashSet<(Category, ValueType)>,
}

impl CapabilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every category/type combination
    pub fn full() -> Self {
        let mut set = Self::new();
        for category in Category::ALL {
            for value_type in ValueType::ALL {
                set.declare(category, value_type);
            }
        }
        set
    }

    pub fn declare(&mut self, category: Category, value_type: ValueType) {
        self.entries.insert((category, value_type));
    }

    pub fn with(mut self, category: Category, value_type: ValueType) -> Self {
        self.declare(category, value_type);
        self
    }

    pub fn supports(&self, category: Category, value_type: ValueType) -> bool {
        self.entries.contains(&(category, value_type))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The fixed operation surface a compatible host object exposes
pub trait Host {
    /// Identity of the instance this host object represents
    fn instance_id(&self) -> InstanceId;

    /// Capability registry populated at startup
    fn capabilities(&self) -> &CapabilitySet;

    /// Create or update a typed storage slot
    fn register_slot(
        &mut self,
        category: Category,
        value_type: ValueType,
        request: SlotRequest<'_>,
    ) -> HostResult;

    fn enable_action(&mut self, ident: &str) -> HostResult;
    fn disable_action(&mut self, ident: &str) -> HostResult;
    fn set_value(&mut self, ident: &str, value: &Value) -> HostResult;

    fn profile_exists(&self, name: &str) -> bool;
    fn create_profile(&mut self, name: &str, code: u8) -> HostResult;
    fn set_profile_icon(&mut self, name: &str, icon: &str) -> HostResult;
    fn set_profile_text(&mut self, name: &str, prefix: &str, suffix: &str) -> HostResult;
    fn set_profile_values(&mut self, name: &str, min: f64, max: f64, step: f64) -> HostResult;
    fn set_profile_action(&mut self, name: &str, script: &str) -> HostResult;
    fn set_profile_association(
        &mut self,
        name: &str,
        value: &Value,
        text: &str,
        icon: &str,
        color: i32,
    ) -> HostResult;
    fn set_profile_digits(&mut self, name: &str, digits: u32) -> HostResult;
    fn delete_profile(&mut self, name: &str) -> HostResult;
}

/// Instance introspection injected into profile deletion.
///
/// Lookups reflect a point-in-time snapshot; the embedder must serialize
/// instance teardown per module kind for the last-instance guard to hold.
pub trait InstanceDirectory {
    /// Module kind of a live instance, if known
    fn module_kind_of(&self, instance: InstanceId) -> Option<String>;

    /// Live instances of a module kind
    fn instances_of(&self, kind: &str) -> Vec<InstanceId>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_set_declare_and_lookup() {
        let set = CapabilitySet::new().with(Category::Variable, ValueType::Integer);
        assert!(set.supports(Category::Variable, ValueType::Integer));
        assert!(!set.supports(Category::Variable, ValueType::Float));
        assert!(!set.supports(Category::Property, ValueType::Integer));
    }

    #[test]
    fn test_full_capability_set_covers_all_pairs() {
        let set = CapabilitySet::full();
        for category in Category::ALL {
            for value_type in ValueType::ALL {
                assert!(set.supports(category, value_type));
            }
        }
    }
}
