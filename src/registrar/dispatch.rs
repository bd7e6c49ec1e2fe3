//! Capability dispatch for declared items
//!
//! Which concrete host operation to call is data: the (category, type)
//! pair. The dispatcher validates each item, resolves the pair against the
//! host's capability set, and invokes the registration with the
//! category-shaped positional arguments. Items are processed in declared
//! order; the first failing item aborts the batch with no rollback.

use crate::core::error::RegistrarError;
use crate::core::types::{Category, ValueType};
use crate::host::{Host, SlotRequest};
use crate::registrar::Registrar;
use crate::schema::model::ItemSpec;
use crate::schema::validator::{check, CheckedItem};

impl<H: Host> Registrar<'_, H> {
    pub fn register_properties(
        &mut self,
        items: &[(String, ItemSpec)],
    ) -> Result<(), RegistrarError> {
        self.register_items(Category::Property, items)
    }

    pub fn register_attributes(
        &mut self,
        items: &[(String, ItemSpec)],
    ) -> Result<(), RegistrarError> {
        self.register_items(Category::Attribute, items)
    }

    pub fn register_variables(
        &mut self,
        items: &[(String, ItemSpec)],
    ) -> Result<(), RegistrarError> {
        self.register_items(Category::Variable, items)
    }

    /// Register a batch of items of one category. An empty batch is a no-op.
    pub fn register_items(
        &mut self,
        category: Category,
        items: &[(String, ItemSpec)],
    ) -> Result<(), RegistrarError> {
        for (ident, item) in items {
            let checked = check(category, item)?;
            let type_name = checked.type_name();
            let value_type = match ValueType::parse(type_name) {
                Ok(vt) if self.host.capabilities().supports(category, vt) => vt,
                _ => {
                    return Err(RegistrarError::UnsupportedOperation {
                        category,
                        type_name: type_name.to_string(),
                    })
                }
            };
            match checked {
                CheckedItem::Stored { default, .. } => {
                    self.host
                        .register_slot(category, value_type, SlotRequest::Stored { ident, default })?;
                }
                CheckedItem::Display {
                    name,
                    profile,
                    position,
                    ..
                } => {
                    self.host.register_slot(
                        category,
                        value_type,
                        SlotRequest::Display {
                            ident,
                            name,
                            profile,
                            position,
                        },
                    )?;
                    if item.enable_action.unwrap_or(false) {
                        self.host.enable_action(ident)?;
                    } else {
                        self.host.disable_action(ident)?;
                    }
                    if let Some(default) = &item.default {
                        self.host.set_value(ident, default)?;
                    }
                }
            }
        }
        Ok(())
    }
}
