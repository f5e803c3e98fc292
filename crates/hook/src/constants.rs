//! Forced constant registration.
//!
//! A plain [`SymbolRegistry::define_constant`] refuses names that are already
//! taken. The functions here always bind the name, displacing whatever entry
//! held it regardless of owner. The delete and the insert are published as one
//! snapshot swap.

use std::sync::Arc;

use symhook_registry::{
	ConstFlags, ConstantEntry, OwnerTag, SymbolEntry, SymbolName, SymbolRegistry, Value,
};
use tracing::debug;

/// Binds `name` to `value` for `owner`, returning the displaced entry.
pub fn register_constant_force(
	registry: &SymbolRegistry,
	name: impl Into<SymbolName>,
	value: Value,
	flags: ConstFlags,
	owner: &OwnerTag,
) -> Option<Arc<ConstantEntry>> {
	let entry = ConstantEntry::new(name, value, flags, owner.clone());
	let name = entry.name().clone();
	let previous = registry.constants().replace(entry);
	if let Some(prev) = &previous {
		debug!(
			%name,
			%owner,
			previous_owner = %prev.owner(),
			"replaced constant"
		);
	}
	previous
}

pub fn register_null_constant_force(
	registry: &SymbolRegistry,
	name: impl Into<SymbolName>,
	flags: ConstFlags,
	owner: &OwnerTag,
) -> Option<Arc<ConstantEntry>> {
	register_constant_force(registry, name, Value::Null, flags, owner)
}

pub fn register_bool_constant_force(
	registry: &SymbolRegistry,
	name: impl Into<SymbolName>,
	value: bool,
	flags: ConstFlags,
	owner: &OwnerTag,
) -> Option<Arc<ConstantEntry>> {
	register_constant_force(registry, name, Value::Bool(value), flags, owner)
}

pub fn register_long_constant_force(
	registry: &SymbolRegistry,
	name: impl Into<SymbolName>,
	value: i64,
	flags: ConstFlags,
	owner: &OwnerTag,
) -> Option<Arc<ConstantEntry>> {
	register_constant_force(registry, name, Value::Int(value), flags, owner)
}

pub fn register_double_constant_force(
	registry: &SymbolRegistry,
	name: impl Into<SymbolName>,
	value: f64,
	flags: ConstFlags,
	owner: &OwnerTag,
) -> Option<Arc<ConstantEntry>> {
	register_constant_force(registry, name, Value::Float(value), flags, owner)
}

pub fn register_string_constant_force(
	registry: &SymbolRegistry,
	name: impl Into<SymbolName>,
	value: &str,
	flags: ConstFlags,
	owner: &OwnerTag,
) -> Option<Arc<ConstantEntry>> {
	register_constant_force(registry, name, Value::from(value), flags, owner)
}

/// Like [`register_string_constant_force`] for arbitrary bytes, including NULs.
pub fn register_stringl_constant_force(
	registry: &SymbolRegistry,
	name: impl Into<SymbolName>,
	value: &[u8],
	flags: ConstFlags,
	owner: &OwnerTag,
) -> Option<Arc<ConstantEntry>> {
	register_constant_force(registry, name, Value::from(value), flags, owner)
}

#[cfg(test)]
mod tests;
