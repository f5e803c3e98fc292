//! Owner-scoped eviction.
//!
//! Each pass walks one table once and drops the entries registered by the
//! given owner. The walk runs over an immutable snapshot and the survivors are
//! published in one swap, so concurrent readers see every surviving entry
//! intact and no half-removed ones.
//!
//! Callables and types provided intrinsically by the host are never evicted,
//! whatever their owner tag says.

use std::sync::Arc;

use symhook_registry::{
	CallableEntry, ConstantEntry, OwnerTag, SymbolEntry, SymbolRegistry, SymbolTable, TypeEntry,
};
use tracing::debug;

/// Number of entries removed from each table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvictionReport {
	pub constants: usize,
	pub types: usize,
	pub callables: usize,
}

impl EvictionReport {
	pub fn total(&self) -> usize {
		self.constants + self.types + self.callables
	}
}

fn evict<T, F>(table: &SymbolTable<T>, owner: &OwnerTag, evictable: F) -> Vec<Arc<T>>
where
	T: SymbolEntry,
	F: Fn(&T) -> bool,
{
	let removed = table.retain(|entry| !(entry.owner() == owner && evictable(entry)));
	debug!(table = table.label(), %owner, removed = removed.len(), "evicted owner entries");
	removed
}

/// Removes every constant registered by `owner`.
pub fn evict_constants(registry: &SymbolRegistry, owner: &OwnerTag) -> Vec<Arc<ConstantEntry>> {
	evict(registry.constants(), owner, |_| true)
}

/// Removes every in-image type registered by `owner`.
pub fn evict_types(registry: &SymbolRegistry, owner: &OwnerTag) -> Vec<Arc<TypeEntry>> {
	evict(registry.types(), owner, |ty| ty.origin().is_image())
}

/// Removes every in-image callable registered by `owner`.
pub fn evict_callables(registry: &SymbolRegistry, owner: &OwnerTag) -> Vec<Arc<CallableEntry>> {
	evict(registry.callables(), owner, |f| f.origin().is_image())
}

/// Runs all three passes: constants, then types, then callables.
pub fn evict_all(registry: &SymbolRegistry, owner: &OwnerTag) -> EvictionReport {
	EvictionReport {
		constants: evict_constants(registry, owner).len(),
		types: evict_types(registry, owner).len(),
		callables: evict_callables(registry, owner).len(),
	}
}

#[cfg(test)]
mod tests;
