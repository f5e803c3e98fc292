//! Superseding a component that was loaded earlier.
//!
//! A successor takes over a target's public surface in three steps: evict the
//! target's constants, types and callables, re-register replacements under
//! the freed names, and hook whatever must stay bound to an existing entry.
//! Replacements are registered under the target's owner tag so that later
//! evictions of the target still find them.

use std::sync::Arc;

use symhook_registry::{
	CallableEntry, ConstFlags, ConstantEntry, Handler, Origin, OwnerTag, RegistryError,
	SymbolName, SymbolRegistry, TypeEntry, Value,
};
use tracing::info;

use crate::config::DenyList;
use crate::constants::register_constant_force;
use crate::error::{HookError, TakeoverError};
use crate::interceptor::{HookOutcome, Interceptor};
use crate::janitor::{EvictionReport, evict_all};

/// Registers symbols on behalf of one owner during a takeover.
#[derive(Debug, Clone, Copy)]
pub struct Registrar<'a> {
	interceptor: Interceptor<'a>,
	owner: &'a OwnerTag,
}

impl<'a> Registrar<'a> {
	pub fn new(interceptor: Interceptor<'a>, owner: &'a OwnerTag) -> Self {
		Self { interceptor, owner }
	}

	/// Owner tag given to everything registered through this registrar.
	pub fn owner(&self) -> &'a OwnerTag {
		self.owner
	}

	pub fn registry(&self) -> &'a SymbolRegistry {
		self.interceptor.registry()
	}

	/// Defines a callable under a free name.
	pub fn function(
		&self,
		name: impl Into<SymbolName>,
		handler: Handler,
	) -> Result<Arc<CallableEntry>, RegistryError> {
		self.registry()
			.define_function(name, self.owner, Origin::Image, handler)
	}

	/// Installs or patches `name`; see [`Interceptor::install_or_patch_with_previous`].
	pub fn hook(
		&self,
		name: impl Into<SymbolName>,
		handler: Handler,
	) -> Result<HookOutcome, HookError> {
		self.interceptor
			.install_or_patch_with_previous(name, handler, self.owner)
	}

	/// Binds a constant whoever held the name before.
	pub fn constant_force(
		&self,
		name: impl Into<SymbolName>,
		value: Value,
		flags: ConstFlags,
	) -> Option<Arc<ConstantEntry>> {
		register_constant_force(self.registry(), name, value, flags, self.owner)
	}

	/// Defines an in-image type under a free name.
	pub fn define_type(
		&self,
		name: impl Into<SymbolName>,
	) -> Result<Arc<TypeEntry>, RegistryError> {
		self.registry().define_type(name, self.owner, Origin::Image)
	}
}

/// What a takeover did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TakeoverReport {
	/// Owner the replacement symbols were registered under.
	pub owner: OwnerTag,
	pub evicted: EvictionReport,
}

/// Sequences eviction, re-registration and hooking for a successor component.
#[derive(Debug)]
pub struct Takeover<'a> {
	registry: &'a SymbolRegistry,
	deny: &'a DenyList,
	successor: OwnerTag,
}

impl<'a> Takeover<'a> {
	pub fn new(registry: &'a SymbolRegistry, deny: &'a DenyList, successor: OwnerTag) -> Self {
		Self {
			registry,
			deny,
			successor,
		}
	}

	/// Replaces the public surface of `target`.
	///
	/// `marker` is a type the target registers when it loads; if the target is
	/// loaded but the marker is missing, the successor was loaded first and
	/// nothing is touched. With no target, `reinit` registers under the
	/// successor's own tag and nothing is evicted.
	pub fn supersede<F>(
		&self,
		target: Option<&OwnerTag>,
		marker: impl Into<SymbolName>,
		reinit: F,
	) -> Result<TakeoverReport, TakeoverError>
	where
		F: FnOnce(&Registrar<'_>) -> Result<(), TakeoverError>,
	{
		let interceptor = Interceptor::new(self.registry, self.deny);
		let (owner, evicted) = match target {
			Some(target) => {
				let marker = marker.into();
				if !self.registry.types().contains(&marker) {
					return Err(TakeoverError::LoadOrder {
						target: target.clone(),
						marker,
					});
				}
				(target, evict_all(self.registry, target))
			}
			None => (&self.successor, EvictionReport::default()),
		};

		reinit(&Registrar::new(interceptor, owner))?;

		info!(
			successor = %self.successor,
			%owner,
			evicted = evicted.total(),
			"takeover complete"
		);
		Ok(TakeoverReport {
			owner: owner.clone(),
			evicted,
		})
	}
}
