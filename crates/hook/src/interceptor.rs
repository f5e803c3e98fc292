//! Handler interception.
//!
//! Hooking a name that exists swaps the dispatch target of the existing
//! [`CallableEntry`] in place: the entry keeps its identity, owner and origin.
//! Hooking a name that does not exist installs a new entry instead, unless
//! the deny-list forbids the name.
//!
//! The target swap is one atomic exchange on the entry's target cell, so a
//! concurrent caller dispatches through either the old handler or the new one.
//!
//! [`CallableEntry`]: symhook_registry::CallableEntry

use symhook_registry::{
	CallableEntry, Handler, Origin, OwnerTag, RegistryError, SymbolEntry, SymbolName,
	SymbolRegistry,
};
use tracing::{debug, warn};

use crate::config::DenyList;
use crate::error::HookError;

/// What a successful hook did.
#[derive(Debug, Clone)]
pub enum HookOutcome {
	/// An existing entry now dispatches to the new handler.
	Patched {
		/// Target that was active immediately before the swap.
		previous: Handler,
	},
	/// No entry existed; a new one was installed.
	Installed,
}

impl HookOutcome {
	/// Returns true when a new entry was installed.
	pub fn installed(&self) -> bool {
		matches!(self, Self::Installed)
	}

	pub fn previous(&self) -> Option<&Handler> {
		match self {
			Self::Patched { previous } => Some(previous),
			Self::Installed => None,
		}
	}

	pub fn into_previous(self) -> Option<Handler> {
		match self {
			Self::Patched { previous } => Some(previous),
			Self::Installed => None,
		}
	}
}

/// Per-name results of a batch hook, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
	pub outcomes: Vec<(SymbolName, Result<HookOutcome, HookError>)>,
}

impl BatchReport {
	/// Returns true when every name was hooked.
	pub fn is_success(&self) -> bool {
		self.outcomes.iter().all(|(_, r)| r.is_ok())
	}

	/// Names that could not be hooked.
	pub fn failures(&self) -> impl Iterator<Item = &SymbolName> + '_ {
		self.outcomes
			.iter()
			.filter(|(_, r)| r.is_err())
			.map(|(name, _)| name)
	}

	pub fn installed(&self) -> usize {
		self.outcomes
			.iter()
			.filter(|(_, r)| matches!(r, Ok(HookOutcome::Installed)))
			.count()
	}

	pub fn patched(&self) -> usize {
		self.outcomes
			.iter()
			.filter(|(_, r)| matches!(r, Ok(HookOutcome::Patched { .. })))
			.count()
	}
}

/// Hooks callables in a registry on behalf of a component.
#[derive(Debug, Clone, Copy)]
pub struct Interceptor<'a> {
	registry: &'a SymbolRegistry,
	deny: &'a DenyList,
}

impl<'a> Interceptor<'a> {
	pub fn new(registry: &'a SymbolRegistry, deny: &'a DenyList) -> Self {
		Self { registry, deny }
	}

	#[inline]
	pub fn registry(&self) -> &'a SymbolRegistry {
		self.registry
	}

	/// Swaps the dispatch target of an existing callable.
	///
	/// Returns the displaced target, or `None` without touching the registry
	/// when `name` is not defined. The deny-list does not apply.
	pub fn patch(&self, name: impl AsRef<[u8]>, handler: Handler) -> Option<Handler> {
		let entry = self.registry.callables().get(name)?;
		let previous = entry.swap_target(handler);
		debug!(name = %entry.name(), owner = %entry.owner(), "patched callable");
		Some(previous)
	}

	/// Points `name` at `handler`. Returns true if a new entry was installed
	/// for `owner`, false if an existing entry was patched.
	pub fn install_or_patch(
		&self,
		name: impl Into<SymbolName>,
		handler: Handler,
		owner: &OwnerTag,
	) -> Result<bool, HookError> {
		self.install_or_patch_with_previous(name, handler, owner)
			.map(|outcome| outcome.installed())
	}

	/// Points `name` at `handler` and returns the target it displaced.
	pub fn install_or_patch_with_previous(
		&self,
		name: impl Into<SymbolName>,
		handler: Handler,
		owner: &OwnerTag,
	) -> Result<HookOutcome, HookError> {
		let name = name.into();
		let callables = self.registry.callables();
		loop {
			if let Some(entry) = callables.get(&name) {
				let previous = entry.swap_target(handler);
				debug!(%name, owner = %entry.owner(), "patched callable");
				return Ok(HookOutcome::Patched { previous });
			}

			if self.deny.contains(name.as_bytes()) {
				warn!(%name, "refusing to install disabled function");
				return Err(HookError::Unhookable { name });
			}

			let entry =
				CallableEntry::new(name.clone(), owner.clone(), Origin::Image, handler.clone());
			match callables.insert(entry) {
				Ok(_) => {
					debug!(%name, %owner, "installed callable");
					return Ok(HookOutcome::Installed);
				}
				// Defined by someone else since the lookup; patch theirs.
				Err(RegistryError::Duplicate { .. }) => continue,
			}
		}
	}

	/// Hooks every pair, continuing past failures.
	pub fn install_or_patch_batch<I, N>(&self, hooks: I, owner: &OwnerTag) -> BatchReport
	where
		I: IntoIterator<Item = (N, Handler)>,
		N: Into<SymbolName>,
	{
		let outcomes: Vec<_> = hooks
			.into_iter()
			.map(|(name, handler)| {
				let name = name.into();
				let result = self.install_or_patch_with_previous(name.clone(), handler, owner);
				(name, result)
			})
			.collect();
		let report = BatchReport { outcomes };

		if !report.is_success() {
			let failed: Vec<_> = report.failures().collect();
			warn!(%owner, count = failed.len(), ?failed, "batch hook incomplete");
		}
		report
	}
}
