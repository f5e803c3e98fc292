//! Entry types stored in the symbol tables.
//!
//! Every entry is immutable once published except for the dispatch target of a
//! [`CallableEntry`], which lives in its own atomic cell so that hooking an
//! existing callable never republishes the table.

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::name::SymbolName;
use crate::owner::{Origin, OwnerTag};
use crate::value::{ConstFlags, Value};

/// Common accessors for anything stored in a [`crate::SymbolTable`].
pub trait SymbolEntry: Send + Sync + 'static {
	/// Returns the key this entry is registered under.
	fn name(&self) -> &SymbolName;

	/// Returns the component that registered this entry.
	fn owner(&self) -> &OwnerTag;
}

type HandlerFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// Invocation target of a callable. Compared by identity.
#[derive(Clone)]
pub struct Handler(Arc<HandlerFn>);

impl Handler {
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(&[Value]) -> Value + Send + Sync + 'static,
	{
		Self(Arc::new(f))
	}

	#[inline]
	pub fn call(&self, args: &[Value]) -> Value {
		(self.0)(args)
	}

	/// Returns true if both handles point at the same closure.
	pub fn ptr_eq(a: &Self, b: &Self) -> bool {
		std::ptr::addr_eq(Arc::as_ptr(&a.0), Arc::as_ptr(&b.0))
	}
}

impl fmt::Debug for Handler {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Handler({:p})", Arc::as_ptr(&self.0).cast::<()>())
	}
}

/// An invokable symbol.
pub struct CallableEntry {
	name: SymbolName,
	owner: OwnerTag,
	origin: Origin,
	target: ArcSwap<Handler>,
}

impl CallableEntry {
	pub fn new(
		name: impl Into<SymbolName>,
		owner: OwnerTag,
		origin: Origin,
		handler: Handler,
	) -> Self {
		Self {
			name: name.into(),
			owner,
			origin,
			target: ArcSwap::from_pointee(handler),
		}
	}

	#[inline]
	pub fn origin(&self) -> Origin {
		self.origin
	}

	/// Returns the currently active dispatch target.
	pub fn target(&self) -> Handler {
		Handler::clone(&self.target.load())
	}

	/// Invokes the currently active dispatch target.
	pub fn dispatch(&self, args: &[Value]) -> Value {
		let target = self.target.load();
		target.call(args)
	}

	/// Replaces the dispatch target and returns the one it displaced.
	///
	/// The read of the old target and the store of the new one are a single
	/// atomic exchange.
	pub fn swap_target(&self, handler: Handler) -> Handler {
		Arc::unwrap_or_clone(self.target.swap(Arc::new(handler)))
	}
}

impl SymbolEntry for CallableEntry {
	fn name(&self) -> &SymbolName {
		&self.name
	}

	fn owner(&self) -> &OwnerTag {
		&self.owner
	}
}

impl fmt::Debug for CallableEntry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CallableEntry")
			.field("name", &self.name)
			.field("owner", &self.owner)
			.field("origin", &self.origin)
			.field("target", &*self.target.load())
			.finish()
	}
}

/// A named scalar.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantEntry {
	name: SymbolName,
	value: Value,
	flags: ConstFlags,
	owner: OwnerTag,
}

impl ConstantEntry {
	pub fn new(
		name: impl Into<SymbolName>,
		value: Value,
		flags: ConstFlags,
		owner: OwnerTag,
	) -> Self {
		Self {
			name: name.into(),
			value,
			flags,
			owner,
		}
	}

	#[inline]
	pub fn value(&self) -> &Value {
		&self.value
	}

	#[inline]
	pub fn flags(&self) -> ConstFlags {
		self.flags
	}
}

impl SymbolEntry for ConstantEntry {
	fn name(&self) -> &SymbolName {
		&self.name
	}

	fn owner(&self) -> &OwnerTag {
		&self.owner
	}
}

/// A structured-type definition. Only its identity matters here; the layout
/// belongs to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeEntry {
	name: SymbolName,
	owner: OwnerTag,
	origin: Origin,
}

impl TypeEntry {
	pub fn new(name: impl Into<SymbolName>, owner: OwnerTag, origin: Origin) -> Self {
		Self {
			name: name.into(),
			owner,
			origin,
		}
	}

	#[inline]
	pub fn origin(&self) -> Origin {
		self.origin
	}
}

impl SymbolEntry for TypeEntry {
	fn name(&self) -> &SymbolName {
		&self.name
	}

	fn owner(&self) -> &OwnerTag {
		&self.owner
	}
}
