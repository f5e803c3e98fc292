use std::sync::Arc;

use crate::entry::{CallableEntry, ConstantEntry, Handler, TypeEntry};
use crate::error::RegistryError;
use crate::name::SymbolName;
use crate::owner::{Origin, OwnerTag};
use crate::table::SymbolTable;
use crate::value::{ConstFlags, Value};

pub const CALLABLES: &str = "callables";
pub const CONSTANTS: &str = "constants";
pub const TYPES: &str = "types";

/// The three process-wide tables, passed explicitly to every operation.
#[derive(Debug)]
pub struct SymbolRegistry {
	callables: SymbolTable<CallableEntry>,
	constants: SymbolTable<ConstantEntry>,
	types: SymbolTable<TypeEntry>,
}

impl Default for SymbolRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl SymbolRegistry {
	pub fn new() -> Self {
		Self {
			callables: SymbolTable::new(CALLABLES),
			constants: SymbolTable::new(CONSTANTS),
			types: SymbolTable::new(TYPES),
		}
	}

	#[inline]
	pub fn callables(&self) -> &SymbolTable<CallableEntry> {
		&self.callables
	}

	#[inline]
	pub fn constants(&self) -> &SymbolTable<ConstantEntry> {
		&self.constants
	}

	#[inline]
	pub fn types(&self) -> &SymbolTable<TypeEntry> {
		&self.types
	}

	/// Defines a callable. Fails if the name is taken.
	pub fn define_function(
		&self,
		name: impl Into<SymbolName>,
		owner: &OwnerTag,
		origin: Origin,
		handler: Handler,
	) -> Result<Arc<CallableEntry>, RegistryError> {
		self.callables
			.insert(CallableEntry::new(name, owner.clone(), origin, handler))
	}

	/// Defines a constant. Fails if the name is taken.
	pub fn define_constant(
		&self,
		name: impl Into<SymbolName>,
		value: Value,
		flags: ConstFlags,
		owner: &OwnerTag,
	) -> Result<Arc<ConstantEntry>, RegistryError> {
		self.constants
			.insert(ConstantEntry::new(name, value, flags, owner.clone()))
	}

	/// Defines a structured type. Fails if the name is taken.
	pub fn define_type(
		&self,
		name: impl Into<SymbolName>,
		owner: &OwnerTag,
		origin: Origin,
	) -> Result<Arc<TypeEntry>, RegistryError> {
		self.types.insert(TypeEntry::new(name, owner.clone(), origin))
	}

	/// Invokes the callable named `name`, if present.
	pub fn call(&self, name: impl AsRef<[u8]>, args: &[Value]) -> Option<Value> {
		self.callables.get(name).map(|f| f.dispatch(args))
	}

	/// Returns the value of the constant named `name`, if present.
	pub fn constant(&self, name: impl AsRef<[u8]>) -> Option<Value> {
		self.constants.get(name).map(|c| c.value().clone())
	}
}
