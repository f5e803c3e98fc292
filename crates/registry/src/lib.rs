//! Host-side symbol tables.
//!
//! A [`SymbolRegistry`] holds one [`SymbolTable`] per symbol category:
//! callables, constants and structured types. Entries are keyed by
//! case-sensitive byte names and tagged with the [`OwnerTag`] of the
//! component that registered them.
//!
//! Tables are copy-on-write: lookups read an immutable [`Snapshot`] and every
//! mutation publishes a complete replacement, so readers on other threads see
//! either the old or the new state of a name, never a mix.

mod entry;
mod error;
mod name;
mod owner;
mod registry;
pub mod table;
mod value;

pub use entry::{CallableEntry, ConstantEntry, Handler, SymbolEntry, TypeEntry};
pub use error::RegistryError;
pub use name::SymbolName;
pub use owner::{Origin, OwnerTag};
pub use registry::{CALLABLES, CONSTANTS, SymbolRegistry, TYPES};
pub use table::{Edit, Snapshot, SymbolTable};
pub use value::{ConstFlags, Value};
