use crate::name::SymbolName;

/// Errors raised by table mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// A plain insert hit a name that is already registered.
	#[error("{table}: duplicate name {name}")]
	Duplicate {
		table: &'static str,
		name: SymbolName,
	},
}
