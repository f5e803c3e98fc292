use symhook_registry::{OwnerTag, RegistryError, SymbolName};

/// Failure to hook a single name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HookError {
	/// The name is absent and the deny-list forbids installing it.
	#[error("function {name} is disabled and cannot be hooked")]
	Unhookable { name: SymbolName },
}

/// Failure while superseding another component.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TakeoverError {
	/// The target component is loaded but its marker type is not registered.
	#[error("{target} must be loaded before its successor: type {marker} is not registered")]
	LoadOrder {
		target: OwnerTag,
		marker: SymbolName,
	},
	#[error(transparent)]
	Registry(#[from] RegistryError),
	#[error(transparent)]
	Hook(#[from] HookError),
}

/// Failure to read hook settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("invalid hook config: {0}")]
	Toml(#[from] toml::de::Error),
}
