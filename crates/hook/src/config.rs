//! Operator settings for hooking.

use rustc_hash::FxHashSet;
use serde::Deserialize;

use crate::error::ConfigError;

/// Settings read by the interceptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HookConfig {
	/// Names that must never be installed when absent.
	pub disable_functions: DenyList,
}

impl HookConfig {
	/// Parses settings from TOML.
	///
	/// ```toml
	/// disable_functions = "exec, system"
	/// # or
	/// disable_functions = ["exec", "system"]
	/// ```
	pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(src)?)
	}
}

/// Set of names forbidden from install-new.
///
/// Membership ignores ASCII case, matching how operators write the setting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DenyList {
	names: FxHashSet<Box<[u8]>>,
}

impl DenyList {
	pub fn new<I, S>(names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<[u8]>,
	{
		let mut list = Self::default();
		for name in names {
			list.insert(name);
		}
		list
	}

	/// Parses a comma-separated list. Blank items are skipped.
	pub fn parse(list: &str) -> Self {
		Self::new(list.split(',').map(str::trim).filter(|s| !s.is_empty()))
	}

	pub fn insert(&mut self, name: impl AsRef<[u8]>) {
		self.names
			.insert(name.as_ref().to_ascii_lowercase().into_boxed_slice());
	}

	pub fn contains(&self, name: &[u8]) -> bool {
		!self.names.is_empty() && self.names.contains(name.to_ascii_lowercase().as_slice())
	}

	pub fn len(&self) -> usize {
		self.names.len()
	}

	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}
}

impl<'de> Deserialize<'de> for DenyList {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum Raw {
			List(Vec<String>),
			Csv(String),
		}

		Ok(match Raw::deserialize(deserializer)? {
			Raw::List(names) => Self::new(names.iter().map(|s| s.trim()).filter(|s| !s.is_empty())),
			Raw::Csv(list) => Self::parse(&list),
		})
	}
}

#[cfg(test)]
mod tests;
