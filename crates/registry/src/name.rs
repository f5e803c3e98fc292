use std::borrow::Borrow;
use std::fmt;

/// Case-sensitive byte-string key of a registry entry.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolName(Box<[u8]>);

impl SymbolName {
	/// Creates a name from raw bytes.
	pub fn new(bytes: impl Into<Box<[u8]>>) -> Self {
		Self(bytes.into())
	}

	/// Returns the raw bytes of this name.
	#[inline]
	pub fn as_bytes(&self) -> &[u8] {
		&self.0
	}

	/// Returns the length of the name in bytes.
	#[inline]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true for the empty name.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl Borrow<[u8]> for SymbolName {
	fn borrow(&self) -> &[u8] {
		&self.0
	}
}

impl AsRef<[u8]> for SymbolName {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}

impl From<&str> for SymbolName {
	fn from(s: &str) -> Self {
		Self(s.as_bytes().into())
	}
}

impl From<String> for SymbolName {
	fn from(s: String) -> Self {
		Self(s.into_bytes().into_boxed_slice())
	}
}

impl From<&[u8]> for SymbolName {
	fn from(b: &[u8]) -> Self {
		Self(b.into())
	}
}

impl From<&SymbolName> for SymbolName {
	fn from(n: &SymbolName) -> Self {
		n.clone()
	}
}

impl fmt::Display for SymbolName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", String::from_utf8_lossy(&self.0))
	}
}

impl fmt::Debug for SymbolName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:?}", String::from_utf8_lossy(&self.0))
	}
}
