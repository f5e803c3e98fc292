use std::fmt;

/// Scalar value bound to a constant or passed to a handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	Null,
	Bool(bool),
	Int(i64),
	Float(f64),
	Bytes(Box<[u8]>),
}

impl Value {
	/// Returns the byte payload of a string value.
	pub fn as_bytes(&self) -> Option<&[u8]> {
		match self {
			Self::Bytes(b) => Some(b),
			_ => None,
		}
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Self::Bool(v)
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Self::Int(v)
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Self::Float(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Self::Bytes(v.as_bytes().into())
	}
}

impl From<&[u8]> for Value {
	fn from(v: &[u8]) -> Self {
		Self::Bytes(v.into())
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Null => write!(f, "null"),
			Self::Bool(v) => write!(f, "{v}"),
			Self::Int(v) => write!(f, "{v}"),
			Self::Float(v) => write!(f, "{v}"),
			Self::Bytes(b) => write!(f, "{:?}", String::from_utf8_lossy(b)),
		}
	}
}

bitflags::bitflags! {
	/// Visibility flags attached to a constant.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct ConstFlags: u32 {
		/// Survives between requests.
		const PERSISTENT = 1 << 0;
		/// Excluded from compiled-file caches.
		const NO_FILE_CACHE = 1 << 1;
		/// Access emits a deprecation notice.
		const DEPRECATED = 1 << 2;
	}
}
