use std::fmt;
use std::sync::Arc;

/// Identifies the component that registered an entry.
///
/// Tags compare by module number and name. Cloning is a reference-count bump.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct OwnerTag {
	number: u32,
	name: Arc<str>,
}

impl OwnerTag {
	/// Creates a tag for module `number` named `name`.
	pub fn new(number: u32, name: impl Into<Arc<str>>) -> Self {
		Self {
			number,
			name: name.into(),
		}
	}

	/// Returns the module name.
	#[inline]
	pub fn name(&self) -> &str {
		&self.name
	}
}

impl fmt::Display for OwnerTag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}#{}", self.name, self.number)
	}
}

impl fmt::Debug for OwnerTag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "OwnerTag({self})")
	}
}

/// Where a callable or type definition comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
	/// Defined by a component loaded into this running image.
	Image,
	/// Provided intrinsically by the hosting platform.
	Intrinsic,
}

impl Origin {
	/// Returns true for definitions a component may evict.
	pub const fn is_image(self) -> bool {
		matches!(self, Self::Image)
	}
}

impl fmt::Display for Origin {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Image => write!(f, "image"),
			Self::Intrinsic => write!(f, "intrinsic"),
		}
	}
}
