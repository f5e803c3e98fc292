//! Immutable table views.
//!
//! # Invariants
//!
//! - A published `Snapshot` is never mutated; writers build a new one.
//! - Entry order is insertion order; removals do not reorder survivors.

use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::entry::SymbolEntry;
use crate::name::SymbolName;

pub(crate) type EntryMap<T> = IndexMap<SymbolName, Arc<T>, FxBuildHasher>;

/// Point-in-time view of one symbol table.
pub struct Snapshot<T>
where
	T: SymbolEntry,
{
	pub(crate) entries: EntryMap<T>,
}

impl<T> Clone for Snapshot<T>
where
	T: SymbolEntry,
{
	fn clone(&self) -> Self {
		Self {
			entries: self.entries.clone(),
		}
	}
}

impl<T> Default for Snapshot<T>
where
	T: SymbolEntry,
{
	fn default() -> Self {
		Self {
			entries: EntryMap::default(),
		}
	}
}

impl<T> Snapshot<T>
where
	T: SymbolEntry,
{
	/// Looks up an entry by exact name.
	#[inline]
	pub fn get(&self, name: &[u8]) -> Option<&Arc<T>> {
		self.entries.get(name)
	}

	#[inline]
	pub fn contains(&self, name: &[u8]) -> bool {
		self.entries.contains_key(name)
	}

	/// Iterates entries in registration order.
	pub fn iter(&self) -> impl Iterator<Item = &Arc<T>> + '_ {
		self.entries.values()
	}

	pub fn names(&self) -> impl Iterator<Item = &SymbolName> + '_ {
		self.entries.keys()
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns a copy with `entry` appended under its own name.
	///
	/// Any entry already registered under that name is dropped from the copy
	/// first, so the new entry lands at the end.
	pub(crate) fn with_entry(&self, entry: Arc<T>) -> (Self, Option<Arc<T>>) {
		let mut entries = self.entries.clone();
		let previous = entries.shift_remove(entry.name().as_bytes());
		entries.insert(entry.name().clone(), entry);
		(Self { entries }, previous)
	}

	/// Returns a copy without `name`.
	pub(crate) fn without(&self, name: &[u8]) -> Option<(Self, Arc<T>)> {
		let idx = self.entries.get_index_of(name)?;
		let mut entries = self.entries.clone();
		let (_, removed) = entries.shift_remove_index(idx)?;
		Some((Self { entries }, removed))
	}

	/// Splits entries into a kept copy and the removed entries, both in order.
	pub(crate) fn partition<F>(&self, mut keep: F) -> (Self, Vec<Arc<T>>)
	where
		F: FnMut(&T) -> bool,
	{
		let mut entries = EntryMap::with_capacity_and_hasher(self.entries.len(), FxBuildHasher);
		let mut removed = Vec::new();
		for (name, entry) in &self.entries {
			if keep(entry) {
				entries.insert(name.clone(), entry.clone());
			} else {
				removed.push(entry.clone());
			}
		}
		(Self { entries }, removed)
	}
}
