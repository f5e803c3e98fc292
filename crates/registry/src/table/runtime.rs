//! Table container with atomic publication.
//!
//! # Role
//!
//! Readers load the current [`Snapshot`] without locking. Writers derive a new
//! snapshot from the one they loaded and publish it with compare-and-swap,
//! retrying from the fresh snapshot when another writer got there first.
//!
//! # Invariants
//!
//! - Concurrent writes must be linearizable (see `tests::concurrent_inserts_are_not_lost`).
//! - A reader never observes a half-applied write: each publish swaps one pointer.

use std::sync::Arc;

use arc_swap::ArcSwap;

use super::snapshot::Snapshot;
use crate::entry::SymbolEntry;
use crate::error::RegistryError;
use crate::name::SymbolName;

/// Outcome of one attempt inside [`SymbolTable::update`].
pub enum Edit<T, R>
where
	T: SymbolEntry,
{
	/// Leave the table as it is.
	Keep(R),
	/// Publish the given snapshot in place of the one that was loaded.
	Publish(Snapshot<T>, R),
}

/// Name-keyed table shared by every reader in the process.
pub struct SymbolTable<T>
where
	T: SymbolEntry,
{
	label: &'static str,
	snap: ArcSwap<Snapshot<T>>,
}

impl<T> SymbolTable<T>
where
	T: SymbolEntry,
{
	/// Creates an empty table. `label` names the table in diagnostics.
	pub fn new(label: &'static str) -> Self {
		Self {
			label,
			snap: ArcSwap::from_pointee(Snapshot::default()),
		}
	}

	#[inline]
	pub fn label(&self) -> &'static str {
		self.label
	}

	/// Looks up an entry by exact name.
	#[inline]
	pub fn get(&self, name: impl AsRef<[u8]>) -> Option<Arc<T>> {
		self.snap.load().get(name.as_ref()).cloned()
	}

	#[inline]
	pub fn contains(&self, name: impl AsRef<[u8]>) -> bool {
		self.snap.load().contains(name.as_ref())
	}

	/// Returns the current snapshot. It stays valid across later writes.
	pub fn snapshot(&self) -> Arc<Snapshot<T>> {
		self.snap.load_full()
	}

	/// Returns all entries in registration order.
	pub fn entries(&self) -> Vec<Arc<T>> {
		self.snap.load().iter().cloned().collect()
	}

	/// Returns all names in registration order.
	pub fn names(&self) -> Vec<SymbolName> {
		self.snap.load().names().cloned().collect()
	}

	pub fn len(&self) -> usize {
		self.snap.load().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Runs `edit` against the current snapshot and publishes its result.
	///
	/// `edit` may run more than once when writers race; it must derive its
	/// answer only from the snapshot it is given.
	pub fn update<R, F>(&self, mut edit: F) -> R
	where
		F: FnMut(&Snapshot<T>) -> Edit<T, R>,
	{
		loop {
			let old = self.snap.load_full();
			let (next, out) = match edit(&old) {
				Edit::Keep(out) => return out,
				Edit::Publish(next, out) => (next, out),
			};

			let prev = self.snap.compare_and_swap(&old, Arc::new(next));
			if Arc::ptr_eq(&prev, &old) {
				return out;
			}
			// Lost the race; retry against the snapshot that won.
		}
	}

	/// Adds `entry`, refusing names that are already registered.
	pub fn insert(&self, entry: T) -> Result<Arc<T>, RegistryError> {
		let entry = Arc::new(entry);
		self.update(|snap| {
			if snap.contains(entry.name().as_bytes()) {
				return Edit::Keep(Err(RegistryError::Duplicate {
					table: self.label,
					name: entry.name().clone(),
				}));
			}
			let (next, _) = snap.with_entry(entry.clone());
			Edit::Publish(next, Ok(entry.clone()))
		})
	}

	/// Binds `entry` under its name whoever held it before.
	///
	/// The delete of the old entry and the insert of the new one are published
	/// together. Returns the displaced entry, if any.
	pub fn replace(&self, entry: T) -> Option<Arc<T>> {
		let entry = Arc::new(entry);
		self.update(|snap| {
			let (next, previous) = snap.with_entry(entry.clone());
			Edit::Publish(next, previous)
		})
	}

	/// Removes the entry named `name`.
	pub fn remove(&self, name: impl AsRef<[u8]>) -> Option<Arc<T>> {
		let name = name.as_ref();
		self.update(|snap| match snap.without(name) {
			Some((next, removed)) => Edit::Publish(next, Some(removed)),
			None => Edit::Keep(None),
		})
	}

	/// Removes every entry for which `keep` returns false.
	///
	/// The predicate runs over one stable snapshot and the survivors are
	/// published in a single swap, so removal never disturbs the traversal.
	/// Returns the removed entries in their former order.
	pub fn retain<F>(&self, mut keep: F) -> Vec<Arc<T>>
	where
		F: FnMut(&T) -> bool,
	{
		self.update(|snap| {
			let (next, removed) = snap.partition(&mut keep);
			if removed.is_empty() {
				Edit::Keep(removed)
			} else {
				Edit::Publish(next, removed)
			}
		})
	}
}

impl<T> std::fmt::Debug for SymbolTable<T>
where
	T: SymbolEntry,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SymbolTable")
			.field("label", &self.label)
			.field("len", &self.len())
			.finish()
	}
}
