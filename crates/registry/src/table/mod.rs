//! Copy-on-write symbol tables.
//!
//! # Mental Model
//!
//! 1. **Storage:** A [`SymbolTable`] owns an atomic pointer to an immutable
//!    [`Snapshot`]: an insertion-ordered map from [`crate::SymbolName`] to
//!    `Arc<T>`.
//! 2. **Reads:** Lookups load the current snapshot and never block.
//! 3. **Writes:** [`SymbolTable::update`] copies the loaded snapshot, edits
//!    the copy and publishes it with compare-and-swap.
//!
//! # Concurrency
//!
//! - **Reads:** Wait-free (atomic load of current snapshot).
//! - **Writes:** Lock-free with linearizability (CAS retry loop).
//!
//! # Invariants
//!
//! - Names are unique within a snapshot.
//!   - Enforced in: [`SymbolTable::insert`], [`SymbolTable::replace`].
//!   - Tested by: `tests::insert_refuses_duplicates`, `tests::replace_keeps_one_entry`.
//!
//! - Removal keeps survivors intact and in order.
//!   - Enforced in: `Snapshot::partition`.
//!   - Tested by: `tests::retain_preserves_survivor_order_and_identity`.
//!
//! - Snapshots held by readers stay alive across swaps.
//!   - Enforced in: `Arc<Snapshot>` handed out by [`SymbolTable::snapshot`].
//!   - Tested by: `tests::snapshot_outlives_removal`.

mod runtime;
mod snapshot;

pub use runtime::{Edit, SymbolTable};
pub use snapshot::Snapshot;
