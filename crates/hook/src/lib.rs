#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Runtime symbol interception and owner-scoped eviction.
//!
//! # Purpose
//!
//! Lets one component take over, while the process runs, the symbols another
//! component registered in a shared [`SymbolRegistry`]: patch the dispatch
//! target of existing callables, install callables that are missing, force
//! constants over foreign definitions, and strip everything a given owner
//! registered.
//!
//! # Key Types
//!
//! | Item | Role |
//! |------|------|
//! | [`Interceptor`] | Install-or-patch of callables, single and batch. |
//! | [`janitor`] | Owner-scoped eviction from each table. |
//! | [`constants`] | Forced constant registration. |
//! | [`Takeover`] | Evict, re-register and hook in one sequence. |
//! | [`HookConfig`] | Operator settings, notably the deny-list. |
//!
//! # Concurrency
//!
//! Tables are copy-on-write (see [`symhook_registry::table`]); callers are
//! expected to serialize their own takeover sequences, while lookups and
//! dispatch may run concurrently from any thread.

pub mod config;
pub mod constants;
mod error;
mod interceptor;
pub mod janitor;
mod takeover;

pub use config::{DenyList, HookConfig};
pub use error::{ConfigError, HookError, TakeoverError};
pub use interceptor::{BatchReport, HookOutcome, Interceptor};
pub use janitor::EvictionReport;
pub use symhook_registry as registry;
pub use symhook_registry::SymbolRegistry;
pub use takeover::{Registrar, Takeover, TakeoverReport};
