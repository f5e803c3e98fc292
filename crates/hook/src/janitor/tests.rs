use std::sync::Arc;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use symhook_registry::{
	ConstFlags, Handler, Origin, OwnerTag, SymbolEntry, SymbolRegistry, SymbolTable, Value,
};

use super::{EvictionReport, evict_all, evict_callables, evict_constants, evict_types};

fn noop() -> Handler {
	Handler::new(|_| Value::Null)
}

fn callable_names(registry: &SymbolRegistry) -> Vec<String> {
	registry
		.callables()
		.snapshot()
		.names()
		.map(|n| n.to_string())
		.collect()
}

#[test]
fn evicts_only_in_image_callables_of_owner() {
	let registry = SymbolRegistry::new();
	let (a, b) = (OwnerTag::new(1, "a"), OwnerTag::new(2, "b"));
	registry.define_function("a_fn", &a, Origin::Image, noop()).unwrap();
	registry.define_function("b_fn", &b, Origin::Image, noop()).unwrap();
	registry.define_function("a_intrinsic", &a, Origin::Intrinsic, noop()).unwrap();

	let removed = evict_callables(&registry, &a);

	assert_eq!(removed.len(), 1);
	assert_eq!(callable_names(&registry), ["b_fn", "a_intrinsic"]);
}

#[test]
fn intrinsic_types_survive_eviction() {
	let registry = SymbolRegistry::new();
	let a = OwnerTag::new(1, "a");
	registry.define_type("CurlHandle", &a, Origin::Image).unwrap();
	registry.define_type("Closure", &a, Origin::Intrinsic).unwrap();

	let removed = evict_types(&registry, &a);

	assert_eq!(removed.len(), 1);
	assert!(!registry.types().contains("CurlHandle"));
	assert!(registry.types().contains("Closure"));
}

#[test]
fn constants_are_evicted_by_owner_alone() {
	let registry = SymbolRegistry::new();
	let (a, b) = (OwnerTag::new(1, "a"), OwnerTag::new(2, "b"));
	registry.define_constant("A1", Value::Int(1), ConstFlags::PERSISTENT, &a).unwrap();
	registry.define_constant("B1", Value::Int(2), ConstFlags::empty(), &b).unwrap();
	registry.define_constant("A2", Value::Null, ConstFlags::empty(), &a).unwrap();

	assert_eq!(evict_constants(&registry, &a).len(), 2);
	assert_eq!(registry.constant("B1"), Some(Value::Int(2)));
	assert_eq!(registry.constants().len(), 1);
}

#[test]
fn tags_with_same_number_but_other_name_are_distinct() {
	let registry = SymbolRegistry::new();
	registry
		.define_constant("X", Value::Null, ConstFlags::empty(), &OwnerTag::new(1, "a"))
		.unwrap();

	assert!(evict_constants(&registry, &OwnerTag::new(1, "b")).is_empty());
	assert!(registry.constants().contains("X"));
}

#[test]
fn evict_all_reports_counts() {
	let registry = SymbolRegistry::new();
	let a = OwnerTag::new(1, "a");
	registry.define_function("f", &a, Origin::Image, noop()).unwrap();
	registry.define_type("T", &a, Origin::Image).unwrap();
	registry.define_constant("C", Value::Int(1), ConstFlags::empty(), &a).unwrap();
	registry.define_constant("D", Value::Int(2), ConstFlags::empty(), &a).unwrap();

	assert_eq!(
		evict_all(&registry, &a),
		EvictionReport {
			constants: 2,
			types: 1,
			callables: 1,
		}
	);
	assert_eq!(evict_all(&registry, &a).total(), 0);
}

#[derive(Debug, Clone)]
struct Seed {
	owner: u32,
	origin: Origin,
}

fn arb_seeds() -> impl Strategy<Value = Vec<Seed>> {
	prop::collection::vec(
		(0u32..4, any::<bool>()).prop_map(|(owner, image)| Seed {
			owner,
			origin: if image { Origin::Image } else { Origin::Intrinsic },
		}),
		0..40,
	)
}

fn foreign<T: SymbolEntry>(table: &SymbolTable<T>, owner: &OwnerTag) -> Vec<Arc<T>> {
	table
		.entries()
		.into_iter()
		.filter(|e| e.owner() != owner)
		.collect()
}

fn same_entries<T>(before: &[Arc<T>], after: &[Arc<T>]) -> bool {
	before.len() == after.len() && before.iter().zip(after).all(|(b, a)| Arc::ptr_eq(b, a))
}

fn populate(seeds: &[Seed]) -> SymbolRegistry {
	let registry = SymbolRegistry::new();
	for (i, seed) in seeds.iter().enumerate() {
		let owner = OwnerTag::new(seed.owner, format!("m{}", seed.owner));
		registry
			.define_function(format!("f{i}"), &owner, seed.origin, noop())
			.unwrap();
		registry
			.define_type(format!("T{i}"), &owner, seed.origin)
			.unwrap();
		registry
			.define_constant(format!("C{i}"), Value::Int(i as i64), ConstFlags::empty(), &owner)
			.unwrap();
	}
	registry
}

proptest! {
	/// Evicting twice leaves the same tables as evicting once.
	#[test]
	fn prop_eviction_is_idempotent(seeds in arb_seeds(), target in 0u32..4) {
		let registry = populate(&seeds);
		let owner = OwnerTag::new(target, format!("m{target}"));

		evict_all(&registry, &owner);
		let once = callable_names(&registry);
		let consts_once = registry.constants().len();
		let types_once = registry.types().len();

		prop_assert_eq!(evict_all(&registry, &owner), EvictionReport::default());
		prop_assert_eq!(callable_names(&registry), once);
		prop_assert_eq!(registry.constants().len(), consts_once);
		prop_assert_eq!(registry.types().len(), types_once);
	}

	/// Entries of other owners keep their identity and relative order.
	#[test]
	fn prop_other_owners_untouched(seeds in arb_seeds(), target in 0u32..4) {
		let registry = populate(&seeds);
		let owner = OwnerTag::new(target, format!("m{target}"));
		let callables = foreign(registry.callables(), &owner);
		let types = foreign(registry.types(), &owner);
		let constants = foreign(registry.constants(), &owner);

		evict_callables(&registry, &owner);
		evict_types(&registry, &owner);
		evict_constants(&registry, &owner);

		prop_assert!(same_entries(&callables, &foreign(registry.callables(), &owner)));
		prop_assert!(same_entries(&types, &foreign(registry.types(), &owner)));
		prop_assert!(same_entries(&constants, &foreign(registry.constants(), &owner)));
		prop_assert!(registry
			.callables()
			.entries()
			.iter()
			.all(|e| e.owner() != &owner || !e.origin().is_image()));
		prop_assert!(registry
			.types()
			.entries()
			.iter()
			.all(|e| e.owner() != &owner || !e.origin().is_image()));
		prop_assert!(registry.constants().entries().iter().all(|e| e.owner() != &owner));
	}
}
