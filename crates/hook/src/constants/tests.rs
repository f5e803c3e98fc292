use pretty_assertions::assert_eq;
use symhook_registry::{ConstFlags, OwnerTag, SymbolEntry, SymbolRegistry, Value};

use super::*;

#[test]
fn forced_registration_replaces_foreign_owner() {
	let registry = SymbolRegistry::new();
	let (a, b) = (OwnerTag::new(1, "a"), OwnerTag::new(2, "b"));
	registry
		.define_constant("NAME", Value::Int(5), ConstFlags::empty(), &a)
		.unwrap();
	assert!(
		registry
			.define_constant("NAME", Value::Int(6), ConstFlags::empty(), &b)
			.is_err()
	);

	let previous =
		register_string_constant_force(&registry, "NAME", "x", ConstFlags::PERSISTENT, &b);

	assert_eq!(previous.unwrap().owner(), &a);
	assert_eq!(registry.constants().len(), 1);
	let entry = registry.constants().get("NAME").unwrap();
	assert_eq!(entry.value(), &Value::from("x"));
	assert_eq!(entry.owner(), &b);
	assert_eq!(entry.flags(), ConstFlags::PERSISTENT);
}

#[test]
fn forced_registration_of_new_name_displaces_nothing() {
	let registry = SymbolRegistry::new();
	let a = OwnerTag::new(1, "a");

	assert!(register_null_constant_force(&registry, "N", ConstFlags::empty(), &a).is_none());
	assert_eq!(registry.constant("N"), Some(Value::Null));
}

#[test]
fn each_value_kind_is_stored() {
	let registry = SymbolRegistry::new();
	let a = OwnerTag::new(1, "a");
	let f = ConstFlags::empty();

	register_bool_constant_force(&registry, "B", true, f, &a);
	register_long_constant_force(&registry, "L", -3, f, &a);
	register_double_constant_force(&registry, "D", 0.5, f, &a);
	register_stringl_constant_force(&registry, "S", b"a\0b", f, &a);

	assert_eq!(registry.constant("B"), Some(Value::Bool(true)));
	assert_eq!(registry.constant("L"), Some(Value::Int(-3)));
	assert_eq!(registry.constant("D"), Some(Value::Float(0.5)));
	assert_eq!(registry.constant("S").unwrap().as_bytes(), Some(&b"a\0b"[..]));
}

#[test]
fn forced_registration_moves_name_to_end() {
	let registry = SymbolRegistry::new();
	let a = OwnerTag::new(1, "a");
	let f = ConstFlags::empty();
	register_long_constant_force(&registry, "X", 1, f, &a);
	register_long_constant_force(&registry, "Y", 2, f, &a);

	register_long_constant_force(&registry, "X", 3, f, &a);

	let names: Vec<_> = registry
		.constants()
		.snapshot()
		.names()
		.map(|n| n.to_string())
		.collect();
	assert_eq!(names, ["Y", "X"]);
}
