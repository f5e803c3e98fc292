use super::{DenyList, HookConfig};

#[test]
fn parse_skips_blanks_and_trims() {
	let list = DenyList::parse(" exec, ,system ,");
	assert_eq!(list.len(), 2);
	assert!(list.contains(b"exec"));
	assert!(list.contains(b"system"));
	assert!(!list.contains(b""));
}

#[test]
fn membership_ignores_ascii_case() {
	let list = DenyList::parse("Curl_Exec");
	assert!(list.contains(b"curl_exec"));
	assert!(list.contains(b"CURL_EXEC"));
	assert!(!list.contains(b"curl_init"));
}

#[test]
fn empty_list_denies_nothing() {
	assert!(!DenyList::default().contains(b"anything"));
}

#[test]
fn config_accepts_comma_separated_string() {
	let config = HookConfig::from_toml_str(r#"disable_functions = "exec, system""#).unwrap();
	assert_eq!(config.disable_functions, DenyList::parse("exec,system"));
}

#[test]
fn config_accepts_array() {
	let config = HookConfig::from_toml_str(r#"disable_functions = ["exec", "System"]"#).unwrap();
	assert!(config.disable_functions.contains(b"system"));
	assert_eq!(config.disable_functions.len(), 2);
}

#[test]
fn missing_key_defaults_to_empty() {
	let config = HookConfig::from_toml_str("").unwrap();
	assert!(config.disable_functions.is_empty());
}

#[test]
fn malformed_config_is_an_error() {
	assert!(HookConfig::from_toml_str("disable_functions = 3").is_err());
}
