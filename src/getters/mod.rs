//! Typed accessors with default-value fallback.
//!
//! Every accessor returns the caller's default when the variable is absent,
//! blank, or cannot be coerced. None of them write to the store.

pub mod coerce;

pub use coerce::{JsonMap, parse_arr, parse_bool, parse_float, parse_map};

use crate::store::EnvStore;

/// Fetch a variable, treating blank values as absent.
fn non_blank<S: EnvStore + ?Sized>(store: &S, key: &str) -> Option<String> {
	store.get(key).filter(|value| !value.trim().is_empty())
}

/// Resolve a coercion, logging when a present value had to be discarded.
fn or_default<T>(key: &str, raw: &str, parsed: Option<T>, default: T, kind: &str) -> T {
	parsed.unwrap_or_else(|| {
		tracing::debug!(key, value = raw, kind, "Value could not be coerced, using default");
		default
	})
}

/// The raw value, or `default` when absent or blank.
pub fn str_or<S: EnvStore + ?Sized>(store: &S, key: &str, default: &str) -> String {
	non_blank(store, key).unwrap_or_else(|| default.to_string())
}

/// A base-10 signed integer, or `default`.
pub fn int_or<S: EnvStore + ?Sized>(store: &S, key: &str, default: i64) -> i64 {
	match non_blank(store, key) {
		Some(raw) => or_default(key, &raw, raw.parse().ok(), default, "integer"),
		None => default,
	}
}

/// A 64-bit float, or `default`.
pub fn float_or<S: EnvStore + ?Sized>(store: &S, key: &str, default: f64) -> f64 {
	match non_blank(store, key) {
		Some(raw) => or_default(key, &raw, parse_float(&raw), default, "float"),
		None => default,
	}
}

/// A boolean token (`true/1/yes/on`, `false/0/no/off`), or `default`.
pub fn bool_or<S: EnvStore + ?Sized>(store: &S, key: &str, default: bool) -> bool {
	match non_blank(store, key) {
		Some(raw) => or_default(key, &raw, parse_bool(&raw), default, "boolean"),
		None => default,
	}
}

/// A JSON object, or `default`.
pub fn map_or<S: EnvStore + ?Sized>(store: &S, key: &str, default: JsonMap) -> JsonMap {
	match non_blank(store, key) {
		Some(raw) => or_default(key, &raw, parse_map(&raw), default, "map"),
		None => default,
	}
}

/// A JSON string array or a comma-separated list, or `default`.
pub fn arr_or<S: EnvStore + ?Sized>(store: &S, key: &str, default: Vec<String>) -> Vec<String> {
	match non_blank(store, key) {
		Some(raw) => or_default(key, &raw, parse_arr(&raw), default, "array"),
		None => default,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::store::MemoryStore;
	use serde_json::json;

	fn store_with(key: &str, value: &str) -> MemoryStore {
		MemoryStore::from_pairs([(key, value)])
	}

	fn strings(items: &[&str]) -> Vec<String> {
		items.iter().map(|s| s.to_string()).collect()
	}

	fn map_of(value: serde_json::Value) -> JsonMap {
		match value {
			serde_json::Value::Object(map) => map,
			other => panic!("Expected object, got {other}"),
		}
	}

	#[test]
	fn test_str_or() {
		let store = store_with("HOST", "db.internal");
		assert_eq!(str_or(&store, "HOST", "localhost"), "db.internal");
		assert_eq!(str_or(&store, "MISSING", "localhost"), "localhost");

		let blank = store_with("HOST", "   ");
		assert_eq!(str_or(&blank, "HOST", "localhost"), "localhost");

		let empty = store_with("HOST", "");
		assert_eq!(str_or(&empty, "HOST", "localhost"), "localhost");
	}

	#[test]
	fn test_str_or_returns_raw_value() {
		let store = store_with("PADDED", "  spaced  ");
		assert_eq!(str_or(&store, "PADDED", "x"), "  spaced  ");
	}

	#[test]
	fn test_int_or() {
		let store = MemoryStore::from_pairs([
			("POSITIVE", "123"),
			("NEGATIVE", "-456"),
			("WORD", "abc"),
			("EMPTY", ""),
			("FRACTION", "1.5"),
		]);

		assert_eq!(int_or(&store, "POSITIVE", 42), 123);
		assert_eq!(int_or(&store, "NEGATIVE", 42), -456);
		assert_eq!(int_or(&store, "WORD", 42), 42);
		assert_eq!(int_or(&store, "EMPTY", 42), 42);
		assert_eq!(int_or(&store, "FRACTION", 42), 42);
		assert_eq!(int_or(&store, "MISSING", 42), 42);
	}

	#[test]
	fn test_float_or() {
		let store = MemoryStore::from_pairs([
			("TIMEOUT", "30.5"),
			("WHOLE", "10"),
			("NEGATIVE", "-0.25"),
			("WORD", "slow"),
			("HUGE", "1e400"),
		]);

		assert_eq!(float_or(&store, "TIMEOUT", 9.75), 30.5);
		assert_eq!(float_or(&store, "WHOLE", 9.75), 10.0);
		assert_eq!(float_or(&store, "NEGATIVE", 9.75), -0.25);
		assert_eq!(float_or(&store, "WORD", 9.75), 9.75);
		assert_eq!(float_or(&store, "HUGE", 9.75), 9.75);
		assert_eq!(float_or(&store, "MISSING", 9.75), 9.75);
	}

	#[test]
	fn test_bool_or_truthy_tokens() {
		for token in ["true", "TRUE", "True", "1", "yes", "YES", "on", "On", " yes "] {
			let store = store_with("DEBUG", token);
			assert!(bool_or(&store, "DEBUG", false), "token {token:?}");
		}
	}

	#[test]
	fn test_bool_or_falsy_tokens() {
		for token in ["false", "FALSE", "0", "no", "No", "off", "OFF"] {
			let store = store_with("DEBUG", token);
			assert!(!bool_or(&store, "DEBUG", true), "token {token:?}");
		}
	}

	#[test]
	fn test_bool_or_falls_back() {
		let store = store_with("DEBUG", "maybe");
		assert!(!bool_or(&store, "DEBUG", false));
		assert!(bool_or(&store, "DEBUG", true));
		assert!(bool_or(&store, "MISSING", true));
		assert!(!bool_or(&store, "MISSING", false));
	}

	#[test]
	fn test_map_or() {
		let store = store_with("CONFIG", r#"{"host":"localhost","port":3306}"#);
		let default = map_of(json!({"default": "value"}));

		let map = map_or(&store, "CONFIG", default.clone());
		assert_eq!(map, map_of(json!({"host": "localhost", "port": 3306.0})));
		assert_eq!(map.get("port").and_then(|v| v.as_f64()), Some(3306.0));

		assert_eq!(map_or(&store, "MISSING", default.clone()), default);
	}

	#[test]
	fn test_map_or_invalid_json() {
		let default = map_of(json!({"default": "value"}));

		let invalid = store_with("CONFIG", r#"{"host":"localhost""#);
		assert_eq!(map_or(&invalid, "CONFIG", default.clone()), default);

		let not_object = store_with("CONFIG", "[1, 2, 3]");
		assert_eq!(map_or(&not_object, "CONFIG", default.clone()), default);
	}

	#[test]
	fn test_arr_or_comma_separated() {
		let store = store_with("SERVERS", "value1,value2,value3");
		let default = strings(&["default"]);

		assert_eq!(
			arr_or(&store, "SERVERS", default.clone()),
			strings(&["value1", "value2", "value3"])
		);

		let spaced = store_with("SERVERS", " a , b ,c ");
		assert_eq!(
			arr_or(&spaced, "SERVERS", default.clone()),
			strings(&["a", "b", "c"])
		);

		let single = store_with("SERVERS", "only");
		assert_eq!(arr_or(&single, "SERVERS", default), strings(&["only"]));
	}

	#[test]
	fn test_arr_or_json() {
		let store = store_with("FEATURES", r#"["item1","item2","item3"]"#);
		assert_eq!(
			arr_or(&store, "FEATURES", strings(&["default"])),
			strings(&["item1", "item2", "item3"])
		);
	}

	#[test]
	fn test_arr_or_malformed_json_uses_default() {
		let default = strings(&["default"]);

		let malformed = store_with("FEATURES", r#"["item1", "item2""#);
		assert_eq!(arr_or(&malformed, "FEATURES", default.clone()), default);

		// Looks like JSON, so no comma-splitting fallback
		let bracketed = store_with("FEATURES", "[a,b]");
		assert_eq!(arr_or(&bracketed, "FEATURES", default.clone()), default);

		assert_eq!(arr_or(&malformed, "MISSING", default.clone()), default);
	}

	#[test]
	fn test_blank_values_use_default() {
		for blank in ["", "   ", "\t"] {
			let store = store_with("KEY", blank);

			assert_eq!(float_or(&store, "KEY", 9.75), 9.75, "value {blank:?}");
			assert!(bool_or(&store, "KEY", true), "value {blank:?}");
			assert!(!bool_or(&store, "KEY", false), "value {blank:?}");

			let default_map = map_of(json!({"default": "value"}));
			assert_eq!(
				map_or(&store, "KEY", default_map.clone()),
				default_map,
				"value {blank:?}"
			);

			// Without the blank check, splitting "" would yield [""]
			assert_eq!(
				arr_or(&store, "KEY", strings(&["default"])),
				strings(&["default"]),
				"value {blank:?}"
			);
			assert!(arr_or(&store, "KEY", Vec::new()).is_empty(), "value {blank:?}");
		}
	}

	#[test]
	fn test_accessors_do_not_mutate_store() {
		let store = MemoryStore::from_pairs([("A", "1"), ("B", "abc")]);
		let before = store.snapshot();

		let _ = str_or(&store, "A", "");
		let _ = int_or(&store, "B", 0);
		let _ = bool_or(&store, "C", false);
		let _ = arr_or(&store, "A", Vec::new());
		let _ = map_or(&store, "A", JsonMap::new());

		assert_eq!(store.snapshot(), before);
	}
}
