use serde_json::{Number, Value};

/// A JSON object with string keys and arbitrary JSON values.
pub type JsonMap = serde_json::Map<String, Value>;

/// Match a boolean token, ignoring case and surrounding whitespace.
pub fn parse_bool(raw: &str) -> Option<bool> {
	match raw.trim().to_ascii_lowercase().as_str() {
		"true" | "1" | "yes" | "on" => Some(true),
		"false" | "0" | "no" | "off" => Some(false),
		_ => None,
	}
}

/// Parse a 64-bit float.
///
/// Finite literals that overflow to infinity are rejected. Spelled-out
/// `inf`/`infinity` tokens are still accepted.
pub fn parse_float(raw: &str) -> Option<f64> {
	let value: f64 = raw.parse().ok()?;
	if value.is_infinite() {
		let unsigned = raw.trim_start_matches(['+', '-']).to_ascii_lowercase();
		if unsigned != "inf" && unsigned != "infinity" {
			return None;
		}
	}
	Some(value)
}

/// Parse a JSON object. Every number in it becomes a 64-bit float.
pub fn parse_map(raw: &str) -> Option<JsonMap> {
	let mut map: JsonMap = serde_json::from_str(raw).ok()?;
	for value in map.values_mut() {
		floatify_numbers(value);
	}
	Some(map)
}

/// Parse a list value.
///
/// A value starting with `[` must be a JSON array of strings, where `null`
/// elements read as empty strings; anything else is split on commas with each
/// segment trimmed.
pub fn parse_arr(raw: &str) -> Option<Vec<String>> {
	let trimmed = raw.trim();
	if trimmed.starts_with('[') {
		let items: Vec<Option<String>> = serde_json::from_str(trimmed).ok()?;
		return Some(items.into_iter().map(Option::unwrap_or_default).collect());
	}
	Some(trimmed.split(',').map(|part| part.trim().to_string()).collect())
}

fn floatify_numbers(value: &mut Value) {
	match value {
		Value::Number(number) => {
			if let Some(float) = number.as_f64().and_then(Number::from_f64) {
				*number = float;
			}
		}
		Value::Array(items) => items.iter_mut().for_each(floatify_numbers),
		Value::Object(map) => map.values_mut().for_each(floatify_numbers),
		_ => {}
	}
}
