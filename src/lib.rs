//! Envwalk - locate a `.env` file by walking up from the working directory,
//! load it into the environment, and read typed values back with defaults.
//!
//! This library provides:
//! - Upward discovery and parsing of `key=value` definition files
//! - Typed accessors (string, integer, float, boolean, array, map) that never
//!   fail and fall back to a caller-supplied default
//! - An `EnvStore` seam so both halves can run against an isolated store
//!
//! # Example
//!
//! ```no_run
//! envwalk::load_env().unwrap();
//!
//! let host = envwalk::get_str("YGGGO_MYSQL_HOST", "localhost");
//! let port = envwalk::get_int("YGGGO_MYSQL_PORT", 3306);
//! let debug = envwalk::get_bool("YGGGO_DEBUG", false);
//! println!("{host}:{port} debug={debug}");
//! ```
//!
//! Against an isolated store:
//!
//! ```
//! use envwalk::getters::int_or;
//! use envwalk::store::{EnvStore, MemoryStore};
//!
//! let store = MemoryStore::new();
//! store.set("PORT", "8080").unwrap();
//! assert_eq!(int_or(&store, "PORT", 3306), 8080);
//! ```

pub mod error;
pub mod getters;
pub mod loader;
pub mod store;

pub use error::{EnvError, Result, StoreError};
pub use getters::JsonMap;
pub use loader::load_env;

use store::ProcessEnv;

/// Read a string from the process environment.
pub fn get_str(key: &str, default: &str) -> String {
	getters::str_or(&ProcessEnv, key, default)
}

/// Read a base-10 integer from the process environment.
pub fn get_int(key: &str, default: i64) -> i64 {
	getters::int_or(&ProcessEnv, key, default)
}

/// Read a 64-bit float from the process environment.
pub fn get_float(key: &str, default: f64) -> f64 {
	getters::float_or(&ProcessEnv, key, default)
}

/// Read a boolean token from the process environment.
pub fn get_bool(key: &str, default: bool) -> bool {
	getters::bool_or(&ProcessEnv, key, default)
}

/// Read a JSON object from the process environment.
pub fn get_map(key: &str, default: JsonMap) -> JsonMap {
	getters::map_or(&ProcessEnv, key, default)
}

/// Read a JSON string array or comma-separated list from the process environment.
pub fn get_arr(key: &str, default: Vec<String>) -> Vec<String> {
	getters::arr_or(&ProcessEnv, key, default)
}
