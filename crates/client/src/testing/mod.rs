//! Testing utilities for Analytics client tests.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! ```ignore
//! use analytics_client::testing::load_fixture;
//!
//! let fixture = load_fixture("segments/get_all.json");
//! ```

use std::path::Path;

/// Load a JSON fixture file from the fixtures directory.
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let full_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// Deserialize a fixture straight into a model type.
///
/// # Panics
/// If the fixture does not match `T`.
pub fn load_typed_fixture<T: serde::de::DeserializeOwned>(fixture_path: &str) -> T {
    serde_json::from_value(load_fixture(fixture_path))
        .unwrap_or_else(|e| panic!("Fixture {fixture_path} does not match type: {e}"))
}
