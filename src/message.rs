//! Payload preparation for publishing.
//!
//! This module turns a loaded fixture into the bytes that go out on the wire.
//! Fixtures tagged for injection are parsed as JSON objects and get a freshly
//! generated `order_uid` on every publish, so repeated draws of the same
//! fixture produce distinct orders downstream. Untagged fixtures are passed
//! through byte for byte and are never parsed.

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::fixture::FixtureError;
use crate::fixture::Fixture;

/// JSON field that receives the generated identifier.
pub const ORDER_UID_FIELD: &str = "order_uid";

/// Builds the publishable payload for a fixture.
///
/// Untagged fixtures come back as an exact copy of their file content. Tagged
/// fixtures are parsed into a JSON object, given a fresh UUID v4 under
/// `order_uid` (replacing any existing value), and re-serialized. A tagged
/// fixture that does not parse as a JSON object is broken fixture data, and
/// the error is fatal for the generator.
///
/// # Arguments
/// - `fixture` - The fixture drawn for this publish
///
/// # Returns
/// - `Vec<u8>` - Payload bytes ready for the broker
pub fn build_payload(fixture: &Fixture) -> Result<Vec<u8>, FixtureError> {
    if !fixture.inject_uid {
        return Ok(fixture.content.clone());
    }

    let mut order: Map<String, Value> =
        serde_json::from_slice(&fixture.content).map_err(|source| FixtureError::InvalidJson {
            name: fixture.name.clone(),
            source,
        })?;

    order.insert(
        ORDER_UID_FIELD.to_string(),
        Value::String(Uuid::new_v4().to_string()),
    );

    Ok(Value::Object(order).to_string().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::factory::{create_malformed_order, create_order, create_order_with_uid};

    fn make_fixture(name: &str, content: Vec<u8>, inject_uid: bool) -> Fixture {
        Fixture {
            name: name.to_string(),
            content,
            inject_uid,
        }
    }

    /// Tests payload building for an untagged fixture.
    ///
    /// Verifies that content which does not even parse as JSON is passed
    /// through untouched.
    ///
    /// Expected: Ok with payload byte-identical to the fixture content
    #[test]
    fn test_untagged_fixture_passes_through_verbatim() {
        let content = create_malformed_order();
        let fixture = make_fixture("not_valid1.json", content.clone(), false);

        let payload = build_payload(&fixture).unwrap();

        assert_eq!(payload, content);
    }

    /// Tests payload building for a tagged fixture.
    ///
    /// Verifies that the payload carries a canonical UUID under order_uid
    /// while the remaining fields survive the round trip.
    ///
    /// Expected: Ok with a parseable order_uid and preserved fields
    #[test]
    fn test_tagged_fixture_gets_fresh_order_uid() {
        let content = create_order();
        let fixture = make_fixture("valid1.json", content.clone(), true);

        let payload = build_payload(&fixture).unwrap();

        let order: Value = serde_json::from_slice(&payload).unwrap();
        let uid = order[ORDER_UID_FIELD].as_str().unwrap();
        assert_eq!(Uuid::parse_str(uid).unwrap().to_string(), uid);

        let original: Value = serde_json::from_slice(&content).unwrap();
        assert_eq!(order["track_number"], original["track_number"]);
        assert_eq!(order["customer_id"], original["customer_id"]);
    }

    /// Tests order_uid replacement.
    ///
    /// Verifies that a uid already present in the fixture is overwritten
    /// rather than kept.
    ///
    /// Expected: Ok with a different order_uid than the fixture's
    #[test]
    fn test_existing_order_uid_is_overwritten() {
        let content = create_order_with_uid("b563feb7b2b84b6test");
        let fixture = make_fixture("valid1.json", content, true);

        let payload = build_payload(&fixture).unwrap();

        let order: Value = serde_json::from_slice(&payload).unwrap();
        assert_ne!(order[ORDER_UID_FIELD], "b563feb7b2b84b6test");
    }

    /// Tests uid freshness across builds.
    ///
    /// Verifies that building twice from the same fixture yields two
    /// different identifiers.
    ///
    /// Expected: Ok with distinct order_uid values
    #[test]
    fn test_order_uid_is_fresh_per_build() {
        let fixture = make_fixture("valid1.json", create_order(), true);

        let first: Value = serde_json::from_slice(&build_payload(&fixture).unwrap()).unwrap();
        let second: Value = serde_json::from_slice(&build_payload(&fixture).unwrap()).unwrap();

        assert_ne!(first[ORDER_UID_FIELD], second[ORDER_UID_FIELD]);
    }

    /// Tests a tagged fixture that is not a JSON object.
    ///
    /// Verifies that broken fixture data under a well-formed name is rejected
    /// instead of being published.
    ///
    /// Expected: Err with InvalidJson naming the fixture
    #[test]
    fn test_unparseable_tagged_fixture_is_rejected() {
        let fixture = make_fixture("valid1.json", create_malformed_order(), true);

        let result = build_payload(&fixture);

        assert!(result.is_err());
        match result.unwrap_err() {
            FixtureError::InvalidJson { name, .. } => {
                assert_eq!(name, "valid1.json");
            }
            e => panic!("Expected InvalidJson, got: {:?}", e),
        }
    }
}
