//! Order factory for creating test order payloads.
//!
//! This module provides factory methods for creating order JSON payloads with
//! sensible defaults, plus a deliberately malformed payload for exercising the
//! verbatim publishing path. The factory supports customization through a
//! builder pattern.

use serde_json::{json, Map, Value};

use crate::factory::helpers::next_id;

/// Factory for creating test order payloads with customizable fields.
///
/// Provides a builder pattern for creating order JSON objects with default
/// values that can be overridden as needed for specific test scenarios.
/// `build()` returns the serialized payload bytes.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::order::OrderFactory;
///
/// let payload = OrderFactory::new()
///     .order_uid("b563feb7b2b84b6test")
///     .track_number("WBILMTESTTRACK")
///     .build();
/// ```
pub struct OrderFactory {
    order_uid: Option<String>,
    track_number: String,
    customer_id: String,
}

impl OrderFactory {
    /// Creates a new OrderFactory with default values.
    ///
    /// Defaults:
    /// - order_uid: omitted, as deployed fixtures receive one at publish time
    /// - track_number: `"TRACK{id}"` where id is auto-incremented
    /// - customer_id: `"customer_{id}"`
    ///
    /// # Returns
    /// - `OrderFactory` - New factory instance with defaults
    pub fn new() -> Self {
        let id = next_id();
        Self {
            order_uid: None,
            track_number: format!("TRACK{}", id),
            customer_id: format!("customer_{}", id),
        }
    }

    /// Sets the order_uid field for the payload.
    ///
    /// # Arguments
    /// - `order_uid` - Identifier written into the payload's `order_uid` field
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn order_uid(mut self, order_uid: impl Into<String>) -> Self {
        self.order_uid = Some(order_uid.into());
        self
    }

    /// Sets the track number for the payload.
    ///
    /// # Arguments
    /// - `track_number` - Tracking code for the order
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn track_number(mut self, track_number: impl Into<String>) -> Self {
        self.track_number = track_number.into();
        self
    }

    /// Sets the customer id for the payload.
    ///
    /// # Arguments
    /// - `customer_id` - Customer the order belongs to
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = customer_id.into();
        self
    }

    /// Builds the serialized order payload.
    ///
    /// # Returns
    /// - `Vec<u8>` - JSON payload bytes
    pub fn build(self) -> Vec<u8> {
        let mut order = Map::new();

        if let Some(order_uid) = self.order_uid {
            order.insert("order_uid".to_string(), json!(order_uid));
        }
        order.insert("track_number".to_string(), json!(self.track_number));
        order.insert("customer_id".to_string(), json!(self.customer_id));
        order.insert("delivery_service".to_string(), json!("meest"));
        order.insert(
            "items".to_string(),
            json!([{ "name": "Mascaras", "price": 453 }]),
        );

        Value::Object(order).to_string().into_bytes()
    }
}

/// Creates an order payload with default values.
///
/// Shorthand for `OrderFactory::new().build()`. The payload carries no
/// `order_uid` field, matching deployed fixtures that receive one at publish
/// time.
///
/// # Returns
/// - `Vec<u8>` - JSON payload bytes
///
/// # Example
///
/// ```rust,ignore
/// let payload = create_order();
/// ```
pub fn create_order() -> Vec<u8> {
    OrderFactory::new().build()
}

/// Creates an order payload with a specific order_uid.
///
/// Shorthand for `OrderFactory::new().order_uid(order_uid).build()`.
///
/// # Arguments
/// - `order_uid` - Identifier written into the payload's `order_uid` field
///
/// # Returns
/// - `Vec<u8>` - JSON payload bytes
///
/// # Example
///
/// ```rust,ignore
/// let payload = create_order_with_uid("b563feb7b2b84b6test");
/// ```
pub fn create_order_with_uid(order_uid: impl Into<String>) -> Vec<u8> {
    OrderFactory::new().order_uid(order_uid).build()
}

/// Creates a payload that does not parse as JSON.
///
/// The content is a truncated object, matching the deployed malformed fixture
/// that exercises verbatim publishing. Each call produces distinct bytes.
///
/// # Returns
/// - `Vec<u8>` - Payload bytes guaranteed to fail JSON parsing
///
/// # Example
///
/// ```rust,ignore
/// let broken = create_malformed_order();
/// ```
pub fn create_malformed_order() -> Vec<u8> {
    format!("{{\"order_uid\": \"broken_{}\", \"track_number\": ", next_id()).into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_order_with_defaults() {
        let payload = create_order();

        let order: Value = serde_json::from_slice(&payload).unwrap();
        assert!(order.get("order_uid").is_none());
        assert!(order["track_number"].as_str().unwrap().starts_with("TRACK"));
        assert!(order["customer_id"]
            .as_str()
            .unwrap()
            .starts_with("customer_"));
    }

    #[test]
    fn creates_order_with_custom_values() {
        let payload = OrderFactory::new()
            .order_uid("b563feb7b2b84b6test")
            .track_number("WBILMTESTTRACK")
            .customer_id("test")
            .build();

        let order: Value = serde_json::from_slice(&payload).unwrap();
        assert_eq!(order["order_uid"], "b563feb7b2b84b6test");
        assert_eq!(order["track_number"], "WBILMTESTTRACK");
        assert_eq!(order["customer_id"], "test");
    }

    #[test]
    fn creates_multiple_unique_orders() {
        let first: Value = serde_json::from_slice(&create_order()).unwrap();
        let second: Value = serde_json::from_slice(&create_order()).unwrap();

        assert_ne!(first["track_number"], second["track_number"]);
        assert_ne!(first["customer_id"], second["customer_id"]);
    }

    #[test]
    fn malformed_order_does_not_parse() {
        let payload = create_malformed_order();

        assert!(serde_json::from_slice::<Value>(&payload).is_err());
    }
}
