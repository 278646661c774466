//! Factory methods for creating test order payloads.
//!
//! This module provides factory methods for producing JSON order payloads with
//! sensible defaults, reducing boilerplate in tests. Payloads are returned as
//! raw bytes ready to be written into fixture files or fed straight into
//! payload building.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let payload = factory::create_order();
//!
//! // Create a payload that does not parse as JSON
//! let broken = factory::create_malformed_order();
//! ```
//!
//! # Customization
//!
//! Use the factory builder for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory::order::OrderFactory;
//!
//! let payload = OrderFactory::new()
//!     .order_uid("b563feb7b2b84b6test")
//!     .track_number("WBILMTESTTRACK")
//!     .customer_id("test")
//!     .build();
//! ```
//!
//! # Available Factories
//!
//! - `order` - Create order payloads, well-formed and malformed
//! - `helpers` - Unique ID generation shared across factories

pub mod helpers;
pub mod order;

// Re-export commonly used factory functions for concise usage
pub use order::{create_malformed_order, create_order, create_order_with_uid};
