//! Ordergen Test Utils
//!
//! Provides shared testing utilities for building unit and integration tests for the
//! ordergen publisher. This crate offers a builder pattern for creating test contexts
//! with temporary fixture directories and factory methods for producing order payloads.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring fixture directories
//! - **TestContext**: Test environment owning the temporary directory
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required fixture files:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[test]
//! fn test_fixture_loading() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_standard_fixtures()
//!         .build()?;
//!
//!     let dir = test.path();
//!     // Load fixtures from the directory...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
