//! Error types for the generator.
//!
//! This module provides the application's error hierarchy. The `AppError` enum
//! serves as the top-level error type that wraps domain-specific errors. Most
//! variants use `#[from]` for automatic conversion with the `?` operator.
//! Anything that reaches `main` through this type terminates the process with
//! a non-zero exit code.

pub mod config;
pub mod fixture;

use thiserror::Error;

use crate::error::{config::ConfigError, fixture::FixtureError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the generator. Every
/// variant represents a fatal condition: configuration problems, unusable
/// fixture data, or a broker connection that could not be established or
/// closed. Individual publish failures are logged and retried on the next
/// tick instead of being surfaced here.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// The process cannot start without a complete, well-formed configuration.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Fixture file error.
    ///
    /// Raised when a fixture file cannot be read at startup, or when a
    /// fixture expected to carry a fresh `order_uid` turns out not to be a
    /// JSON object at publish time.
    #[error(transparent)]
    FixtureErr(#[from] FixtureError),

    /// AMQP broker error from lapin.
    ///
    /// Raised when connecting to the broker or opening its channel fails.
    /// Publish failures on an established channel are logged per tick and do
    /// not surface here.
    #[error(transparent)]
    BrokerErr(#[from] lapin::Error),

    /// Internal error with custom message.
    ///
    /// # Fields
    /// - Detailed error message for logging
    #[error("{0}")]
    InternalError(String),
}
