use std::path::PathBuf;
use thiserror::Error;

/// Problems with the fixture files the generator publishes from
#[derive(Error, Debug)]
pub enum FixtureError {
    /// Failure to read a fixture file from disk
    ///
    /// Every file named in the manifest must be readable at startup. A missing
    /// or unreadable file terminates the process before any broker connection
    /// is opened.
    #[error("Failed to read fixture file {}: {source}", .path.display())]
    Unreadable {
        /// Path of the fixture file that could not be read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Fixture content expected to be a JSON object failed to parse
    ///
    /// Only fixtures marked for `order_uid` injection are ever parsed. A parse
    /// failure here means the fixture data itself is broken, so the generator
    /// aborts instead of publishing garbage under a valid name.
    #[error("Fixture {name} is not a JSON object: {source}")]
    InvalidJson {
        /// Name of the fixture that failed to parse
        name: String,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}
