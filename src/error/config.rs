use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value cannot be parsed.
    ///
    /// Occurs when an optional variable such as `PUBLISH_INTERVAL_SECS` or
    /// `INJECT_ORDER_UID` carries a value of the wrong type.
    #[error("Invalid value {value:?} for {name}: {reason}")]
    InvalidEnvVar {
        /// The environment variable name
        name: String,
        /// The value that failed to parse
        value: String,
        /// The reason parsing failed
        reason: String,
    },
}
