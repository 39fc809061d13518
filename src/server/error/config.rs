use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value cannot be used.
    ///
    /// # Fields
    /// - `name` - Variable name
    /// - `reason` - What was wrong with the value
    #[error("Invalid value for environment variable {name}: {reason}")]
    InvalidEnvVar { name: String, reason: String },

    /// Rate limit settings do not describe a usable quota.
    ///
    /// Both the request count and the window must be greater than zero.
    #[error("Rate limit must allow at least one request per non-empty window")]
    InvalidRateLimit,
}
