use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Check `.env.example` for the variables the bot needs to start.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// A configured URL could not be parsed.
    #[error("Invalid URL in {name}: {reason}")]
    InvalidUrl {
        /// Name of the environment variable or endpoint holding the URL
        name: String,
        /// Parser error message
        reason: String,
    },
}
