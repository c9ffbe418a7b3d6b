use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable is set but its value cannot be used.
    ///
    /// Raised for a `PORT` that is not a valid port number or an unknown
    /// `LOG_LEVEL`.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar {
        /// Name of the environment variable.
        name: String,
        /// The rejected value.
        value: String,
    },
}
