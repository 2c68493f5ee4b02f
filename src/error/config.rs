use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but cannot be parsed into the expected type.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar { name: String, value: String },

    /// Lifespans file could not be read.
    #[error("Failed to read lifespans file '{path}': {source}")]
    ReadLifespans {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Lifespans file is not a JSON object of species to years.
    #[error("Failed to parse lifespans file '{path}': {source}")]
    ParseLifespans {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
