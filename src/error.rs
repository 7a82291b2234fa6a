use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the recipe collection
#[derive(Error, Debug)]
pub enum LoadError {
    /// The bundled resource could not be located
    #[error("Resource not found: {name}")]
    ResourceNotFound { name: String },

    /// The resource exists but could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The resource is not a JSON array of recipes
    #[error("Error decoding JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
