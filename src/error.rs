use thiserror::Error;

/// Main error type for the PITBOARD application
#[derive(Error, Debug)]
pub enum PitboardError {
    #[error("File I/O error: {path}")]
    FileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("General error: {0}")]
    General(#[from] anyhow::Error),
}

impl PitboardError {
    /// Create a file I/O error
    pub fn file_io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileIo {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an invalid-input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            PitboardError::FileIo { path, .. } => {
                format!(
                    "📁 Could not read or write {}. Check the path and permissions.",
                    path
                )
            }
            PitboardError::Configuration { .. } => {
                "⚙️ Configuration problem. Check your pitboard.toml.".to_string()
            }
            PitboardError::InvalidInput { message } => {
                format!("🏁 {}", message)
            }
            _ => "🏁 Something went wrong. Check the logs for details.".to_string(),
        }
    }
}

/// Result type alias for convenience
pub type PitboardResult<T> = Result<T, PitboardError>;
