use thiserror::Error;

/// Core domain errors
///
/// A missing record is not an error: repositories report it as `None` or
/// `false` and the API layer decides what that means.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DomainError {
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error() {
        let error = DomainError::storage("Failed to create team: connection refused");
        assert_eq!(
            error.to_string(),
            "Storage error: Failed to create team: connection refused"
        );
    }

    #[test]
    fn test_configuration_error() {
        let error = DomainError::configuration("unknown storage backend 'redis'");
        assert_eq!(
            error.to_string(),
            "Configuration error: unknown storage backend 'redis'"
        );
    }
}
