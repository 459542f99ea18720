use thiserror::Error;

/// Errors that are safe to expose to the request layer.
///
/// Conventional status translation (done by the external adapter):
/// `NotFound` maps to 404, `InvalidAge` and `InvalidArgument` map to 400.
#[derive(Error, Debug, Clone)]
pub enum UsersDirectoryError {
    #[error("User not found: {id}")]
    NotFound { id: u64 },

    #[error("{message}")]
    InvalidAge { message: String },

    #[error("{message}")]
    InvalidArgument { message: String },

    #[error("Internal error")]
    Internal,
}

impl UsersDirectoryError {
    pub fn not_found(id: u64) -> Self {
        Self::NotFound { id }
    }

    pub fn invalid_age(message: impl Into<String>) -> Self {
        Self::InvalidAge {
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn internal() -> Self {
        Self::Internal
    }
}
