use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures crossing the client/backend boundary.
///
/// Validation failures are not represented here: they are caught before a
/// request is built and never reach the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum ApiError {
    /// No session, or the backend could not resolve an identity.
    #[error("not authenticated")]
    Unauthenticated,
    /// Authenticated, but the session's role does not permit the operation.
    #[error("insufficient privileges")]
    Forbidden,
    /// The identifier matched no record.
    #[error("record not found")]
    NotFound,
    /// Any other non-success response from the backend.
    #[error("request failed ({status}): {message}")]
    RequestFailed { status: u16, message: String },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
}

impl ApiError {
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            401 => Self::Unauthenticated,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            _ => Self::RequestFailed {
                status,
                message: message.into(),
            },
        }
    }

    /// Read failures replace the view's content; everything else is shown
    /// as a dismissible notice.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_taxonomy() {
        assert_eq!(ApiError::from_status(401, "x"), ApiError::Unauthenticated);
        assert_eq!(ApiError::from_status(403, "x"), ApiError::Forbidden);
        assert_eq!(ApiError::from_status(404, "x"), ApiError::NotFound);
        assert_eq!(
            ApiError::from_status(500, "boom"),
            ApiError::RequestFailed {
                status: 500,
                message: "boom".into()
            }
        );
    }
}
