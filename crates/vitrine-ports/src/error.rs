//! Port failure type.
//!
//! Ports fail in exactly two shapes: the backend could not be reached, or
//! it answered and said no. Keeping the split explicit lets the client map
//! the first to "try again later" and the second to the backend's reason.

use thiserror::Error;

/// Failure of a port call.
#[derive(Debug, Error)]
pub enum PortError {
    /// The backend was unreachable or timed out.
    ///
    /// ## When This Occurs
    /// - Network down or request timed out
    /// - Backend returned a 5xx class failure
    /// - In-memory adapter switched to offline (tests)
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// The backend processed the request and rejected it.
    ///
    /// ## When This Occurs
    /// - Order draft totals do not add up
    /// - Payment declined upstream
    #[error("Request rejected: {reason}")]
    Rejected { reason: String },
}

/// Result alias for port operations.
pub type PortResult<T> = Result<T, PortError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PortError::Unavailable("catalog timed out".to_string());
        assert_eq!(err.to_string(), "Service unavailable: catalog timed out");

        let err = PortError::Rejected {
            reason: "totals do not add up".to_string(),
        };
        assert_eq!(err.to_string(), "Request rejected: totals do not add up");
    }
}
