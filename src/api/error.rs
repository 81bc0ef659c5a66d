use thiserror::Error;

/// Failure of a single request/response round trip
///
/// Variants are kept `Clone` (status code plus strings) so they can ride
/// inside application messages. The Display output is what the UI shows,
/// matching the shape `HTTP {status} - {context}` for non-2xx responses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with a non-success status code
    #[error("HTTP {status} - {context}")]
    Status { status: u16, context: String },

    /// The request never completed (DNS, TLS, connection, timeout)
    #[error("gagal menghubungi server: {0}")]
    Request(String),

    /// The response body was not the expected JSON shape
    #[error("respon tidak valid: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_carries_code_and_context() {
        let err = ApiError::Status {
            status: 404,
            context: "gagal dapat detail".into(),
        };
        assert_eq!(err.to_string(), "HTTP 404 - gagal dapat detail");
    }

    #[test]
    fn transport_error_is_prefixed() {
        let err = ApiError::Request("connection refused".into());
        assert_eq!(err.to_string(), "gagal menghubungi server: connection refused");
    }
}
