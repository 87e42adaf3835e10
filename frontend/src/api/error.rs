use thiserror::Error;

/// Failure of a single roster API call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request could not be built or sent, or the connection failed.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status code.
    #[error("server answered {status} for {url}")]
    Status { status: u16, url: String },

    /// The body was not in the expected shape.
    #[error("could not decode response: {0}")]
    Decode(String),

    /// The response envelope carried `success: false`.
    #[error("request rejected: {0}")]
    Rejected(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}
