use thiserror::Error;

use crate::api_structs::ErrorResponse;

#[derive(Debug, Error)]
pub enum Error {
    #[error("({status}) {message}")]
    Status { status: u16, message: String },
    #[error("invalid quantity {0:?}")]
    InvalidQuantity(String),
    #[error("invalid satoshi value {0}")]
    InvalidValue(f64),
}

impl Error {
    /// Builds the error for a non-2xx response from its body.
    pub(crate) fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .map(|resp| resp.message)
            .unwrap_or_else(|_| body.to_string());
        Error::Status { status, message }
    }
}
