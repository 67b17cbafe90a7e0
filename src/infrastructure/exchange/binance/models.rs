// Models for Binance API responses
use serde::Deserialize;
use thiserror::Error;

/// Error body returned with non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub code: i64,
    pub msg: String,
}

/// Failures raised by the default request handler.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BinanceApiError {
    #[error("signed request to {uri} requires API credentials")]
    MissingCredentials { uri: String },

    #[error("request rejected with HTTP {status}: [{code}] {msg}")]
    Rejected { status: u16, code: i64, msg: String },

    #[error("unexpected HTTP {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
}

impl BinanceApiError {
    /// Classifies a non-2xx response from its status and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(err) => BinanceApiError::Rejected {
                status,
                code: err.code,
                msg: err.msg,
            },
            Err(_) => BinanceApiError::UnexpectedStatus {
                status,
                body: body.to_string(),
            },
        }
    }
}
