use thiserror::Error;

/// Rejections raised before a request reaches the request handler.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarginTradingError {
    #[error("cross margin transfer called with type {value}, expected 1 or 2")]
    InvalidTransferDirection { value: i32 },

    #[error("isIsolated is true but no symbol was passed for {operation}")]
    MissingIsolatedSymbol { operation: &'static str },
}

/// Fails with `MissingIsolatedSymbol` when an isolated request has no symbol.
pub fn check_isolated_symbol(
    operation: &'static str,
    is_isolated: bool,
    symbol: Option<&str>,
) -> Result<(), MarginTradingError> {
    if is_isolated && symbol.is_none() {
        return Err(MarginTradingError::MissingIsolatedSymbol { operation });
    }
    Ok(())
}
