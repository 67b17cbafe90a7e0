pub mod client;
pub mod handler;
pub mod margin;
pub mod models;
pub mod signer;
pub mod uri;

pub use client::BinanceClient;
pub use handler::BinanceRequestHandler;
pub use margin::MarginAccountEndpoints;
pub use models::{ApiErrorBody, BinanceApiError};
pub use uri::UriBuilder;
