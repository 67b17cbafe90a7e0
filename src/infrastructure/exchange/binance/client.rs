use anyhow::Result;

use crate::config_loader::{BinanceConfig, Credentials};
use crate::domain::traits::RequestHandler;
use crate::infrastructure::exchange::binance::handler::BinanceRequestHandler;
use crate::infrastructure::exchange::binance::margin::MarginAccountEndpoints;
use crate::infrastructure::exchange::binance::uri::UriBuilder;

/// Binance REST client, generic over the handler that performs the HTTP calls.
///
/// The margin operations come from [`MarginAccountEndpoints`].
pub struct BinanceClient<H: RequestHandler> {
    handler: H,
    uri_builder: UriBuilder,
}

impl<H: RequestHandler> BinanceClient<H> {
    pub fn new(handler: H, uri_builder: UriBuilder) -> Self {
        Self {
            handler,
            uri_builder,
        }
    }

    /// Client against the production endpoint with the default API versions.
    pub fn with_handler(handler: H) -> Self {
        Self::new(handler, UriBuilder::default())
    }
}

impl BinanceClient<BinanceRequestHandler> {
    pub fn from_config(config: &BinanceConfig, credentials: Option<Credentials>) -> Result<Self> {
        let handler = BinanceRequestHandler::new(config, credentials)?;
        Ok(Self::new(handler, UriBuilder::from_config(config)))
    }
}

impl<H: RequestHandler> MarginAccountEndpoints for BinanceClient<H> {
    type Handler = H;

    fn request_handler(&self) -> &H {
        &self.handler
    }

    fn uri_builder(&self) -> &UriBuilder {
        &self.uri_builder
    }
}
